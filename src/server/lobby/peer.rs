//! Transport seam between the lobby engine and a client connection.
//!
//! The engine only needs to push frames to a client, close it, and know whether it is
//! still open. Production uses the player session actor's address; tests use a recorder.

use actix::Addr;

use super::messages::{CloseConnection, RelayedMove, ServerWsMessage};
use super::session::PlayerSession;

pub trait Peer {
    /// Whether the transport can still accept frames.
    fn is_open(&self) -> bool;

    /// Send a server notification. Fire-and-forget.
    fn notify(&self, msg: ServerWsMessage);

    /// Forward a gameplay frame exactly as the other participant sent it.
    fn relay(&self, raw: String);

    /// Close the transport from the server side.
    fn close(&self);
}

impl Peer for Addr<PlayerSession> {
    fn is_open(&self) -> bool {
        self.connected()
    }

    fn notify(&self, msg: ServerWsMessage) {
        self.do_send(msg);
    }

    fn relay(&self, raw: String) {
        self.do_send(RelayedMove(raw));
    }

    fn close(&self) {
        self.do_send(CloseConnection);
    }
}
