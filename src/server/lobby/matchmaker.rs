//! Matchmaking: turns `host` and `join` requests into session transitions.
//!
//! Pairing is first come, first served: a joiner always gets the oldest session that is
//! still waiting.

use log::info;

use super::connection::{ConnectionId, Role};
use super::error::LobbyError;
use super::messages::ServerWsMessage;
use super::peer::Peer;
use super::registry::SessionId;
use super::state::LobbyState;

impl<P: Peer> LobbyState<P> {
    /// Handle a `host` request: open a new session hosted by `conn`.
    pub fn host(&mut self, conn: ConnectionId) -> Result<SessionId, LobbyError> {
        let client = self
            .clients
            .get_mut(&conn)
            .ok_or(LobbyError::UnknownConnection(conn))?;
        client.connection.ensure_unassigned()?;

        let session_id = self.registry.create(conn).id;
        client.connection.assign(Role::Host(session_id))?;

        info!("[Lobby] Host {} created session {}", conn, session_id);
        Ok(session_id)
    }

    /// Handle a `join` request: pair `conn` with the oldest waiting session.
    ///
    /// Returns `Ok(None)` when nothing is waiting; the requester has then been sent an
    /// error and stays unassigned so it can retry.
    pub fn join(&mut self, conn: ConnectionId) -> Result<Option<SessionId>, LobbyError> {
        let client = self
            .clients
            .get_mut(&conn)
            .ok_or(LobbyError::UnknownConnection(conn))?;
        client.connection.ensure_unassigned()?;

        let Some(session) = self.registry.match_joiner(conn) else {
            info!("[Lobby] No waiting session for joiner {}", conn);
            self.send_to(conn, ServerWsMessage::no_available_games());
            return Ok(None);
        };
        let (session_id, host) = (session.id, session.host);
        client.connection.assign(Role::Joiner(session_id))?;

        info!("[Lobby] Joiner {} paired with host {} in session {}", conn, host, session_id);

        // Both sides hear about the start before either can relay anything.
        self.send_to(host, ServerWsMessage::GameStart);
        self.send_to(conn, ServerWsMessage::GameStart);
        Ok(Some(session_id))
    }
}
