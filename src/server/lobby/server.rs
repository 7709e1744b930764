/// Lobby server actor.
///
/// Owns the lobby engine (session registry and connected clients) and applies every
/// transport event to it. Actix hands messages to an actor one at a time, so each event,
/// including a join's find-and-attach, runs to completion before the next one starts.

use actix::prelude::*;
use log::{debug, info};

use super::connection::ConnectionId;
use super::error::LobbyError;
use super::session::PlayerSession;
use super::state::LobbyState;

type SessionAddr = Addr<PlayerSession>;

/// Main lobby actor.
pub struct LobbyServer {
    lobby: LobbyState<SessionAddr>,
}

impl LobbyServer {
    /// Create a lobby with no sessions.
    pub fn new() -> Self {
        Self {
            lobby: LobbyState::new(),
        }
    }

    /// Requests the engine refuses are not reported to the client.
    fn log_ignored(request: &str, err: LobbyError) {
        debug!("[Lobby] Ignoring {} request: {}", request, err);
    }
}

impl Default for LobbyServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Message: a WebSocket connection was opened.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub conn_id: ConnectionId,
    pub addr: SessionAddr,
}

/// Message: a WebSocket connection was closed (by either side or by a transport error).
#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub conn_id: ConnectionId,
}

/// Message: client asked to host a game.
#[derive(Message)]
#[rtype(result = "()")]
pub struct HostGame {
    pub conn_id: ConnectionId,
}

/// Message: client asked to join a waiting game.
#[derive(Message)]
#[rtype(result = "()")]
pub struct JoinGame {
    pub conn_id: ConnectionId,
}

/// Message: client sent a gameplay frame to relay.
#[derive(Message)]
#[rtype(result = "()")]
pub struct PlayerMove {
    pub conn_id: ConnectionId,
    pub raw: String,
}

impl Actor for LobbyServer {
    type Context = Context<Self>;
}

impl Handler<Connect> for LobbyServer {
    type Result = ();

    fn handle(&mut self, msg: Connect, _ctx: &mut Self::Context) -> Self::Result {
        self.lobby.connect(msg.conn_id, msg.addr);
        info!("[Lobby] Client {} connected ({} online)", msg.conn_id, self.lobby.client_count());
    }
}

impl Handler<Disconnect> for LobbyServer {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _ctx: &mut Self::Context) -> Self::Result {
        self.lobby.disconnect(msg.conn_id);
        info!(
            "[Lobby] Client {} disconnected ({} online, {} sessions)",
            msg.conn_id,
            self.lobby.client_count(),
            self.lobby.registry().len()
        );
    }
}

impl Handler<HostGame> for LobbyServer {
    type Result = ();

    fn handle(&mut self, msg: HostGame, _ctx: &mut Self::Context) -> Self::Result {
        if let Err(err) = self.lobby.host(msg.conn_id) {
            Self::log_ignored("host", err);
        }
    }
}

impl Handler<JoinGame> for LobbyServer {
    type Result = ();

    fn handle(&mut self, msg: JoinGame, _ctx: &mut Self::Context) -> Self::Result {
        if let Err(err) = self.lobby.join(msg.conn_id) {
            Self::log_ignored("join", err);
        }
    }
}

impl Handler<PlayerMove> for LobbyServer {
    type Result = ();

    fn handle(&mut self, msg: PlayerMove, _ctx: &mut Self::Context) -> Self::Result {
        self.lobby.forward_move(msg.conn_id, msg.raw);
    }
}
