/// WebSocket session handler for one player.
///
/// This actor owns a single client connection. It registers with the lobby server when it
/// starts and unregisters when it stops, parses incoming frames into lobby requests, and
/// writes server notifications and relayed gameplay frames back to the client.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, error, info, warn};

use super::connection::ConnectionId;
use super::messages::{ClientWsMessage, CloseConnection, ProtocolError, RelayedMove, ServerWsMessage};
use super::server::{Connect, Disconnect, HostGame, JoinGame, LobbyServer, PlayerMove};

/// Represents a player's WebSocket connection.
pub struct PlayerSession {
    pub conn_id: ConnectionId,
    pub lobby_addr: Addr<LobbyServer>,
}

impl PlayerSession {
    pub fn new(lobby_addr: Addr<LobbyServer>) -> Self {
        Self {
            conn_id: ConnectionId::new(),
            lobby_addr,
        }
    }

    /// Route a parsed frame to the lobby. Malformed frames are logged and dropped; the
    /// connection stays open.
    fn dispatch(&self, parsed: Result<ClientWsMessage, ProtocolError>) {
        let conn_id = self.conn_id;
        match parsed {
            Ok(ClientWsMessage::Host) => self.lobby_addr.do_send(HostGame { conn_id }),
            Ok(ClientWsMessage::Join) => self.lobby_addr.do_send(JoinGame { conn_id }),
            Ok(ClientWsMessage::PlayerMove(raw)) => {
                self.lobby_addr.do_send(PlayerMove { conn_id, raw })
            }
            Ok(ClientWsMessage::Unknown(kind)) => {
                debug!("[PlayerSession] {} sent unhandled message type {:?}", conn_id, kind);
            }
            Err(e) => {
                warn!("[PlayerSession] Message parse error from {}: {}", conn_id, e);
            }
        }
    }
}

impl Actor for PlayerSession {
    type Context = ws::WebsocketContext<Self>;

    /// Called when the session starts. Registers the connection with the lobby.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.lobby_addr.do_send(Connect {
            conn_id: self.conn_id,
            addr: ctx.address(),
        });
    }

    /// Called when the session stops. Runs the lobby's disconnect handling.
    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.lobby_addr.do_send(Disconnect {
            conn_id: self.conn_id,
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for PlayerSession {
    /// Handles incoming WebSocket frames from the client.
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => self.dispatch(ClientWsMessage::parse(&text)),
            Ok(ws::Message::Binary(bin)) => self.dispatch(ClientWsMessage::parse_bytes(&bin)),
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                // A broken transport counts as a disconnect.
                warn!("[PlayerSession] WebSocket error on {}: {}", self.conn_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<ServerWsMessage> for PlayerSession {
    type Result = ();

    /// Handles notifications sent from the lobby to this client.
    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                // Serialization error: notify client and close connection.
                error!("[PlayerSession] Failed to serialize ServerWsMessage: {}", e);
                ctx.text(r#"{"type":"error","message":"Internal server error"}"#);
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

impl Handler<RelayedMove> for PlayerSession {
    type Result = ();

    /// Writes a gameplay frame from the other participant, unchanged.
    fn handle(&mut self, msg: RelayedMove, ctx: &mut Self::Context) {
        ctx.text(msg.0);
    }
}

impl Handler<CloseConnection> for PlayerSession {
    type Result = ();

    /// Closes the connection from the server side.
    fn handle(&mut self, _msg: CloseConnection, ctx: &mut Self::Context) {
        info!("[PlayerSession] Closing {} from server side", self.conn_id);
        ctx.close(Some(ws::CloseCode::Normal.into()));
        ctx.stop();
    }
}

/// WebSocket endpoint for the lobby.
///
/// Every upgraded connection gets its own `PlayerSession`; no query parameters are needed.
pub async fn ws_lobby(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(PlayerSession::new(data.lobby_addr.clone()), &req, stream)
}
