//! Relay: forwards gameplay frames inside a session and handles disconnects.

use log::{debug, info};

use super::connection::{ConnectionId, Role};
use super::messages::ServerWsMessage;
use super::peer::Peer;
use super::registry::SessionId;
use super::state::LobbyState;

impl<P: Peer> LobbyState<P> {
    /// Forward a `playerMove` frame to the other participant of the sender's session.
    ///
    /// Frames from unassigned connections, or sent before a joiner is attached, are dropped.
    /// Returns whether the frame was delivered.
    pub fn forward_move(&self, from: ConnectionId, raw: String) -> bool {
        let Some(session_id) = self.connection(from).and_then(|c| c.session()) else {
            debug!("[Lobby] Dropping move from {}: no session", from);
            return false;
        };
        let Some(target) = self.registry.get(session_id).and_then(|s| s.peer_of(from)) else {
            debug!("[Lobby] Dropping move from {}: session {} has no peer", from, session_id);
            return false;
        };
        self.relay_to(target, raw)
    }

    /// Handle a closed transport.
    ///
    /// When the host leaves, the joiner is told and then disconnected. When the joiner
    /// leaves, the host is told but stays connected. Either way the session is removed.
    /// Returns the removed session id, if the connection had one.
    pub fn disconnect(&mut self, conn: ConnectionId) -> Option<SessionId> {
        let client = self.clients.remove(&conn)?;
        let role = client.connection.role();
        let session_id = client.connection.session()?;

        if let Some(session) = self.registry.get(session_id) {
            match role {
                Role::Host(_) => {
                    if let Some(joiner) = session.joiner {
                        if self.send_to(joiner, ServerWsMessage::HostDisconnected) {
                            self.close(joiner);
                        }
                    }
                }
                Role::Joiner(_) => {
                    self.send_to(session.host, ServerWsMessage::JoinerDisconnected);
                }
                Role::Unassigned => {}
            }
        }

        if self.registry.remove(session_id).is_some() {
            info!(
                "[Lobby] Session {} removed after {:?} {} left ({} sessions remaining)",
                session_id,
                role,
                conn,
                self.registry.len()
            );
        }
        Some(session_id)
    }
}
