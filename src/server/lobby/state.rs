//! Lobby engine state: the session registry plus every connected client.
//!
//! `LobbyState` is a plain value with no actor or socket inside. The `LobbyServer` actor
//! owns one and feeds it transport events one at a time; tests build their own instance
//! with recording peers. Matchmaking lives in `matchmaker.rs`, forwarding and disconnect
//! handling in `relay.rs`.

use std::collections::HashMap;

use log::debug;

use super::connection::{Connection, ConnectionId};
use super::messages::ServerWsMessage;
use super::peer::Peer;
use super::registry::SessionRegistry;

/// A connected client: its role state and the way to reach it.
pub(super) struct Client<P> {
    pub(super) connection: Connection,
    pub(super) peer: P,
}

pub struct LobbyState<P: Peer> {
    pub(super) registry: SessionRegistry,
    pub(super) clients: HashMap<ConnectionId, Client<P>>,
}

impl<P: Peer> Default for LobbyState<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Peer> LobbyState<P> {
    pub fn new() -> Self {
        Self {
            registry: SessionRegistry::new(),
            clients: HashMap::new(),
        }
    }

    /// Register a freshly opened connection. It starts without a role.
    pub fn connect(&mut self, id: ConnectionId, peer: P) {
        self.clients.insert(
            id,
            Client {
                connection: Connection::new(id),
                peer,
            },
        );
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.clients.get(&id).map(|c| &c.connection)
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    /// Send a notification if the target is known and its transport is open.
    pub(super) fn send_to(&self, id: ConnectionId, msg: ServerWsMessage) -> bool {
        match self.open_peer(id) {
            Some(peer) => {
                peer.notify(msg);
                true
            }
            None => {
                debug!("[Lobby] Not sending {:?} to {}: connection closed", msg, id);
                false
            }
        }
    }

    /// Forward a raw gameplay frame if the target is known and open.
    pub(super) fn relay_to(&self, id: ConnectionId, raw: String) -> bool {
        match self.open_peer(id) {
            Some(peer) => {
                peer.relay(raw);
                true
            }
            None => false,
        }
    }

    pub(super) fn close(&self, id: ConnectionId) {
        if let Some(peer) = self.open_peer(id) {
            peer.close();
        }
    }

    fn open_peer(&self, id: ConnectionId) -> Option<&P> {
        self.clients
            .get(&id)
            .map(|c| &c.peer)
            .filter(|peer| peer.is_open())
    }
}
