// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the address of the lobby actor so WebSocket handlers can hand new
//! connections to it.

use actix::Addr;
use crate::server::lobby::server::LobbyServer;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the lobby server actor (session registry, matchmaking, relay).
    pub lobby_addr: Addr<LobbyServer>,
}

impl AppState {
    /// Create a new AppState with the given actor address.
    pub fn new(lobby_addr: Addr<LobbyServer>) -> Self {
        AppState { lobby_addr }
    }
}
