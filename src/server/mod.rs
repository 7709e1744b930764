// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the backend server components:
//! - Application state shared with HTTP/WebSocket handlers
//! - HTTP/WebSocket routing
//! - The lobby: session registry, matchmaking, and relay of gameplay frames

pub mod state;
pub mod router;
pub mod lobby;
