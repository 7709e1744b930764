//! Error types of the lobby engine.
//!
//! None of these are fatal: the engine handles them locally and at most logs them.

use thiserror::Error;

use super::connection::ConnectionId;
use super::registry::SessionId;

/// Misuse of the session registry or of a connection's role state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LobbyError {
    /// The connection is not (or no longer) known to the lobby.
    #[error("unknown connection {0}")]
    UnknownConnection(ConnectionId),

    /// The connection already chose a role; roles are set at most once.
    #[error("connection {0} already has a role")]
    RoleAlreadyAssigned(ConnectionId),

    /// No session with this id is registered (never created or already removed).
    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    /// The session already has its joiner.
    #[error("session {0} is already active")]
    SessionAlreadyActive(SessionId),
}
