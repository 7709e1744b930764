//! Per-connection state: identity and role.
//!
//! A connection starts `Unassigned` and moves to `Host` or `Joiner` exactly once.
//! The role carries the session id, so role and session can never disagree.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::LobbyError;
use super::registry::SessionId;

/// Opaque token identifying one live WebSocket connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a connection inside a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Unassigned,
    Host(SessionId),
    Joiner(SessionId),
}

/// State tracked for each connected client.
#[derive(Debug, Clone)]
pub struct Connection {
    id: ConnectionId,
    role: Role,
}

impl Connection {
    pub fn new(id: ConnectionId) -> Self {
        Self {
            id,
            role: Role::Unassigned,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Session this connection is bound to, if it has a role.
    pub fn session(&self) -> Option<SessionId> {
        match self.role {
            Role::Unassigned => None,
            Role::Host(id) | Role::Joiner(id) => Some(id),
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.role == Role::Unassigned
    }

    /// Fails if the connection already chose a role.
    pub fn ensure_unassigned(&self) -> Result<(), LobbyError> {
        if self.is_unassigned() {
            Ok(())
        } else {
            Err(LobbyError::RoleAlreadyAssigned(self.id))
        }
    }

    /// Set the role. Fails if a role was already chosen.
    pub fn assign(&mut self, role: Role) -> Result<(), LobbyError> {
        self.ensure_unassigned()?;
        self.role = role;
        Ok(())
    }
}
