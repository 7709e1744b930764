//! Session registry: the single source of truth for in-flight sessions.
//!
//! Sessions are keyed by a monotonically increasing id. Because ids only grow, iterating
//! the ordered map visits sessions in creation order, which is what FIFO matchmaking needs.

use std::collections::BTreeMap;

use super::connection::ConnectionId;
use super::error::LobbyError;
use crate::config::lobby::FIRST_SESSION_ID;

pub type SessionId = u64;

/// Lifecycle state of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    WaitingForJoiner,
    Active,
}

/// A host and, once matched, its joiner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    pub host: ConnectionId,
    pub joiner: Option<ConnectionId>,
    pub state: SessionState,
}

impl Session {
    fn new(id: SessionId, host: ConnectionId) -> Self {
        Self {
            id,
            host,
            joiner: None,
            state: SessionState::WaitingForJoiner,
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.state == SessionState::WaitingForJoiner
    }

    /// The other participant of `conn` in this session, if there is one.
    pub fn peer_of(&self, conn: ConnectionId) -> Option<ConnectionId> {
        if conn == self.host {
            self.joiner
        } else if Some(conn) == self.joiner {
            Some(self.host)
        } else {
            None
        }
    }
}

/// Owns every session and the id sequence.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: BTreeMap<SessionId, Session>,
    next_id: SessionId,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: BTreeMap::new(),
            next_id: FIRST_SESSION_ID,
        }
    }

    /// Create a session waiting for a joiner, hosted by `host`.
    pub fn create(&mut self, host: ConnectionId) -> &Session {
        let id = self.next_id;
        self.next_id += 1;
        self.sessions.entry(id).or_insert(Session::new(id, host))
    }

    /// Earliest-created session still waiting for a joiner.
    pub fn find_waiting(&self) -> Option<&Session> {
        self.sessions.values().find(|s| s.is_waiting())
    }

    /// Attach `joiner` to a waiting session and mark it active.
    pub fn attach_joiner(&mut self, id: SessionId, joiner: ConnectionId) -> Result<&Session, LobbyError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(LobbyError::SessionNotFound(id))?;
        if !session.is_waiting() {
            return Err(LobbyError::SessionAlreadyActive(id));
        }
        session.joiner = Some(joiner);
        session.state = SessionState::Active;
        Ok(&*session)
    }

    /// Find the earliest waiting session and attach `joiner` to it, as one step.
    ///
    /// Returns `None` when no session is waiting.
    pub fn match_joiner(&mut self, joiner: ConnectionId) -> Option<&Session> {
        let id = self.find_waiting()?.id;
        self.attach_joiner(id, joiner).ok()
    }

    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    /// Remove a session. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: SessionId) -> Option<Session> {
        self.sessions.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut registry = SessionRegistry::new();
        let ids: Vec<SessionId> = (0..5).map(|_| registry.create(ConnectionId::new()).id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let mut registry = SessionRegistry::new();
        let first = registry.create(ConnectionId::new()).id;
        registry.remove(first);
        let second = registry.create(ConnectionId::new()).id;
        assert!(second > first);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_new_session_waits_for_joiner() {
        let mut registry = SessionRegistry::new();
        let host = ConnectionId::new();
        let session = registry.create(host).clone();
        assert_eq!(session.host, host);
        assert_eq!(session.joiner, None);
        assert_eq!(session.state, SessionState::WaitingForJoiner);
    }

    #[test]
    fn test_find_waiting_is_fifo() {
        let mut registry = SessionRegistry::new();
        let a = registry.create(ConnectionId::new()).id;
        let _b = registry.create(ConnectionId::new()).id;
        assert_eq!(registry.find_waiting().map(|s| s.id), Some(a));
    }

    #[test]
    fn test_find_waiting_skips_active_and_removed() {
        let mut registry = SessionRegistry::new();
        let a = registry.create(ConnectionId::new()).id;
        let b = registry.create(ConnectionId::new()).id;
        let c = registry.create(ConnectionId::new()).id;

        registry.attach_joiner(a, ConnectionId::new()).unwrap();
        registry.remove(b);
        assert_eq!(registry.find_waiting().map(|s| s.id), Some(c));
    }

    #[test]
    fn test_find_waiting_empty() {
        let registry = SessionRegistry::new();
        assert!(registry.find_waiting().is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_attach_joiner_activates_session() {
        let mut registry = SessionRegistry::new();
        let host = ConnectionId::new();
        let joiner = ConnectionId::new();
        let id = registry.create(host).id;

        let session = registry.attach_joiner(id, joiner).unwrap();
        assert_eq!(session.joiner, Some(joiner));
        assert_eq!(session.state, SessionState::Active);
        assert_eq!(session.peer_of(host), Some(joiner));
        assert_eq!(session.peer_of(joiner), Some(host));
        assert_eq!(session.peer_of(ConnectionId::new()), None);
    }

    #[test]
    fn test_attach_joiner_twice_fails() {
        let mut registry = SessionRegistry::new();
        let id = registry.create(ConnectionId::new()).id;
        let first = ConnectionId::new();
        registry.attach_joiner(id, first).unwrap();

        assert_eq!(
            registry.attach_joiner(id, ConnectionId::new()),
            Err(LobbyError::SessionAlreadyActive(id))
        );
        // The original joiner is kept.
        assert_eq!(registry.get(id).and_then(|s| s.joiner), Some(first));
    }

    #[test]
    fn test_attach_joiner_unknown_session() {
        let mut registry = SessionRegistry::new();
        assert_eq!(
            registry.attach_joiner(42, ConnectionId::new()),
            Err(LobbyError::SessionNotFound(42))
        );
    }

    #[test]
    fn test_match_joiner_never_double_pairs() {
        let mut registry = SessionRegistry::new();
        let id = registry.create(ConnectionId::new()).id;

        assert_eq!(registry.match_joiner(ConnectionId::new()).map(|s| s.id), Some(id));
        assert!(registry.match_joiner(ConnectionId::new()).is_none());
        assert!(registry.find_waiting().is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut registry = SessionRegistry::new();
        let id = registry.create(ConnectionId::new()).id;
        assert!(registry.remove(id).is_some());
        assert!(registry.remove(id).is_none());
        assert!(registry.remove(999).is_none());
        assert!(registry.get(id).is_none());
    }
}
