/// Lobby configuration constants.
/// 
/// This module defines the fixed texts and limits used by the matchmaking and relay engine.

/// Message sent to a joiner when no session is waiting for a second player.
pub const NO_AVAILABLE_GAMES_MESSAGE: &str = "no available games to join";

/// First session id handed out by the registry. Ids grow by one from here.
pub const FIRST_SESSION_ID: u64 = 1;
