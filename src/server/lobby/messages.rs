//! Wire protocol between clients and the relay.
//!
//! Every frame is a JSON object with a `type` field. Inbound `playerMove` frames are
//! kept as the original text so they can be forwarded without being re-encoded.

use actix::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::lobby::NO_AVAILABLE_GAMES_MESSAGE;

/// A frame that could not be read as a client message.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("frame is not a JSON object with a string `type` field: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("binary frame is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Only the tag is read; the rest of the object is left untouched.
#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
}

// Client -> server
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientWsMessage {
    Host,
    Join,
    /// Opaque gameplay update, holding the frame exactly as received.
    PlayerMove(String),
    /// Well-formed frame with a type this server does not handle.
    Unknown(String),
}

impl ClientWsMessage {
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        let envelope: Envelope = serde_json::from_str(text)?;
        Ok(match envelope.kind.as_str() {
            "host" => Self::Host,
            "join" => Self::Join,
            "playerMove" => Self::PlayerMove(text.to_string()),
            _ => Self::Unknown(envelope.kind),
        })
    }

    /// Binary frames are accepted when they carry UTF-8 JSON.
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
        Self::parse(std::str::from_utf8(bytes)?)
    }
}

// Server -> client
#[derive(Message, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[rtype(result = "()")]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerWsMessage {
    GameStart,
    Error { message: String },
    HostDisconnected,
    JoinerDisconnected,
}

impl ServerWsMessage {
    pub fn error(message: &str) -> Self {
        Self::Error { message: message.to_string() }
    }

    pub fn no_available_games() -> Self {
        Self::error(NO_AVAILABLE_GAMES_MESSAGE)
    }
}

/// A gameplay frame from the other participant, written out unchanged.
#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub struct RelayedMove(pub String);

/// Ask a player session to close its WebSocket.
#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub struct CloseConnection;
