/// Lobby module: pairs hosts with joiners and relays gameplay frames between them.

pub mod connection;
pub mod error;
pub mod matchmaker;
pub mod messages;
pub mod peer;
pub mod registry;
pub mod relay;
pub mod server;
pub mod session;
pub mod state;
