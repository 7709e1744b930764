/// Main configuration module.
/// 
/// Re-exports submodules for server (listening address) and lobby configuration.
pub mod lobby;
pub mod server;
