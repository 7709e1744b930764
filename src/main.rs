//! Main entry point for the relay server.
//!
//! Initializes logging, reads the listening address from the environment, starts the
//! lobby actor, and launches the HTTP server with the WebSocket endpoints.

use std::io;

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;

use config::server::ServerConfig;
use server::lobby::server::LobbyServer;

pub mod config;
mod server;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize logger from RUST_LOG (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Start the LobbyServer actor (owns every session).
    let lobby_addr = LobbyServer::new().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(lobby_addr));

    info!("Pong relay running on {}", config.ws_url());
    info!("Waiting for connections...");

    // Start the HTTP server with WebSocket endpoints.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
