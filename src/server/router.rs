//! HTTP and WebSocket routing configuration.
//!
//! Clients open a WebSocket on the root path (or `/ws`); both upgrade into a player
//! session handled by the lobby.

use actix_web::web;
use crate::server::lobby::session::ws_lobby;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .to(ws_lobby)
    )
    .service(
        web::resource("/ws")
            .to(ws_lobby)
    );
}
