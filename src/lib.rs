pub mod chat;
pub mod client;
pub mod config;
pub mod logging;
pub mod res;
pub mod server;
pub mod wire;

use axum::{extract::FromRef, routing::get, Router};
use tower_http::trace::TraceLayer;

use chat::store::{ActiveUsers, MessageLog};

/// Everything the handlers share. Both fields are cheap `Arc` handles.
#[derive(Clone, Default, FromRef)]
pub struct AppState {
    pub log: MessageLog,
    pub users: ActiveUsers,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(res::page))
        .merge(chat::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
