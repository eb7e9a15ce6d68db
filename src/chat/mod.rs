mod messages;
mod query;
mod send;
pub mod store;
mod users;

use axum::{routing::{get, post}, Router};

use crate::AppState;

pub use query::ANON;

/// `/send`, `/messages` and `/users`. Methods not routed here get a bare 405.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/send", post(send::send))
        .route("/messages", get(messages::messages))
        .route("/users", get(users::list_users).post(users::register))
}
