use axum::{debug_handler, extract::{Query, State}, Json};
use tracing::debug;

use crate::{wire::UsersResponse, AppState};

use super::{query::{self, RawQuery}, store::ActiveUsers};

#[debug_handler(state = AppState)]
pub(crate) async fn register(
    State(users): State<ActiveUsers>,
    Query(query): Query<RawQuery>,
) -> &'static str {
    // an explicit empty name registers nobody; `/send` posts it as `anon`
    let user = query::user(&query);
    if !user.is_empty() && users.insert(user).await {
        debug!(user, "new user");
    }
    "OK"
}

#[debug_handler(state = AppState)]
pub(crate) async fn list_users(State(users): State<ActiveUsers>) -> Json<UsersResponse> {
    Json(UsersResponse {
        users: users.snapshot().await,
    })
}
