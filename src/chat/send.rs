use axum::{debug_handler, extract::{Query, State}};
use tracing::debug;

use crate::AppState;

use super::{query::{self, RawQuery}, store::{ActiveUsers, MessageLog}};

#[debug_handler(state = AppState)]
pub(crate) async fn send(
    State(log): State<MessageLog>,
    State(users): State<ActiveUsers>,
    Query(query): Query<RawQuery>,
) -> &'static str {
    let text = query::msg(&query);
    if text.is_empty() {
        return "OK";
    }

    let user = query::sender(&query);
    let index = log.append(format!("{user}: {text}")).await;
    users.insert(user).await;

    debug!(user, index, "message appended");
    "OK"
}
