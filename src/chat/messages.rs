use axum::{debug_handler, extract::{Query, State}, Json};

use crate::{wire::MessagesResponse, AppState};

use super::{query::{self, RawQuery}, store::MessageLog};

#[debug_handler(state = AppState)]
pub(crate) async fn messages(
    State(log): State<MessageLog>,
    Query(query): Query<RawQuery>,
) -> Json<MessagesResponse> {
    Json(log.since(query::since(&query)).await.into())
}
