use axum::{debug_handler, response::{Html, IntoResponse}};

#[macro_export]
macro_rules! include_res {
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

/// The browser client. Static, talks to the same endpoints as `chat-relay join`.
#[debug_handler]
pub async fn page() -> impl IntoResponse {
    Html(include_res!(str, "/pages/index.html"))
}
