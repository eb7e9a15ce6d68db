use std::collections::HashMap;

/// Decoded query string. Duplicate keys keep the last value.
pub(crate) type RawQuery = HashMap<String, String>;

pub const ANON: &str = "anon";

/// `user` as sent, or `anon` when the key is absent.
pub(crate) fn user(query: &RawQuery) -> &str {
    query.get("user").map(String::as_str).unwrap_or(ANON)
}

/// `user` for posting: an empty name also falls back to `anon`.
///
/// A posted line always needs a visible author, so `": hi"` never lands in the
/// log. Presence pings don't produce a line and simply skip an empty name
/// (see `users::register`).
pub(crate) fn sender(query: &RawQuery) -> &str {
    match user(query) {
        "" => ANON,
        name => name,
    }
}

pub(crate) fn msg(query: &RawQuery) -> &str {
    query.get("msg").map(String::as_str).unwrap_or("")
}

/// Anything that isn't a non-negative integer reads as 0.
pub(crate) fn since(query: &RawQuery) -> usize {
    query
        .get("since")
        .and_then(|since| since.parse().ok())
        .unwrap_or(0)
}
