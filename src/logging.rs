use tracing_subscriber::EnvFilter;

pub const SERVER_FILTER: &str = "chat_relay=info,tower_http=info";
/// Quiet by default: the client's stdout is the chat itself.
pub const CLIENT_FILTER: &str = "chat_relay=warn";

/// `RUST_LOG` wins over `default_filter` when set. Output goes to stderr.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .with_line_number(true)
        .with_file(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_an_error() {
        // the first call may lose to another test in this binary
        let _ = init_tracing(CLIENT_FILTER);
        assert!(init_tracing(CLIENT_FILTER).is_err());
    }
}
