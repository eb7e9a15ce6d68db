//! Terminal client: one task polls and prints, the other forwards stdin.

mod api;
mod input;
mod poll;

use std::{future::Future, time::Duration};

use tokio::sync::mpsc;
use tracing::{info, warn};

pub use api::RelayClient;
pub use input::{input_loop, stdin_lines, WHO};
pub use poll::{poll_loop, Poller};

pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const RETRY_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server: String,
    pub user: String,
    pub poll_interval: Duration,
    pub retry_interval: Duration,
}

/// Runs until stdin closes or ctrl-c.
pub async fn run(config: ClientConfig) -> anyhow::Result<()> {
    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(%err, "couldn't listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };
    run_until(config, stdin_lines(), std::io::stdout(), shutdown).await
}

/// Chats over `lines` until they run out or `shutdown` resolves, whichever
/// comes first. Received messages go to stdout.
pub async fn run_until<W, F>(
    config: ClientConfig,
    lines: mpsc::Receiver<String>,
    out: W,
    shutdown: F,
) -> anyhow::Result<()>
where
    W: std::io::Write,
    F: Future<Output = ()>,
{
    let client = RelayClient::new(&config.server)?;
    if let Err(err) = client.register(&config.user).await {
        warn!(%err, server = client.base(), "couldn't register presence");
    }

    let poll_task = tokio::spawn(poll_loop(
        Poller::new(client.clone()),
        config.poll_interval,
        config.retry_interval,
        |line| println!("{line}"),
    ));

    let result = tokio::select! {
        result = input_loop(&client, &config.user, lines, out) => result,
        _ = shutdown => Ok(()),
    };

    poll_task.abort();
    info!(user = %config.user, "left the chat");
    result
}
