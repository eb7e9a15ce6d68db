use std::time::Duration;

use tracing::debug;

use crate::wire::MessagesResponse;

use super::RelayClient;

/// Remembers the offset of the first message not yet seen.
#[derive(Debug, Clone)]
pub struct Poller {
    client: RelayClient,
    since: usize,
}

impl Poller {
    pub fn new(client: RelayClient) -> Self {
        Self { client, since: 0 }
    }

    pub fn since(&self) -> usize {
        self.since
    }

    /// One poll. The offset only moves when the server answered.
    pub async fn tick(&mut self) -> anyhow::Result<Vec<String>> {
        let MessagesResponse { messages, next } = self.client.poll(self.since).await?;
        self.since = next;
        Ok(messages)
    }
}

/// Polls forever, handing each new message to `on_message` in log order.
/// Stop it by aborting its task.
pub async fn poll_loop<F>(mut poller: Poller, every: Duration, backoff: Duration, mut on_message: F)
where
    F: FnMut(String),
{
    loop {
        match poller.tick().await {
            Ok(messages) => {
                messages.into_iter().for_each(&mut on_message);
                tokio::time::sleep(every).await;
            }
            Err(err) => {
                debug!(%err, since = poller.since(), "poll failed");
                tokio::time::sleep(backoff).await;
            }
        }
    }
}
