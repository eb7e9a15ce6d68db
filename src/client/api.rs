use std::time::Duration;

use crate::wire::{MessagesResponse, UsersResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Typed access to a relay's endpoints.
///
/// Query values are percent-encoded by reqwest. Any non-2xx status is an error.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    base: String,
}

impl RelayClient {
    pub fn new(base: &str) -> anyhow::Result<Self> {
        let http = reqwest::ClientBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub async fn send(&self, user: &str, msg: &str) -> anyhow::Result<()> {
        self.http
            .post(self.url("/send"))
            .query(&[("user", user), ("msg", msg)])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn poll(&self, since: usize) -> anyhow::Result<MessagesResponse> {
        Ok(
            self.http
                .get(self.url("/messages"))
                .query(&[("since", since)])
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?
        )
    }

    pub async fn register(&self, user: &str) -> anyhow::Result<()> {
        self.http
            .post(self.url("/users"))
            .query(&[("user", user)])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn users(&self) -> anyhow::Result<UsersResponse> {
        Ok(
            self.http
                .get(self.url("/users"))
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?
        )
    }
}
