use crate::domain::model::{ProbeOutcome, ProbeResult};
use crate::domain::ports::UrlProber;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use std::time::Duration;

const USER_AGENT: &str = concat!("sitecheck/", env!("CARGO_PKG_VERSION"));

/// Reachability prober over HTTP. Issues HEAD first and falls back to
/// GET when the server rejects HEAD outright.
pub struct HttpProber {
    client: Client,
    retries: u32,
}

impl HttpProber {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, retries: 1 })
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    async fn attempt(&self, url: &str) -> std::result::Result<StatusCode, reqwest::Error> {
        let response = self.client.request(Method::HEAD, url).send().await?;
        if response.status() == StatusCode::METHOD_NOT_ALLOWED {
            let response = self.client.get(url).send().await?;
            return Ok(response.status());
        }
        Ok(response.status())
    }
}

#[async_trait]
impl UrlProber for HttpProber {
    async fn probe(&self, url: &str) -> ProbeResult {
        let mut last_error = None;
        for attempt in 0..=self.retries {
            match self.attempt(url).await {
                Ok(status) => {
                    return ProbeResult {
                        url: url.to_string(),
                        outcome: ProbeOutcome::Reachable {
                            status: status.as_u16(),
                        },
                    };
                }
                Err(e) => {
                    tracing::debug!("Probe attempt {} for {} failed: {}", attempt + 1, url, e);
                    last_error = Some(e);
                }
            }
        }

        let reason = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        ProbeResult {
            url: url.to_string(),
            outcome: ProbeOutcome::Unreachable { reason },
        }
    }
}
