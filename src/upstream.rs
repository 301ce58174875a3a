use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use std::time::Duration;

use crate::config::Config;
use crate::error::GatewayError;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGS: &str = "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7";

/// The search provider's html results endpoint.
pub struct Upstream {
    client: reqwest::Client,
    endpoint: String,
}

impl Upstream {
    pub fn new(endpoint: &str, user_agent: &str, timeout: Duration) -> Result<Upstream> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build upstream http client")?;

        Ok(Upstream {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Upstream> {
        Self::new(
            &config.search_endpoint,
            &config.user_agent,
            config.upstream_timeout,
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One GET for `query`; returns the page body.
    pub async fn fetch(&self, query: &str) -> Result<String, GatewayError> {
        let res = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .header(ACCEPT, ACCEPT_HTML)
            .header(ACCEPT_LANGUAGE, ACCEPT_LANGS)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            log::warn!("upstream {} answered {status} for {query:?}", self.endpoint);
            return Err(GatewayError::UpstreamStatus(status.as_u16()));
        }

        let body = res.text().await?;
        Ok(body)
    }
}
