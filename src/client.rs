use crate::api::handlers::API_KEY_HEADER;
use crate::config::Config;
use crate::data_models::SearchResponse;
use crate::error::ClientError;
use crate::scrapper::normalize_link;

/// Talks to a running gateway.
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SearchClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> SearchClient {
        SearchClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> SearchClient {
        Self::new(config.gateway_url.clone(), config.gateway_api_key.clone())
    }

    /// Runs a search and unwraps any redirect links left in the results.
    pub async fn search(&self, query: &str, limit: usize) -> Result<SearchResponse, ClientError> {
        if query.trim().is_empty() {
            return Err(ClientError::EmptyQuery);
        }

        let limit = limit.to_string();
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", query), ("limit", limit.as_str())])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let mut response: SearchResponse = res.json().await?;
        for result in &mut response.results {
            result.link = normalize_link(&result.link);
        }
        Ok(response)
    }
}

/// Renders a response the way the `search` binary prints it.
pub fn render(response: &SearchResponse) -> String {
    let mut out = format!(
        "\nResults for: \"{}\" (engine: {})\n\n",
        response.query, response.engine
    );
    if response.results.is_empty() {
        out.push_str("No results found.\n");
        return out;
    }
    for (i, r) in response.results.iter().enumerate() {
        out.push_str(&format!("{}. {}\n   → {}\n\n", i + 1, r.title, r.link));
    }
    out
}
