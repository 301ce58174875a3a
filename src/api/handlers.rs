use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::HeaderMap,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use crate::data_models::{SearchResponse, SearchResult};
use crate::error::GatewayError;
use crate::scrapper::{extract_results, normalize_link};

use super::AppState;
use super::models::{HealthResponse, SearchParams};

pub const API_KEY_HEADER: &str = "x-api-key";

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, GatewayError> {
    let start = Instant::now();

    let Query(params) = params.map_err(|e| GatewayError::BadQuery(e.body_text()))?;

    let query = params.query().ok_or(GatewayError::MissingQuery)?;

    let key = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());
    if key != Some(state.api_key.as_str()) {
        return Err(GatewayError::Unauthorized);
    }

    let limit = params.limit();
    let html = state.upstream.fetch(query).await?;

    // Extraction is uncapped here: duplicates are dropped before truncating.
    let results = extract_results(&html, usize::MAX)
        .into_iter()
        .map(|r| SearchResult::new(r.title, normalize_link(&r.link)));
    let results = dedup_by_link(results, limit);

    log::info!(
        "search {query:?} limit={limit} results={} in {}ms",
        results.len(),
        start.elapsed().as_millis()
    );

    Ok(Json(SearchResponse::new(query.to_string(), results)))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Keeps the first occurrence of each link, in order, up to `limit` entries.
pub fn dedup_by_link(
    results: impl IntoIterator<Item = SearchResult>,
    limit: usize,
) -> Vec<SearchResult> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|r| seen.insert(r.link.clone()))
        .take(limit)
        .collect()
}
