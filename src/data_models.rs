use serde::{Deserialize, Serialize};

/// Engine tag reported in every response.
pub const ENGINE: &str = "ddg";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> SearchResult {
        SearchResult {
            title: title.into(),
            link: link.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub query: String,
    pub engine: String,
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    pub fn new(query: String, results: Vec<SearchResult>) -> SearchResponse {
        SearchResponse {
            query,
            engine: ENGINE.to_string(),
            results,
        }
    }
}
