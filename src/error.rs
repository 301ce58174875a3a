use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body of every non-200 gateway response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("missing query parameter 'q'")]
    MissingQuery,

    #[error("invalid query string: {0}")]
    BadQuery(String),

    #[error("invalid API key")]
    Unauthorized,

    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("internal error while processing search: {0}")]
    Fetch(#[from] reqwest::Error),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MissingQuery | GatewayError::BadQuery(_) => StatusCode::BAD_REQUEST,
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
            GatewayError::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("search failed: {:#}", self);
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("request to gateway failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("gateway returned {status}: {body}")]
    Status { status: u16, body: String },
}
