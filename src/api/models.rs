use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 10;
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 20;

/// Raw query string. Both fields stay optional strings so missing or
/// non-numeric values are handled by the handler rather than by serde.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    /// Requested limit clamped to `[MIN_LIMIT, MAX_LIMIT]`.
    pub fn limit(&self) -> usize {
        let requested = self
            .limit
            .as_deref()
            .and_then(parse_saturating)
            .unwrap_or(DEFAULT_LIMIT);
        requested.clamp(MIN_LIMIT, MAX_LIMIT) as usize
    }
}

/// Parses a signed integer, saturating values that overflow `i64`.
fn parse_saturating(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
