use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub api_key: String,
    pub search_endpoint: String,
    pub user_agent: String,
    pub upstream_timeout: Duration,
    pub gateway_url: String,
    pub gateway_api_key: String,
    pub log_level: String,
    /// Values that were set but unusable. Logged once logging is up.
    pub warnings: Vec<String>,
}

impl Config {
    pub fn from_env() -> Config {
        dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Config {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let mut warnings = Vec::new();

        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                warnings.push(format!(
                    "ignoring invalid UPSTREAM_TIMEOUT_SECS={raw:?}, using 5"
                ));
                5
            }),
            None => 5,
        };

        Config {
            bind_addr: get_or_default("BIND_ADDR", "0.0.0.0:8000"),
            api_key: get_or_default("API_KEY", "Gus"),
            search_endpoint: get_or_default(
                "SEARCH_ENDPOINT",
                "https://html.duckduckgo.com/html/",
            ),
            user_agent: get_or_default("USER_AGENT", "Mozilla/5.0"),
            upstream_timeout: Duration::from_secs(timeout_secs),
            gateway_url: get_or_default("GATEWAY_URL", "http://127.0.0.1:8000/"),
            gateway_api_key: get_or_default("GATEWAY_API_KEY", "Gus"),
            log_level: get_or_default("LOG_LEVEL", "info"),
            warnings,
        }
    }

    /// Maps `log_level` onto a tracing level, falling back to INFO.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    /// Call after the subscriber is installed.
    pub fn log_warnings(&self) {
        if self.log_level.parse::<tracing::Level>().is_err() {
            log::warn!("unknown LOG_LEVEL={:?}, using info", self.log_level);
        }
        for warning in &self.warnings {
            log::warn!("{warning}");
        }
    }
}
