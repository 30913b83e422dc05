use crate::infrastructure::upstream::RetryPolicy;
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api-engine-dev.clerq.io/tech_assessment";

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub upstream_base_url: String,
    pub upstream_max_retries: u32,
    pub upstream_retry_backoff_ms: u64,
    pub upstream_timeout_secs: u64,
    pub settlement_deadline_secs: u64,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env_or("PORT", 3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            upstream_base_url: env::var("UPSTREAM_BASE_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string()),
            upstream_max_retries: env_or("UPSTREAM_MAX_RETRIES", 5),
            upstream_retry_backoff_ms: env_or("UPSTREAM_RETRY_BACKOFF_MS", 0),
            upstream_timeout_secs: env_or("UPSTREAM_TIMEOUT_SECS", 10),
            settlement_deadline_secs: env_or("SETTLEMENT_DEADLINE_SECS", 90),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.upstream_max_retries,
            backoff: Duration::from_millis(self.upstream_retry_backoff_ms),
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Bound on one settlement fetch, all upstream attempts included.
    pub fn settlement_deadline(&self) -> Duration {
        Duration::from_secs(self.settlement_deadline_secs)
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
