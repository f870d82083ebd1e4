use crate::error::AppError;

const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL (e.g. "redis://127.0.0.1:6379"). `None` disables caching.
    pub redis_url: Option<String>,
    /// How long SERP, website and density analyses stay cached.
    pub cache_ttl_secs: u64,
    /// Serve MCP over TCP on this address instead of stdio.
    pub listen_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `REDIS_URL`: Redis connection string (omit to disable caching)
    /// - `ANALYSIS_CACHE_TTL_SECS`: positive integer, default 300
    /// - `MCP_TCP_LISTEN_ADDR`: e.g. "127.0.0.1:7410"
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let non_empty = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let cache_ttl_secs = match non_empty("ANALYSIS_CACHE_TTL_SECS") {
            None => DEFAULT_CACHE_TTL_SECS,
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "ANALYSIS_CACHE_TTL_SECS must be a positive integer, got '{raw}'"
                    ))
                })?,
        };

        Ok(Self {
            redis_url: non_empty("REDIS_URL"),
            cache_ttl_secs,
            listen_addr: non_empty("MCP_TCP_LISTEN_ADDR"),
        })
    }
}
