// src/config.rs
//! Env-driven service settings with compiled defaults.

// --- env defaults & names ---
pub const DEFAULT_NEWS_LIMIT: usize = 20;
pub const DEFAULT_STORE_CAP: usize = 100;

pub const ENV_NEWS_DEFAULT_LIMIT: &str = "EMERGILINK_NEWS_DEFAULT_LIMIT";
pub const ENV_STORE_CAP: &str = "EMERGILINK_STORE_CAP";

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Result-size limit applied to `/api/news` when the query omits `limit`.
    pub news_default_limit: usize,
    /// Capacity bound shared by the in-memory stores.
    pub store_cap: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            news_default_limit: DEFAULT_NEWS_LIMIT,
            store_cap: DEFAULT_STORE_CAP,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            news_default_limit: parse_usize_env(std::env::var(ENV_NEWS_DEFAULT_LIMIT).ok())
                .unwrap_or(DEFAULT_NEWS_LIMIT),
            store_cap: parse_usize_env(std::env::var(ENV_STORE_CAP).ok())
                .unwrap_or(DEFAULT_STORE_CAP),
        }
    }
}

// parse optional usize env; zero is rejected (a zero-cap store is useless)
fn parse_usize_env(raw: Option<String>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|v| *v > 0)
}
