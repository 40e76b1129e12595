/// Configuration management for Community Service
///
/// Loads configuration from environment variables.
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use feed_core::feed::ReferenceWindow;
use feed_core::ids::IdStrategy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Simulated round-trip latency
    pub latency: LatencyConfig,
    /// Feed behavior
    pub feed: FeedConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// HTTP port
    pub port: u16,
}

/// Delays applied before optimistic mutations complete
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatencyConfig {
    pub vote_ms: u64,
    pub submit_ms: u64,
}

impl LatencyConfig {
    pub fn none() -> Self {
        Self {
            vote_ms: 0,
            submit_ms: 0,
        }
    }

    pub fn vote(&self) -> Duration {
        Duration::from_millis(self.vote_ms)
    }

    pub fn submit(&self) -> Duration {
        Duration::from_millis(self.submit_ms)
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            vote_ms: default_vote_latency_ms(),
            submit_ms: default_submit_latency_ms(),
        }
    }
}

/// Feed configuration
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Start of the 24h "today" window
    pub reference_window: ReferenceWindow,
    /// Bump a hashtag's search count when it is toggled on as a filter
    pub track_hashtag_searches: bool,
    pub id_strategy: IdStrategy,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            reference_window: ReferenceWindow::default(),
            track_hashtag_searches: false,
            id_strategy: IdStrategy::default(),
        }
    }
}

// Default values
fn default_vote_latency_ms() -> u64 {
    200
}

fn default_submit_latency_ms() -> u64 {
    500
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("invalid {}={:?}: {}", key, raw, e)),
        Err(_) => Ok(default),
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("PORT", 8090)?,
        };

        let latency = LatencyConfig {
            vote_ms: parse_env("VOTE_LATENCY_MS", default_vote_latency_ms())?,
            submit_ms: parse_env("SUBMIT_LATENCY_MS", default_submit_latency_ms())?,
        };

        let reference_window = match std::env::var("FEED_REFERENCE_DAY_START") {
            Ok(raw) => {
                let start = DateTime::parse_from_rfc3339(raw.trim())
                    .with_context(|| format!("invalid FEED_REFERENCE_DAY_START={:?}", raw))?
                    .with_timezone(&Utc);
                ReferenceWindow::starting_at(start)
            }
            Err(_) => ReferenceWindow::default(),
        };

        let feed = FeedConfig {
            reference_window,
            track_hashtag_searches: parse_env("FEED_TRACK_HASHTAG_SEARCHES", false)?,
            id_strategy: parse_env("FEED_ID_STRATEGY", IdStrategy::default())?,
        };

        Ok(Config { app, latency, feed })
    }

    /// In-process defaults with no artificial latency
    pub fn for_tests() -> Self {
        Self {
            app: AppConfig {
                env: "test".to_string(),
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            latency: LatencyConfig::none(),
            feed: FeedConfig {
                id_strategy: IdStrategy::Sequential,
                ..FeedConfig::default()
            },
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serial_test::serial;

    const KEYS: [&str; 8] = [
        "APP_ENV",
        "APP_HOST",
        "PORT",
        "VOTE_LATENCY_MS",
        "SUBMIT_LATENCY_MS",
        "FEED_REFERENCE_DAY_START",
        "FEED_TRACK_HASHTAG_SEARCHES",
        "FEED_ID_STRATEGY",
    ];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_default_values() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 8090);
        assert_eq!(config.latency.vote_ms, 200);
        assert_eq!(config.latency.submit_ms, 500);
        assert_eq!(config.feed.reference_window, ReferenceWindow::default());
        assert!(!config.feed.track_hashtag_searches);
        assert_eq!(config.feed.id_strategy, IdStrategy::Uuid);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("PORT", "9100");
        std::env::set_var("VOTE_LATENCY_MS", "0");
        std::env::set_var("FEED_REFERENCE_DAY_START", "2025-03-01T00:00:00Z");
        std::env::set_var("FEED_TRACK_HASHTAG_SEARCHES", "true");
        std::env::set_var("FEED_ID_STRATEGY", "sequential");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.app.port, 9100);
        assert_eq!(config.latency.vote_ms, 0);
        assert_eq!(
            config.feed.reference_window.start,
            Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
        );
        assert!(config.feed.track_hashtag_searches);
        assert_eq!(config.feed.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    #[serial]
    fn test_invalid_values_fail() {
        clear_env();
        std::env::set_var("SUBMIT_LATENCY_MS", "soon");
        assert!(Config::from_env().is_err());
        clear_env();

        std::env::set_var("FEED_REFERENCE_DAY_START", "yesterday");
        assert!(Config::from_env().is_err());
        clear_env();
    }
}
