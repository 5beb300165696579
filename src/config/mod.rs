// src/config/mod.rs
// Environment-driven configuration. Every key has a default, so a bare
// environment gives a working server and chat.

use once_cell::sync::Lazy;
use rand::Rng;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TherapyConfig {
    // ── Server
    pub host: String,
    pub port: u16,
    pub cors_origin: String,

    // ── Logging
    pub log_level: String,

    // ── Simulated thinking latency (terminal chat)
    pub thinking_delay_ms: u64,
    pub thinking_jitter_ms: u64,
}

impl Default for TherapyConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// Parse a value, falling back to the default when missing or unparseable.
// Trailing `# comments` and surrounding whitespace are stripped first.
fn value_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    warn!(key, value = %val, "Unparseable config value, using default");
                    default
                }
            }
        }
        None => default,
    }
}

impl TherapyConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a map here instead of touching env).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: value_or(&lookup, "OHIO_HOST", "0.0.0.0".to_string()),
            port: value_or(&lookup, "OHIO_PORT", 8000),
            cors_origin: value_or(&lookup, "OHIO_CORS_ORIGIN", "*".to_string()),
            log_level: value_or(&lookup, "OHIO_LOG_LEVEL", "info".to_string()),
            thinking_delay_ms: value_or(&lookup, "OHIO_THINKING_DELAY_MS", 1200),
            thinking_jitter_ms: value_or(&lookup, "OHIO_THINKING_JITTER_MS", 1500),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Thinking delay for one reply: the base plus up to `thinking_jitter_ms`.
    pub fn thinking_delay(&self) -> Duration {
        let jitter = if self.thinking_jitter_ms == 0 {
            0
        } else {
            rand::rng().random_range(0..self.thinking_jitter_ms)
        };
        Duration::from_millis(self.thinking_delay_ms.saturating_add(jitter))
    }

    /// Parsed log level, INFO when the configured string is not a level
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

/// Load `.env` files: `~/.ohio-therapy/.env` first, then the working
/// directory. Existing variables are never overwritten, so the process
/// environment beats both files and the user file beats the local one.
pub fn load_dotenv() {
    let _ = dotenvy::from_path(user_config_dir().join(".env"));
    let _ = dotenvy::dotenv();
}

/// Directory holding the per-user `.env`
pub fn user_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ohio-therapy")
}

// Global config instance - loaded once on first use
pub static CONFIG: Lazy<TherapyConfig> = Lazy::new(TherapyConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> TherapyConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TherapyConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = TherapyConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.cors_origin, "*");
        assert_eq!(config.thinking_delay_ms, 1200);
        assert_eq!(config.thinking_jitter_ms, 1500);
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[("OHIO_PORT", "9100"), ("OHIO_HOST", "127.0.0.1")]);
        assert_eq!(config.bind_address(), "127.0.0.1:9100");
    }

    #[test]
    fn test_unparseable_falls_back() {
        let config = config_from(&[("OHIO_PORT", "not-a-port"), ("OHIO_THINKING_DELAY_MS", "-5")]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.thinking_delay_ms, 1200);
    }

    #[test]
    fn test_comments_and_whitespace_stripped() {
        let config = config_from(&[("OHIO_PORT", " 8080  # dev port")]);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_thinking_delay_bounds() {
        let config = config_from(&[
            ("OHIO_THINKING_DELAY_MS", "100"),
            ("OHIO_THINKING_JITTER_MS", "50"),
        ]);
        for _ in 0..50 {
            let delay = config.thinking_delay();
            assert!(delay >= Duration::from_millis(100));
            assert!(delay < Duration::from_millis(150));
        }
    }

    #[test]
    fn test_zero_jitter() {
        let config = config_from(&[
            ("OHIO_THINKING_DELAY_MS", "0"),
            ("OHIO_THINKING_JITTER_MS", "0"),
        ]);
        assert_eq!(config.thinking_delay(), Duration::ZERO);
    }

    #[test]
    fn test_thinking_delay_saturates_on_huge_values() {
        let max = u64::MAX.to_string();
        let config = config_from(&[
            ("OHIO_THINKING_DELAY_MS", max.as_str()),
            ("OHIO_THINKING_JITTER_MS", max.as_str()),
        ]);
        assert_eq!(config.thinking_delay_ms, u64::MAX);
        for _ in 0..20 {
            assert_eq!(config.thinking_delay(), Duration::from_millis(u64::MAX));
        }
    }

    #[test]
    fn test_tracing_level() {
        assert_eq!(config_from(&[("OHIO_LOG_LEVEL", "debug")]).tracing_level(), tracing::Level::DEBUG);
        assert_eq!(config_from(&[("OHIO_LOG_LEVEL", "loud")]).tracing_level(), tracing::Level::INFO);
    }
}
