//! Process-wide defaults for waiting and gesture chains.
//!
//! Settings are an explicit value carried by
//! [`BrowseTheWeb`](crate::abilities::BrowseTheWeb). Values are layered:
//!
//! ```text
//! defaults  <  YAML file  <  SCREENPLAY_* environment  <  builder calls
//! ```

use crate::result::{ScreenplayError, ScreenplayResult};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default explicit-wait timeout (20 seconds)
pub const DEFAULT_TIMEOUT_SECS: f64 = 20.0;

/// Default explicit-wait polling interval (0.5 seconds)
pub const DEFAULT_POLLING_SECS: f64 = 0.5;

/// Default duration of each pointer move in an action chain (10ms)
pub const DEFAULT_CHAIN_DURATION_MS: u64 = 10;

/// Environment variable overriding [`Settings::timeout`] (seconds)
pub const ENV_TIMEOUT: &str = "SCREENPLAY_TIMEOUT";

/// Environment variable overriding [`Settings::polling`] (seconds)
pub const ENV_POLLING: &str = "SCREENPLAY_POLLING";

/// Environment variable overriding [`Settings::chain_duration`] (milliseconds)
pub const ENV_CHAIN_DURATION: &str = "SCREENPLAY_CHAIN_DURATION";

/// Timeouts and durations used by waits and chains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// How long `Wait` waits before giving up
    pub timeout: Duration,
    /// How often `Wait` re-checks its condition
    pub polling: Duration,
    /// Duration of pointer moves inside an action chain
    pub chain_duration: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
            polling: Duration::from_secs_f64(DEFAULT_POLLING_SECS),
            chain_duration: Duration::from_millis(DEFAULT_CHAIN_DURATION_MS),
        }
    }
}

/// On-disk shape of the settings file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    timeout: Option<f64>,
    polling: Option<f64>,
    chain_duration: Option<u64>,
}

impl Settings {
    /// Create settings with the built-in defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by the process environment
    pub fn from_env() -> ScreenplayResult<Self> {
        Self::default().with_env_from(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by a YAML file, then by the process environment
    pub fn load(path: impl AsRef<Path>) -> ScreenplayResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::default()
            .with_yaml(&text)?
            .with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a YAML document
    pub fn with_yaml(mut self, text: &str) -> ScreenplayResult<Self> {
        let file: SettingsFile = if text.trim().is_empty() {
            SettingsFile::default()
        } else {
            serde_yaml_ng::from_str(text)
                .map_err(|e| ScreenplayError::config(format!("invalid settings file: {e}")))?
        };
        if let Some(secs) = file.timeout {
            self.timeout = seconds("timeout", secs)?;
        }
        if let Some(secs) = file.polling {
            self.polling = seconds("polling", secs)?;
        }
        if let Some(ms) = file.chain_duration {
            self.chain_duration = Duration::from_millis(ms);
        }
        Ok(self)
    }

    /// Apply overrides from an environment lookup
    ///
    /// The lookup is injectable so callers (and tests) decide where values
    /// come from.
    pub fn with_env_from<F>(mut self, lookup: F) -> ScreenplayResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_TIMEOUT) {
            self.timeout = seconds(ENV_TIMEOUT, parse_number(ENV_TIMEOUT, &raw)?)?;
        }
        if let Some(raw) = lookup(ENV_POLLING) {
            self.polling = seconds(ENV_POLLING, parse_number(ENV_POLLING, &raw)?)?;
        }
        if let Some(raw) = lookup(ENV_CHAIN_DURATION) {
            let ms = raw.trim().parse::<u64>().map_err(|_| {
                ScreenplayError::config(format!(
                    "{ENV_CHAIN_DURATION} must be a whole number of milliseconds, got {raw:?}"
                ))
            })?;
            self.chain_duration = Duration::from_millis(ms);
        }
        Ok(self)
    }

    /// Set the wait timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the wait polling interval
    #[must_use]
    pub const fn with_polling(mut self, polling: Duration) -> Self {
        self.polling = polling;
        self
    }

    /// Set the chain pointer-move duration
    #[must_use]
    pub const fn with_chain_duration(mut self, duration: Duration) -> Self {
        self.chain_duration = duration;
        self
    }
}

fn parse_number(name: &str, raw: &str) -> ScreenplayResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ScreenplayError::config(format!("{name} must be a number, got {raw:?}")))
}

fn seconds(name: &str, secs: f64) -> ScreenplayResult<Duration> {
    Duration::try_from_secs_f64(secs)
        .map_err(|_| ScreenplayError::config(format!("{name} must be non-negative, got {secs}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    mod default_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let settings = Settings::default();
            assert_eq!(settings.timeout, Duration::from_secs(20));
            assert_eq!(settings.polling, Duration::from_millis(500));
            assert_eq!(settings.chain_duration, Duration::from_millis(10));
        }

        #[test]
        fn test_builders_override() {
            let settings = Settings::new()
                .with_timeout(Duration::from_secs(3))
                .with_polling(Duration::from_millis(100))
                .with_chain_duration(Duration::from_millis(50));
            assert_eq!(settings.timeout, Duration::from_secs(3));
            assert_eq!(settings.polling, Duration::from_millis(100));
            assert_eq!(settings.chain_duration, Duration::from_millis(50));
        }
    }

    mod layering_tests {
        use super::*;

        #[test]
        fn test_yaml_overrides_defaults() {
            let settings = Settings::default()
                .with_yaml("chain_duration: 500\ntimeout: 5\n")
                .unwrap();
            assert_eq!(settings.chain_duration, Duration::from_millis(500));
            assert_eq!(settings.timeout, Duration::from_secs(5));
            assert_eq!(settings.polling, Duration::from_millis(500));
        }

        #[test]
        fn test_env_overrides_yaml() {
            let settings = Settings::default()
                .with_yaml("chain_duration: 500\n")
                .unwrap()
                .with_env_from(env(&[(ENV_CHAIN_DURATION, "1337")]))
                .unwrap();
            assert_eq!(settings.chain_duration, Duration::from_millis(1337));
        }

        #[test]
        fn test_builder_overrides_env() {
            let settings = Settings::default()
                .with_env_from(env(&[(ENV_CHAIN_DURATION, "1337")]))
                .unwrap()
                .with_chain_duration(Duration::from_millis(9001));
            assert_eq!(settings.chain_duration, Duration::from_millis(9001));
        }

        #[test]
        fn test_fractional_seconds_from_env() {
            let settings = Settings::default()
                .with_env_from(env(&[(ENV_POLLING, "0.25"), (ENV_TIMEOUT, "2")]))
                .unwrap();
            assert_eq!(settings.polling, Duration::from_millis(250));
            assert_eq!(settings.timeout, Duration::from_secs(2));
        }

        #[test]
        fn test_empty_yaml_is_defaults() {
            let settings = Settings::default().with_yaml("  \n").unwrap();
            assert_eq!(settings, Settings::default());
        }

        #[test]
        fn test_load_from_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("screenplay.yaml");
            std::fs::write(&path, "polling: 1.5\n").unwrap();
            let settings = Settings::load(&path).unwrap();
            assert_eq!(settings.polling, Duration::from_millis(1500));
        }
    }

    mod invalid_tests {
        use super::*;

        #[test]
        fn test_garbage_env_value() {
            let err = Settings::default()
                .with_env_from(env(&[(ENV_TIMEOUT, "soon")]))
                .unwrap_err();
            assert!(matches!(err, ScreenplayError::Config { .. }));
            assert!(err.to_string().contains(ENV_TIMEOUT));
        }

        #[test]
        fn test_negative_seconds_rejected() {
            let err = Settings::default().with_yaml("timeout: -1\n").unwrap_err();
            assert!(matches!(err, ScreenplayError::Config { .. }));
        }

        #[test]
        fn test_unknown_key_rejected() {
            let err = Settings::default().with_yaml("timeuot: 3\n").unwrap_err();
            assert!(err.to_string().contains("invalid settings file"));
        }

        #[test]
        fn test_fractional_chain_duration_rejected() {
            let err = Settings::default()
                .with_env_from(env(&[(ENV_CHAIN_DURATION, "1.5")]))
                .unwrap_err();
            assert!(err.to_string().contains(ENV_CHAIN_DURATION));
        }
    }
}
