//! Test configuration injected into every scenario.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Default tolerance, in milliseconds, for "close to now" assertions.
pub const DEFAULT_NOW_TOLERANCE_MS: u64 = 60_000;

/// Configuration of a test suite.
///
/// The hook lifecycle hands a copy to each scenario before its steps run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestConfig {
    /// Suite name.
    pub name: String,
    /// Base URL of the API under test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Target environment label (e.g. `staging`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    /// Tuning of the assertion predicates.
    #[serde(default)]
    pub assertions: AssertionSettings,
}

impl TestConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            environment: None,
            assertions: AssertionSettings::default(),
        }
    }

    /// Set the base URL (builder pattern).
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfig`] when the suite name is blank or
    /// the "now" tolerance is zero.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidConfig(
                "suite name cannot be empty".to_string(),
            ));
        }
        if self.assertions.now_tolerance_ms == 0 {
            return Err(DomainError::InvalidConfig(
                "assertions.now_tolerance_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Settings consumed by the assertion predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionSettings {
    /// Maximum distance, in milliseconds, between a timestamp and the current
    /// time for it to be considered "now" (inclusive).
    #[serde(default = "default_now_tolerance_ms")]
    pub now_tolerance_ms: u64,
}

const fn default_now_tolerance_ms() -> u64 {
    DEFAULT_NOW_TOLERANCE_MS
}

impl Default for AssertionSettings {
    fn default() -> Self {
        Self {
            now_tolerance_ms: DEFAULT_NOW_TOLERANCE_MS,
        }
    }
}

impl AssertionSettings {
    /// The "now" tolerance as a time delta.
    #[must_use]
    pub fn now_tolerance(&self) -> TimeDelta {
        i64::try_from(self.now_tolerance_ms)
            .ok()
            .and_then(TimeDelta::try_milliseconds)
            .unwrap_or(TimeDelta::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config: TestConfig = serde_json::from_str(r#"{"name": "users api"}"#).unwrap();
        assert_eq!(config.assertions.now_tolerance_ms, 60_000);
        assert_eq!(config.assertions.now_tolerance(), TimeDelta::seconds(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_tolerance_is_rejected() {
        let mut config = TestConfig::new("users api");
        config.assertions.now_tolerance_ms = 0;
        assert!(matches!(config.validate(), Err(DomainError::InvalidConfig(_))));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert!(TestConfig::new("  ").validate().is_err());
    }
}
