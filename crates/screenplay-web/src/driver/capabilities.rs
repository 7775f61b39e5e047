//! Session capabilities sent when a new session is requested.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// A `capabilities.alwaysMatch` object
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Capabilities(Map<String, Value>);

impl Capabilities {
    /// No capabilities
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Desktop Chrome
    #[must_use]
    pub fn chrome() -> Self {
        Self::new()
            .set("browserName", "chrome")
            .set("goog:chromeOptions", json!({"args": ["--no-sandbox"]}))
    }

    /// Desktop Firefox
    #[must_use]
    pub fn firefox() -> Self {
        Self::new()
            .set("browserName", "firefox")
            .set("moz:firefoxOptions", json!({"args": []}))
    }

    /// Desktop Safari
    #[must_use]
    pub fn safari() -> Self {
        Self::new().set("browserName", "safari")
    }

    /// Set one capability
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Read one capability
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Request body for `POST /session`
    #[must_use]
    pub fn new_session_body(&self) -> Value {
        json!({"capabilities": {"alwaysMatch": self.0}})
    }
}

impl From<Map<String, Value>> for Capabilities {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_name_the_browser() {
        assert_eq!(Capabilities::chrome().get("browserName"), Some(&json!("chrome")));
        assert_eq!(Capabilities::firefox().get("browserName"), Some(&json!("firefox")));
        assert_eq!(Capabilities::safari().get("browserName"), Some(&json!("safari")));
    }

    #[test]
    fn test_new_session_body_wraps_always_match() {
        let body = Capabilities::new().set("platformName", "iOS").new_session_body();
        assert_eq!(body["capabilities"]["alwaysMatch"]["platformName"], "iOS");
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let caps = Capabilities::new().set("a", 1);
        assert_eq!(serde_json::to_value(&caps).unwrap(), json!({"a": 1}));
    }
}
