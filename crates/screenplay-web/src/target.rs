//! Named element locators.
//!
//! A [`Target`] pairs a human-readable name with a locator:
//!
//! ```text
//! Target::the("login button").located_by("#login")      -> css selector
//! Target::the("first row").located_by("//tr[1]")        -> xpath
//! Target::the("menu").located_by((By::Id, "menu"))      -> verbatim
//! ```

use crate::abilities::BrowseTheWeb;
use crate::actor::Actor;
use crate::driver::{Browser, By, WebElement};
use crate::result::{ScreenplayError, ScreenplayResult};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Problems with a dynamically supplied locator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocatorError {
    /// Not a string or an array
    #[error("locator must be a string or a [strategy, selector] pair, got {found}")]
    InvalidType {
        /// JSON type received
        found: String,
    },

    /// An array of the wrong size
    #[error("locator pair must have exactly 2 items, got {len}")]
    InvalidLength {
        /// Items received
        len: usize,
    },

    /// First item of the pair is not a strategy name
    #[error("unknown locator strategy: {name}")]
    UnknownStrategy {
        /// Strategy received
        name: String,
    },
}

/// Values that can be turned into a `(strategy, selector)` pair
pub trait IntoLocator {
    fn into_locator(self) -> (By, String);
}

/// XPath when the selector starts with `/` or `(`, CSS otherwise
#[must_use]
pub fn derive_strategy(selector: &str) -> By {
    if selector.starts_with('/') || selector.starts_with('(') {
        By::XPath
    } else {
        By::CssSelector
    }
}

impl IntoLocator for &str {
    fn into_locator(self) -> (By, String) {
        (derive_strategy(self), self.to_string())
    }
}

impl IntoLocator for String {
    fn into_locator(self) -> (By, String) {
        (derive_strategy(&self), self)
    }
}

impl IntoLocator for (By, &str) {
    fn into_locator(self) -> (By, String) {
        (self.0, self.1.to_string())
    }
}

impl IntoLocator for (By, String) {
    fn into_locator(self) -> (By, String) {
        self
    }
}

/// A described element (or elements) on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    name: Option<String>,
    locator: Option<(By, String)>,
}

impl Target {
    /// Target with a name and no locator yet
    pub fn the(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            locator: None,
        }
    }

    /// Target with neither name nor locator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the name
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Drop the explicit name so the selector is used instead
    #[must_use]
    pub fn clear_name(mut self) -> Self {
        self.name = None;
        self
    }

    /// Set the locator
    #[must_use]
    pub fn located_by(mut self, locator: impl IntoLocator) -> Self {
        self.locator = Some(locator.into_locator());
        self
    }

    /// Alias for [`Target::located_by`]
    #[must_use]
    pub fn located(self, locator: impl IntoLocator) -> Self {
        self.located_by(locator)
    }

    /// Set the locator from JSON: a selector string or a
    /// `[strategy, selector]` pair
    pub fn try_located_by(self, locator: &Value) -> Result<Self, LocatorError> {
        match locator {
            Value::String(selector) => Ok(self.located_by(selector.as_str())),
            Value::Array(items) => {
                let [strategy, selector] = items.as_slice() else {
                    return Err(LocatorError::InvalidLength { len: items.len() });
                };
                let name = strategy.as_str().ok_or_else(|| LocatorError::InvalidType {
                    found: json_type(strategy).to_string(),
                })?;
                let by = By::parse(name).ok_or_else(|| LocatorError::UnknownStrategy {
                    name: name.to_string(),
                })?;
                let selector = selector.as_str().ok_or_else(|| LocatorError::InvalidType {
                    found: json_type(selector).to_string(),
                })?;
                Ok(self.located_by((by, selector)))
            }
            other => Err(LocatorError::InvalidType {
                found: json_type(other).to_string(),
            }),
        }
    }

    /// Explicit name, else the selector
    #[must_use]
    pub fn target_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or_else(|| self.locator.as_ref().map(|(_, s)| s.as_str()))
    }

    /// The locator, which must have been supplied
    pub fn get_locator(&self) -> ScreenplayResult<(By, &str)> {
        match &self.locator {
            Some((by, selector)) if !selector.is_empty() => Ok((*by, selector.as_str())),
            _ => Err(ScreenplayError::targeting(format!(
                "Locator was not supplied to the {self} target. Make sure to use either \
                 .located() or .located_by() to supply a locator."
            ))),
        }
    }

    fn lookup_failed(&self, err: impl fmt::Display) -> ScreenplayError {
        ScreenplayError::targeting(format!("{err} raised while trying to find {self}."))
    }

    /// First matching element in `browser`
    pub fn resolve_one(&self, browser: &Browser) -> ScreenplayResult<WebElement> {
        let (by, selector) = self.get_locator()?;
        browser
            .find_element(by, selector)
            .map_err(|e| self.lookup_failed(e))
    }

    /// Every matching element in `browser`, possibly none
    pub fn resolve_all(&self, browser: &Browser) -> ScreenplayResult<Vec<WebElement>> {
        let (by, selector) = self.get_locator()?;
        browser
            .find_elements(by, selector)
            .map_err(|e| self.lookup_failed(e))
    }

    /// First matching element in the actor's browser
    pub fn found_by(&self, actor: &Actor) -> ScreenplayResult<WebElement> {
        self.resolve_one(actor.ability_to::<BrowseTheWeb>()?.browser())
    }

    /// Every matching element in the actor's browser
    pub fn all_found_by(&self, actor: &Actor) -> ScreenplayResult<Vec<WebElement>> {
        self.resolve_all(actor.ability_to::<BrowseTheWeb>()?.browser())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target_name().unwrap_or("None"))
    }
}

impl TryFrom<&Target> for (By, String) {
    type Error = ScreenplayError;

    fn try_from(target: &Target) -> Result<Self, Self::Error> {
        let (by, selector) = target.get_locator()?;
        Ok((by, selector.to_string()))
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
