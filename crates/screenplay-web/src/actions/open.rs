//! Open the browser on a URL.

use super::delivery_error;
use crate::abilities::BrowseTheWeb;
use crate::actor::{Actor, Performable};
use crate::pacing::beat;
use crate::result::ScreenplayResult;

/// Environment variable prefixed to every location
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Visit a URL
///
/// When `BASE_URL` is set, the location is appended to it, so with
/// `BASE_URL=http://localhost` the location `/home` visits
/// `http://localhost/home`.
///
/// ```text
/// actor.attempts_to(&[&Open::their_browser_on("https://example.com")])?;
/// actor.attempts_to(&[&Open::browser_on("/login")])?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Open {
    url: String,
}

impl Open {
    /// Location to visit, prefixed with `BASE_URL` from the environment
    pub fn their_browser_on(location: impl Into<String>) -> Self {
        Self::their_browser_on_with(location, |key| std::env::var(key).ok())
    }

    /// Alias for [`Open::their_browser_on`]
    pub fn browser_on(location: impl Into<String>) -> Self {
        Self::their_browser_on(location)
    }

    /// Location to visit, reading `BASE_URL` through `lookup`
    pub fn their_browser_on_with<F>(location: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = lookup(BASE_URL_ENV).unwrap_or_default();
        Self {
            url: format!("{base}{}", location.into()),
        }
    }

    /// The full URL that will be visited
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Performable for Open {
    fn describe(&self) -> String {
        format!("Visit {}.", self.url)
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} visits {}", self.url));
        BrowseTheWeb::browser_of(actor)?
            .get(&self.url)
            .map_err(|e| delivery_error(format!("visit {}", self.url), &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::perry;

    #[test]
    fn test_base_url_prefix() {
        let open = Open::their_browser_on_with("/login", |key| {
            (key == BASE_URL_ENV).then(|| "http://localhost:8000".to_string())
        });
        assert_eq!(open.url(), "http://localhost:8000/login");
        assert_eq!(open.describe(), "Visit http://localhost:8000/login.");
    }

    #[test]
    fn test_without_base_url() {
        let open = Open::their_browser_on_with("https://example.com", |_| None);
        assert_eq!(open.url(), "https://example.com");
    }

    #[test]
    fn test_visits() {
        let (actor, mock) = perry();
        let open = Open::their_browser_on_with("https://example.com/home", |_| None);
        actor.attempts_to(&[&open]).unwrap();
        assert!(mock.calls().contains(&"get:https://example.com/home".to_string()));
    }
}
