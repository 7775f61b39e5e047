//! Read the browser's current URL.

use crate::abilities::BrowseTheWeb;
use crate::actions::delivery_error;
use crate::actor::{Actor, Answerable};
use crate::pacing::beat;
use crate::result::ScreenplayResult;

/// The URL in the address bar
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserUrl;

impl Answerable for BrowserUrl {
    type Answer = String;

    fn describe(&self) -> String {
        "The browser URL.".to_string()
    }

    fn answered_by(&self, actor: &Actor) -> ScreenplayResult<String> {
        beat(format!("{actor} reads the URL from their browser."));
        BrowseTheWeb::browser_of(actor)?
            .current_url()
            .map_err(|e| delivery_error("read the browser URL", &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::perry;
    use crate::actions::Open;
    use crate::result::ScreenplayError;

    #[test]
    fn test_reads_the_url_after_navigation() {
        let (actor, _) = perry();
        actor
            .attempts_to(&[&Open::their_browser_on_with("https://example.com/login", |_| None)])
            .unwrap();
        assert_eq!(
            BrowserUrl.answered_by(&actor).unwrap(),
            "https://example.com/login"
        );
    }

    #[test]
    fn test_requires_a_browser() {
        let actor = Actor::named("Cathy");
        let err = BrowserUrl.answered_by(&actor).unwrap_err();
        assert!(matches!(err, ScreenplayError::MissingAbility { .. }));
    }
}
