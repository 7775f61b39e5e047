//! Read the title of the current page.

use crate::abilities::BrowseTheWeb;
use crate::actions::delivery_error;
use crate::actor::{Actor, Answerable};
use crate::pacing::beat;
use crate::result::ScreenplayResult;

/// The `<title>` of the current page
///
/// ```text
/// actor.should(&[&See::the(BrowserTitle, ReadsExactly::the("Welcome!"))])?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTitle;

impl Answerable for BrowserTitle {
    type Answer = String;

    fn describe(&self) -> String {
        "The current page's title.".to_string()
    }

    fn answered_by(&self, actor: &Actor) -> ScreenplayResult<String> {
        beat(format!("{actor} reads the title of the page from their browser."));
        BrowseTheWeb::browser_of(actor)?
            .title()
            .map_err(|e| delivery_error("read the page title", &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::perry;

    #[test]
    fn test_reads_the_title() {
        let (actor, mock) = perry();
        mock.set_title("Welcome!");
        assert_eq!(BrowserTitle.describe(), "The current page's title.");
        assert_eq!(BrowserTitle.answered_by(&actor).unwrap(), "Welcome!");
    }
}
