//! Press the browser's forward button.

use super::delivery_error;
use crate::abilities::BrowseTheWeb;
use crate::actor::{Actor, Performable};
use crate::pacing::beat;
use crate::result::ScreenplayResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoForward;

impl GoForward {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Performable for GoForward {
    fn describe(&self) -> String {
        "Go forward.".to_string()
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} goes forward."));
        BrowseTheWeb::browser_of(actor)?
            .forward()
            .map_err(|e| delivery_error("go forward", &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::perry;
    use crate::actions::GoBack;

    #[test]
    fn test_back_then_forward() {
        let (actor, mock) = perry();
        mock.set_url("https://example.com/a");
        let browser = BrowseTheWeb::browser_of(&actor).unwrap().clone();
        browser.get("https://example.com/b").unwrap();
        actor.attempts_to(&[&GoBack, &GoForward::new()]).unwrap();
        assert_eq!(browser.current_url().unwrap(), "https://example.com/b");
    }
}
