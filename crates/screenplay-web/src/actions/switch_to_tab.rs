//! Switch to another tab or window.

use super::delivery_error;
use crate::abilities::BrowseTheWeb;
use crate::actor::{Actor, Performable};
use crate::driver::WebDriverError;
use crate::pacing::beat;
use crate::result::ScreenplayResult;

/// Switch to the `n`th tab, counting from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchToTab {
    number: usize,
}

impl SwitchToTab {
    #[must_use]
    pub const fn new(number: usize) -> Self {
        Self { number }
    }
}

impl Performable for SwitchToTab {
    fn describe(&self) -> String {
        format!("Switch to tab #{}.", self.number)
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} switches to tab #{}.", self.number));
        let browser = BrowseTheWeb::browser_of(actor)?;
        let failed =
            |e: WebDriverError| delivery_error(format!("switch to tab #{}", self.number), &e);
        let handles = browser.window_handles().map_err(failed)?;
        let handle = self
            .number
            .checked_sub(1)
            .and_then(|index| handles.get(index))
            .ok_or_else(|| {
                failed(WebDriverError::NoSuchWindow {
                    message: format!("there are only {} tabs open", handles.len()),
                })
            })?;
        browser.switch_to_window(handle).map_err(failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::perry;
    use crate::result::ScreenplayError;

    #[test]
    fn test_one_based_index() {
        let (actor, mock) = perry();
        mock.set_window_handles(&["main", "help", "checkout"]);
        assert_eq!(SwitchToTab::new(3).describe(), "Switch to tab #3.");
        actor.attempts_to(&[&SwitchToTab::new(3)]).unwrap();
        assert_eq!(mock.current_window().as_deref(), Some("checkout"));
        actor.attempts_to(&[&SwitchToTab::new(1)]).unwrap();
        assert_eq!(mock.current_window().as_deref(), Some("main"));
    }

    #[test]
    fn test_missing_tab() {
        let (actor, _) = perry();
        for number in [0, 2] {
            let err = actor.attempts_to(&[&SwitchToTab::new(number)]).unwrap_err();
            assert!(matches!(err, ScreenplayError::Delivery { .. }));
            assert!(err.to_string().ends_with("NoSuchWindowException"));
        }
    }
}
