//! Accept a JavaScript alert.

use super::delivery_error;
use crate::abilities::BrowseTheWeb;
use crate::actor::{Actor, Performable};
use crate::driver::WebDriverError;
use crate::pacing::{aside, beat};
use crate::result::ScreenplayResult;

/// Accept the open alert
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAlert;

impl AcceptAlert {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Performable for AcceptAlert {
    fn describe(&self) -> String {
        "Accept the alert.".to_string()
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} accepts the alert."));
        let browser = BrowseTheWeb::browser_of(actor)?;
        let failed = |e: WebDriverError| delivery_error("accept the alert", &e);
        let text = browser.alert_text().map_err(failed)?;
        aside(format!("... the alert says \"{text}\""));
        browser.accept_alert().map_err(failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::perry;
    use crate::driver::AlertOutcome;
    use crate::result::ScreenplayError;

    #[test]
    fn test_accepts() {
        let (actor, mock) = perry();
        mock.set_alert("Are you sure?");
        assert_eq!(AcceptAlert::new().describe(), "Accept the alert.");
        actor.attempts_to(&[&AcceptAlert::new()]).unwrap();
        assert_eq!(mock.alert_outcome(), Some(AlertOutcome::Accepted));
        assert!(!mock.alert_is_open());
    }

    #[test]
    fn test_no_alert() {
        let (actor, _) = perry();
        let err = actor.attempts_to(&[&AcceptAlert]).unwrap_err();
        assert!(matches!(err, ScreenplayError::Delivery { .. }));
        assert!(err.to_string().ends_with("accept the alert: NoAlertPresentException"));
    }
}
