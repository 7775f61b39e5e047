//! Respond to a JavaScript prompt.

use super::delivery_error;
use crate::abilities::BrowseTheWeb;
use crate::actor::{Actor, Performable};
use crate::driver::WebDriverError;
use crate::pacing::{aside, beat};
use crate::result::ScreenplayResult;

/// Type into the open prompt, then accept it
///
/// ```text
/// actor.attempts_to(&[&RespondToThePrompt::with_("Roger, Roger. What's your vector, Victor?")])?;
/// ```
#[derive(Debug, Clone)]
pub struct RespondToThePrompt {
    text: String,
}

impl RespondToThePrompt {
    pub fn with_(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Performable for RespondToThePrompt {
    fn describe(&self) -> String {
        format!("Respond to the prompt with \"{}\".", self.text)
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} responds to the prompt with \"{}\".", self.text));
        let browser = BrowseTheWeb::browser_of(actor)?;
        let failed = |e: WebDriverError| delivery_error("respond to the prompt", &e);
        let text = browser.alert_text().map_err(failed)?;
        aside(format!("... the alert says {text}"));
        browser.send_alert_text(&self.text).map_err(failed)?;
        browser.accept_alert().map_err(failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::perry;
    use crate::driver::AlertOutcome;

    #[test]
    fn test_types_then_accepts() {
        let (actor, mock) = perry();
        mock.set_alert("What's your vector, Victor?");
        let respond = RespondToThePrompt::with_("Clearance, Clarence");
        assert_eq!(
            respond.describe(),
            "Respond to the prompt with \"Clearance, Clarence\"."
        );
        actor.attempts_to(&[&respond]).unwrap();
        assert_eq!(mock.prompt_input().as_deref(), Some("Clearance, Clarence"));
        assert_eq!(mock.alert_outcome(), Some(AlertOutcome::Accepted));
    }

    #[test]
    fn test_no_prompt() {
        let (actor, mock) = perry();
        assert!(actor.attempts_to(&[&RespondToThePrompt::with_("x")]).is_err());
        assert!(!mock.was_called("send_alert_text"));
    }
}
