//! Enter text into an input field, or press keys.

use super::delivery_error;
use crate::actor::{Actor, Performable};
use crate::driver::{ActionChain, WebDriverError};
use crate::keys::{describe_key, render_keys};
use crate::pacing::{aside, beat};
use crate::protocols::Chainable;
use crate::result::{ScreenplayError, ScreenplayResult};
use crate::target::Target;

/// Type text into an element, then optionally hit more keys
///
/// ```text
/// actor.attempts_to(&[&Enter::the_text("Hello world!").into_the(COMMENT_FIELD)])?;
/// actor.attempts_to(&[&Enter::the_password("hunter2").into(PASSWORD).then_hit(&[Keys::ENTER])])?;
/// ```
///
/// Key codes in the text are logged by name; secrets are logged as
/// `[CENSORED]`. The driver always receives the literal text.
#[derive(Debug, Clone)]
pub struct Enter {
    text: String,
    text_to_log: String,
    target: Option<Target>,
    following_keys: Vec<String>,
}

impl Enter {
    fn build(text: String, mask: bool) -> Self {
        let text_to_log = if mask {
            "[CENSORED]".to_string()
        } else {
            render_keys(&text)
        };
        Self {
            text,
            text_to_log,
            target: None,
            following_keys: Vec::new(),
        }
    }

    /// Text to type
    pub fn the_text(text: impl Into<String>) -> Self {
        Self::build(text.into(), false)
    }

    /// Alias for [`Enter::the_text`]
    pub fn the_keys(text: impl Into<String>) -> Self {
        Self::the_text(text)
    }

    /// Text to type, masked in every log line
    pub fn the_secret(text: impl Into<String>) -> Self {
        Self::build(text.into(), true)
    }

    /// Alias for [`Enter::the_secret`]
    pub fn the_password(text: impl Into<String>) -> Self {
        Self::the_secret(text)
    }

    /// Element to type into
    #[must_use]
    pub fn into_the(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn into(self, target: Target) -> Self {
        self.into_the(target)
    }

    #[must_use]
    pub fn on(self, target: Target) -> Self {
        self.into_the(target)
    }

    #[must_use]
    pub fn into_the_first_of_the(self, target: Target) -> Self {
        self.into_the(target)
    }

    /// Keys to hit after the text, usually [`Keys`](crate::keys::Keys) constants
    #[must_use]
    pub fn then_hit(mut self, keys: &[&str]) -> Self {
        self.following_keys.extend(keys.iter().map(|k| (*k).to_string()));
        self
    }

    /// Alias for [`Enter::then_hit`]
    #[must_use]
    pub fn then_press(self, keys: &[&str]) -> Self {
        self.then_hit(keys)
    }

    /// What log lines show in place of the text
    #[must_use]
    pub fn text_to_log(&self) -> &str {
        &self.text_to_log
    }

    fn target_name(&self) -> String {
        super::name_of(self.target.as_ref())
    }
}

impl Performable for Enter {
    fn describe(&self) -> String {
        format!("Enter \"{}\" into the {}.", self.text_to_log, self.target_name())
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!(
            "{actor} enters \"{}\" into the {}.",
            self.text_to_log,
            self.target_name()
        ));
        let target = self.target.as_ref().ok_or_else(|| {
            ScreenplayError::unable_to_act(
                "Target was not supplied for Enter. Provide a Target by using either \
                 the .into(), .into_the(), or .on() method.",
            )
        })?;
        let element = target.found_by(actor)?;
        let failed = |e: WebDriverError| delivery_error(format!("enter text into {target}"), &e);

        element.send_keys(&self.text).map_err(failed)?;
        for key in &self.following_keys {
            aside(format!("then hits the {} key", describe_key(key)));
            element.send_keys(key).map_err(failed)?;
        }
        Ok(())
    }

    fn as_chainable(&self) -> Option<&dyn Chainable> {
        Some(self)
    }
}

impl Chainable for Enter {
    fn add_to_chain(&self, actor: &Actor, chain: &mut ActionChain) -> ScreenplayResult<()> {
        beat(format!(
            "  Enter \"{}\" into the {}!",
            self.text_to_log,
            self.target_name()
        ));
        let keys = std::iter::once(self.text.as_str())
            .chain(self.following_keys.iter().map(String::as_str));
        match &self.target {
            Some(target) => {
                let element = target.found_by(actor)?;
                for text in keys {
                    chain.send_keys_to_element(&element, text);
                }
            }
            None => {
                for text in keys {
                    chain.send_keys(text);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{element, perry};
    use crate::driver::{ChainStep, MockElement};
    use crate::keys::Keys;

    mod logging_tests {
        use super::*;

        #[test]
        fn test_describe() {
            let target = Target::the("comment field").located_by("#comment");
            let enter = Enter::the_text("Hello world!").into_the(target);
            assert_eq!(enter.describe(), "Enter \"Hello world!\" into the comment field.");
        }

        #[test]
        fn test_secret_is_censored() {
            let enter = Enter::the_password("hunter2");
            assert_eq!(enter.text_to_log(), "[CENSORED]");
            assert_eq!(enter.describe(), "Enter \"[CENSORED]\" into the None.");
        }

        #[test]
        fn test_keys_are_named_in_logs() {
            let enter = Enter::the_keys(format!("line one{}", Keys::ENTER));
            assert_eq!(enter.text_to_log(), "line oneENTER");
        }
    }

    mod perform_tests {
        use super::*;

        #[test]
        fn test_sends_literal_text_then_keys() {
            let (actor, mock) = perry();
            let (target, id) = element(&mock, "password_field", MockElement::new("input"));
            let enter = Enter::the_secret("hunter2")
                .into(target)
                .then_press(&[Keys::TAB, Keys::ENTER]);
            actor.attempts_to(&[&enter]).unwrap();
            let calls = mock.calls();
            assert!(calls.contains(&format!("element_send_keys:{id}=hunter2")));
            assert!(calls.contains(&format!("element_send_keys:{id}={}", Keys::TAB)));
            assert!(calls.contains(&format!("element_send_keys:{id}={}", Keys::ENTER)));
        }

        #[test]
        fn test_without_target_is_unable_to_act() {
            let (actor, _) = perry();
            let err = actor.attempts_to(&[&Enter::the_text("hi")]).unwrap_err();
            assert!(matches!(err, ScreenplayError::UnableToAct { .. }));
            assert!(err.to_string().contains(".into_the()"));
        }

        #[test]
        fn test_driver_failure() {
            let (actor, mock) = perry();
            let (target, _) = element(&mock, "name_input", MockElement::new("input"));
            mock.fail_on(
                "element_send_keys",
                WebDriverError::from_w3c("element not interactable", "disabled"),
            );
            let err = actor
                .attempts_to(&[&Enter::the_text("Perry").on(target)])
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                "Encountered an issue while attempting to enter text into name input: \
                 ElementNotInteractableException"
            );
        }
    }

    mod chain_tests {
        use super::*;
        use std::time::Duration;

        #[test]
        fn test_without_target_types_into_focused_element() {
            let (actor, _) = perry();
            let browser = crate::abilities::BrowseTheWeb::browser_of(&actor).unwrap();
            let mut chain = browser.action_chain(Duration::ZERO);
            Enter::the_text("abc")
                .then_hit(&[Keys::ENTER])
                .add_to_chain(&actor, &mut chain)
                .unwrap();
            assert_eq!(chain.steps().len(), 2);
        }

        #[test]
        fn test_with_target_types_into_element() {
            let (actor, mock) = perry();
            let (target, id) = element(&mock, "search", MockElement::new("input"));
            let browser = crate::abilities::BrowseTheWeb::browser_of(&actor).unwrap();
            let mut chain = browser.action_chain(Duration::ZERO);
            Enter::the_text("rust")
                .into_the_first_of_the(target)
                .add_to_chain(&actor, &mut chain)
                .unwrap();
            assert_eq!(
                chain.steps(),
                &[ChainStep::SendKeys {
                    element: Some(id),
                    text: "rust".to_string()
                }]
            );
        }
    }
}
