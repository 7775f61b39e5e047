//! Hold down a key or the left mouse button, optionally on an element.

use super::perform_alone;
use crate::actor::{Actor, Performable};
use crate::driver::ActionChain;
use crate::keys::{command_or_control, describe_key};
use crate::pacing::beat;
use crate::protocols::Chainable;
use crate::result::{ScreenplayError, ScreenplayResult};
use crate::target::Target;

/// What a [`HoldDown`] or [`Release`](super::Release) acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Button {
    Key(String),
    LeftMouse,
}

impl Button {
    pub(super) fn description(what: Option<&Self>) -> String {
        match what {
            Some(Self::Key(key)) => describe_key(key),
            Some(Self::LeftMouse) => "LEFT MOUSE BUTTON".to_string(),
            None => "None".to_string(),
        }
    }
}

/// Press and keep holding a key or the left mouse button
///
/// Meant for a [`Chain`](super::Chain) with a matching
/// [`Release`](super::Release) later on:
///
/// ```text
/// actor.attempts_to(&[&Chain::of()
///     .then(HoldDown::left_mouse_button().on_the(DRAGGABLE_BOX))
///     .then(MoveMouse::to_the(DROP_ZONE))
///     .then(Release::left_mouse_button())])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct HoldDown {
    what: Option<Button>,
    target: Option<Target>,
}

impl HoldDown {
    /// Hold a key, usually a [`Keys`](crate::keys::Keys) constant
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            what: Some(Button::Key(key.into())),
            target: None,
        }
    }

    /// COMMAND on macOS, CONTROL elsewhere
    #[must_use]
    pub fn command_or_control_key() -> Self {
        Self::new(command_or_control())
    }

    #[must_use]
    pub fn left_mouse_button() -> Self {
        Self {
            what: Some(Button::LeftMouse),
            target: None,
        }
    }

    /// Element to press the mouse button on
    #[must_use]
    pub fn on_the(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn on(self, target: Target) -> Self {
        self.on_the(target)
    }

    fn description(&self) -> String {
        Button::description(self.what.as_ref())
    }
}

impl Performable for HoldDown {
    fn describe(&self) -> String {
        format!("Hold down {}.", self.description())
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} holds down {}.", self.description()));
        perform_alone(actor, self, format!("hold down {}", self.description()))
    }

    fn as_chainable(&self) -> Option<&dyn Chainable> {
        Some(self)
    }
}

impl Chainable for HoldDown {
    fn add_to_chain(&self, actor: &Actor, chain: &mut ActionChain) -> ScreenplayResult<()> {
        beat(format!("  Hold down {}!", self.description()));
        match &self.what {
            Some(Button::LeftMouse) => {
                let element = self.target.as_ref().map(|t| t.found_by(actor)).transpose()?;
                chain.click_and_hold(element.as_ref());
            }
            Some(Button::Key(key)) => {
                chain.key_down(key);
            }
            None => {
                return Err(ScreenplayError::unable_to_act(
                    "HoldDown must be told what to hold down.",
                ))
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
    use std::time::Duration;

    #[test]
    fn test_describe() {
        assert_eq!(HoldDown::new(Keys::SHIFT).describe(), "Hold down SHIFT.");
        assert_eq!(
            HoldDown::left_mouse_button().describe(),
            "Hold down LEFT MOUSE BUTTON."
        );
    }

    #[test]
    fn test_command_or_control_matches_host() {
        let expected = if cfg!(target_os = "macos") { "META" } else { "CONTROL" };
        assert_eq!(
            HoldDown::command_or_control_key().describe(),
            format!("Hold down {expected}.")
        );
    }

    #[test]
    fn test_key_down_step() {
        let (actor, _) = perry();
        let browser = crate::abilities::BrowseTheWeb::browser_of(&actor).unwrap();
        let mut chain = browser.action_chain(Duration::ZERO);
        HoldDown::new(Keys::ALT).add_to_chain(&actor, &mut chain).unwrap();
        assert_eq!(chain.steps(), &[ChainStep::KeyDown(Keys::ALT.to_string())]);
    }

    #[test]
    fn test_mouse_button_on_element() {
        let (actor, mock) = perry();
        let (target, id) = element(&mock, "draggable_box", MockElement::new("div"));
        actor
            .attempts_to(&[&HoldDown::left_mouse_button().on(target)])
            .unwrap();
        assert_eq!(
            mock.performed_chains()[0].0,
            vec![ChainStep::ClickAndHold(Some(id))]
        );
    }

    #[test]
    fn test_nothing_to_hold() {
        let (actor, mock) = perry();
        let err = actor.attempts_to(&[&HoldDown::default()]).unwrap_err();
        assert_eq!(err.to_string(), "HoldDown must be told what to hold down.");
        assert!(mock.performed_chains().is_empty());
    }
}
