//! Release a held key or the left mouse button.

use super::hold_down::Button;
use super::perform_alone;
use crate::actor::{Actor, Performable};
use crate::driver::ActionChain;
use crate::keys::command_or_control;
use crate::pacing::beat;
use crate::protocols::Chainable;
use crate::result::{ScreenplayError, ScreenplayResult};

/// Let go of whatever an earlier [`HoldDown`](super::HoldDown) pressed
#[derive(Debug, Clone, Default)]
pub struct Release {
    what: Option<Button>,
}

impl Release {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            what: Some(Button::Key(key.into())),
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
        }
    }

    fn description(&self) -> String {
        Button::description(self.what.as_ref())
    }
}

impl Performable for Release {
    fn describe(&self) -> String {
        format!("Release {}.", self.description())
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} releases {}.", self.description()));
        perform_alone(actor, self, format!("release {}", self.description()))
    }

    fn as_chainable(&self) -> Option<&dyn Chainable> {
        Some(self)
    }
}

impl Chainable for Release {
    fn add_to_chain(&self, _actor: &Actor, chain: &mut ActionChain) -> ScreenplayResult<()> {
        beat(format!("Release {}!", self.description()));
        match &self.what {
            Some(Button::LeftMouse) => {
                chain.release(None);
            }
            Some(Button::Key(key)) => {
                chain.key_up(key);
            }
            None => {
                return Err(ScreenplayError::unable_to_act(
                    "Release must be told what to release.",
                ))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::perry;
    use crate::driver::ChainStep;
    use crate::keys::Keys;

    #[test]
    fn test_describe() {
        assert_eq!(Release::new(Keys::SHIFT).describe(), "Release SHIFT.");
        assert_eq!(
            Release::left_mouse_button().describe(),
            "Release LEFT MOUSE BUTTON."
        );
    }

    #[test]
    fn test_steps() {
        let (actor, mock) = perry();
        actor
            .attempts_to(&[&Release::left_mouse_button(), &Release::new(Keys::SHIFT)])
            .unwrap();
        let performed = mock.performed_chains();
        assert_eq!(performed[0].0, vec![ChainStep::Release(None)]);
        assert_eq!(performed[1].0, vec![ChainStep::KeyUp(Keys::SHIFT.to_string())]);
    }

    #[test]
    fn test_nothing_to_release() {
        let (actor, _) = perry();
        let err = actor.attempts_to(&[&Release::default()]).unwrap_err();
        assert!(matches!(err, ScreenplayError::UnableToAct { .. }));
        assert_eq!(err.to_string(), "Release must be told what to release.");
    }
}
