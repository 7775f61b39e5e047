//! Move the pointer to an element, by an offset, or both.

use super::perform_alone;
use crate::actor::{Actor, Performable};
use crate::driver::ActionChain;
use crate::pacing::beat;
use crate::protocols::Chainable;
use crate::result::{ScreenplayError, ScreenplayResult};
use crate::target::Target;

/// Move the pointer
///
/// Offsets are in pixels: negative `x` moves left, negative `y` moves up.
/// With a target the offset is measured from the element's center.
///
/// ```text
/// actor.attempts_to(&[&MoveMouse::to_the(HAMBURGER_MENU)])?;
/// actor.attempts_to(&[&MoveMouse::by_offset(500, -200)])?;
/// actor.attempts_to(&[&MoveMouse::to_the(HAMBURGER_MENU).with_offset(500, -200)])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct MoveMouse {
    target: Option<Target>,
    offset: Option<(i64, i64)>,
    description: String,
}

impl MoveMouse {
    pub fn to_the(target: Target) -> Self {
        Self {
            description: format!("to the {target}"),
            target: Some(target),
            offset: None,
        }
    }

    pub fn on_the(target: Target) -> Self {
        Self::to_the(target)
    }

    pub fn over_the(target: Target) -> Self {
        Self::to_the(target)
    }

    pub fn over_the_first_of_the(target: Target) -> Self {
        Self::to_the(target)
    }

    pub fn to_the_first_of_the(target: Target) -> Self {
        Self::to_the(target)
    }

    #[must_use]
    pub fn by_offset(x: i64, y: i64) -> Self {
        Self {
            target: None,
            offset: Some((x, y)),
            description: format!("by an offset of ({x}, {y})"),
        }
    }

    /// Offset from the target's center
    #[must_use]
    pub fn with_offset(mut self, x: i64, y: i64) -> Self {
        self.offset = Some((x, y));
        self.description.push_str(&format!(" offset by ({x}, {y})"));
        self
    }
}

impl Performable for MoveMouse {
    fn describe(&self) -> String {
        format!("Move the mouse {}.", self.description)
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} moves the mouse {}.", self.description));
        perform_alone(actor, self, format!("move the mouse {}", self.description))
    }

    fn as_chainable(&self) -> Option<&dyn Chainable> {
        Some(self)
    }
}

impl Chainable for MoveMouse {
    fn add_to_chain(&self, actor: &Actor, chain: &mut ActionChain) -> ScreenplayResult<()> {
        beat(format!("Move the mouse {}!", self.description));
        match (&self.target, self.offset) {
            (Some(target), Some((x, y))) => {
                chain.move_to_element_with_offset(&target.found_by(actor)?, x, y);
            }
            (Some(target), None) => {
                chain.move_to_element(&target.found_by(actor)?);
            }
            (None, Some((x, y))) => {
                chain.move_by_offset(x, y);
            }
            (None, None) => {
                return Err(ScreenplayError::unable_to_act(
                    "MoveMouse was given neither coordinates nor a Target. Supply one of \
                     these using MoveMouse.by_offset or MoveMouse.to_the.",
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

    #[test]
    fn test_descriptions() {
        let menu = Target::the("hamburger menu").located_by("#menu");
        assert_eq!(
            MoveMouse::to_the(menu.clone()).describe(),
            "Move the mouse to the hamburger menu."
        );
        assert_eq!(
            MoveMouse::by_offset(500, -200).describe(),
            "Move the mouse by an offset of (500, -200)."
        );
        assert_eq!(
            MoveMouse::over_the(menu).with_offset(5, 5).describe(),
            "Move the mouse to the hamburger menu offset by (5, 5)."
        );
    }

    #[test]
    fn test_steps_for_each_shape() {
        let (actor, mock) = perry();
        let (target, id) = element(&mock, "hamburger_menu", MockElement::new("nav"));
        actor
            .attempts_to(&[
                &MoveMouse::to_the(target.clone()),
                &MoveMouse::by_offset(-3, 4),
                &MoveMouse::on_the(target).with_offset(1, 2),
            ])
            .unwrap();
        let steps: Vec<ChainStep> = mock
            .performed_chains()
            .into_iter()
            .flat_map(|(steps, _)| steps)
            .collect();
        assert_eq!(
            steps,
            vec![
                ChainStep::MoveTo(id.clone()),
                ChainStep::MoveBy { x: -3, y: 4 },
                ChainStep::MoveToWithOffset { element: id, x: 1, y: 2 },
            ]
        );
    }

    #[test]
    fn test_neither_target_nor_offset() {
        let (actor, _) = perry();
        let err = actor.attempts_to(&[&MoveMouse::default()]).unwrap_err();
        assert!(matches!(err, ScreenplayError::UnableToAct { .. }));
        assert!(err.to_string().starts_with("MoveMouse was given neither"));
    }
}
