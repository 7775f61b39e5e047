//! Look up an element without failing when it is missing.

use crate::actor::{Actor, Answerable};
use crate::driver::WebElement;
use crate::pacing::beat;
use crate::protocols::ErrorKeeper;
use crate::result::{ScreenplayError, ScreenplayResult};
use crate::target::Target;
use std::sync::{Mutex, PoisonError};

/// The element found by a target, or `None`
///
/// A targeting failure is not an error here: the answer is `None` and the
/// failure is kept for [`ErrorKeeper::caught_exception`]. This is what lets
/// resolutions such as `IsInvisible` and `IsPresent` judge a missing
/// element.
///
/// ```text
/// actor.should(&[&See::the(Element::new(WELCOME_BANNER), IsVisible)])?;
/// ```
#[derive(Debug)]
pub struct Element {
    target: Target,
    caught: Mutex<Option<ScreenplayError>>,
}

impl Element {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            caught: Mutex::new(None),
        }
    }

    fn keep(&self, error: Option<ScreenplayError>) {
        *self.caught.lock().unwrap_or_else(PoisonError::into_inner) = error;
    }
}

impl Answerable for Element {
    type Answer = Option<WebElement>;

    fn describe(&self) -> String {
        format!("The {}.", self.target)
    }

    fn answered_by(&self, actor: &Actor) -> ScreenplayResult<Option<WebElement>> {
        beat(format!("{actor} inspects the {}.", self.target));
        match self.target.found_by(actor) {
            Ok(element) => {
                self.keep(None);
                Ok(Some(element))
            }
            Err(err @ ScreenplayError::Targeting { .. }) => {
                self.keep(Some(err));
                Ok(None)
            }
            Err(other) => Err(other),
        }
    }
}

impl ErrorKeeper for Element {
    fn caught_exception(&self) -> Option<ScreenplayError> {
        self.caught
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{element, perry};
    use crate::driver::MockElement;

    #[test]
    fn test_describe() {
        let banner = Target::the("welcome banner").located_by("#welcome");
        assert_eq!(Element::new(banner).describe(), "The welcome banner.");
    }

    #[test]
    fn test_found_element() {
        let (actor, mock) = perry();
        let (target, id) = element(&mock, "welcome_banner", MockElement::new("h1"));
        let question = Element::new(target);
        let found = question.answered_by(&actor).unwrap().unwrap();
        assert_eq!(found.id(), &id);
        assert!(question.caught_exception().is_none());
    }

    #[test]
    fn test_missing_element_is_kept_not_raised() {
        let (actor, _) = perry();
        let question = Element::new(Target::the("ghost").located_by("#ghost"));
        assert!(question.answered_by(&actor).unwrap().is_none());
        let caught = question.caught_exception().unwrap();
        assert!(matches!(caught, ScreenplayError::Targeting { .. }));
        assert!(caught.to_string().contains("ghost"));
    }

    #[test]
    fn test_missing_locator_is_kept_too() {
        let (actor, _) = perry();
        let question = Element::new(Target::the("nameless"));
        assert!(question.answered_by(&actor).unwrap().is_none());
        assert!(question.caught_exception().is_some());
    }

    #[test]
    fn test_other_errors_propagate() {
        let actor = Actor::named("Cathy");
        let question = Element::new(Target::the("banner").located_by("#banner"));
        let err = question.answered_by(&actor).unwrap_err();
        assert!(matches!(err, ScreenplayError::MissingAbility { .. }));
    }
}
