//! Clear the text from an input.

use super::delivery_error;
use crate::actor::{Actor, Performable};
use crate::pacing::beat;
use crate::result::ScreenplayResult;
use crate::target::Target;

/// Clear the text from an input field
///
/// ```text
/// actor.attempts_to(&[&Clear::the_text_from_the(NAME_INPUT)])?;
/// ```
#[derive(Debug, Clone)]
pub struct Clear {
    target: Target,
}

impl Clear {
    pub fn the_text_from_the(target: Target) -> Self {
        Self { target }
    }

    pub fn the_text_from(target: Target) -> Self {
        Self::the_text_from_the(target)
    }

    pub fn the_text_from_the_first_of_the(target: Target) -> Self {
        Self::the_text_from_the(target)
    }
}

impl Performable for Clear {
    fn describe(&self) -> String {
        format!("Clear the text from the {}.", self.target)
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} clears text from the {}.", self.target));
        let element = self.target.found_by(actor)?;
        element
            .clear()
            .map_err(|e| delivery_error(format!("clear {}", self.target), &e))
    }
}
