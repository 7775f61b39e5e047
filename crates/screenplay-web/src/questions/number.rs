//! Count the elements a target finds.

use crate::actor::{Actor, Answerable};
use crate::pacing::beat;
use crate::result::ScreenplayResult;
use crate::target::Target;

/// How many elements a target finds
///
/// ```text
/// actor.should(&[&See::the(Number::of(SEARCH_RESULTS), IsEqualTo::the(5))])?;
/// ```
#[derive(Debug, Clone)]
pub struct Number {
    target: Target,
}

impl Number {
    pub fn of(target: Target) -> Self {
        Self { target }
    }
}

impl Answerable for Number {
    type Answer = usize;

    fn describe(&self) -> String {
        format!("The number of {}.", self.target)
    }

    fn answered_by(&self, actor: &Actor) -> ScreenplayResult<usize> {
        beat(format!("{actor} counts the number of {}.", self.target));
        Ok(self.target.all_found_by(actor)?.len())
    }
}
