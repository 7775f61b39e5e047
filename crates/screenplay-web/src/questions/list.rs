//! Collect every element a target finds.

use crate::actor::{Actor, Answerable};
use crate::driver::WebElement;
use crate::pacing::beat;
use crate::result::ScreenplayResult;
use crate::target::Target;

/// Every element found by a target, possibly none
///
/// ```text
/// let results = List::of_all(SEARCH_RESULTS).answered_by(&actor)?;
/// ```
#[derive(Debug, Clone)]
pub struct List {
    target: Target,
}

impl List {
    pub fn of_the(target: Target) -> Self {
        Self { target }
    }

    pub fn of_all_the(target: Target) -> Self {
        Self::of_the(target)
    }

    pub fn of_all(target: Target) -> Self {
        Self::of_the(target)
    }

    pub fn of(target: Target) -> Self {
        Self::of_the(target)
    }
}

impl Answerable for List {
    type Answer = Vec<WebElement>;

    fn describe(&self) -> String {
        format!("The list of {}.", self.target)
    }

    fn answered_by(&self, actor: &Actor) -> ScreenplayResult<Vec<WebElement>> {
        beat(format!("{actor} lists off the {}.", self.target));
        self.target.all_found_by(actor)
    }
}
