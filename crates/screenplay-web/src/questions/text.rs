//! Read the rendered text of one element or many.

use super::{Many, One};
use crate::actions::delivery_error;
use crate::actor::{Actor, Answerable};
use crate::pacing::beat;
use crate::result::ScreenplayResult;
use crate::target::Target;
use std::marker::PhantomData;

/// Visible text
///
/// ```text
/// actor.should(&[&See::the(Text::of_the(WELCOME_BANNER), ReadsExactly::the("Welcome!"))])?;
/// let names = Text::of_all(SEARCH_RESULTS).answered_by(&actor)?;
/// ```
#[derive(Debug, Clone)]
pub struct Text<M = One> {
    target: Target,
    _multiplicity: PhantomData<M>,
}

impl Text<One> {
    /// Text of the first element found by `target`
    pub fn of_the(target: Target) -> Self {
        Self {
            target,
            _multiplicity: PhantomData,
        }
    }

    pub fn of(target: Target) -> Self {
        Self::of_the(target)
    }

    pub fn of_the_first_of_the(target: Target) -> Self {
        Self::of_the(target)
    }

    /// Text of every element found by `target`
    pub fn of_all(target: Target) -> Text<Many> {
        Text {
            target,
            _multiplicity: PhantomData,
        }
    }
}

impl<M> Text<M> {
    fn announce(&self, actor: &Actor) {
        beat(format!("{actor} reads the text from the {}.", self.target));
    }
}

impl Answerable for Text<One> {
    type Answer = String;

    fn describe(&self) -> String {
        format!("The text from the {}.", self.target)
    }

    fn answered_by(&self, actor: &Actor) -> ScreenplayResult<String> {
        self.announce(actor);
        self.target
            .found_by(actor)?
            .text()
            .map_err(|e| delivery_error(format!("read the text of {}", self.target), &e))
    }
}

impl Answerable for Text<Many> {
    type Answer = Vec<String>;

    fn describe(&self) -> String {
        format!("The text from the {}.", self.target)
    }

    fn answered_by(&self, actor: &Actor) -> ScreenplayResult<Vec<String>> {
        self.announce(actor);
        self.target
            .all_found_by(actor)?
            .iter()
            .map(|element| {
                element
                    .text()
                    .map_err(|e| delivery_error(format!("read the text of {}", self.target), &e))
            })
            .collect()
    }
}
