//! Read the selected option or options of a dropdown.

use super::{Many, One};
use crate::actions::delivery_error;
use crate::actor::{Actor, Answerable};
use crate::driver::{DriverResult, SelectElement};
use crate::pacing::beat;
use crate::result::ScreenplayResult;
use crate::target::Target;
use std::marker::PhantomData;

/// Text of the selected option(s) of a `<select>`
///
/// ```text
/// actor.should(&[&See::the(
///     Selected::option_from_the(MONTH_DROPDOWN),
///     ReadsExactly::the("January"),
/// )])?;
/// let toppings = Selected::options_from_the(TOPPINGS).answered_by(&actor)?;
/// ```
#[derive(Debug, Clone)]
pub struct Selected<M = One> {
    target: Target,
    _multiplicity: PhantomData<M>,
}

impl Selected<One> {
    /// The first selected option of a single select
    pub fn option_from_the(target: Target) -> Self {
        Self {
            target,
            _multiplicity: PhantomData,
        }
    }

    pub fn option_from(target: Target) -> Self {
        Self::option_from_the(target)
    }

    /// Every selected option of a multi-select
    pub fn options_from_the(target: Target) -> Selected<Many> {
        Selected {
            target,
            _multiplicity: PhantomData,
        }
    }

    pub fn options_from(target: Target) -> Selected<Many> {
        Self::options_from_the(target)
    }
}

impl<M> Selected<M> {
    fn describe_selected(&self) -> String {
        format!("The selected option(s) from the {}.", self.target)
    }

    fn read<T>(
        &self,
        actor: &Actor,
        answer: impl FnOnce(&SelectElement) -> DriverResult<T>,
    ) -> ScreenplayResult<T> {
        beat(format!(
            "{actor} checks the selected option(s) from the {}.",
            self.target
        ));
        let element = self.target.found_by(actor)?;
        SelectElement::new(element)
            .and_then(|dropdown| answer(&dropdown))
            .map_err(|e| {
                delivery_error(format!("read the selected option(s) of {}", self.target), &e)
            })
    }
}

impl Answerable for Selected<One> {
    type Answer = String;

    fn describe(&self) -> String {
        self.describe_selected()
    }

    fn answered_by(&self, actor: &Actor) -> ScreenplayResult<String> {
        self.read(actor, |dropdown| dropdown.first_selected_option()?.text())
    }
}

impl Answerable for Selected<Many> {
    type Answer = Vec<String>;

    fn describe(&self) -> String {
        self.describe_selected()
    }

    fn answered_by(&self, actor: &Actor) -> ScreenplayResult<Vec<String>> {
        self.read(actor, |dropdown| {
            dropdown
                .all_selected_options()?
                .iter()
                .map(crate::driver::WebElement::text)
                .collect()
        })
    }
}
