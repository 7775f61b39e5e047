//! Click on an element.

use super::{delivery_error, name_of, on_the};
use crate::actor::{Actor, Performable};
use crate::driver::ActionChain;
use crate::pacing::beat;
use crate::protocols::Chainable;
use crate::result::{ScreenplayError, ScreenplayResult};
use crate::target::Target;

/// Click on an element
///
/// ```text
/// actor.attempts_to(&[&Click::on_the(PROFILE_LINK)])?;
/// actor.attempts_to(&[&Chain::of().then(Click::new())])?; // at the pointer
/// ```
#[derive(Debug, Clone, Default)]
pub struct Click {
    target: Option<Target>,
}

impl Click {
    /// Click at the pointer; only valid inside a [`Chain`](super::Chain)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The element to click
    pub fn on_the(target: Target) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Alias for [`Click::on_the`]
    pub fn on(target: Target) -> Self {
        Self::on_the(target)
    }

    /// Alias for [`Click::on_the`]
    pub fn on_the_first_of_the(target: Target) -> Self {
        Self::on_the(target)
    }
}

impl Performable for Click {
    fn describe(&self) -> String {
        format!("Click on the {}.", name_of(self.target.as_ref()))
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} clicks on the {}.", name_of(self.target.as_ref())));
        let target = self.target.as_ref().ok_or_else(|| {
            ScreenplayError::unable_to_act(
                "Target was not supplied for Click. Provide a Target by using the \
                 .on() or .on_the() method.",
            )
        })?;
        let element = target.found_by(actor)?;
        element
            .click()
            .map_err(|e| delivery_error(format!("click {target}"), &e))
    }

    fn as_chainable(&self) -> Option<&dyn Chainable> {
        Some(self)
    }
}

impl Chainable for Click {
    fn add_to_chain(&self, actor: &Actor, chain: &mut ActionChain) -> ScreenplayResult<()> {
        beat(format!("Click{}!", on_the(self.target.as_ref())));
        let element = self.target.as_ref().map(|t| t.found_by(actor)).transpose()?;
        chain.click(element.as_ref());
        Ok(())
    }
}
