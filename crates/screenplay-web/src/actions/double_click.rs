//! Double-click on an element, or wherever the pointer is.

use super::{on_the, perform_alone};
use crate::actor::{Actor, Performable};
use crate::driver::ActionChain;
use crate::pacing::beat;
use crate::protocols::Chainable;
use crate::result::ScreenplayResult;
use crate::target::Target;

/// Double-click on an element, or at the pointer when no target is given
#[derive(Debug, Clone, Default)]
pub struct DoubleClick {
    target: Option<Target>,
}

impl DoubleClick {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The element to double-click
    pub fn on_the(target: Target) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Alias for [`DoubleClick::on_the`]
    pub fn on(target: Target) -> Self {
        Self::on_the(target)
    }

    /// Alias for [`DoubleClick::on_the`]
    pub fn on_the_first_of_the(target: Target) -> Self {
        Self::on_the(target)
    }

    fn description(&self) -> String {
        on_the(self.target.as_ref())
    }
}

impl Performable for DoubleClick {
    fn describe(&self) -> String {
        format!("Double-click{}.", self.description())
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} double-clicks{}.", self.description()));
        perform_alone(actor, self, format!("double-click{}", self.description()))
    }

    fn as_chainable(&self) -> Option<&dyn Chainable> {
        Some(self)
    }
}

impl Chainable for DoubleClick {
    fn add_to_chain(&self, actor: &Actor, chain: &mut ActionChain) -> ScreenplayResult<()> {
        beat(format!("  Double-click{}!", self.description()));
        let element = self.target.as_ref().map(|t| t.found_by(actor)).transpose()?;
        chain.double_click(element.as_ref());
        Ok(())
    }
}
