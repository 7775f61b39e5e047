//! Right-click on an element, or wherever the pointer is.

use super::{on_the, perform_alone};
use crate::actor::{Actor, Performable};
use crate::driver::ActionChain;
use crate::pacing::beat;
use crate::protocols::Chainable;
use crate::result::ScreenplayResult;
use crate::target::Target;

/// Open the context menu on an element, or at the pointer
///
/// Most browsers draw their own context menu outside the page, so only
/// menus built from page elements can be interacted with afterwards.
#[derive(Debug, Clone, Default)]
pub struct RightClick {
    target: Option<Target>,
}

impl RightClick {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_the(target: Target) -> Self {
        Self {
            target: Some(target),
        }
    }

    pub fn on(target: Target) -> Self {
        Self::on_the(target)
    }

    pub fn on_the_first_of_the(target: Target) -> Self {
        Self::on_the(target)
    }

    fn description(&self) -> String {
        on_the(self.target.as_ref())
    }
}

impl Performable for RightClick {
    fn describe(&self) -> String {
        format!("Right-click{}.", self.description())
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} right-clicks{}.", self.description()));
        perform_alone(actor, self, format!("right-click{}", self.description()))
    }

    fn as_chainable(&self) -> Option<&dyn Chainable> {
        Some(self)
    }
}

impl Chainable for RightClick {
    fn add_to_chain(&self, actor: &Actor, chain: &mut ActionChain) -> ScreenplayResult<()> {
        beat(format!("Right-click{}!", self.description()));
        let element = self.target.as_ref().map(|t| t.found_by(actor)).transpose()?;
        chain.context_click(element.as_ref());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{element, perry};
    use crate::driver::{ChainStep, MockElement, WebDriverError};
    use crate::result::ScreenplayError;

    #[test]
    fn test_describe() {
        let target = Target::the("hero image").located_by("#hero");
        assert_eq!(RightClick::on_the(target).describe(), "Right-click on the hero image.");
        assert_eq!(RightClick::new().describe(), "Right-click.");
    }

    #[test]
    fn test_context_clicks_the_element() {
        let (actor, mock) = perry();
        let (target, id) = element(&mock, "hero_image", MockElement::new("img"));
        actor.attempts_to(&[&RightClick::on_the_first_of_the(target)]).unwrap();
        assert_eq!(
            mock.performed_chains()[0].0,
            vec![ChainStep::ContextClick(Some(id))]
        );
    }

    #[test]
    fn test_chain_failure_is_delivery_error() {
        let (actor, mock) = perry();
        mock.fail_on("perform_actions", WebDriverError::protocol("boom"));
        let err = actor.attempts_to(&[&RightClick::new()]).unwrap_err();
        assert!(matches!(err, ScreenplayError::Delivery { .. }));
        assert!(err.to_string().ends_with("right-click: WebDriverException"));
    }
}
