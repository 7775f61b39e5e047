//! Switch the frame of reference: into a frame, or back out.

use super::delivery_error;
use crate::abilities::BrowseTheWeb;
use crate::actor::{Actor, Performable};
use crate::pacing::beat;
use crate::result::ScreenplayResult;
use crate::target::Target;

/// Switch into an element (most likely an iframe), or back to the page
///
/// ```text
/// actor.attempts_to(&[&SwitchTo::the(ORDERS_FRAME)])?;
/// actor.attempts_to(&[&SwitchTo::default()])?;
/// ```
#[derive(Debug, Clone)]
pub struct SwitchTo {
    target: Option<Target>,
}

impl SwitchTo {
    /// Frame element to switch into
    pub fn the(target: Target) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Back to the top-level browsing context
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn default() -> Self {
        Self { target: None }
    }

    fn frame_to_log(&self) -> String {
        self.target
            .as_ref()
            .map_or_else(|| "default frame".to_string(), ToString::to_string)
    }
}

impl Performable for SwitchTo {
    fn describe(&self) -> String {
        format!("Switch to the {}.", self.frame_to_log())
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        let frame_to_log = self.frame_to_log();
        beat(format!("{actor} switches to the {frame_to_log}."));
        let browser = BrowseTheWeb::browser_of(actor)?;
        let switched = match &self.target {
            Some(target) => browser.switch_to_frame(&target.found_by(actor)?),
            None => browser.switch_to_default_content(),
        };
        switched.map_err(|e| delivery_error(format!("switch to the {frame_to_log}"), &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{element, perry};
    use crate::driver::MockElement;

    #[test]
    fn test_describe() {
        let frame = Target::the("orders frame").located_by("#orders");
        assert_eq!(SwitchTo::the(frame).describe(), "Switch to the orders frame.");
        assert_eq!(SwitchTo::default().describe(), "Switch to the default frame.");
    }

    #[test]
    fn test_into_frame_and_back() {
        let (actor, mock) = perry();
        let (frame, id) = element(&mock, "orders_frame", MockElement::new("iframe"));
        actor.attempts_to(&[&SwitchTo::the(frame)]).unwrap();
        assert_eq!(mock.current_frame(), Some(id));
        actor.attempts_to(&[&SwitchTo::default()]).unwrap();
        assert_eq!(mock.current_frame(), None);
    }
}
