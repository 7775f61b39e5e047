//! Resolutions about the state of an element.
//!
//! Pair these with the `Element` question, which answers `None` for a
//! missing element instead of failing.

use super::matchers::{IsClickableElement, IsInvisibleElement, IsPresentElement, IsVisibleElement};
use crate::actor::{Matcher, Resolution};
use crate::driver::WebElement;

macro_rules! element_resolution {
    ($(#[$doc:meta])* $name:ident, $line:literal, $matcher:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            #[must_use]
            pub const fn new() -> Self {
                Self
            }
        }

        impl Resolution<Option<WebElement>> for $name {
            fn describe(&self) -> String {
                $line.to_string()
            }

            fn resolve(&self) -> Box<dyn Matcher<Option<WebElement>>> {
                Box::new($matcher)
            }
        }
    };
}

element_resolution!(
    /// The element is displayed and enabled
    ///
    /// ```text
    /// actor.should(&[&See::the(Element::new(LOGIN_BUTTON), IsClickable)])?;
    /// ```
    IsClickable,
    "clickable",
    IsClickableElement
);

element_resolution!(
    /// The element is displayed
    IsVisible,
    "visible",
    IsVisibleElement
);

element_resolution!(
    /// The element is hidden or missing
    IsInvisible,
    "invisible",
    IsInvisibleElement
);

element_resolution!(
    /// The element exists, displayed or not
    IsPresent,
    "present",
    IsPresentElement
);

pub type IsEnabled = IsClickable;
pub type Enabled = IsClickable;
pub type Clickable = IsClickable;

pub type IsDisplayed = IsVisible;
pub type Displayed = IsVisible;
pub type Visible = IsVisible;

pub type IsNotDisplayed = IsInvisible;
pub type NotDisplayed = IsInvisible;
pub type Invisible = IsInvisible;

pub type Exist = IsPresent;
pub type Exists = IsPresent;
pub type Present = IsPresent;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{element, perry};
    use crate::actor::{Performable, See};
    use crate::driver::MockElement;
    use crate::questions::Element;
    use crate::result::ScreenplayError;
    use crate::target::Target;

    #[test]
    fn test_descriptions() {
        let banner = Target::the("welcome banner").located_by("#welcome");
        assert_eq!(
            See::the(Element::new(banner.clone()), IsVisible).describe(),
            "See if the welcome banner is visible."
        );
        assert_eq!(
            See::the(Element::new(banner), Clickable::new()).describe(),
            "See if the welcome banner is clickable."
        );
    }

    #[test]
    fn test_each_resolution_against_a_hidden_element() {
        let (actor, mock) = perry();
        let (banner, _) = element(&mock, "welcome_banner", MockElement::new("h1").hidden());
        actor
            .should(&[
                &See::the(Element::new(banner.clone()), IsInvisible),
                &See::the(Element::new(banner.clone()), Exists::new()),
            ])
            .unwrap();
        let err = actor
            .should(&[&See::the(Element::new(banner), IsDisplayed::new())])
            .unwrap_err();
        assert!(matches!(err, ScreenplayError::AssertionFailed { .. }));
        assert_eq!(
            err.to_string(),
            "\nExpected: the element is visible\n     but: was not visible"
        );
    }

    #[test]
    fn test_missing_element() {
        let (actor, _) = perry();
        let ghost = Target::the("ghost").located_by("#ghost");
        actor
            .should(&[&See::the(Element::new(ghost.clone()), NotDisplayed::new())])
            .unwrap();
        let err = actor
            .should(&[&See::the(Element::new(ghost), IsPresent)])
            .unwrap_err();
        assert!(err.to_string().ends_with("but: was not present"));
    }
}
