//! Matchers over an optional element, as answered by the `Element` question.
//!
//! Driver failures while inspecting an element count as "no": a matcher
//! never raises.

use crate::actor::Matcher;
use crate::driver::WebElement;

fn displayed(element: &WebElement) -> bool {
    element.is_displayed().unwrap_or(false)
}

fn enabled(element: &WebElement) -> bool {
    element.is_enabled().unwrap_or(false)
}

/// Matches an element that is both displayed and enabled
#[derive(Debug, Clone, Copy, Default)]
pub struct IsClickableElement;

impl Matcher<Option<WebElement>> for IsClickableElement {
    fn matches(&self, item: &Option<WebElement>) -> bool {
        item.as_ref().is_some_and(|e| displayed(e) && enabled(e))
    }

    fn describe_to(&self) -> String {
        "the element is enabled/clickable".to_string()
    }

    fn describe_match(&self, _item: &Option<WebElement>) -> String {
        "it was enabled/clickable".to_string()
    }

    fn describe_mismatch(&self, item: &Option<WebElement>) -> String {
        match item {
            Some(element) if displayed(element) => "was not enabled/clickable".to_string(),
            _ => "was not even present".to_string(),
        }
    }
}

/// Matches a displayed element
#[derive(Debug, Clone, Copy, Default)]
pub struct IsVisibleElement;

impl Matcher<Option<WebElement>> for IsVisibleElement {
    fn matches(&self, item: &Option<WebElement>) -> bool {
        item.as_ref().is_some_and(displayed)
    }

    fn describe_to(&self) -> String {
        "the element is visible".to_string()
    }

    fn describe_match(&self, _item: &Option<WebElement>) -> String {
        "it was visible".to_string()
    }

    fn describe_mismatch(&self, item: &Option<WebElement>) -> String {
        match item {
            Some(_) => "was not visible".to_string(),
            None => "was not even present".to_string(),
        }
    }
}

/// Matches a hidden element, or no element at all
#[derive(Debug, Clone, Copy, Default)]
pub struct IsInvisibleElement;

impl Matcher<Option<WebElement>> for IsInvisibleElement {
    fn matches(&self, item: &Option<WebElement>) -> bool {
        item.as_ref().map_or(true, |e| !displayed(e))
    }

    fn describe_to(&self) -> String {
        "the element is invisible".to_string()
    }

    // Absent elements match too, and read the same
    fn describe_match(&self, _item: &Option<WebElement>) -> String {
        "it was invisible".to_string()
    }

    fn describe_mismatch(&self, _item: &Option<WebElement>) -> String {
        "was not invisible".to_string()
    }
}

/// Matches any element that was found
#[derive(Debug, Clone, Copy, Default)]
pub struct IsPresentElement;

impl Matcher<Option<WebElement>> for IsPresentElement {
    fn matches(&self, item: &Option<WebElement>) -> bool {
        item.is_some()
    }

    fn describe_to(&self) -> String {
        "the element is present".to_string()
    }

    fn describe_match(&self, _item: &Option<WebElement>) -> String {
        "it was present".to_string()
    }

    fn describe_mismatch(&self, _item: &Option<WebElement>) -> String {
        "was not present".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::BrowseTheWeb;
    use crate::actions::testing::perry;
    use crate::actor::Actor;
    use crate::driver::{By, MockDriver, MockElement};

    fn found(actor: &Actor, mock: &MockDriver, element: MockElement) -> Option<WebElement> {
        mock.add_element(By::CssSelector, "#it", element);
        Some(
            BrowseTheWeb::browser_of(actor)
                .unwrap()
                .find_element(By::CssSelector, "#it")
                .unwrap(),
        )
    }

    mod clickable_tests {
        use super::*;

        #[test]
        fn test_visible_and_enabled() {
            let (actor, mock) = perry();
            let item = found(&actor, &mock, MockElement::new("button"));
            assert!(IsClickableElement.matches(&item));
            assert_eq!(IsClickableElement.describe_match(&item), "it was enabled/clickable");
        }

        #[test]
        fn test_disabled() {
            let (actor, mock) = perry();
            let item = found(&actor, &mock, MockElement::new("button").disabled());
            assert!(!IsClickableElement.matches(&item));
            assert_eq!(
                IsClickableElement.describe_mismatch(&item),
                "was not enabled/clickable"
            );
        }

        #[test]
        fn test_hidden_reads_as_absent() {
            let (actor, mock) = perry();
            let item = found(&actor, &mock, MockElement::new("button").hidden());
            assert!(!IsClickableElement.matches(&item));
            assert_eq!(IsClickableElement.describe_mismatch(&item), "was not even present");
            assert_eq!(IsClickableElement.describe_mismatch(&None), "was not even present");
        }
    }

    mod visible_tests {
        use super::*;

        #[test]
        fn test_messages() {
            let (actor, mock) = perry();
            let hidden = found(&actor, &mock, MockElement::new("div").hidden());
            assert!(!IsVisibleElement.matches(&hidden));
            assert!(!IsVisibleElement.matches(&None));
            assert_eq!(IsVisibleElement.describe_to(), "the element is visible");
            assert_eq!(IsVisibleElement.describe_mismatch(&hidden), "was not visible");
            assert_eq!(IsVisibleElement.describe_mismatch(&None), "was not even present");
        }
    }

    mod invisible_tests {
        use super::*;

        #[test]
        fn test_hidden_and_absent_both_match() {
            let (actor, mock) = perry();
            let hidden = found(&actor, &mock, MockElement::new("div").hidden());
            assert!(IsInvisibleElement.matches(&hidden));
            assert!(IsInvisibleElement.matches(&None));
            assert_eq!(IsInvisibleElement.describe_match(&None), "it was invisible");
        }

        #[test]
        fn test_visible_does_not_match() {
            let (actor, mock) = perry();
            let shown = found(&actor, &mock, MockElement::new("div"));
            assert!(!IsInvisibleElement.matches(&shown));
            assert_eq!(IsInvisibleElement.describe_mismatch(&shown), "was not invisible");
        }
    }

    mod present_tests {
        use super::*;

        #[test]
        fn test_presence() {
            let (actor, mock) = perry();
            let hidden = found(&actor, &mock, MockElement::new("div").hidden());
            assert!(IsPresentElement.matches(&hidden));
            assert!(!IsPresentElement.matches(&None));
            assert_eq!(IsPresentElement.describe_mismatch(&None), "was not present");
        }
    }
}
