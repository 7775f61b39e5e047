//! Conditions for [`Wait`](crate::actions::Wait).
//!
//! A [`Condition`] is a named predicate over the browser and the wait's
//! arguments. The built-ins mirror the usual expected conditions; custom
//! ones are built with [`Condition::new`].

use crate::driver::{Browser, By, DriverResult, WebDriverError};
use crate::target::Target;
use std::fmt;
use std::sync::Arc;

/// An argument handed to a condition
#[derive(Debug, Clone, PartialEq)]
pub enum WaitArg {
    /// An element locator
    Target(Target),
    /// A piece of text
    Text(String),
    /// A number
    Number(f64),
}

impl fmt::Display for WaitArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target(target) => write!(f, "{target}"),
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<Target> for WaitArg {
    fn from(target: Target) -> Self {
        Self::Target(target)
    }
}

impl From<&Target> for WaitArg {
    fn from(target: &Target) -> Self {
        Self::Target(target.clone())
    }
}

impl From<&str> for WaitArg {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for WaitArg {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for WaitArg {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for WaitArg {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

type CheckFn = dyn Fn(&Browser, &[WaitArg]) -> DriverResult<bool> + Send + Sync;

/// A named wait predicate
#[derive(Clone)]
pub struct Condition {
    name: String,
    check: Arc<CheckFn>,
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Condition {
    /// Create a condition; `name` appears in log lines and errors
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Browser, &[WaitArg]) -> DriverResult<bool> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate once
    pub fn check(&self, browser: &Browser, args: &[WaitArg]) -> DriverResult<bool> {
        (self.check)(browser, args)
    }
}

fn locator_arg(args: &[WaitArg], index: usize) -> DriverResult<(By, String)> {
    match args.get(index) {
        Some(WaitArg::Target(target)) => {
            let (by, selector) = target.get_locator().map_err(|e| WebDriverError::InvalidArgument {
                message: e.to_string(),
            })?;
            Ok((by, selector.to_string()))
        }
        other => Err(WebDriverError::InvalidArgument {
            message: format!("argument {index} must be a Target, got {other:?}"),
        }),
    }
}

fn text_arg(args: &[WaitArg], index: usize) -> DriverResult<String> {
    match args.get(index) {
        Some(arg @ (WaitArg::Text(_) | WaitArg::Number(_))) => Ok(arg.to_string()),
        other => Err(WebDriverError::InvalidArgument {
            message: format!("argument {index} must be text, got {other:?}"),
        }),
    }
}

/// The element exists and is displayed
#[must_use]
pub fn visibility_of_element_located() -> Condition {
    Condition::new("visibility_of_element_located", |browser, args| {
        let (by, selector) = locator_arg(args, 0)?;
        browser.find_element(by, &selector)?.is_displayed()
    })
}

/// The element exists, whether displayed or not
#[must_use]
pub fn presence_of_element_located() -> Condition {
    Condition::new("presence_of_element_located", |browser, args| {
        let (by, selector) = locator_arg(args, 0)?;
        browser.find_element(by, &selector)?;
        Ok(true)
    })
}

/// The element is hidden or gone
#[must_use]
pub fn invisibility_of_element_located() -> Condition {
    Condition::new("invisibility_of_element_located", |browser, args| {
        let (by, selector) = locator_arg(args, 0)?;
        let element = match browser.find_element(by, &selector) {
            Ok(element) => element,
            Err(e) if e.is_transient() => return Ok(true),
            Err(e) => return Err(e),
        };
        match element.is_displayed() {
            Ok(displayed) => Ok(!displayed),
            Err(e) if e.is_transient() => Ok(true),
            Err(e) => Err(e),
        }
    })
}

/// The element is displayed and enabled
#[must_use]
pub fn element_to_be_clickable() -> Condition {
    Condition::new("element_to_be_clickable", |browser, args| {
        let (by, selector) = locator_arg(args, 0)?;
        let element = browser.find_element(by, &selector)?;
        Ok(element.is_displayed()? && element.is_enabled()?)
    })
}

/// The element's text contains the second argument
#[must_use]
pub fn text_to_be_present_in_element() -> Condition {
    Condition::new("text_to_be_present_in_element", |browser, args| {
        let (by, selector) = locator_arg(args, 0)?;
        let text = text_arg(args, 1)?;
        Ok(browser.find_element(by, &selector)?.text()?.contains(&text))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{MockDriver, MockElement};

    fn setup() -> (Arc<MockDriver>, Browser) {
        let mock = Arc::new(MockDriver::new());
        let browser = Browser::from(Arc::clone(&mock));
        (mock, browser)
    }

    fn banner() -> Vec<WaitArg> {
        vec![Target::the("banner").located_by("#banner").into()]
    }

    mod builtin_tests {
        use super::*;

        #[test]
        fn test_visibility() {
            let (mock, browser) = setup();
            let cond = visibility_of_element_located();
            assert!(cond.check(&browser, &banner()).unwrap_err().is_transient());
            let id = mock.add_element(By::CssSelector, "#banner", MockElement::new("div").hidden());
            assert!(!cond.check(&browser, &banner()).unwrap());
            mock.set_displayed(&id, true);
            assert!(cond.check(&browser, &banner()).unwrap());
        }

        #[test]
        fn test_invisibility_when_absent_or_hidden() {
            let (mock, browser) = setup();
            let cond = invisibility_of_element_located();
            assert!(cond.check(&browser, &banner()).unwrap());
            let id = mock.add_element(By::CssSelector, "#banner", MockElement::new("div"));
            assert!(!cond.check(&browser, &banner()).unwrap());
            mock.set_displayed(&id, false);
            assert!(cond.check(&browser, &banner()).unwrap());
        }

        #[test]
        fn test_clickable_needs_enabled() {
            let (mock, browser) = setup();
            let id = mock.add_element(By::CssSelector, "#banner", MockElement::new("button").disabled());
            let cond = element_to_be_clickable();
            assert!(!cond.check(&browser, &banner()).unwrap());
            mock.set_enabled(&id, true);
            assert!(cond.check(&browser, &banner()).unwrap());
        }

        #[test]
        fn test_text_present() {
            let (mock, browser) = setup();
            mock.add_element(By::CssSelector, "#banner", MockElement::new("h1").text("Welcome, Perry!"));
            let mut args = banner();
            args.push("Welcome".into());
            assert!(text_to_be_present_in_element().check(&browser, &args).unwrap());
            args[1] = "Goodbye".into();
            assert!(!text_to_be_present_in_element().check(&browser, &args).unwrap());
        }

        #[test]
        fn test_presence() {
            let (mock, browser) = setup();
            mock.add_element(By::CssSelector, "#banner", MockElement::new("div").hidden());
            assert!(presence_of_element_located().check(&browser, &banner()).unwrap());
        }
    }

    mod argument_tests {
        use super::*;

        #[test]
        fn test_wrong_argument_kind() {
            let (_, browser) = setup();
            let err = visibility_of_element_located()
                .check(&browser, &["#banner".into()])
                .unwrap_err();
            assert!(matches!(err, WebDriverError::InvalidArgument { .. }));
        }

        #[test]
        fn test_target_without_locator() {
            let (_, browser) = setup();
            let err = visibility_of_element_located()
                .check(&browser, &[Target::the("nothing").into()])
                .unwrap_err();
            assert!(err.to_string().contains("Locator was not supplied"));
        }

        #[test]
        fn test_custom_condition() {
            let (mock, browser) = setup();
            mock.set_title("Done");
            let cond = Condition::new("title_is", |browser, args| {
                Ok(browser.title()? == args[0].to_string())
            });
            assert_eq!(cond.name(), "title_is");
            assert!(cond.check(&browser, &["Done".into()]).unwrap());
        }

        #[test]
        fn test_arg_display() {
            assert_eq!(WaitArg::from(Target::the("cart")).to_string(), "cart");
            assert_eq!(WaitArg::from(3).to_string(), "3");
            assert_eq!(WaitArg::from("x").to_string(), "x");
        }
    }
}
