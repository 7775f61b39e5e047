//! Select an option from a dropdown or multi-select field.

use super::delivery_error;
use crate::actor::{Actor, Performable};
use crate::driver::{DriverResult, SelectElement};
use crate::pacing::beat;
use crate::result::{ScreenplayError, ScreenplayResult};
use crate::target::Target;

/// Entry point that picks the right selection action
///
/// ```text
/// actor.attempts_to(&[&Select::the_option_named("January").from_the(MONTH_DROPDOWN)])?;
/// actor.attempts_to(&[&Select::the_option_at_index(0).from_the(MONTH_DROPDOWN)])?;
/// actor.attempts_to(&[&Select::the_option_with_value("jan").from_the(MONTH_DROPDOWN)])?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Select;

impl Select {
    /// By visible text
    pub fn the_option_named(text: impl Into<String>) -> SelectByText {
        SelectByText {
            text: text.into(),
            target: None,
        }
    }

    /// By zero-based position; strings are parsed when performed
    pub fn the_option_at_index(index: impl ToString) -> SelectByIndex {
        SelectByIndex {
            index: index.to_string(),
            target: None,
        }
    }

    /// By `value` attribute; numbers are sent as their decimal text
    pub fn the_option_with_value(value: impl ToString) -> SelectByValue {
        SelectByValue {
            value: value.to_string(),
            target: None,
        }
    }
}

fn missing_target(action: &str) -> ScreenplayError {
    ScreenplayError::unable_to_act(format!(
        "Target was not provided for {action}. Provide a Target using the .from_() \
         or .from_the() methods."
    ))
}

/// Resolve the dropdown and run one selection against it
fn select_from<F>(actor: &Actor, target: &Target, what: &str, select: F) -> ScreenplayResult<()>
where
    F: FnOnce(&SelectElement) -> DriverResult<()>,
{
    let element = target.found_by(actor)?;
    SelectElement::new(element)
        .and_then(|dropdown| select(&dropdown))
        .map_err(|e| delivery_error(format!("select {what} from {target}"), &e))
}

macro_rules! from_the_builders {
    ($ty:ident) => {
        impl $ty {
            /// Dropdown to select from
            #[must_use]
            pub fn from_the(mut self, target: Target) -> Self {
                self.target = Some(target);
                self
            }

            #[must_use]
            pub fn from_(self, target: Target) -> Self {
                self.from_the(target)
            }

            #[must_use]
            pub fn from_the_first_of_the(self, target: Target) -> Self {
                self.from_the(target)
            }

            fn target_name(&self) -> String {
                super::name_of(self.target.as_ref())
            }
        }
    };
}

// ============================================================================
// By text
// ============================================================================

/// Select an option by its visible text
#[derive(Debug, Clone)]
pub struct SelectByText {
    text: String,
    target: Option<Target>,
}

from_the_builders!(SelectByText);

impl Performable for SelectByText {
    fn describe(&self) -> String {
        format!(
            "Select the option \"{}\" from the {}.",
            self.text,
            self.target_name()
        )
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!(
            "{actor} selects the option \"{}\" from the {}.",
            self.text,
            self.target_name()
        ));
        let target = self
            .target
            .as_ref()
            .ok_or_else(|| missing_target("SelectByText"))?;
        select_from(
            actor,
            target,
            &format!("the option with text '{}'", self.text),
            |dropdown| dropdown.select_by_visible_text(&self.text),
        )
    }
}

// ============================================================================
// By index
// ============================================================================

/// Select an option by its zero-based position
#[derive(Debug, Clone)]
pub struct SelectByIndex {
    index: String,
    target: Option<Target>,
}

from_the_builders!(SelectByIndex);

impl Performable for SelectByIndex {
    fn describe(&self) -> String {
        format!(
            "Select the option at index {} from the {}.",
            self.index,
            self.target_name()
        )
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!(
            "{actor} selects the option at index {} from the {}.",
            self.index,
            self.target_name()
        ));
        let target = self
            .target
            .as_ref()
            .ok_or_else(|| missing_target("SelectByIndex"))?;
        let index: usize = self.index.trim().parse().map_err(|_| {
            ScreenplayError::unable_to_act(format!(
                "'{}' is not a valid option index for SelectByIndex.",
                self.index
            ))
        })?;
        select_from(
            actor,
            target,
            &format!("the option at index {index}"),
            |dropdown| dropdown.select_by_index(index),
        )
    }
}

// ============================================================================
// By value
// ============================================================================

/// Select an option by its `value` attribute
#[derive(Debug, Clone)]
pub struct SelectByValue {
    value: String,
    target: Option<Target>,
}

from_the_builders!(SelectByValue);

impl SelectByValue {
    /// The value that will be sent, always as text
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Performable for SelectByValue {
    fn describe(&self) -> String {
        format!(
            "Select the option with value \"{}\" from the {}.",
            self.value,
            self.target_name()
        )
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!(
            "{actor} selects the option with value \"{}\" from the {}.",
            self.value,
            self.target_name()
        ));
        let target = self
            .target
            .as_ref()
            .ok_or_else(|| missing_target("SelectByValue"))?;
        select_from(
            actor,
            target,
            &format!("the option with value {}", self.value),
            |dropdown| dropdown.select_by_value(&self.value),
        )
    }
}
