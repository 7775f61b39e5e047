//! Resolutions for plain answers: strings, numbers and collections.

use crate::actor::{Matcher, Resolution};
use std::fmt;

/// The answer equals an expected value
///
/// ```text
/// actor.should(&[&See::the(Number::of(SEARCH_RESULTS), IsEqualTo::the(5))])?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsEqualTo<T> {
    expected: T,
}

impl<T> IsEqualTo<T> {
    pub fn the(expected: T) -> Self {
        Self { expected }
    }
}

struct EqualTo<T>(T);

impl<T: PartialEq + fmt::Debug> Matcher<T> for EqualTo<T> {
    fn matches(&self, item: &T) -> bool {
        *item == self.0
    }

    fn describe_to(&self) -> String {
        format!("<{:?}>", self.0)
    }

    fn describe_match(&self, item: &T) -> String {
        format!("it was <{item:?}>")
    }

    fn describe_mismatch(&self, item: &T) -> String {
        format!("was <{item:?}>")
    }
}

impl<T> Resolution<T> for IsEqualTo<T>
where
    T: PartialEq + Clone + fmt::Debug + 'static,
{
    fn describe(&self) -> String {
        format!("equal to {:?}", self.expected)
    }

    fn resolve(&self) -> Box<dyn Matcher<T>> {
        Box::new(EqualTo(self.expected.clone()))
    }
}

/// The answer is exactly this text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadsExactly {
    text: String,
}

impl ReadsExactly {
    pub fn the(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

struct Exactly(String);

impl Matcher<String> for Exactly {
    fn matches(&self, item: &String) -> bool {
        *item == self.0
    }

    fn describe_to(&self) -> String {
        format!("'{}'", self.0)
    }

    fn describe_match(&self, item: &String) -> String {
        format!("it was '{item}'")
    }

    fn describe_mismatch(&self, item: &String) -> String {
        format!("was '{item}'")
    }
}

impl Resolution<String> for ReadsExactly {
    fn describe(&self) -> String {
        format!("\"{}\", exactly", self.text)
    }

    fn resolve(&self) -> Box<dyn Matcher<String>> {
        Box::new(Exactly(self.text.clone()))
    }
}

/// The answer contains this text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsTheText {
    text: String,
}

impl ContainsTheText {
    pub fn the(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

struct Containing(String);

impl Matcher<String> for Containing {
    fn matches(&self, item: &String) -> bool {
        item.contains(&self.0)
    }

    fn describe_to(&self) -> String {
        format!("a string containing '{}'", self.0)
    }

    fn describe_match(&self, item: &String) -> String {
        format!("'{}' was found in '{item}'", self.0)
    }

    fn describe_mismatch(&self, item: &String) -> String {
        format!("was '{item}'")
    }
}

impl Resolution<String> for ContainsTheText {
    fn describe(&self) -> String {
        format!("containing the text \"{}\"", self.text)
    }

    fn resolve(&self) -> Box<dyn Matcher<String>> {
        Box::new(Containing(self.text.clone()))
    }
}
