//! Read an HTML attribute from one element or many.

use super::{Many, One};
use crate::actions::delivery_error;
use crate::actor::{Actor, Answerable};
use crate::pacing::beat;
use crate::result::{ScreenplayError, ScreenplayResult};
use crate::target::Target;
use std::marker::PhantomData;

/// The value of an attribute
///
/// ```text
/// actor.should(&[&See::the(
///     Attribute::new("value").of_the(NAME_INPUT),
///     ReadsExactly::the("Perry"),
/// )])?;
/// Attribute::new("href").of_all(NAV_LINKS)   // one value per link
/// ```
///
/// A missing attribute answers `None`.
#[derive(Debug, Clone)]
pub struct Attribute<M = One> {
    attribute: String,
    target: Option<Target>,
    _multiplicity: PhantomData<M>,
}

impl Attribute<One> {
    /// Ask for `attribute`; choose the element(s) with `of_the` or `of_all`
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            target: None,
            _multiplicity: PhantomData,
        }
    }

    /// The first element found by `target`
    #[must_use]
    pub fn of_the(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn of(self, target: Target) -> Self {
        self.of_the(target)
    }

    #[must_use]
    pub fn of_the_first_of_the(self, target: Target) -> Self {
        self.of_the(target)
    }

    /// Every element found by `target`
    #[must_use]
    pub fn of_all(self, target: Target) -> Attribute<Many> {
        Attribute {
            attribute: self.attribute,
            target: Some(target),
            _multiplicity: PhantomData,
        }
    }
}

impl<M> Attribute<M> {
    fn target_name(&self) -> String {
        crate::actions::name_of(self.target.as_ref())
    }

    fn required_target(&self) -> ScreenplayResult<&Target> {
        self.target.as_ref().ok_or_else(|| {
            ScreenplayError::unable_to_act(
                "Target was not provided for Attribute. Provide a Target using the \
                 .of() or .of_the() methods.",
            )
        })
    }

    fn describe_attribute(&self) -> String {
        format!(
            "The \"{}\" attribute of the {}.",
            self.attribute,
            self.target_name()
        )
    }

    fn announce(&self, actor: &Actor) {
        beat(format!(
            "{actor} examines the \"{}\" attribute of the {}...",
            self.attribute,
            self.target_name()
        ));
    }
}

impl Answerable for Attribute<One> {
    type Answer = Option<String>;

    fn describe(&self) -> String {
        self.describe_attribute()
    }

    fn answered_by(&self, actor: &Actor) -> ScreenplayResult<Option<String>> {
        self.announce(actor);
        let target = self.required_target()?;
        target
            .found_by(actor)?
            .attribute(&self.attribute)
            .map_err(|e| delivery_error(format!("read the {} of {target}", self.attribute), &e))
    }
}

impl Answerable for Attribute<Many> {
    type Answer = Vec<Option<String>>;

    fn describe(&self) -> String {
        self.describe_attribute()
    }

    fn answered_by(&self, actor: &Actor) -> ScreenplayResult<Vec<Option<String>>> {
        self.announce(actor);
        let target = self.required_target()?;
        target
            .all_found_by(actor)?
            .iter()
            .map(|element| {
                element.attribute(&self.attribute).map_err(|e| {
                    delivery_error(format!("read the {} of {target}", self.attribute), &e)
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{element, perry};
    use crate::driver::{By, MockElement};

    #[test]
    fn test_describe() {
        let input = Target::the("name input").located_by("#name");
        assert_eq!(
            Attribute::new("value").of_the(input).describe(),
            "The \"value\" attribute of the name input."
        );
    }

    #[test]
    fn test_single_value() {
        let (actor, mock) = perry();
        let (target, _) = element(
            &mock,
            "name_input",
            MockElement::new("input").attribute("value", "Perry"),
        );
        let answer = Attribute::new("value").of(target.clone()).answered_by(&actor).unwrap();
        assert_eq!(answer.as_deref(), Some("Perry"));
        let missing = Attribute::new("title").of_the(target).answered_by(&actor).unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_every_value() {
        let (actor, mock) = perry();
        for href in ["/home", "/about"] {
            mock.add_element(
                By::CssSelector,
                "nav a",
                MockElement::new("a").attribute("href", href),
            );
        }
        let links = Target::the("nav links").located_by("nav a");
        let answer = Attribute::new("href").of_all(links).answered_by(&actor).unwrap();
        assert_eq!(
            answer,
            vec![Some("/home".to_string()), Some("/about".to_string())]
        );
    }

    #[test]
    fn test_target_required() {
        let (actor, _) = perry();
        let err = Attribute::new("value").answered_by(&actor).unwrap_err();
        assert!(matches!(err, ScreenplayError::UnableToAct { .. }));
        assert!(err.to_string().starts_with("Target was not provided for Attribute."));
    }
}
