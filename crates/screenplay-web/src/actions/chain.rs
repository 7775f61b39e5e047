//! Group chainable actions into a single gesture.

use crate::abilities::BrowseTheWeb;
use crate::actor::{Actor, Performable};
use crate::pacing::beat;
use crate::protocols::Chainable;
use crate::result::{ScreenplayError, ScreenplayResult};

use super::delivery_error;

/// Perform a series of actions as one native action chain
///
/// ```text
/// actor.attempts_to(&[&Chain::of()
///     .then(MoveMouse::to_the(MENU_ICON))
///     .then(Click::on_the(SUBMENU_LINK))])?;
/// ```
///
/// Every member must be [`Chainable`]. Membership is checked for all
/// members before any step is recorded, so a bad member performs nothing.
#[derive(Debug, Default)]
pub struct Chain {
    actions: Vec<Box<dyn Performable>>,
}

impl Chain {
    /// An empty chain
    #[must_use]
    pub fn of() -> Self {
        Self::default()
    }

    /// Append an action
    #[must_use]
    pub fn then(mut self, action: impl Performable + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    /// Number of member actions
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Performable for Chain {
    fn describe(&self) -> String {
        "Perform a thrilling chain of actions.".to_string()
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} performs a thrilling chain of Actions!"));
        let members = self
            .actions
            .iter()
            .map(|action| {
                action.as_chainable().ok_or_else(|| {
                    ScreenplayError::unable_to_act(format!(
                        "The {} Action cannot be chained.",
                        action.type_name()
                    ))
                })
            })
            .collect::<ScreenplayResult<Vec<&dyn Chainable>>>()?;

        let ability = actor.ability_to::<BrowseTheWeb>()?;
        let mut chain = ability
            .browser()
            .action_chain(ability.settings().chain_duration);
        for member in members {
            member.add_to_chain(actor, &mut chain)?;
        }
        chain
            .perform()
            .map_err(|e| delivery_error("perform the chain of actions", &e))
    }
}
