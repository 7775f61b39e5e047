//! Enter a two-factor authentication token into a text field.

use super::Enter;
use crate::abilities::AuthenticateWith2FA;
use crate::actor::{Actor, Performable};
use crate::driver::ActionChain;
use crate::pacing::beat;
use crate::protocols::Chainable;
use crate::result::ScreenplayResult;
use crate::target::Target;

/// Type the actor's current 2FA token into an input
///
/// Needs both [`BrowseTheWeb`](crate::abilities::BrowseTheWeb) and
/// [`AuthenticateWith2FA`].
#[derive(Debug, Clone)]
pub struct Enter2FAToken {
    target: Target,
}

impl Enter2FAToken {
    pub fn into_the(target: Target) -> Self {
        Self { target }
    }

    pub fn into(target: Target) -> Self {
        Self::into_the(target)
    }
}

impl Performable for Enter2FAToken {
    fn describe(&self) -> String {
        format!("Enter a 2FA token into the {}.", self.target)
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} enters their 2FA token into the {}.", self.target));
        let token = actor.uses_ability_to::<AuthenticateWith2FA>()?.to_get_token()?;
        actor.attempts_to(&[&Enter::the_secret(token).into_the(self.target.clone())])
    }

    fn as_chainable(&self) -> Option<&dyn Chainable> {
        Some(self)
    }
}

impl Chainable for Enter2FAToken {
    fn add_to_chain(&self, actor: &Actor, chain: &mut ActionChain) -> ScreenplayResult<()> {
        beat(format!("Enter their 2FA token into the {}!", self.target));
        let token = actor.uses_ability_to::<AuthenticateWith2FA>()?.to_get_token()?;
        chain.send_keys_to_element(&self.target.found_by(actor)?, &token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{element, perry};
    use crate::driver::{ChainStep, MockElement};
    use crate::result::ScreenplayError;

    #[test]
    fn test_types_the_token() {
        let (actor, mock) = perry();
        let actor = actor.who_can(AuthenticateWith2FA::using_token("424242"));
        let (target, id) = element(&mock, "otp_input", MockElement::new("input"));
        let action = Enter2FAToken::into(target);
        assert_eq!(action.describe(), "Enter a 2FA token into the otp input.");
        actor.attempts_to(&[&action]).unwrap();
        assert_eq!(
            mock.element(&id).unwrap().attributes.get("value").map(String::as_str),
            Some("424242")
        );
    }

    #[test]
    fn test_needs_the_2fa_ability() {
        let (actor, mock) = perry();
        let (target, _) = element(&mock, "otp_input", MockElement::new("input"));
        let err = actor.attempts_to(&[&Enter2FAToken::into_the(target)]).unwrap_err();
        assert!(matches!(err, ScreenplayError::MissingAbility { .. }));
        assert!(!mock.was_called("element_send_keys"));
    }

    #[test]
    fn test_chained_token() {
        let (actor, mock) = perry();
        let actor = actor.who_can(AuthenticateWith2FA::using_token("000111"));
        let (target, id) = element(&mock, "otp_input", MockElement::new("input"));
        let browser = crate::abilities::BrowseTheWeb::browser_of(&actor).unwrap();
        let mut chain = browser.action_chain(std::time::Duration::ZERO);
        Enter2FAToken::into_the(target)
            .add_to_chain(&actor, &mut chain)
            .unwrap();
        assert_eq!(
            chain.steps(),
            &[ChainStep::SendKeys {
                element: Some(id),
                text: "000111".to_string()
            }]
        );
    }
}
