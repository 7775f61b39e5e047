//! Actions: one type per thing an actor can do in a browser.
//!
//! Every action is a small value object built fluently and executed with
//! [`Actor::attempts_to`]. Those that implement
//! [`Chainable`] can also be sequenced into a single gesture with
//! [`Chain`].

mod accept_alert;
mod chain;
mod clear;
mod click;
mod dismiss_alert;
mod double_click;
mod enter;
mod enter_2fa_token;
mod go_back;
mod go_forward;
mod hold_down;
mod move_mouse;
mod open;
mod pause;
mod refresh_page;
mod release;
mod respond_to_the_prompt;
mod right_click;
mod save_console_log;
mod save_screenshot;
mod select;
mod switch_to;
mod switch_to_tab;
mod wait;

pub use accept_alert::AcceptAlert;
pub use chain::Chain;
pub use clear::Clear;
pub use click::Click;
pub use dismiss_alert::DismissAlert;
pub use double_click::DoubleClick;
pub use enter::Enter;
pub use enter_2fa_token::Enter2FAToken;
pub use go_back::GoBack;
pub use go_forward::GoForward;
pub use hold_down::HoldDown;
pub use move_mouse::MoveMouse;
pub use open::Open;
pub use pause::Pause;
pub use refresh_page::RefreshPage;
pub use release::Release;
pub use respond_to_the_prompt::RespondToThePrompt;
pub use right_click::RightClick;
pub use save_console_log::SaveConsoleLog;
pub use save_screenshot::SaveScreenshot;
pub use select::{Select, SelectByIndex, SelectByText, SelectByValue};
pub use switch_to::SwitchTo;
pub use switch_to_tab::SwitchToTab;
pub use wait::Wait;

use crate::abilities::BrowseTheWeb;
use crate::actor::Actor;
use crate::driver::WebDriverError;
use crate::protocols::Chainable;
use crate::result::{ScreenplayError, ScreenplayResult};
use crate::target::Target;

/// `Encountered an issue while attempting to {what}: {kind}`
pub(crate) fn delivery_error(what: impl std::fmt::Display, err: &WebDriverError) -> ScreenplayError {
    ScreenplayError::delivery(format!(
        "Encountered an issue while attempting to {what}: {}",
        err.kind()
    ))
}

/// ` on the {target}` when there is one
pub(crate) fn on_the(target: Option<&Target>) -> String {
    target.map_or_else(String::new, |t| format!(" on the {t}"))
}

/// Target name, or `None`
pub(crate) fn name_of(target: Option<&Target>) -> String {
    target.map_or_else(|| "None".to_string(), ToString::to_string)
}

/// Run a single chainable action as its own one-action chain
pub(crate) fn perform_alone(
    actor: &Actor,
    action: &dyn Chainable,
    what: impl std::fmt::Display,
) -> ScreenplayResult<()> {
    let ability = actor.ability_to::<BrowseTheWeb>()?;
    let mut chain = ability
        .browser()
        .action_chain(ability.settings().chain_duration);
    action.add_to_chain(actor, &mut chain)?;
    chain.perform().map_err(|e| delivery_error(what, &e))
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for action tests.

    use crate::abilities::BrowseTheWeb;
    use crate::actor::Actor;
    use crate::driver::{Browser, By, ElementId, MockDriver, MockElement};
    use crate::settings::Settings;
    use crate::target::Target;
    use std::sync::Arc;
    use std::time::Duration;

    /// An actor who can browse a fresh mock page
    pub fn perry() -> (Actor, Arc<MockDriver>) {
        let mock = Arc::new(MockDriver::new());
        let settings = Settings::default()
            .with_timeout(Duration::from_millis(50))
            .with_polling(Duration::from_millis(5));
        let actor = Actor::named("Perry")
            .who_can(BrowseTheWeb::using(Browser::from(Arc::clone(&mock))).with_settings(settings));
        (actor, mock)
    }

    /// Register `tag` under `#id` and return a target for it
    pub fn element(mock: &MockDriver, id: &str, element: MockElement) -> (Target, ElementId) {
        let selector = format!("#{id}");
        let element_id = mock.add_element(By::CssSelector, &selector, element);
        (Target::the(id.replace('_', " ")).located_by(selector), element_id)
    }
}
