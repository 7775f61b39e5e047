//! Wait for the application to fulfill a condition.

use crate::abilities::BrowseTheWeb;
use crate::actor::{Actor, Performable};
use crate::conditions::{
    element_to_be_clickable, invisibility_of_element_located, text_to_be_present_in_element,
    visibility_of_element_located, Condition, WaitArg,
};
use crate::pacing::beat;
use crate::result::{ScreenplayError, ScreenplayResult};
use crate::settings::Settings;
use crate::target::Target;
use std::time::Duration;

/// Poll a condition until it holds or the timeout passes
///
/// ```text
/// actor.attempts_to(&[&Wait::for_the(LOGIN_FORM)])?;
/// actor.attempts_to(&[&Wait::for_the(WELCOME_BANNER).to_contain_text("Welcome!")])?;
/// actor.attempts_to(&[&Wait::for_(CONFETTI).to_disappear()])?;
/// actor.attempts_to(&[&Wait::new(10.0).seconds_for_the(PARADE_FLOATS).to(float_on_by, None)])?;
/// actor.attempts_to(&[&Wait::default()
///     .using(cookies_to_contain, Some("for a cookie that has {0}"))
///     .with_(["delicious=true".into()])])?;
/// ```
///
/// The default condition is [`visibility_of_element_located`]. Without an
/// explicit number of seconds the timeout comes from the actor's
/// [`Settings`]; the polling interval always does.
#[derive(Debug, Clone)]
pub struct Wait {
    timeout: Option<f64>,
    args: Vec<WaitArg>,
    condition: Condition,
    log_detail: Option<String>,
}

impl Default for Wait {
    fn default() -> Self {
        Self {
            timeout: None,
            args: Vec::new(),
            condition: visibility_of_element_located(),
            log_detail: None,
        }
    }
}

impl Wait {
    /// Wait up to `seconds` instead of the configured timeout
    #[must_use]
    pub fn new(seconds: f64) -> Self {
        Self {
            timeout: Some(seconds),
            ..Self::default()
        }
    }

    /// Wait for `target`, with the configured timeout
    pub fn for_the(target: Target) -> Self {
        Self::default().with_([WaitArg::Target(target)])
    }

    /// Alias for [`Wait::for_the`]
    pub fn for_(target: Target) -> Self {
        Self::for_the(target)
    }

    /// Set the target after choosing the seconds
    #[must_use]
    pub fn seconds_for_the(self, target: Target) -> Self {
        self.with_([WaitArg::Target(target)])
    }

    #[must_use]
    pub fn seconds_for(self, target: Target) -> Self {
        self.seconds_for_the(target)
    }

    #[must_use]
    pub fn second_for(self, target: Target) -> Self {
        self.seconds_for_the(target)
    }

    #[must_use]
    pub fn second_for_the(self, target: Target) -> Self {
        self.seconds_for_the(target)
    }

    /// Wait on `condition`. `log_detail` replaces the default log text and
    /// may reference arguments as `{0}`, `{1}`, ...
    #[must_use]
    pub fn using(mut self, condition: Condition, log_detail: Option<&str>) -> Self {
        self.condition = condition;
        self.log_detail = log_detail.map(str::to_string);
        self
    }

    /// Alias for [`Wait::using`]
    #[must_use]
    pub fn to(self, condition: Condition, log_detail: Option<&str>) -> Self {
        self.using(condition, log_detail)
    }

    /// Alias for [`Wait::using`]
    #[must_use]
    pub fn seconds_using(self, condition: Condition, log_detail: Option<&str>) -> Self {
        self.using(condition, log_detail)
    }

    /// Replace the condition's arguments
    #[must_use]
    pub fn with_(mut self, args: impl IntoIterator<Item = WaitArg>) -> Self {
        self.args = args.into_iter().collect();
        self
    }

    #[must_use]
    pub fn to_appear(self) -> Self {
        self.using(visibility_of_element_located(), Some("for the {0} to appear..."))
    }

    #[must_use]
    pub fn to_be_clickable(self) -> Self {
        self.using(element_to_be_clickable(), Some("for the {0} to be clickable..."))
    }

    #[must_use]
    pub fn to_disappear(self) -> Self {
        self.using(
            invisibility_of_element_located(),
            Some("for the {0} to disappear..."),
        )
    }

    /// Wait for the target's text to contain `text`
    #[must_use]
    pub fn to_contain_text(self, text: impl Into<String>) -> Self {
        let mut args = self.args.clone();
        args.push(WaitArg::Text(text.into()));
        self.using(
            text_to_be_present_in_element(),
            Some("for \"{1}\" to appear in the {0}..."),
        )
        .with_(args)
    }

    fn joined_args(&self) -> String {
        self.args
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The log detail with arguments filled in, or a generic description
    #[must_use]
    pub fn log_message(&self) -> String {
        match &self.log_detail {
            Some(detail) => self
                .args
                .iter()
                .enumerate()
                .fold(detail.clone(), |message, (i, arg)| {
                    message.replace(&format!("{{{i}}}"), &arg.to_string())
                }),
            None => format!(
                "using {} with [{}]",
                self.condition.name(),
                self.joined_args()
            ),
        }
    }

    fn timeout_seconds(&self, settings: &Settings) -> f64 {
        self.timeout
            .unwrap_or_else(|| settings.timeout.as_secs_f64())
    }
}

impl Performable for Wait {
    fn describe(&self) -> String {
        format!(
            "Wait {} seconds {}.",
            self.timeout_seconds(&Settings::default()),
            self.log_message()
        )
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        let ability = actor.ability_to::<BrowseTheWeb>()?;
        let settings = ability.settings();
        let seconds = self.timeout_seconds(settings);
        beat(format!(
            "{actor} waits up to {seconds} seconds {}",
            self.log_message()
        ));
        let timeout = Duration::try_from_secs_f64(seconds).map_err(|_| {
            ScreenplayError::unable_to_act(format!(
                "Wait was given an invalid timeout of {seconds} seconds."
            ))
        })?;
        ability
            .browser()
            .wait(timeout, settings.polling)
            .until(|browser| self.condition.check(browser, &self.args))
            .map_err(|e| {
                ScreenplayError::delivery(format!(
                    "Encountered an exception using {} with [{}]: {}",
                    self.condition.name(),
                    self.joined_args(),
                    e.kind()
                ))
            })
    }
}
