//! Pause for a while, on its own or in the middle of a chain.

use crate::actor::{Actor, Performable};
use crate::driver::ActionChain;
use crate::pacing::beat;
use crate::protocols::Chainable;
use crate::result::{ScreenplayError, ScreenplayResult};
use std::time::Duration;

/// Take no action until the duration has passed
///
/// ```text
/// actor.attempts_to(&[&Pause::for_(300.0).seconds_because("it's time for their break")])?;
/// actor.attempts_to(&[&Chain::of()
///     .then(MoveMouse::to_the(DROPDOWN_MENU))
///     .then(Pause::for_(2.0).seconds_because("the menu animation needs to finish"))
///     .then(Click::on_the(SUBMENU_OPTION))])?;
/// ```
///
/// A reason is required, so the log explains every wait.
#[derive(Debug, Clone, PartialEq)]
pub struct Pause {
    number: f64,
    time: Duration,
    unit: &'static str,
    reason: String,
}

impl Pause {
    /// How many units to pause for; the unit is set with the `*_because` methods
    #[must_use]
    pub fn for_(number: f64) -> Self {
        Self {
            number,
            time: Duration::from_secs_f64(number.max(0.0)),
            unit: "seconds",
            reason: String::new(),
        }
    }

    fn because(mut self, reason: &str) -> Self {
        let reason = reason.trim();
        self.reason = if reason.starts_with("because") {
            reason.to_string()
        } else {
            format!("because {reason}")
        };
        self
    }

    #[must_use]
    pub fn seconds_because(mut self, reason: &str) -> Self {
        self.unit = if (self.number - 1.0).abs() < f64::EPSILON {
            "second"
        } else {
            "seconds"
        };
        self.because(reason)
    }

    /// Alias for [`Pause::seconds_because`]
    #[must_use]
    pub fn second_because(self, reason: &str) -> Self {
        self.seconds_because(reason)
    }

    #[must_use]
    pub fn milliseconds_because(mut self, reason: &str) -> Self {
        self.unit = "milliseconds";
        self.time = Duration::from_secs_f64(self.number.max(0.0) / 1000.0);
        self.because(reason)
    }

    /// How long the pause lasts
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.time
    }

    fn check_reason(&self) -> ScreenplayResult<()> {
        if self.reason.is_empty() {
            return Err(ScreenplayError::unable_to_act(
                "Cannot pause without a reason. Use one of .seconds_because(), \
                 .second_because(), or .milliseconds_because().",
            ));
        }
        Ok(())
    }
}

impl Performable for Pause {
    fn describe(&self) -> String {
        format!("Pause for {} {} ({}).", self.number, self.unit, self.reason)
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!(
            "{actor} pauses for {} {} ({}).",
            self.number, self.unit, self.reason
        ));
        self.check_reason()?;
        std::thread::sleep(self.time);
        Ok(())
    }

    fn as_chainable(&self) -> Option<&dyn Chainable> {
        Some(self)
    }
}

impl Chainable for Pause {
    fn add_to_chain(&self, _actor: &Actor, chain: &mut ActionChain) -> ScreenplayResult<()> {
        beat(format!(
            "  Pause for {} {} ({})!",
            self.number, self.unit, self.reason
        ));
        self.check_reason()?;
        chain.pause(self.time);
        Ok(())
    }
}
