//! Dismiss a JavaScript alert.

use super::delivery_error;
use crate::abilities::BrowseTheWeb;
use crate::actor::{Actor, Performable};
use crate::driver::WebDriverError;
use crate::pacing::{aside, beat};
use crate::result::ScreenplayResult;

/// Dismiss the open alert
#[derive(Debug, Clone, Copy, Default)]
pub struct DismissAlert;

impl DismissAlert {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Performable for DismissAlert {
    fn describe(&self) -> String {
        "Dismiss the alert.".to_string()
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} dismisses the alert."));
        let browser = BrowseTheWeb::browser_of(actor)?;
        let failed = |e: WebDriverError| delivery_error("dismiss the alert", &e);
        let text = browser.alert_text().map_err(failed)?;
        aside(format!("... the alert says \"{text}\""));
        browser.dismiss_alert().map_err(failed)
    }
}
