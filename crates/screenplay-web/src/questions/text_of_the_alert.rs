//! Read the text of an open alert.

use crate::abilities::BrowseTheWeb;
use crate::actions::delivery_error;
use crate::actor::{Actor, Answerable};
use crate::pacing::beat;
use crate::result::ScreenplayResult;

/// The message of the alert, confirm or prompt currently open
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOfTheAlert;

impl Answerable for TextOfTheAlert {
    type Answer = String;

    fn describe(&self) -> String {
        "The text of the alert.".to_string()
    }

    fn answered_by(&self, actor: &Actor) -> ScreenplayResult<String> {
        beat(format!("{actor} reads the text from the alert."));
        BrowseTheWeb::browser_of(actor)?
            .alert_text()
            .map_err(|e| delivery_error("read the alert", &e))
    }
}
