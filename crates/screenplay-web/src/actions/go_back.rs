//! Press the browser's back button.

use super::delivery_error;
use crate::abilities::BrowseTheWeb;
use crate::actor::{Actor, Performable};
use crate::pacing::beat;
use crate::result::ScreenplayResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoBack;

impl GoBack {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Performable for GoBack {
    fn describe(&self) -> String {
        "Go back.".to_string()
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} goes back."));
        BrowseTheWeb::browser_of(actor)?
            .back()
            .map_err(|e| delivery_error("go back", &e))
    }
}
