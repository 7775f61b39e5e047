//! Refresh the page.

use super::delivery_error;
use crate::abilities::BrowseTheWeb;
use crate::actor::{Actor, Performable};
use crate::pacing::beat;
use crate::result::ScreenplayResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshPage;

impl RefreshPage {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Performable for RefreshPage {
    fn describe(&self) -> String {
        "Refresh the page.".to_string()
    }

    fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        beat(format!("{actor} refreshes the page."));
        BrowseTheWeb::browser_of(actor)?
            .refresh()
            .map_err(|e| delivery_error("refresh the page", &e))
    }
}
