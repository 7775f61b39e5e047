//! Read the browser's cookies.

use crate::abilities::BrowseTheWeb;
use crate::actions::delivery_error;
use crate::actor::{Actor, Answerable};
use crate::pacing::beat;
use crate::result::ScreenplayResult;
use std::collections::BTreeMap;

/// Every cookie visible to the current page, as name to value
#[derive(Debug, Clone, Copy, Default)]
pub struct Cookies;

impl Answerable for Cookies {
    type Answer = BTreeMap<String, String>;

    fn describe(&self) -> String {
        "The browser's cookies.".to_string()
    }

    fn answered_by(&self, actor: &Actor) -> ScreenplayResult<BTreeMap<String, String>> {
        beat(format!("{actor} inspects their web browser's cookies..."));
        let cookies = BrowseTheWeb::browser_of(actor)?
            .cookies()
            .map_err(|e| delivery_error("read the cookies", &e))?;
        Ok(cookies.into_iter().map(|c| (c.name, c.value)).collect())
    }
}
