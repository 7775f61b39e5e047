//! Resolutions: expected outcomes checked with `See`.
//!
//! The element resolutions judge the `Option<WebElement>` answered by the
//! `Element` question; the plain ones judge strings, counts and the like.

mod base;
mod element;
mod matchers;

pub use base::{ContainsTheText, IsEqualTo, ReadsExactly};
pub use element::{
    Clickable, Displayed, Enabled, Exist, Exists, Invisible, IsClickable, IsDisplayed, IsEnabled,
    IsInvisible, IsNotDisplayed, IsPresent, IsVisible, NotDisplayed, Present, Visible,
};
pub use matchers::{IsClickableElement, IsInvisibleElement, IsPresentElement, IsVisibleElement};
