//! Abilities an actor can be granted.

mod authenticate_with_2fa;
mod browse_the_web;

pub use authenticate_with_2fa::AuthenticateWith2FA;
pub use browse_the_web::{BrowseTheWeb, DEFAULT_APPIUM_HUB_URL};
