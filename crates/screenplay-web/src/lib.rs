//! screenplay-web: Screenplay-pattern browser automation
//!
//! Tests are written as what an actor does and what they should see. Each
//! step is a small value object translated into W3C WebDriver calls.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        screenplay-web                            │
//! ├──────────────────────────────────────────────────────────────────┤
//! │   ┌──────────┐  attempts_to  ┌──────────┐                        │
//! │   │  Actor   │──────────────►│ Actions  │──┐                     │
//! │   │          │  should(See)  ├──────────┤  │  Target   ┌───────┐ │
//! │   │ abilities│──────────────►│Questions │──┼──────────►│Browser│ │
//! │   └──────────┘               ├──────────┤  │           └───┬───┘ │
//! │                              │Resolution│  │               │     │
//! │                              └──────────┘  │   ┌───────────▼───┐ │
//! │                                            └──►│ WebDriver     │ │
//! │                                                │ mock | remote │ │
//! │                                                └───────────────┘ │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```text
//! let actor = Actor::named("Perry").who_can(BrowseTheWeb::using_chrome()?);
//! actor.attempts_to(&[
//!     &Open::their_browser_on("https://example.com/login"),
//!     &Enter::the_text("perry").into_the(USERNAME_FIELD),
//!     &Enter::the_password("hunter2").into_the(PASSWORD_FIELD).then_hit(&[Keys::ENTER]),
//!     &Wait::for_the(WELCOME_BANNER).to_appear(),
//! ])?;
//! actor.should(&[&See::the(Text::of_the(WELCOME_BANNER), ReadsExactly::the("Welcome!"))])?;
//! ```

#![cfg_attr(test, allow(clippy::large_stack_frames))]

/// Abilities: browsing the web and producing one-time passwords
pub mod abilities;

/// Actions an actor performs in the browser
pub mod actions;

/// Actor, `See` and the traits every step implements
pub mod actor;

/// Named wait conditions usable with `Wait`
pub mod conditions;

/// WebDriver backends and browser handles
pub mod driver;

/// Key codes and their readable names
pub mod keys;

/// Narration through `tracing`
pub mod pacing;

/// Chainable and ErrorKeeper capabilities
pub mod protocols;

/// Questions about browser and page state
pub mod questions;

/// Expected outcomes for questions
pub mod resolutions;

mod result;

/// Timeouts, polling and gesture duration
pub mod settings;

/// Named element locators
pub mod target;

pub use result::{ScreenplayError, ScreenplayResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::abilities::*;
    pub use super::actions::*;
    pub use super::actor::{
        Ability, Actor, Answerable, AttachTheFile, Attachment, Matcher, Performable, Resolution,
        See,
    };
    pub use super::conditions::*;
    pub use super::driver::{Browser, By, Cookie, DriverResult, WebDriverError, WebElement};
    pub use super::keys::Keys;
    pub use super::protocols::*;
    pub use super::questions::*;
    pub use super::resolutions::*;
    pub use super::settings::Settings;
    pub use super::target::{IntoLocator, LocatorError, Target};
    pub use super::{ScreenplayError, ScreenplayResult};
}
