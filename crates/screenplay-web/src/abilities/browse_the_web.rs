//! The ability to drive a web browser.

use crate::actor::{Ability, Actor};
use crate::driver::{Browser, Capabilities};
use crate::result::{ScreenplayError, ScreenplayResult};
use crate::settings::Settings;
use std::any::Any;
use std::fmt;

/// Appium hub used when `APPIUM_HUB_URL` is not set
pub const DEFAULT_APPIUM_HUB_URL: &str = "http://localhost:4723/wd/hub";

/// Holds the actor's browser session and the settings actions run with
///
/// ```text
/// let perry = Actor::named("Perry").who_can(BrowseTheWeb::using_firefox()?);
/// let perry = Actor::named("Perry").who_can(BrowseTheWeb::using(browser));
/// ```
#[derive(Debug)]
pub struct BrowseTheWeb {
    browser: Browser,
    settings: Settings,
    forgotten: bool,
}

impl BrowseTheWeb {
    /// Use an already-configured session, with default settings
    pub fn using(browser: impl Into<Browser>) -> Self {
        Self {
            browser: browser.into(),
            settings: Settings::default(),
            forgotten: false,
        }
    }

    /// Replace the settings
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// The session
    #[must_use]
    pub const fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Timeouts and chain duration
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The browser of an actor who can browse the web
    pub fn browser_of(actor: &Actor) -> ScreenplayResult<&Browser> {
        Ok(actor.ability_to::<Self>()?.browser())
    }

    /// The settings of an actor who can browse the web
    pub fn settings_of(actor: &Actor) -> ScreenplayResult<&Settings> {
        Ok(actor.ability_to::<Self>()?.settings())
    }

    /// Capabilities for Safari on an iOS device behind Appium
    pub fn ios_capabilities<F>(lookup: F) -> ScreenplayResult<Capabilities>
    where
        F: Fn(&str) -> Option<String>,
    {
        let version = lookup("IOS_DEVICE_VERSION").ok_or_else(|| {
            ScreenplayError::browsing("IOS_DEVICE_VERSION Environment variable must be set.")
        })?;
        let device = lookup("IOS_DEVICE_NAME").unwrap_or_else(|| "iPhone Simulator".to_string());
        Ok(Capabilities::new()
            .set("platformName", "iOS")
            .set("appium:platformVersion", version)
            .set("appium:deviceName", device)
            .set("appium:automationName", "xcuitest")
            .set("browserName", "Safari"))
    }

    /// Capabilities for Chrome on an Android device behind Appium
    pub fn android_capabilities<F>(lookup: F) -> ScreenplayResult<Capabilities>
    where
        F: Fn(&str) -> Option<String>,
    {
        let version = lookup("ANDROID_DEVICE_VERSION").ok_or_else(|| {
            ScreenplayError::browsing("ANDROID_DEVICE_VERSION environment variable must be set.")
        })?;
        let device =
            lookup("ANDROID_DEVICE_NAME").unwrap_or_else(|| "Android Emulator".to_string());
        Ok(Capabilities::new()
            .set("platformName", "Android")
            .set("appium:platformVersion", version)
            .set("appium:deviceName", device)
            .set("appium:automationName", "UIAutomator2")
            .set("browserName", "Chrome"))
    }

    /// Appium hub URL from the lookup, or the default
    pub fn appium_hub_url<F>(lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("APPIUM_HUB_URL").unwrap_or_else(|| DEFAULT_APPIUM_HUB_URL.to_string())
    }
}

#[cfg(feature = "remote")]
mod factories {
    use super::BrowseTheWeb;
    use crate::driver::{Browser, Capabilities, DriverKind, RemoteDriver, WebDriverError};
    use crate::result::{ScreenplayError, ScreenplayResult};

    fn browsing(err: WebDriverError) -> ScreenplayError {
        ScreenplayError::browsing(format!("Could not start the browser: {err}"))
    }

    fn env(key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    impl BrowseTheWeb {
        fn start(kind: DriverKind, capabilities: &Capabilities) -> ScreenplayResult<Self> {
            let driver = RemoteDriver::start(kind, capabilities).map_err(browsing)?;
            Ok(Self::using(Browser::new(driver)))
        }

        /// Launch `chromedriver` and open Chrome
        pub fn using_chrome() -> ScreenplayResult<Self> {
            Self::start(DriverKind::Chrome, &Capabilities::chrome())
        }

        /// Launch `geckodriver` and open Firefox
        pub fn using_firefox() -> ScreenplayResult<Self> {
            Self::start(DriverKind::Firefox, &Capabilities::firefox())
        }

        /// Launch `safaridriver` and open Safari
        pub fn using_safari() -> ScreenplayResult<Self> {
            Self::start(DriverKind::Safari, &Capabilities::safari())
        }

        /// Connect to any W3C endpoint
        pub fn using_remote(hub_url: &str, capabilities: &Capabilities) -> ScreenplayResult<Self> {
            let driver = RemoteDriver::connect(hub_url, capabilities).map_err(browsing)?;
            Ok(Self::using(Browser::new(driver)))
        }

        /// Safari on iOS through Appium; reads `APPIUM_HUB_URL`,
        /// `IOS_DEVICE_VERSION` (required) and `IOS_DEVICE_NAME`
        pub fn using_ios() -> ScreenplayResult<Self> {
            let capabilities = Self::ios_capabilities(env)?;
            Self::using_remote(&Self::appium_hub_url(env), &capabilities)
        }

        /// Chrome on Android through Appium; reads `APPIUM_HUB_URL`,
        /// `ANDROID_DEVICE_VERSION` (required) and `ANDROID_DEVICE_NAME`
        pub fn using_android() -> ScreenplayResult<Self> {
            let capabilities = Self::android_capabilities(env)?;
            Self::using_remote(&Self::appium_hub_url(env), &capabilities)
        }
    }
}

impl fmt::Display for BrowseTheWeb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Browse the Web")
    }
}

impl Ability for BrowseTheWeb {
    fn as_any(&self) -> &dyn Any {
        self
    }

    /// Quit the browser; later calls do nothing
    fn forget(&mut self) -> ScreenplayResult<()> {
        if self.forgotten {
            return Ok(());
        }
        self.forgotten = true;
        self.browser
            .quit()
            .map_err(|e| ScreenplayError::browsing(format!("Could not quit the browser: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MockDriver;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    mod session_tests {
        use super::*;

        #[test]
        fn test_display() {
            let ability = BrowseTheWeb::using(Browser::new(MockDriver::new()));
            assert_eq!(ability.to_string(), "Browse the Web");
        }

        #[test]
        fn test_forget_quits_once() {
            let mock = Arc::new(MockDriver::new());
            let mut ability = BrowseTheWeb::using(Arc::clone(&mock));
            ability.forget().unwrap();
            ability.forget().unwrap();
            assert_eq!(mock.quit_count(), 1);
        }

        #[test]
        fn test_actor_exit_quits_browser() {
            let mock = Arc::new(MockDriver::new());
            let mut actor = Actor::named("Perry").who_can(BrowseTheWeb::using(Arc::clone(&mock)));
            actor.exit().unwrap();
            assert_eq!(mock.quit_count(), 1);
        }

        #[test]
        fn test_settings_travel_with_the_ability() {
            let settings = Settings::default().with_chain_duration(Duration::from_millis(42));
            let actor = Actor::named("Perry")
                .who_can(BrowseTheWeb::using(Browser::new(MockDriver::new())).with_settings(settings));
            assert_eq!(
                BrowseTheWeb::settings_of(&actor).unwrap().chain_duration,
                Duration::from_millis(42)
            );
        }
    }

    mod mobile_tests {
        use super::*;

        #[test]
        fn test_ios_requires_version() {
            let err = BrowseTheWeb::ios_capabilities(env(&[])).unwrap_err();
            assert!(matches!(err, ScreenplayError::Browsing { .. }));
            assert_eq!(err.to_string(), "IOS_DEVICE_VERSION Environment variable must be set.");
        }

        #[test]
        fn test_android_requires_version() {
            let err = BrowseTheWeb::android_capabilities(env(&[])).unwrap_err();
            assert_eq!(
                err.to_string(),
                "ANDROID_DEVICE_VERSION environment variable must be set."
            );
        }

        #[test]
        fn test_ios_defaults() {
            let caps = BrowseTheWeb::ios_capabilities(env(&[("IOS_DEVICE_VERSION", "17.2")])).unwrap();
            assert_eq!(caps.get("platformName"), Some(&json!("iOS")));
            assert_eq!(caps.get("appium:platformVersion"), Some(&json!("17.2")));
            assert_eq!(caps.get("appium:deviceName"), Some(&json!("iPhone Simulator")));
            assert_eq!(caps.get("appium:automationName"), Some(&json!("xcuitest")));
            assert_eq!(caps.get("browserName"), Some(&json!("Safari")));
        }

        #[test]
        fn test_android_device_name_override() {
            let caps = BrowseTheWeb::android_capabilities(env(&[
                ("ANDROID_DEVICE_VERSION", "14"),
                ("ANDROID_DEVICE_NAME", "Pixel 8"),
            ]))
            .unwrap();
            assert_eq!(caps.get("appium:deviceName"), Some(&json!("Pixel 8")));
            assert_eq!(caps.get("appium:automationName"), Some(&json!("UIAutomator2")));
        }

        #[test]
        fn test_hub_url() {
            assert_eq!(BrowseTheWeb::appium_hub_url(env(&[])), DEFAULT_APPIUM_HUB_URL);
            assert_eq!(
                BrowseTheWeb::appium_hub_url(env(&[("APPIUM_HUB_URL", "http://grid:4444")])),
                "http://grid:4444"
            );
        }
    }
}
