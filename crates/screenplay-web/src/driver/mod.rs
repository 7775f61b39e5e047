//! Browser driver abstraction.
//!
//! [`WebDriver`] is the backend seam: one method per W3C WebDriver command,
//! elements addressed by opaque [`ElementId`]s. [`Browser`] and
//! [`WebElement`] are the handles the rest of the crate works with.
//!
//! Backends:
//! - [`MockDriver`] - in-memory page for unit testing
//! - `RemoteDriver` - W3C WebDriver over HTTP (feature `remote`)

mod action_chain;
mod capabilities;
mod mock;
mod select;
mod wait;

#[cfg(feature = "remote")]
mod remote;
#[cfg(feature = "remote")]
mod service;

pub use action_chain::{to_w3c_actions, ActionChain, ChainStep};
pub use capabilities::Capabilities;
pub use mock::{AlertOutcome, MockDriver, MockElement};
pub use select::SelectElement;
pub use wait::WebDriverWait;

#[cfg(feature = "remote")]
pub use remote::RemoteDriver;
#[cfg(feature = "remote")]
pub use service::{DriverKind, DriverService};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// JSON key identifying a web element reference in W3C payloads
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Result type for driver calls
pub type DriverResult<T> = Result<T, WebDriverError>;

// ============================================================================
// Errors
// ============================================================================

/// Failures reported by a driver backend
#[derive(Debug, Clone, Error)]
pub enum WebDriverError {
    /// No element matched the locator
    #[error("no such element: {message}")]
    NoSuchElement {
        /// Error message
        message: String,
    },

    /// The element is no longer attached to the page
    #[error("stale element reference: {message}")]
    StaleElementReference {
        /// Error message
        message: String,
    },

    /// The element cannot be interacted with
    #[error("element not interactable: {message}")]
    ElementNotInteractable {
        /// Error message
        message: String,
    },

    /// Another element would receive the click
    #[error("element click intercepted: {message}")]
    ElementClickIntercepted {
        /// Error message
        message: String,
    },

    /// The locator is malformed
    #[error("invalid selector: {message}")]
    InvalidSelector {
        /// Error message
        message: String,
    },

    /// Frame switch target does not exist
    #[error("no such frame: {message}")]
    NoSuchFrame {
        /// Error message
        message: String,
    },

    /// Window switch target does not exist
    #[error("no such window: {message}")]
    NoSuchWindow {
        /// Error message
        message: String,
    },

    /// No alert is open
    #[error("no such alert: {message}")]
    NoSuchAlert {
        /// Error message
        message: String,
    },

    /// An alert blocked the command
    #[error("unexpected alert open: {message}")]
    UnexpectedAlertOpen {
        /// Error message
        message: String,
    },

    /// A wait or script ran out of time
    #[error("timeout: {message}")]
    Timeout {
        /// Error message
        message: String,
    },

    /// An argument was rejected by the driver
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// The driver cannot perform this command
    #[error("unsupported operation: {message}")]
    UnsupportedOperation {
        /// Error message
        message: String,
    },

    /// A helper was given an element of the wrong tag
    #[error("unexpected tag name: {message}")]
    UnexpectedTagName {
        /// Error message
        message: String,
    },

    /// A new session could not be started
    #[error("session not created: {message}")]
    SessionNotCreated {
        /// Error message
        message: String,
    },

    /// The session no longer exists
    #[error("invalid session id: {message}")]
    InvalidSession {
        /// Error message
        message: String,
    },

    /// Script execution failed in the page
    #[error("javascript error: {message}")]
    JavascriptError {
        /// Error message
        message: String,
    },

    /// The HTTP connection to the driver failed
    #[error("transport error: {message}")]
    Transport {
        /// Error message
        message: String,
    },

    /// The driver answered with something unexpected
    #[error("protocol error: {message}")]
    Protocol {
        /// Error message
        message: String,
    },
}

impl WebDriverError {
    /// Short name of the failure, embedded in delivery messages
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NoSuchElement { .. } => "NoSuchElementException",
            Self::StaleElementReference { .. } => "StaleElementReferenceException",
            Self::ElementNotInteractable { .. } => "ElementNotInteractableException",
            Self::ElementClickIntercepted { .. } => "ElementClickInterceptedException",
            Self::InvalidSelector { .. } => "InvalidSelectorException",
            Self::NoSuchFrame { .. } => "NoSuchFrameException",
            Self::NoSuchWindow { .. } => "NoSuchWindowException",
            Self::NoSuchAlert { .. } => "NoAlertPresentException",
            Self::UnexpectedAlertOpen { .. } => "UnexpectedAlertPresentException",
            Self::Timeout { .. } => "TimeoutException",
            Self::InvalidArgument { .. } => "InvalidArgumentException",
            Self::UnsupportedOperation { .. } => "UnsupportedOperationException",
            Self::UnexpectedTagName { .. } => "UnexpectedTagNameException",
            Self::SessionNotCreated { .. } => "SessionNotCreatedException",
            Self::InvalidSession { .. } => "InvalidSessionIdException",
            Self::JavascriptError { .. } => "JavascriptException",
            Self::Transport { .. } => "TransportException",
            Self::Protocol { .. } => "WebDriverException",
        }
    }

    /// Map a W3C error code (`value.error` in a failed response)
    #[must_use]
    pub fn from_w3c(code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            "no such element" => Self::NoSuchElement { message },
            "stale element reference" => Self::StaleElementReference { message },
            "element not interactable" => Self::ElementNotInteractable { message },
            "element click intercepted" => Self::ElementClickIntercepted { message },
            "invalid selector" => Self::InvalidSelector { message },
            "no such frame" => Self::NoSuchFrame { message },
            "no such window" => Self::NoSuchWindow { message },
            "no such alert" => Self::NoSuchAlert { message },
            "unexpected alert open" => Self::UnexpectedAlertOpen { message },
            "timeout" | "script timeout" => Self::Timeout { message },
            "invalid argument" => Self::InvalidArgument { message },
            "unsupported operation" | "unknown command" | "unknown method" => {
                Self::UnsupportedOperation { message }
            }
            "session not created" => Self::SessionNotCreated { message },
            "invalid session id" => Self::InvalidSession { message },
            "javascript error" => Self::JavascriptError { message },
            other => Self::Protocol {
                message: format!("{other}: {message}"),
            },
        }
    }

    /// Build a no-such-element error
    pub fn no_such_element(message: impl Into<String>) -> Self {
        Self::NoSuchElement {
            message: message.into(),
        }
    }

    /// Build a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Build a protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Errors an explicit wait keeps polling through
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::NoSuchElement { .. } | Self::StaleElementReference { .. }
        )
    }
}

// ============================================================================
// Locator strategy
// ============================================================================

/// Element location strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum By {
    /// `id` attribute
    #[serde(rename = "id")]
    Id,
    /// XPath expression
    #[serde(rename = "xpath")]
    XPath,
    /// Exact link text
    #[serde(rename = "link text")]
    LinkText,
    /// Partial link text
    #[serde(rename = "partial link text")]
    PartialLinkText,
    /// `name` attribute
    #[serde(rename = "name")]
    Name,
    /// Tag name
    #[serde(rename = "tag name")]
    TagName,
    /// Single class name
    #[serde(rename = "class name")]
    ClassName,
    /// CSS selector
    #[serde(rename = "css selector")]
    CssSelector,
}

impl By {
    /// Every strategy, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Id,
        Self::XPath,
        Self::LinkText,
        Self::PartialLinkText,
        Self::Name,
        Self::TagName,
        Self::ClassName,
        Self::CssSelector,
    ];

    /// W3C strategy name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::XPath => "xpath",
            Self::LinkText => "link text",
            Self::PartialLinkText => "partial link text",
            Self::Name => "name",
            Self::TagName => "tag name",
            Self::ClassName => "class name",
            Self::CssSelector => "css selector",
        }
    }

    /// Parse a strategy name
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|by| by.as_str() == name)
    }
}

impl fmt::Display for By {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Session data
// ============================================================================

/// Opaque element reference issued by a backend
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(String);

impl ElementId {
    /// Wrap a backend reference
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Raw reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A browser cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Secure flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    /// HttpOnly flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
    /// Expiry, seconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<u64>,
}

impl Cookie {
    /// A session cookie with only a name and value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: None,
            domain: None,
            secure: None,
            http_only: None,
            expiry: None,
        }
    }
}

/// One entry of a browser log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Severity, e.g. `SEVERE`
    pub level: String,
    /// Log text
    pub message: String,
    /// Milliseconds since the epoch
    #[serde(default)]
    pub timestamp: i64,
}

// ============================================================================
// Backend trait
// ============================================================================

/// A browser automation backend
///
/// Implementations must be thread-safe; every method takes `&self`.
pub trait WebDriver: Send + Sync + fmt::Debug {
    /// All elements matching the locator, possibly none
    fn find_elements(&self, by: By, value: &str) -> DriverResult<Vec<ElementId>>;

    /// First element matching the locator
    fn find_element(&self, by: By, value: &str) -> DriverResult<ElementId> {
        self.find_elements(by, value)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                WebDriverError::no_such_element(format!(
                    "Unable to locate element: {{\"method\":\"{by}\",\"selector\":\"{value}\"}}"
                ))
            })
    }

    /// Elements matching the locator below `parent`
    fn find_elements_from(
        &self,
        parent: &ElementId,
        by: By,
        value: &str,
    ) -> DriverResult<Vec<ElementId>>;

    /// Click the element
    fn element_click(&self, element: &ElementId) -> DriverResult<()>;

    /// Clear an editable element
    fn element_clear(&self, element: &ElementId) -> DriverResult<()>;

    /// Type into the element
    fn element_send_keys(&self, element: &ElementId, text: &str) -> DriverResult<()>;

    /// Rendered text of the element
    fn element_text(&self, element: &ElementId) -> DriverResult<String>;

    /// Attribute value, `None` when absent
    fn element_attribute(&self, element: &ElementId, name: &str) -> DriverResult<Option<String>>;

    /// Whether the element is displayed
    fn element_displayed(&self, element: &ElementId) -> DriverResult<bool>;

    /// Whether the element is enabled
    fn element_enabled(&self, element: &ElementId) -> DriverResult<bool>;

    /// Whether the element (option, checkbox) is selected
    fn element_selected(&self, element: &ElementId) -> DriverResult<bool>;

    /// Lower-case tag name
    fn element_tag_name(&self, element: &ElementId) -> DriverResult<String>;

    /// Navigate to a URL
    fn get(&self, url: &str) -> DriverResult<()>;

    /// History back
    fn back(&self) -> DriverResult<()>;

    /// History forward
    fn forward(&self) -> DriverResult<()>;

    /// Reload the page
    fn refresh(&self) -> DriverResult<()>;

    /// Page title
    fn title(&self) -> DriverResult<String>;

    /// Current URL
    fn current_url(&self) -> DriverResult<String>;

    /// Handles of every open window or tab, in opening order
    fn window_handles(&self) -> DriverResult<Vec<String>>;

    /// Focus a window by handle
    fn switch_to_window(&self, handle: &str) -> DriverResult<()>;

    /// Focus a frame element
    fn switch_to_frame(&self, frame: &ElementId) -> DriverResult<()>;

    /// Focus the top-level document
    fn switch_to_default_content(&self) -> DriverResult<()>;

    /// Text of the open alert
    fn alert_text(&self) -> DriverResult<String>;

    /// Accept the open alert
    fn accept_alert(&self) -> DriverResult<()>;

    /// Dismiss the open alert
    fn dismiss_alert(&self) -> DriverResult<()>;

    /// Type into the open prompt
    fn send_alert_text(&self, text: &str) -> DriverResult<()>;

    /// All cookies visible to the current page
    fn cookies(&self) -> DriverResult<Vec<Cookie>>;

    /// PNG screenshot of the viewport
    fn screenshot_png(&self) -> DriverResult<Vec<u8>>;

    /// Entries of a named log (`browser`, `driver`, ...)
    fn logs(&self, log_type: &str) -> DriverResult<Vec<LogEntry>>;

    /// Execute a recorded gesture sequence as one command
    fn perform_actions(&self, steps: &[ChainStep], duration: Duration) -> DriverResult<()>;

    /// Release every pressed key and button
    fn release_actions(&self) -> DriverResult<()>;

    /// End the session
    fn quit(&self) -> DriverResult<()>;
}

// ============================================================================
// Handles
// ============================================================================

/// A browser session handle, cheap to clone
#[derive(Debug, Clone)]
pub struct Browser {
    driver: Arc<dyn WebDriver>,
}

impl<D: WebDriver + 'static> From<Arc<D>> for Browser {
    fn from(driver: Arc<D>) -> Self {
        Self { driver }
    }
}

impl Browser {
    /// Wrap a backend
    pub fn new(driver: impl WebDriver + 'static) -> Self {
        Self {
            driver: Arc::new(driver),
        }
    }

    /// Wrap an already-shared backend
    #[must_use]
    pub fn from_shared(driver: Arc<dyn WebDriver>) -> Self {
        Self { driver }
    }

    /// The backend
    #[must_use]
    pub fn driver(&self) -> &dyn WebDriver {
        self.driver.as_ref()
    }

    fn element(&self, id: ElementId) -> WebElement {
        WebElement {
            id,
            browser: self.clone(),
        }
    }

    /// First element matching the locator
    pub fn find_element(&self, by: By, value: &str) -> DriverResult<WebElement> {
        let id = self.driver.find_element(by, value)?;
        Ok(self.element(id))
    }

    /// All elements matching the locator
    pub fn find_elements(&self, by: By, value: &str) -> DriverResult<Vec<WebElement>> {
        Ok(self
            .driver
            .find_elements(by, value)?
            .into_iter()
            .map(|id| self.element(id))
            .collect())
    }

    /// Navigate to a URL
    pub fn get(&self, url: &str) -> DriverResult<()> {
        self.driver.get(url)
    }

    /// History back
    pub fn back(&self) -> DriverResult<()> {
        self.driver.back()
    }

    /// History forward
    pub fn forward(&self) -> DriverResult<()> {
        self.driver.forward()
    }

    /// Reload the page
    pub fn refresh(&self) -> DriverResult<()> {
        self.driver.refresh()
    }

    /// Page title
    pub fn title(&self) -> DriverResult<String> {
        self.driver.title()
    }

    /// Current URL
    pub fn current_url(&self) -> DriverResult<String> {
        self.driver.current_url()
    }

    /// Open window handles
    pub fn window_handles(&self) -> DriverResult<Vec<String>> {
        self.driver.window_handles()
    }

    /// Focus a window
    pub fn switch_to_window(&self, handle: &str) -> DriverResult<()> {
        self.driver.switch_to_window(handle)
    }

    /// Focus a frame
    pub fn switch_to_frame(&self, frame: &WebElement) -> DriverResult<()> {
        self.driver.switch_to_frame(&frame.id)
    }

    /// Focus the top-level document
    pub fn switch_to_default_content(&self) -> DriverResult<()> {
        self.driver.switch_to_default_content()
    }

    /// Text of the open alert
    pub fn alert_text(&self) -> DriverResult<String> {
        self.driver.alert_text()
    }

    /// Accept the open alert
    pub fn accept_alert(&self) -> DriverResult<()> {
        self.driver.accept_alert()
    }

    /// Dismiss the open alert
    pub fn dismiss_alert(&self) -> DriverResult<()> {
        self.driver.dismiss_alert()
    }

    /// Type into the open prompt
    pub fn send_alert_text(&self, text: &str) -> DriverResult<()> {
        self.driver.send_alert_text(text)
    }

    /// Cookies of the current page
    pub fn cookies(&self) -> DriverResult<Vec<Cookie>> {
        self.driver.cookies()
    }

    /// Viewport screenshot as PNG bytes
    pub fn screenshot_png(&self) -> DriverResult<Vec<u8>> {
        self.driver.screenshot_png()
    }

    /// Entries of a named log
    pub fn logs(&self, log_type: &str) -> DriverResult<Vec<LogEntry>> {
        self.driver.logs(log_type)
    }

    /// Start a gesture sequence
    #[must_use]
    pub fn action_chain(&self, duration: Duration) -> ActionChain {
        ActionChain::new(self.clone(), duration)
    }

    /// Start an explicit wait
    #[must_use]
    pub fn wait(&self, timeout: Duration, poll: Duration) -> WebDriverWait {
        WebDriverWait::new(self.clone(), timeout, poll)
    }

    /// End the session
    pub fn quit(&self) -> DriverResult<()> {
        self.driver.quit()
    }
}

/// A handle to one element of a [`Browser`]'s page
#[derive(Debug, Clone)]
pub struct WebElement {
    id: ElementId,
    browser: Browser,
}

impl PartialEq for WebElement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl WebElement {
    /// Backend reference
    #[must_use]
    pub const fn id(&self) -> &ElementId {
        &self.id
    }

    /// Owning session
    #[must_use]
    pub const fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Click
    pub fn click(&self) -> DriverResult<()> {
        self.browser.driver.element_click(&self.id)
    }

    /// Clear
    pub fn clear(&self) -> DriverResult<()> {
        self.browser.driver.element_clear(&self.id)
    }

    /// Type text, which may include [`Keys`](crate::keys::Keys) codes
    pub fn send_keys(&self, text: &str) -> DriverResult<()> {
        self.browser.driver.element_send_keys(&self.id, text)
    }

    /// Rendered text
    pub fn text(&self) -> DriverResult<String> {
        self.browser.driver.element_text(&self.id)
    }

    /// Attribute value
    pub fn attribute(&self, name: &str) -> DriverResult<Option<String>> {
        self.browser.driver.element_attribute(&self.id, name)
    }

    /// Whether displayed
    pub fn is_displayed(&self) -> DriverResult<bool> {
        self.browser.driver.element_displayed(&self.id)
    }

    /// Whether enabled
    pub fn is_enabled(&self) -> DriverResult<bool> {
        self.browser.driver.element_enabled(&self.id)
    }

    /// Whether selected
    pub fn is_selected(&self) -> DriverResult<bool> {
        self.browser.driver.element_selected(&self.id)
    }

    /// Lower-case tag name
    pub fn tag_name(&self) -> DriverResult<String> {
        self.browser.driver.element_tag_name(&self.id)
    }

    /// Descendants matching the locator
    pub fn find_elements(&self, by: By, value: &str) -> DriverResult<Vec<Self>> {
        Ok(self
            .browser
            .driver
            .find_elements_from(&self.id, by, value)?
            .into_iter()
            .map(|id| self.browser.element(id))
            .collect())
    }
}
