//! In-memory backend for unit tests.
//!
//! `MockDriver` holds a tiny page model: elements registered under the
//! locators that find them, plus session state (URL, windows, alert,
//! cookies). Every call is recorded as `"operation:argument"` and any
//! operation can be made to fail with [`MockDriver::fail_on`].

use super::{By, ChainStep, Cookie, DriverResult, ElementId, LogEntry, WebDriver, WebDriverError};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// 8-byte PNG signature, the default screenshot payload
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// A fake DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockElement {
    /// Lower-case tag name
    pub tag: String,
    /// Rendered text
    pub text: String,
    /// Attributes; typing appends to `value`
    pub attributes: BTreeMap<String, String>,
    /// Displayed flag
    pub displayed: bool,
    /// Enabled flag
    pub enabled: bool,
    /// Selected flag
    pub selected: bool,
}

impl MockElement {
    /// Visible, enabled, unselected element
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            text: String::new(),
            attributes: BTreeMap::new(),
            displayed: true,
            enabled: true,
            selected: false,
        }
    }

    /// Set rendered text
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set an attribute
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Not displayed
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.displayed = false;
        self
    }

    /// Not enabled
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Already selected
    #[must_use]
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

/// What happened to the last alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    /// `accept_alert` closed it
    Accepted,
    /// `dismiss_alert` closed it
    Dismissed,
}

#[derive(Debug, Default)]
struct MockState {
    next_id: usize,
    elements: HashMap<ElementId, MockElement>,
    locators: HashMap<(By, String), Vec<ElementId>>,
    children: HashMap<(ElementId, By, String), Vec<ElementId>>,
    parents: HashMap<ElementId, ElementId>,
    failures: HashMap<String, WebDriverError>,
    calls: Vec<String>,
    url: String,
    title: String,
    back_stack: Vec<String>,
    forward_stack: Vec<String>,
    handles: Vec<String>,
    current_handle: Option<String>,
    frame: Option<ElementId>,
    alert: Option<String>,
    prompt_input: Option<String>,
    alert_outcome: Option<AlertOutcome>,
    cookies: Vec<Cookie>,
    screenshot: Option<Vec<u8>>,
    logs: HashMap<String, Vec<LogEntry>>,
    performed: Vec<(Vec<ChainStep>, Duration)>,
    quit_count: usize,
}

impl MockState {
    fn element(&self, id: &ElementId) -> DriverResult<&MockElement> {
        self.elements
            .get(id)
            .ok_or_else(|| WebDriverError::StaleElementReference {
                message: format!("element {id} is not attached to the page"),
            })
    }

    fn element_mut(&mut self, id: &ElementId) -> DriverResult<&mut MockElement> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| WebDriverError::StaleElementReference {
                message: format!("element {id} is not attached to the page"),
            })
    }

    fn insert(&mut self, element: MockElement) -> ElementId {
        self.next_id += 1;
        let id = ElementId::new(format!("mock-element-{}", self.next_id));
        self.elements.insert(id.clone(), element);
        id
    }

    /// Selecting an option in a single select deselects its siblings
    fn select_option(&mut self, id: &ElementId) {
        if let Some(parent) = self.parents.get(id).cloned() {
            let multiple = self
                .elements
                .get(&parent)
                .is_some_and(|p| p.attributes.contains_key("multiple"));
            if !multiple {
                let siblings: Vec<ElementId> = self
                    .children
                    .iter()
                    .filter(|((p, _, _), _)| *p == parent)
                    .flat_map(|(_, ids)| ids.iter().cloned())
                    .collect();
                for sibling in siblings {
                    if let Some(el) = self.elements.get_mut(&sibling) {
                        el.selected = false;
                    }
                }
            }
        }
        if let Some(el) = self.elements.get_mut(id) {
            el.selected = true;
        }
    }
}

/// Mock backend for unit testing
#[derive(Debug, Default)]
pub struct MockDriver {
    state: Mutex<MockState>,
}

impl MockDriver {
    /// Empty page with one window
    #[must_use]
    pub fn new() -> Self {
        let driver = Self::default();
        {
            let mut state = driver.lock();
            state.handles = vec!["window-1".to_string()];
            state.current_handle = Some("window-1".to_string());
        }
        driver
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a call and apply any injected failure
    fn call(&self, op: &str, arg: &str) -> DriverResult<MutexGuard<'_, MockState>> {
        let mut state = self.lock();
        state.calls.push(format!("{op}:{arg}"));
        if let Some(err) = state.failures.get(op) {
            return Err(err.clone());
        }
        Ok(state)
    }

    // ------------------------------------------------------------------
    // Page setup
    // ------------------------------------------------------------------

    /// Register an element found by `(by, selector)`; repeated calls with
    /// the same locator add more matches
    pub fn add_element(&self, by: By, selector: &str, element: MockElement) -> ElementId {
        let mut state = self.lock();
        let id = state.insert(element);
        state
            .locators
            .entry((by, selector.to_string()))
            .or_default()
            .push(id.clone());
        id
    }

    /// Register a descendant of `parent`
    pub fn add_child(
        &self,
        parent: &ElementId,
        by: By,
        selector: &str,
        element: MockElement,
    ) -> ElementId {
        let mut state = self.lock();
        let id = state.insert(element);
        state
            .children
            .entry((parent.clone(), by, selector.to_string()))
            .or_default()
            .push(id.clone());
        state.parents.insert(id.clone(), parent.clone());
        id
    }

    /// Detach every element found by the locator
    pub fn remove_elements(&self, by: By, selector: &str) {
        let mut state = self.lock();
        if let Some(ids) = state.locators.remove(&(by, selector.to_string())) {
            for id in ids {
                state.elements.remove(&id);
            }
        }
    }

    /// Change an element's displayed flag
    pub fn set_displayed(&self, id: &ElementId, displayed: bool) {
        if let Some(el) = self.lock().elements.get_mut(id) {
            el.displayed = displayed;
        }
    }

    /// Change an element's enabled flag
    pub fn set_enabled(&self, id: &ElementId, enabled: bool) {
        if let Some(el) = self.lock().elements.get_mut(id) {
            el.enabled = enabled;
        }
    }

    /// Change an element's text
    pub fn set_text(&self, id: &ElementId, text: &str) {
        if let Some(el) = self.lock().elements.get_mut(id) {
            el.text = text.to_string();
        }
    }

    pub fn set_title(&self, title: &str) {
        self.lock().title = title.to_string();
    }

    pub fn set_url(&self, url: &str) {
        self.lock().url = url.to_string();
    }

    /// Replace the open windows; focus moves to the first
    pub fn set_window_handles(&self, handles: &[&str]) {
        let mut state = self.lock();
        state.handles = handles.iter().map(|h| (*h).to_string()).collect();
        state.current_handle = state.handles.first().cloned();
    }

    /// Open an alert or prompt
    pub fn set_alert(&self, text: &str) {
        let mut state = self.lock();
        state.alert = Some(text.to_string());
        state.prompt_input = None;
        state.alert_outcome = None;
    }

    pub fn add_cookie(&self, cookie: Cookie) {
        self.lock().cookies.push(cookie);
    }

    pub fn set_screenshot(&self, png: Vec<u8>) {
        self.lock().screenshot = Some(png);
    }

    pub fn add_log(&self, log_type: &str, entry: LogEntry) {
        self.lock()
            .logs
            .entry(log_type.to_string())
            .or_default()
            .push(entry);
    }

    /// Make every later call of `op` fail with `err`
    pub fn fail_on(&self, op: &str, err: WebDriverError) {
        self.lock().failures.insert(op.to_string(), err);
    }

    /// Remove injected failures
    pub fn clear_failures(&self) {
        self.lock().failures.clear();
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    /// Call history for verification
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    /// Check if an operation was called
    #[must_use]
    pub fn was_called(&self, op: &str) -> bool {
        let prefix = format!("{op}:");
        self.lock().calls.iter().any(|c| c.starts_with(&prefix))
    }

    /// Snapshot of an element
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<MockElement> {
        self.lock().elements.get(id).cloned()
    }

    /// Focused window handle
    #[must_use]
    pub fn current_window(&self) -> Option<String> {
        self.lock().current_handle.clone()
    }

    /// Focused frame, `None` for the top-level document
    #[must_use]
    pub fn current_frame(&self) -> Option<ElementId> {
        self.lock().frame.clone()
    }

    /// Whether an alert is open
    #[must_use]
    pub fn alert_is_open(&self) -> bool {
        self.lock().alert.is_some()
    }

    /// How the last alert was closed
    #[must_use]
    pub fn alert_outcome(&self) -> Option<AlertOutcome> {
        self.lock().alert_outcome
    }

    /// Text typed into the last prompt
    #[must_use]
    pub fn prompt_input(&self) -> Option<String> {
        self.lock().prompt_input.clone()
    }

    /// Every performed action chain with its pointer-move duration
    #[must_use]
    pub fn performed_chains(&self) -> Vec<(Vec<ChainStep>, Duration)> {
        self.lock().performed.clone()
    }

    /// Number of `quit` calls
    #[must_use]
    pub fn quit_count(&self) -> usize {
        self.lock().quit_count
    }
}

impl WebDriver for MockDriver {
    fn find_elements(&self, by: By, value: &str) -> DriverResult<Vec<ElementId>> {
        let state = self.call("find_elements", &format!("{by}={value}"))?;
        Ok(state
            .locators
            .get(&(by, value.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn find_elements_from(
        &self,
        parent: &ElementId,
        by: By,
        value: &str,
    ) -> DriverResult<Vec<ElementId>> {
        let state = self.call("find_elements_from", &format!("{parent}/{by}={value}"))?;
        state.element(parent)?;
        Ok(state
            .children
            .get(&(parent.clone(), by, value.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn element_click(&self, element: &ElementId) -> DriverResult<()> {
        let mut state = self.call("element_click", element.as_str())?;
        let el = state.element(element)?;
        if !el.displayed {
            return Err(WebDriverError::ElementNotInteractable {
                message: format!("element {element} is not displayed"),
            });
        }
        if el.tag == "option" {
            state.select_option(element);
        }
        Ok(())
    }

    fn element_clear(&self, element: &ElementId) -> DriverResult<()> {
        let mut state = self.call("element_clear", element.as_str())?;
        state.element_mut(element)?.attributes.remove("value");
        Ok(())
    }

    fn element_send_keys(&self, element: &ElementId, text: &str) -> DriverResult<()> {
        let mut state = self.call("element_send_keys", &format!("{element}={text}"))?;
        state
            .element_mut(element)?
            .attributes
            .entry("value".to_string())
            .or_default()
            .push_str(text);
        Ok(())
    }

    fn element_text(&self, element: &ElementId) -> DriverResult<String> {
        let state = self.call("element_text", element.as_str())?;
        Ok(state.element(element)?.text.clone())
    }

    fn element_attribute(&self, element: &ElementId, name: &str) -> DriverResult<Option<String>> {
        let state = self.call("element_attribute", &format!("{element}.{name}"))?;
        Ok(state.element(element)?.attributes.get(name).cloned())
    }

    fn element_displayed(&self, element: &ElementId) -> DriverResult<bool> {
        let state = self.call("element_displayed", element.as_str())?;
        Ok(state.element(element)?.displayed)
    }

    fn element_enabled(&self, element: &ElementId) -> DriverResult<bool> {
        let state = self.call("element_enabled", element.as_str())?;
        Ok(state.element(element)?.enabled)
    }

    fn element_selected(&self, element: &ElementId) -> DriverResult<bool> {
        let state = self.call("element_selected", element.as_str())?;
        Ok(state.element(element)?.selected)
    }

    fn element_tag_name(&self, element: &ElementId) -> DriverResult<String> {
        let state = self.call("element_tag_name", element.as_str())?;
        Ok(state.element(element)?.tag.clone())
    }

    fn get(&self, url: &str) -> DriverResult<()> {
        let mut state = self.call("get", url)?;
        let previous = std::mem::replace(&mut state.url, url.to_string());
        if !previous.is_empty() {
            state.back_stack.push(previous);
        }
        state.forward_stack.clear();
        Ok(())
    }

    fn back(&self) -> DriverResult<()> {
        let mut state = self.call("back", "")?;
        if let Some(url) = state.back_stack.pop() {
            let current = std::mem::replace(&mut state.url, url);
            state.forward_stack.push(current);
        }
        Ok(())
    }

    fn forward(&self) -> DriverResult<()> {
        let mut state = self.call("forward", "")?;
        if let Some(url) = state.forward_stack.pop() {
            let current = std::mem::replace(&mut state.url, url);
            state.back_stack.push(current);
        }
        Ok(())
    }

    fn refresh(&self) -> DriverResult<()> {
        self.call("refresh", "")?;
        Ok(())
    }

    fn title(&self) -> DriverResult<String> {
        Ok(self.call("title", "")?.title.clone())
    }

    fn current_url(&self) -> DriverResult<String> {
        Ok(self.call("current_url", "")?.url.clone())
    }

    fn window_handles(&self) -> DriverResult<Vec<String>> {
        Ok(self.call("window_handles", "")?.handles.clone())
    }

    fn switch_to_window(&self, handle: &str) -> DriverResult<()> {
        let mut state = self.call("switch_to_window", handle)?;
        if !state.handles.iter().any(|h| h == handle) {
            return Err(WebDriverError::NoSuchWindow {
                message: format!("no window with handle {handle}"),
            });
        }
        state.current_handle = Some(handle.to_string());
        state.frame = None;
        Ok(())
    }

    fn switch_to_frame(&self, frame: &ElementId) -> DriverResult<()> {
        let mut state = self.call("switch_to_frame", frame.as_str())?;
        if !state.elements.contains_key(frame) {
            return Err(WebDriverError::NoSuchFrame {
                message: format!("frame {frame} is not attached to the page"),
            });
        }
        state.frame = Some(frame.clone());
        Ok(())
    }

    fn switch_to_default_content(&self) -> DriverResult<()> {
        self.call("switch_to_default_content", "")?.frame = None;
        Ok(())
    }

    fn alert_text(&self) -> DriverResult<String> {
        let state = self.call("alert_text", "")?;
        state.alert.clone().ok_or_else(no_alert)
    }

    fn accept_alert(&self) -> DriverResult<()> {
        let mut state = self.call("accept_alert", "")?;
        state.alert.take().ok_or_else(no_alert)?;
        state.alert_outcome = Some(AlertOutcome::Accepted);
        Ok(())
    }

    fn dismiss_alert(&self) -> DriverResult<()> {
        let mut state = self.call("dismiss_alert", "")?;
        state.alert.take().ok_or_else(no_alert)?;
        state.alert_outcome = Some(AlertOutcome::Dismissed);
        Ok(())
    }

    fn send_alert_text(&self, text: &str) -> DriverResult<()> {
        let mut state = self.call("send_alert_text", text)?;
        if state.alert.is_none() {
            return Err(no_alert());
        }
        state.prompt_input = Some(text.to_string());
        Ok(())
    }

    fn cookies(&self) -> DriverResult<Vec<Cookie>> {
        Ok(self.call("cookies", "")?.cookies.clone())
    }

    fn screenshot_png(&self) -> DriverResult<Vec<u8>> {
        let state = self.call("screenshot_png", "")?;
        Ok(state
            .screenshot
            .clone()
            .unwrap_or_else(|| PNG_SIGNATURE.to_vec()))
    }

    fn logs(&self, log_type: &str) -> DriverResult<Vec<LogEntry>> {
        let state = self.call("logs", log_type)?;
        Ok(state.logs.get(log_type).cloned().unwrap_or_default())
    }

    fn perform_actions(&self, steps: &[ChainStep], duration: Duration) -> DriverResult<()> {
        let mut state = self.call("perform_actions", &steps.len().to_string())?;
        state.performed.push((steps.to_vec(), duration));
        Ok(())
    }

    fn release_actions(&self) -> DriverResult<()> {
        self.call("release_actions", "")?;
        Ok(())
    }

    fn quit(&self) -> DriverResult<()> {
        self.call("quit", "")?.quit_count += 1;
        Ok(())
    }
}

fn no_alert() -> WebDriverError {
    WebDriverError::NoSuchAlert {
        message: "no such alert".to_string(),
    }
}
