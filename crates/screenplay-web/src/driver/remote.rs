//! W3C WebDriver over HTTP.
//!
//! Talks to any W3C endpoint: a driver started by [`DriverService`], a
//! Selenium Grid, or an Appium hub.

use super::{
    to_w3c_actions, By, Capabilities, ChainStep, Cookie, DriverKind, DriverResult, DriverService,
    ElementId, LogEntry, WebDriver, WebDriverError, ELEMENT_KEY,
};
use base64::Engine as _;
use reqwest::blocking::Client;
use reqwest::Method;
use serde_json::{json, Value};
use std::sync::Mutex;
use std::time::Duration;

/// Per-request HTTP timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// A W3C WebDriver session
#[derive(Debug)]
pub struct RemoteDriver {
    client: Client,
    base_url: String,
    session_id: String,
    service: Mutex<Option<DriverService>>,
}

impl RemoteDriver {
    /// Open a session on an already-running endpoint
    pub fn connect(hub_url: &str, capabilities: &Capabilities) -> DriverResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(transport)?;
        let base_url = hub_url.trim_end_matches('/').to_string();

        let value = send(
            &client,
            Method::POST,
            &format!("{base_url}/session"),
            Some(&capabilities.new_session_body()),
        )?;
        let session_id = value["sessionId"]
            .as_str()
            .ok_or_else(|| WebDriverError::SessionNotCreated {
                message: format!("no sessionId in response: {value}"),
            })?
            .to_string();
        tracing::debug!(%base_url, %session_id, "session created");

        Ok(Self {
            client,
            base_url,
            session_id,
            service: Mutex::new(None),
        })
    }

    /// Spawn a local driver and open a session on it
    pub fn start(kind: DriverKind, capabilities: &Capabilities) -> DriverResult<Self> {
        let service = DriverService::start(kind)?;
        let driver = Self::connect(service.url(), capabilities)?;
        *driver.service.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(service);
        Ok(driver)
    }

    /// Session id assigned by the endpoint
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn command(&self, method: Method, path: &str, body: Option<Value>) -> DriverResult<Value> {
        let url = format!("{}/session/{}{path}", self.base_url, self.session_id);
        send(&self.client, method, &url, body.as_ref())
    }

    fn post(&self, path: &str, body: Value) -> DriverResult<Value> {
        self.command(Method::POST, path, Some(body))
    }

    fn get_value(&self, path: &str) -> DriverResult<Value> {
        self.command(Method::GET, path, None)
    }

    fn get_string(&self, path: &str) -> DriverResult<String> {
        let value = self.get_value(path)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| unexpected(path, &value))
    }

    fn get_bool(&self, path: &str) -> DriverResult<bool> {
        let value = self.get_value(path)?;
        value.as_bool().ok_or_else(|| unexpected(path, &value))
    }

    fn element_path(element: &ElementId, rest: &str) -> String {
        format!("/element/{}{rest}", element.as_str())
    }

    fn stop_service(&self) {
        let mut service = self
            .service
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(mut service) = service.take() {
            service.stop();
        }
    }
}

/// Translate strategies W3C does not define into CSS
fn w3c_locator(by: By, value: &str) -> Value {
    let (using, value) = match by {
        By::Id => ("css selector", format!("[id=\"{}\"]", css_escape(value))),
        By::Name => ("css selector", format!("[name=\"{}\"]", css_escape(value))),
        By::ClassName => ("css selector", format!(".{value}")),
        other => (other.as_str(), value.to_string()),
    };
    json!({"using": using, "value": value})
}

fn css_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn element_ids(path: &str, value: &Value) -> DriverResult<Vec<ElementId>> {
    value
        .as_array()
        .ok_or_else(|| unexpected(path, value))?
        .iter()
        .map(|v| element_id(path, v))
        .collect()
}

fn element_id(path: &str, value: &Value) -> DriverResult<ElementId> {
    value[ELEMENT_KEY]
        .as_str()
        .map(ElementId::new)
        .ok_or_else(|| unexpected(path, value))
}

fn element_ref(element: &ElementId) -> Value {
    json!({ELEMENT_KEY: element.as_str()})
}

fn unexpected(path: &str, value: &Value) -> WebDriverError {
    WebDriverError::protocol(format!("unexpected response to {path}: {value}"))
}

fn transport(err: reqwest::Error) -> WebDriverError {
    WebDriverError::Transport {
        message: err.to_string(),
    }
}

/// Send one command and unwrap the W3C `value` envelope
fn send(client: &Client, method: Method, url: &str, body: Option<&Value>) -> DriverResult<Value> {
    tracing::debug!(%method, %url, "webdriver request");
    let mut request = client.request(method, url);
    if let Some(body) = body {
        request = request.json(body);
    }
    let response = request.send().map_err(transport)?;
    let status = response.status();
    let payload: Value = response.json().map_err(transport)?;
    let value = payload.get("value").cloned().unwrap_or(Value::Null);

    if status.is_success() {
        return Ok(value);
    }
    let code = value["error"].as_str().unwrap_or("unknown error");
    let message = value["message"].as_str().unwrap_or_default();
    Err(WebDriverError::from_w3c(code, message))
}

impl WebDriver for RemoteDriver {
    fn find_elements(&self, by: By, value: &str) -> DriverResult<Vec<ElementId>> {
        let response = self.post("/elements", w3c_locator(by, value))?;
        element_ids("/elements", &response)
    }

    fn find_element(&self, by: By, value: &str) -> DriverResult<ElementId> {
        let response = self.post("/element", w3c_locator(by, value))?;
        element_id("/element", &response)
    }

    fn find_elements_from(
        &self,
        parent: &ElementId,
        by: By,
        value: &str,
    ) -> DriverResult<Vec<ElementId>> {
        let path = Self::element_path(parent, "/elements");
        let response = self.post(&path, w3c_locator(by, value))?;
        element_ids(&path, &response)
    }

    fn element_click(&self, element: &ElementId) -> DriverResult<()> {
        self.post(&Self::element_path(element, "/click"), json!({}))?;
        Ok(())
    }

    fn element_clear(&self, element: &ElementId) -> DriverResult<()> {
        self.post(&Self::element_path(element, "/clear"), json!({}))?;
        Ok(())
    }

    fn element_send_keys(&self, element: &ElementId, text: &str) -> DriverResult<()> {
        self.post(&Self::element_path(element, "/value"), json!({"text": text}))?;
        Ok(())
    }

    fn element_text(&self, element: &ElementId) -> DriverResult<String> {
        self.get_string(&Self::element_path(element, "/text"))
    }

    fn element_attribute(&self, element: &ElementId, name: &str) -> DriverResult<Option<String>> {
        let path = Self::element_path(element, &format!("/attribute/{name}"));
        let value = self.get_value(&path)?;
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            other => Ok(Some(other.to_string())),
        }
    }

    fn element_displayed(&self, element: &ElementId) -> DriverResult<bool> {
        self.get_bool(&Self::element_path(element, "/displayed"))
    }

    fn element_enabled(&self, element: &ElementId) -> DriverResult<bool> {
        self.get_bool(&Self::element_path(element, "/enabled"))
    }

    fn element_selected(&self, element: &ElementId) -> DriverResult<bool> {
        self.get_bool(&Self::element_path(element, "/selected"))
    }

    fn element_tag_name(&self, element: &ElementId) -> DriverResult<String> {
        Ok(self
            .get_string(&Self::element_path(element, "/name"))?
            .to_ascii_lowercase())
    }

    fn get(&self, url: &str) -> DriverResult<()> {
        self.post("/url", json!({"url": url}))?;
        Ok(())
    }

    fn back(&self) -> DriverResult<()> {
        self.post("/back", json!({}))?;
        Ok(())
    }

    fn forward(&self) -> DriverResult<()> {
        self.post("/forward", json!({}))?;
        Ok(())
    }

    fn refresh(&self) -> DriverResult<()> {
        self.post("/refresh", json!({}))?;
        Ok(())
    }

    fn title(&self) -> DriverResult<String> {
        self.get_string("/title")
    }

    fn current_url(&self) -> DriverResult<String> {
        self.get_string("/url")
    }

    fn window_handles(&self) -> DriverResult<Vec<String>> {
        let value = self.get_value("/window/handles")?;
        serde_json::from_value(value.clone()).map_err(|_| unexpected("/window/handles", &value))
    }

    fn switch_to_window(&self, handle: &str) -> DriverResult<()> {
        self.post("/window", json!({"handle": handle}))?;
        Ok(())
    }

    fn switch_to_frame(&self, frame: &ElementId) -> DriverResult<()> {
        self.post("/frame", json!({"id": element_ref(frame)}))?;
        Ok(())
    }

    fn switch_to_default_content(&self) -> DriverResult<()> {
        self.post("/frame", json!({"id": null}))?;
        Ok(())
    }

    fn alert_text(&self) -> DriverResult<String> {
        self.get_string("/alert/text")
    }

    fn accept_alert(&self) -> DriverResult<()> {
        self.post("/alert/accept", json!({}))?;
        Ok(())
    }

    fn dismiss_alert(&self) -> DriverResult<()> {
        self.post("/alert/dismiss", json!({}))?;
        Ok(())
    }

    fn send_alert_text(&self, text: &str) -> DriverResult<()> {
        self.post("/alert/text", json!({"text": text}))?;
        Ok(())
    }

    fn cookies(&self) -> DriverResult<Vec<Cookie>> {
        let value = self.get_value("/cookie")?;
        serde_json::from_value(value.clone()).map_err(|_| unexpected("/cookie", &value))
    }

    fn screenshot_png(&self) -> DriverResult<Vec<u8>> {
        let encoded = self.get_string("/screenshot")?;
        base64::engine::general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| WebDriverError::protocol(format!("screenshot is not base64: {e}")))
    }

    fn logs(&self, log_type: &str) -> DriverResult<Vec<LogEntry>> {
        let value = self.post("/se/log", json!({"type": log_type}))?;
        serde_json::from_value(value.clone()).map_err(|_| unexpected("/se/log", &value))
    }

    fn perform_actions(&self, steps: &[ChainStep], duration: Duration) -> DriverResult<()> {
        self.post("/actions", to_w3c_actions(steps, duration))?;
        Ok(())
    }

    fn release_actions(&self) -> DriverResult<()> {
        self.command(Method::DELETE, "/actions", None)?;
        Ok(())
    }

    fn quit(&self) -> DriverResult<()> {
        let result = self.command(Method::DELETE, "", None).map(|_| ());
        self.stop_service();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locators_without_w3c_strategy_become_css() {
        assert_eq!(
            w3c_locator(By::Id, "login"),
            json!({"using": "css selector", "value": "[id=\"login\"]"})
        );
        assert_eq!(
            w3c_locator(By::Name, "q"),
            json!({"using": "css selector", "value": "[name=\"q\"]"})
        );
        assert_eq!(
            w3c_locator(By::ClassName, "btn"),
            json!({"using": "css selector", "value": ".btn"})
        );
    }

    #[test]
    fn test_w3c_strategies_pass_through() {
        assert_eq!(
            w3c_locator(By::XPath, "//a"),
            json!({"using": "xpath", "value": "//a"})
        );
        assert_eq!(
            w3c_locator(By::LinkText, "Home"),
            json!({"using": "link text", "value": "Home"})
        );
    }

    #[test]
    fn test_quotes_escaped_in_attribute_selectors() {
        assert_eq!(
            w3c_locator(By::Id, "a\"b")["value"],
            json!("[id=\"a\\\"b\"]")
        );
    }

    #[test]
    fn test_element_reference_parsing() {
        let value = json!([{ELEMENT_KEY: "e1"}, {ELEMENT_KEY: "e2"}]);
        let ids = element_ids("/elements", &value).unwrap();
        assert_eq!(ids, vec![ElementId::new("e1"), ElementId::new("e2")]);
        assert!(element_id("/element", &json!({"ELEMENT": "e1"})).is_err());
    }

    #[test]
    fn test_connect_to_closed_port_is_transport_error() {
        let err = RemoteDriver::connect("http://127.0.0.1:9", &Capabilities::new()).unwrap_err();
        assert!(matches!(err, WebDriverError::Transport { .. }));
    }
}
