//! Native gesture builder.
//!
//! Steps are recorded in order and sent to the backend as a single command
//! by [`ActionChain::perform`]. Nothing reaches the browser before that.

use super::{Browser, DriverResult, ElementId, WebElement, ELEMENT_KEY};
use serde_json::{json, Value};
use std::time::Duration;

/// One recorded gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainStep {
    /// Left click, at the element or at the pointer
    Click(Option<ElementId>),
    /// Double left click
    DoubleClick(Option<ElementId>),
    /// Right click
    ContextClick(Option<ElementId>),
    /// Press and keep the left button down
    ClickAndHold(Option<ElementId>),
    /// Let go of the left button
    Release(Option<ElementId>),
    /// Press a key
    KeyDown(String),
    /// Let go of a key
    KeyUp(String),
    /// Type text, into the element or the focused one
    SendKeys {
        /// Element to click first
        element: Option<ElementId>,
        /// Text to type
        text: String,
    },
    /// Move the pointer to the element's center
    MoveTo(ElementId),
    /// Move the pointer relative to the element's center
    MoveToWithOffset {
        /// Origin element
        element: ElementId,
        /// Horizontal offset
        x: i64,
        /// Vertical offset
        y: i64,
    },
    /// Move the pointer relative to where it is
    MoveBy {
        /// Horizontal offset
        x: i64,
        /// Vertical offset
        y: i64,
    },
    /// Do nothing for a while
    Pause(Duration),
}

/// Ordered gesture sequence bound to a session
#[derive(Debug, Clone)]
pub struct ActionChain {
    browser: Browser,
    steps: Vec<ChainStep>,
    duration: Duration,
}

fn id_of(element: Option<&WebElement>) -> Option<ElementId> {
    element.map(|e| e.id().clone())
}

impl ActionChain {
    /// Empty chain; `duration` is the length of every pointer move
    #[must_use]
    pub fn new(browser: Browser, duration: Duration) -> Self {
        Self {
            browser,
            steps: Vec::new(),
            duration,
        }
    }

    /// Pointer move duration
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Recorded steps
    #[must_use]
    pub fn steps(&self) -> &[ChainStep] {
        &self.steps
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn click(&mut self, element: Option<&WebElement>) -> &mut Self {
        self.steps.push(ChainStep::Click(id_of(element)));
        self
    }

    pub fn double_click(&mut self, element: Option<&WebElement>) -> &mut Self {
        self.steps.push(ChainStep::DoubleClick(id_of(element)));
        self
    }

    pub fn context_click(&mut self, element: Option<&WebElement>) -> &mut Self {
        self.steps.push(ChainStep::ContextClick(id_of(element)));
        self
    }

    pub fn click_and_hold(&mut self, element: Option<&WebElement>) -> &mut Self {
        self.steps.push(ChainStep::ClickAndHold(id_of(element)));
        self
    }

    pub fn release(&mut self, element: Option<&WebElement>) -> &mut Self {
        self.steps.push(ChainStep::Release(id_of(element)));
        self
    }

    pub fn key_down(&mut self, key: &str) -> &mut Self {
        self.steps.push(ChainStep::KeyDown(key.to_string()));
        self
    }

    pub fn key_up(&mut self, key: &str) -> &mut Self {
        self.steps.push(ChainStep::KeyUp(key.to_string()));
        self
    }

    /// Type into whatever has focus
    pub fn send_keys(&mut self, text: &str) -> &mut Self {
        self.steps.push(ChainStep::SendKeys {
            element: None,
            text: text.to_string(),
        });
        self
    }

    /// Click the element, then type
    pub fn send_keys_to_element(&mut self, element: &WebElement, text: &str) -> &mut Self {
        self.steps.push(ChainStep::SendKeys {
            element: Some(element.id().clone()),
            text: text.to_string(),
        });
        self
    }

    pub fn move_to_element(&mut self, element: &WebElement) -> &mut Self {
        self.steps.push(ChainStep::MoveTo(element.id().clone()));
        self
    }

    pub fn move_to_element_with_offset(&mut self, element: &WebElement, x: i64, y: i64) -> &mut Self {
        self.steps.push(ChainStep::MoveToWithOffset {
            element: element.id().clone(),
            x,
            y,
        });
        self
    }

    pub fn move_by_offset(&mut self, x: i64, y: i64) -> &mut Self {
        self.steps.push(ChainStep::MoveBy { x, y });
        self
    }

    pub fn pause(&mut self, duration: Duration) -> &mut Self {
        self.steps.push(ChainStep::Pause(duration));
        self
    }

    /// Send every recorded step to the browser as one command
    pub fn perform(&self) -> DriverResult<()> {
        tracing::debug!(steps = self.steps.len(), "performing action chain");
        self.browser
            .driver()
            .perform_actions(&self.steps, self.duration)
    }
}

// ============================================================================
// W3C encoding
// ============================================================================

/// Ticks for the pointer and keyboard input sources, kept the same length
#[derive(Default)]
struct Ticks {
    pointer: Vec<Value>,
    keys: Vec<Value>,
}

impl Ticks {
    fn pointer(&mut self, action: Value) {
        self.pointer.push(action);
        self.keys.push(json!({"type": "pause", "duration": 0}));
    }

    fn key(&mut self, action: Value) {
        self.keys.push(action);
        self.pointer.push(json!({"type": "pause", "duration": 0}));
    }

    fn pause(&mut self, ms: u64) {
        self.pointer.push(json!({"type": "pause", "duration": ms}));
        self.keys.push(json!({"type": "pause", "duration": ms}));
    }

    fn move_to(&mut self, element: &ElementId, x: i64, y: i64, ms: u64) {
        self.pointer(json!({
            "type": "pointerMove",
            "duration": ms,
            "origin": {ELEMENT_KEY: element.as_str()},
            "x": x,
            "y": y,
        }));
    }

    fn press(&mut self, button: u8) {
        self.pointer(json!({"type": "pointerDown", "button": button}));
        self.pointer(json!({"type": "pointerUp", "button": button}));
    }
}

/// Encode steps as the body of `POST /session/{id}/actions`
#[must_use]
pub fn to_w3c_actions(steps: &[ChainStep], duration: Duration) -> Value {
    let ms = duration.as_millis() as u64;
    let mut ticks = Ticks::default();

    for step in steps {
        match step {
            ChainStep::Click(element) => {
                if let Some(el) = element {
                    ticks.move_to(el, 0, 0, ms);
                }
                ticks.press(0);
            }
            ChainStep::DoubleClick(element) => {
                if let Some(el) = element {
                    ticks.move_to(el, 0, 0, ms);
                }
                ticks.press(0);
                ticks.press(0);
            }
            ChainStep::ContextClick(element) => {
                if let Some(el) = element {
                    ticks.move_to(el, 0, 0, ms);
                }
                ticks.press(2);
            }
            ChainStep::ClickAndHold(element) => {
                if let Some(el) = element {
                    ticks.move_to(el, 0, 0, ms);
                }
                ticks.pointer(json!({"type": "pointerDown", "button": 0}));
            }
            ChainStep::Release(element) => {
                if let Some(el) = element {
                    ticks.move_to(el, 0, 0, ms);
                }
                ticks.pointer(json!({"type": "pointerUp", "button": 0}));
            }
            ChainStep::KeyDown(key) => ticks.key(json!({"type": "keyDown", "value": key})),
            ChainStep::KeyUp(key) => ticks.key(json!({"type": "keyUp", "value": key})),
            ChainStep::SendKeys { element, text } => {
                if let Some(el) = element {
                    ticks.move_to(el, 0, 0, ms);
                    ticks.press(0);
                }
                for c in text.chars() {
                    ticks.key(json!({"type": "keyDown", "value": c.to_string()}));
                    ticks.key(json!({"type": "keyUp", "value": c.to_string()}));
                }
            }
            ChainStep::MoveTo(el) => ticks.move_to(el, 0, 0, ms),
            ChainStep::MoveToWithOffset { element, x, y } => ticks.move_to(element, *x, *y, ms),
            ChainStep::MoveBy { x, y } => ticks.pointer(json!({
                "type": "pointerMove",
                "duration": ms,
                "origin": "pointer",
                "x": x,
                "y": y,
            })),
            ChainStep::Pause(d) => ticks.pause(d.as_millis() as u64),
        }
    }

    json!({
        "actions": [
            {
                "type": "pointer",
                "id": "mouse",
                "parameters": {"pointerType": "mouse"},
                "actions": ticks.pointer,
            },
            {
                "type": "key",
                "id": "keyboard",
                "actions": ticks.keys,
            },
        ]
    })
}
