//! WebDriver special keys.
//!
//! Keys are private-use code points (`U+E000`..`U+E05D`) sent as part of a
//! key sequence. [`KEY_NAMES`] maps each code to the name used in log lines;
//! where several constants share a code the table holds one canonical name.

/// Special key constants, as strings so they can be appended to text
#[derive(Debug, Clone, Copy)]
pub struct Keys;

#[allow(missing_docs)]
impl Keys {
    pub const NULL: &'static str = "\u{e000}";
    pub const CANCEL: &'static str = "\u{e001}";
    pub const HELP: &'static str = "\u{e002}";
    pub const BACKSPACE: &'static str = "\u{e003}";
    pub const BACK_SPACE: &'static str = "\u{e003}";
    pub const TAB: &'static str = "\u{e004}";
    pub const CLEAR: &'static str = "\u{e005}";
    pub const RETURN: &'static str = "\u{e006}";
    pub const ENTER: &'static str = "\u{e007}";
    pub const SHIFT: &'static str = "\u{e008}";
    pub const LEFT_SHIFT: &'static str = "\u{e008}";
    pub const CONTROL: &'static str = "\u{e009}";
    pub const LEFT_CONTROL: &'static str = "\u{e009}";
    pub const ALT: &'static str = "\u{e00a}";
    pub const LEFT_ALT: &'static str = "\u{e00a}";
    pub const PAUSE: &'static str = "\u{e00b}";
    pub const ESCAPE: &'static str = "\u{e00c}";
    pub const SPACE: &'static str = "\u{e00d}";
    pub const PAGE_UP: &'static str = "\u{e00e}";
    pub const PAGE_DOWN: &'static str = "\u{e00f}";
    pub const END: &'static str = "\u{e010}";
    pub const HOME: &'static str = "\u{e011}";
    pub const LEFT: &'static str = "\u{e012}";
    pub const ARROW_LEFT: &'static str = "\u{e012}";
    pub const UP: &'static str = "\u{e013}";
    pub const ARROW_UP: &'static str = "\u{e013}";
    pub const RIGHT: &'static str = "\u{e014}";
    pub const ARROW_RIGHT: &'static str = "\u{e014}";
    pub const DOWN: &'static str = "\u{e015}";
    pub const ARROW_DOWN: &'static str = "\u{e015}";
    pub const INSERT: &'static str = "\u{e016}";
    pub const DELETE: &'static str = "\u{e017}";
    pub const SEMICOLON: &'static str = "\u{e018}";
    pub const EQUALS: &'static str = "\u{e019}";
    pub const NUMPAD0: &'static str = "\u{e01a}";
    pub const NUMPAD1: &'static str = "\u{e01b}";
    pub const NUMPAD2: &'static str = "\u{e01c}";
    pub const NUMPAD3: &'static str = "\u{e01d}";
    pub const NUMPAD4: &'static str = "\u{e01e}";
    pub const NUMPAD5: &'static str = "\u{e01f}";
    pub const NUMPAD6: &'static str = "\u{e020}";
    pub const NUMPAD7: &'static str = "\u{e021}";
    pub const NUMPAD8: &'static str = "\u{e022}";
    pub const NUMPAD9: &'static str = "\u{e023}";
    pub const MULTIPLY: &'static str = "\u{e024}";
    pub const ADD: &'static str = "\u{e025}";
    pub const SEPARATOR: &'static str = "\u{e026}";
    pub const SUBTRACT: &'static str = "\u{e027}";
    pub const DECIMAL: &'static str = "\u{e028}";
    pub const DIVIDE: &'static str = "\u{e029}";
    pub const F1: &'static str = "\u{e031}";
    pub const F2: &'static str = "\u{e032}";
    pub const F3: &'static str = "\u{e033}";
    pub const F4: &'static str = "\u{e034}";
    pub const F5: &'static str = "\u{e035}";
    pub const F6: &'static str = "\u{e036}";
    pub const F7: &'static str = "\u{e037}";
    pub const F8: &'static str = "\u{e038}";
    pub const F9: &'static str = "\u{e039}";
    pub const F10: &'static str = "\u{e03a}";
    pub const F11: &'static str = "\u{e03b}";
    pub const F12: &'static str = "\u{e03c}";
    pub const META: &'static str = "\u{e03d}";
    pub const COMMAND: &'static str = "\u{e03d}";
    pub const ZENKAKU_HANKAKU: &'static str = "\u{e040}";
}

/// Key code to display name, one entry per distinct code
pub const KEY_NAMES: &[(char, &str)] = &[
    ('\u{e000}', "NULL"),
    ('\u{e001}', "CANCEL"),
    ('\u{e002}', "HELP"),
    ('\u{e003}', "BACK_SPACE"),
    ('\u{e004}', "TAB"),
    ('\u{e005}', "CLEAR"),
    ('\u{e006}', "RETURN"),
    ('\u{e007}', "ENTER"),
    ('\u{e008}', "SHIFT"),
    ('\u{e009}', "CONTROL"),
    ('\u{e00a}', "ALT"),
    ('\u{e00b}', "PAUSE"),
    ('\u{e00c}', "ESCAPE"),
    ('\u{e00d}', "SPACE"),
    ('\u{e00e}', "PAGE_UP"),
    ('\u{e00f}', "PAGE_DOWN"),
    ('\u{e010}', "END"),
    ('\u{e011}', "HOME"),
    ('\u{e012}', "LEFT"),
    ('\u{e013}', "UP"),
    ('\u{e014}', "RIGHT"),
    ('\u{e015}', "DOWN"),
    ('\u{e016}', "INSERT"),
    ('\u{e017}', "DELETE"),
    ('\u{e018}', "SEMICOLON"),
    ('\u{e019}', "EQUALS"),
    ('\u{e01a}', "NUMPAD0"),
    ('\u{e01b}', "NUMPAD1"),
    ('\u{e01c}', "NUMPAD2"),
    ('\u{e01d}', "NUMPAD3"),
    ('\u{e01e}', "NUMPAD4"),
    ('\u{e01f}', "NUMPAD5"),
    ('\u{e020}', "NUMPAD6"),
    ('\u{e021}', "NUMPAD7"),
    ('\u{e022}', "NUMPAD8"),
    ('\u{e023}', "NUMPAD9"),
    ('\u{e024}', "MULTIPLY"),
    ('\u{e025}', "ADD"),
    ('\u{e026}', "SEPARATOR"),
    ('\u{e027}', "SUBTRACT"),
    ('\u{e028}', "DECIMAL"),
    ('\u{e029}', "DIVIDE"),
    ('\u{e031}', "F1"),
    ('\u{e032}', "F2"),
    ('\u{e033}', "F3"),
    ('\u{e034}', "F4"),
    ('\u{e035}', "F5"),
    ('\u{e036}', "F6"),
    ('\u{e037}', "F7"),
    ('\u{e038}', "F8"),
    ('\u{e039}', "F9"),
    ('\u{e03a}', "F10"),
    ('\u{e03b}', "F11"),
    ('\u{e03c}', "F12"),
    ('\u{e03d}', "META"),
    ('\u{e040}', "ZENKAKU_HANKAKU"),
];

/// Look up the display name of a single key code
#[must_use]
pub fn key_name(code: char) -> Option<&'static str> {
    KEY_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Name for a key given as a string: the table name for a single known
/// code, otherwise the string itself
#[must_use]
pub fn describe_key(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => key_name(code).map_or_else(|| key.to_string(), str::to_string),
        _ => key.to_string(),
    }
}

/// Replace every key code in `text` with its name, for logging only
#[must_use]
pub fn render_keys(text: &str) -> String {
    let mut rendered = String::with_capacity(text.len());
    for c in text.chars() {
        match key_name(c) {
            Some(name) => rendered.push_str(name),
            None => rendered.push(c),
        }
    }
    rendered
}

/// COMMAND on macOS, CONTROL everywhere else
#[must_use]
pub fn command_or_control_for(os: &str) -> &'static str {
    if os == "macos" {
        Keys::COMMAND
    } else {
        Keys::CONTROL
    }
}

/// The execution modifier key of the host running the screenplay
#[must_use]
pub fn command_or_control() -> &'static str {
    command_or_control_for(std::env::consts::OS)
}
