//! Questions: read-only observations of the browser and the page.
//!
//! Questions that can look at one element or every matching element carry
//! a marker type parameter, [`One`] or [`Many`], chosen by the builder:
//!
//! ```text
//! Text::of_the(WELCOME_BANNER)      -> Text<One>,  answers String
//! Text::of_all(SEARCH_RESULTS)      -> Text<Many>, answers Vec<String>
//! ```

mod attribute;
mod browser_title;
mod browser_url;
mod cookies;
mod element;
mod list;
mod number;
mod selected;
mod text;
mod text_of_the_alert;

pub use attribute::Attribute;
pub use browser_title::BrowserTitle;
pub use browser_url::BrowserUrl;
pub use cookies::Cookies;
pub use element::Element;
pub use list::List;
pub use number::Number;
pub use selected::Selected;
pub use text::Text;
pub use text_of_the_alert::TextOfTheAlert;

/// Marker: the question looks at the first matching element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct One;

/// Marker: the question looks at every matching element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Many;

// Natural-language names
pub type TheAttribute<M = One> = Attribute<M>;
pub type TheBrowserTitle = BrowserTitle;
pub type TheBrowserUrl = BrowserUrl;
pub type TheCookies = Cookies;
pub type TheElement = Element;
pub type TheList = List;
pub type TheNumber = Number;
pub type TheSelected<M = One> = Selected<M>;
pub type TheText<M = One> = Text<M>;
pub type TheTextOfTheAlert = TextOfTheAlert;
