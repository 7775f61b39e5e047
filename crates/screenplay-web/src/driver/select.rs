//! Dropdown helper for `<select>` elements.

use super::{By, DriverResult, WebDriverError, WebElement};

/// Wraps a `<select>` element
#[derive(Debug, Clone)]
pub struct SelectElement {
    element: WebElement,
}

impl SelectElement {
    /// Wrap an element, which must be a `<select>`
    pub fn new(element: WebElement) -> DriverResult<Self> {
        let tag = element.tag_name()?;
        if !tag.eq_ignore_ascii_case("select") {
            return Err(WebDriverError::UnexpectedTagName {
                message: format!("Select only works on <select> elements, not on <{tag}>"),
            });
        }
        Ok(Self { element })
    }

    /// The wrapped element
    #[must_use]
    pub const fn element(&self) -> &WebElement {
        &self.element
    }

    /// Whether more than one option may be selected
    pub fn is_multiple(&self) -> DriverResult<bool> {
        Ok(self
            .element
            .attribute("multiple")?
            .is_some_and(|v| v != "false"))
    }

    /// Every `<option>` in document order
    pub fn options(&self) -> DriverResult<Vec<WebElement>> {
        self.element.find_elements(By::TagName, "option")
    }

    fn select(option: &WebElement) -> DriverResult<()> {
        if !option.is_selected()? {
            option.click()?;
        }
        Ok(())
    }

    /// Select every option whose visible text matches
    pub fn select_by_visible_text(&self, text: &str) -> DriverResult<()> {
        let multiple = self.is_multiple()?;
        let mut matched = false;
        for option in self.options()? {
            if option.text()?.trim() == text.trim() {
                Self::select(&option)?;
                matched = true;
                if !multiple {
                    break;
                }
            }
        }
        if matched {
            Ok(())
        } else {
            Err(WebDriverError::no_such_element(format!(
                "Could not locate element with visible text: {text}"
            )))
        }
    }

    /// Select the option at a zero-based position
    pub fn select_by_index(&self, index: usize) -> DriverResult<()> {
        let options = self.options()?;
        let option = options.get(index).ok_or_else(|| {
            WebDriverError::no_such_element(format!("Could not locate element with index {index}"))
        })?;
        Self::select(option)
    }

    /// Select every option whose `value` attribute matches
    pub fn select_by_value(&self, value: &str) -> DriverResult<()> {
        let multiple = self.is_multiple()?;
        let mut matched = false;
        for option in self.options()? {
            if option.attribute("value")?.as_deref() == Some(value) {
                Self::select(&option)?;
                matched = true;
                if !multiple {
                    break;
                }
            }
        }
        if matched {
            Ok(())
        } else {
            Err(WebDriverError::no_such_element(format!(
                "Cannot locate option with value: {value}"
            )))
        }
    }

    /// Every selected option
    pub fn all_selected_options(&self) -> DriverResult<Vec<WebElement>> {
        let mut selected = Vec::new();
        for option in self.options()? {
            if option.is_selected()? {
                selected.push(option);
            }
        }
        Ok(selected)
    }

    /// The first selected option
    pub fn first_selected_option(&self) -> DriverResult<WebElement> {
        for option in self.options()? {
            if option.is_selected()? {
                return Ok(option);
            }
        }
        Err(WebDriverError::no_such_element("No options are selected"))
    }
}
