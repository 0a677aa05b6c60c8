// Single-line text input
//
// Validation happens when the search is executed, so the field accepts any
// printable character.

use unicode_width::UnicodeWidthStr;

/// Upper bound on field contents
const MAX_FIELD_LEN: usize = 256;

#[derive(Debug, Clone)]
pub struct TextField {
    pub title: &'static str,
    value: String,
}

impl TextField {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            value: String::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set(value);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push(&mut self, c: char) {
        if !c.is_control() && self.value.len() < MAX_FIELD_LEN {
            self.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Display width of the contents, for cursor placement
    pub fn width(&self) -> u16 {
        u16::try_from(self.value.width()).unwrap_or(u16::MAX)
    }
}
