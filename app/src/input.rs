//! The numeric threshold field: placeholder rule and decimal parsing.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::currency::Locale;

/// The placeholder hint shows exactly when the field holds no visible text.
pub fn is_placeholder_visible(text: &str) -> bool {
    text.trim().is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    FocusGained,
    FocusLost,
    TextChanged(String),
}

type Observer = Box<dyn Fn(bool) + Send + Sync>;

/// Text field state plus observers of placeholder visibility.
///
/// Visibility is recomputed from the current text on every event, focus
/// events included, and each observer is told the result.
pub struct ThresholdInput {
    text: String,
    focused: bool,
    placeholder_visible: bool,
    observers: Vec<Observer>,
}

impl ThresholdInput {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            focused: false,
            placeholder_visible: true,
            observers: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    pub fn subscribe(&mut self, observer: impl Fn(bool) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply `event` and return the recomputed placeholder visibility.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::FocusGained => self.focused = true,
            InputEvent::FocusLost => self.focused = false,
            InputEvent::TextChanged(text) => self.text = text,
        }
        self.placeholder_visible = is_placeholder_visible(&self.text);
        for observer in &self.observers {
            observer(self.placeholder_visible);
        }
        self.placeholder_visible
    }
}

impl Default for ThresholdInput {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThresholdInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThresholdInput")
            .field("text", &self.text)
            .field("focused", &self.focused)
            .field("placeholder_visible", &self.placeholder_visible)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// The threshold text is not a decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{input:?} is not a valid cost")]
pub struct InvalidInput {
    pub input: String,
}

/// Parse user text as a decimal threshold.
///
/// Surrounding whitespace and the locale's group separators are ignored.
/// Either `.` or the locale's decimal separator may mark the fraction.
/// Signs are accepted; exponents and anything else are not.
pub fn parse_threshold(text: &str, locale: Locale) -> Result<Decimal, InvalidInput> {
    let invalid = || InvalidInput {
        input: text.to_string(),
    };

    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !locale.is_group_separator(*c))
        .map(|c| if c == locale.decimal_separator() { '.' } else { c })
        .collect();

    let (sign, unsigned) = match cleaned.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };

    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid());
    }

    let whole = if whole.is_empty() { "0" } else { whole };
    let normalized = if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    };
    Decimal::from_str(&normalized).map_err(|_| invalid())
}
