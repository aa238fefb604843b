//! Locale-aware currency text for the average-cost label and list rows.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

const NBSP: char = '\u{a0}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
    RuRu,
}

impl Locale {
    pub fn decimal_separator(self) -> char {
        match self {
            Locale::EnUs => '.',
            Locale::RuRu => ',',
        }
    }

    pub fn group_separator(self) -> char {
        match self {
            Locale::EnUs => ',',
            Locale::RuRu => NBSP,
        }
    }

    /// Typed input may use a plain space where the locale groups with NBSP.
    pub fn is_group_separator(self, c: char) -> bool {
        c == self.group_separator() || (self.group_separator() == NBSP && c == ' ')
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::EnUs => write!(f, "en-US"),
            Locale::RuRu => write!(f, "ru-RU"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale {0:?} (expected en-US or ru-RU)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" => Ok(Locale::EnUs),
            "ru-ru" => Ok(Locale::RuRu),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Format `value` as money in `locale`, rounded to cents.
pub fn format_currency(value: Decimal, locale: Locale) -> String {
    let mut cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = cents.is_sign_negative() && !cents.is_zero();
    cents = cents.abs();
    cents.rescale(2);

    let digits = cents.to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let number = format!(
        "{}{}{fraction}",
        group_digits(whole, locale.group_separator()),
        locale.decimal_separator()
    );
    let sign = if negative { "-" } else { "" };

    match locale {
        Locale::EnUs => format!("{sign}${number}"),
        Locale::RuRu => format!("{sign}{number}{NBSP}₽"),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
