//! Executor domain models.

use serde::{Deserialize, Serialize};

use crate::constants::PHONE_NUMBER_MAX_DIGITS;

/// A person entrusted with carrying out the will.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Executor {
    pub name: String,
    pub relation: String,
    pub phone_number: String,
    /// 1-based rank; 1 acts first
    pub priority: u32,
}

impl Executor {
    pub fn blank(priority: u32) -> Self {
        Self {
            priority,
            ..Default::default()
        }
    }
}

/// Formats a phone number as `ddd-dddd-dddd`.
///
/// Non-digits are dropped and at most 11 digits are kept; shorter inputs
/// get as many groups as they fill.
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_NUMBER_MAX_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=7 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..]),
    }
}
