//! Parsing of raw ratio input coming from sliders and text fields.

use rust_decimal::Decimal;

use crate::constants::MAX_DECIMAL_PRECISION;

/// Raw value handed to `set_ratio`.
///
/// Sliders produce numbers; text fields produce whatever the user has typed
/// so far, which may be blank or a lone minus sign mid-keystroke.
#[derive(Debug, Clone, PartialEq)]
pub enum RatioInput {
    Number(Decimal),
    Text(String),
}

impl RatioInput {
    pub fn is_blank(&self) -> bool {
        matches!(self, RatioInput::Text(text) if text.is_empty())
    }

    pub fn is_lone_minus(&self) -> bool {
        matches!(self, RatioInput::Text(text) if text == "-")
    }

    /// Numeric value of the input. Blank reads as zero.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            RatioInput::Number(value) => Some(*value),
            RatioInput::Text(text) if text.is_empty() => Some(Decimal::ZERO),
            RatioInput::Text(text) => parse_ratio(text),
        }
    }
}

impl From<Decimal> for RatioInput {
    fn from(value: Decimal) -> Self {
        RatioInput::Number(value)
    }
}

impl From<&str> for RatioInput {
    fn from(text: &str) -> Self {
        RatioInput::Text(text.to_string())
    }
}

impl From<String> for RatioInput {
    fn from(text: String) -> Self {
        RatioInput::Text(text)
    }
}

/// Parses the leading number of `text` the way `parseFloat` reads it:
/// leading whitespace and trailing characters are ignored ("12.5%" reads as
/// 12.5), an exponent is honored ("5e1" reads as 50) and "Infinity" is
/// accepted.
///
/// Magnitudes beyond `Decimal` saturate to `Decimal::MAX` / `Decimal::MIN`;
/// magnitudes below its precision read as zero. Returns `None` when no
/// digits are found.
pub fn parse_ratio(text: &str) -> Option<Decimal> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if rest.starts_with("Infinity") {
        return Some(saturated(negative));
    }

    let bytes = rest.as_bytes();
    let mut pos = 0;
    let mut seen_digit = false;
    // value = digits * 10^exponent, leading zeros dropped
    let mut digits = String::new();
    let mut exponent: i64 = 0;

    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        push_digit(&mut digits, bytes[pos]);
        seen_digit = true;
        pos += 1;
    }
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            push_digit(&mut digits, bytes[pos]);
            exponent -= 1;
            seen_digit = true;
            pos += 1;
        }
    }
    if !seen_digit {
        return None;
    }

    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut p = pos + 1;
        let exp_negative = p < bytes.len() && bytes[p] == b'-';
        if p < bytes.len() && matches!(bytes[p], b'+' | b'-') {
            p += 1;
        }
        let exp_start = p;
        let mut exp_value: i64 = 0;
        while p < bytes.len() && bytes[p].is_ascii_digit() {
            exp_value = exp_value
                .saturating_mul(10)
                .saturating_add(i64::from(bytes[p] - b'0'));
            p += 1;
        }
        // "1e" and "1e+" stop before the exponent marker
        if p > exp_start {
            exponent = if exp_negative {
                exponent.saturating_sub(exp_value)
            } else {
                exponent.saturating_add(exp_value)
            };
        }
    }

    Some(scaled(digits, exponent, negative))
}

fn push_digit(digits: &mut String, digit: u8) {
    if digit == b'0' && digits.is_empty() {
        return;
    }
    digits.push(char::from(digit));
}

fn saturated(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// Builds `digits * 10^exponent`, truncating precision `Decimal` cannot hold.
fn scaled(mut digits: String, mut exponent: i64, negative: bool) -> Decimal {
    let max_digits = MAX_DECIMAL_PRECISION as usize;
    if digits.len() > max_digits {
        exponent = exponent.saturating_add((digits.len() - max_digits) as i64);
        digits.truncate(max_digits);
    }
    while exponent < -i64::from(MAX_DECIMAL_PRECISION) && !digits.is_empty() {
        digits.pop();
        exponent += 1;
    }
    if digits.is_empty() {
        return Decimal::ZERO;
    }
    // Decimal::MAX has 29 integer digits
    if exponent.saturating_add(digits.len() as i64) > i64::from(MAX_DECIMAL_PRECISION) + 1 {
        return saturated(negative);
    }

    let mantissa = digits
        .bytes()
        .fold(0i128, |acc, b| acc * 10 + i128::from(b - b'0'));
    let magnitude = if exponent >= 0 {
        Decimal::try_from_i128_with_scale(mantissa, 0)
            .ok()
            .and_then(|base| (0..exponent).try_fold(base, |acc, _| acc.checked_mul(Decimal::TEN)))
    } else {
        Decimal::try_from_i128_with_scale(mantissa, (-exponent) as u32).ok()
    };

    match magnitude {
        Some(value) if negative => -value,
        Some(value) => value,
        None => saturated(negative),
    }
}
