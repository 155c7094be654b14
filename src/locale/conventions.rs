//! Number rendering conventions of a single locale
//!
//! Rounding works on the shortest decimal representation of the value and
//! rounds half away from zero, so `2.675` with two fraction digits renders
//! as `2.68` even though the nearest double sits slightly below it.

use super::provider::{NumberPart, PartKind};
use crate::models::NumberStyle;

/// Separator characters and grouping rules of a locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConventions {
    group: String,
    decimal: String,
    /// Size of the rightmost digit group
    primary_group: usize,
    /// Size of every other group (2 for Indian-style grouping)
    secondary_group: usize,
    /// Grouping only kicks in once the integer part has at least
    /// `primary_group + min_grouping_digits` digits
    min_grouping_digits: usize,
}

impl LocaleConventions {
    /// Conventions with 3-digit groups
    pub fn new(group: impl Into<String>, decimal: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            decimal: decimal.into(),
            primary_group: 3,
            secondary_group: 3,
            min_grouping_digits: 1,
        }
    }

    pub fn with_group_sizes(mut self, primary: usize, secondary: usize) -> Self {
        self.primary_group = primary.max(1);
        self.secondary_group = secondary.max(1);
        self
    }

    pub fn with_min_grouping_digits(mut self, digits: usize) -> Self {
        self.min_grouping_digits = digits.max(1);
        self
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn decimal(&self) -> &str {
        &self.decimal
    }

    /// Render a finite value into parts
    pub fn render(&self, value: f64, style: &NumberStyle) -> Vec<NumberPart> {
        let (integer, fraction) = round_half_away(
            value,
            style.min_fraction_digits,
            style.max_fraction_digits,
        );

        let mut parts = Vec::new();

        // Negative zero is not negative
        if value < 0.0 {
            parts.push(NumberPart::new(PartKind::MinusSign, "-"));
        }

        self.push_integer(&integer, style.use_grouping, &mut parts);

        if !fraction.is_empty() {
            parts.push(NumberPart::new(PartKind::Decimal, self.decimal.as_str()));
            parts.push(NumberPart::new(PartKind::Fraction, fraction));
        }

        parts
    }

    fn push_integer(&self, integer: &str, use_grouping: bool, parts: &mut Vec<NumberPart>) {
        if !use_grouping
            || self.group.is_empty()
            || integer.len() < self.primary_group + self.min_grouping_digits
        {
            parts.push(NumberPart::new(PartKind::Integer, integer));
            return;
        }

        let mut groups = Vec::new();
        let mut end = integer.len();
        let mut size = self.primary_group;
        while end > size {
            groups.push(&integer[end - size..end]);
            end -= size;
            size = self.secondary_group;
        }
        groups.push(&integer[..end]);
        groups.reverse();

        for (idx, group) in groups.into_iter().enumerate() {
            if idx > 0 {
                parts.push(NumberPart::new(PartKind::Group, self.group.as_str()));
            }
            parts.push(NumberPart::new(PartKind::Integer, group));
        }
    }
}

/// Split `|value|` into integer and fraction digit strings, rounded half
/// away from zero to `max` fraction digits, with trailing zeros trimmed
/// down to `min` digits.
pub fn round_half_away(value: f64, min: u8, max: u8) -> (String, String) {
    let max = max as usize;
    let min = (min as usize).min(max);

    // Display never uses exponent notation for f64
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(max))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    if frac_part.len() > max && frac_part.as_bytes()[max] >= b'5' {
        let mut idx = digits.len();
        loop {
            if idx == 0 {
                digits.insert(0, 1);
                int_len += 1;
                break;
            }
            idx -= 1;
            if digits[idx] == 9 {
                digits[idx] = 0;
            } else {
                digits[idx] += 1;
                break;
            }
        }
    }

    let mut fraction = digits.split_off(int_len);
    while fraction.len() > min && fraction.last() == Some(&0) {
        fraction.pop();
    }
    while fraction.len() < min {
        fraction.push(0);
    }

    let first_significant = digits
        .iter()
        .position(|&d| d != 0)
        .unwrap_or(digits.len().saturating_sub(1));
    let integer: String = digits[first_significant..]
        .iter()
        .map(|d| char::from(b'0' + d))
        .collect();
    let fraction: String = fraction.iter().map(|d| char::from(b'0' + d)).collect();

    let integer = if integer.is_empty() {
        "0".to_string()
    } else {
        integer
    };
    (integer, fraction)
}
