//! Waitlist validation.
//!
//! Two layers run on every submit. [`validate_form`] is the inline check the
//! view uses to mark individual inputs; [`check_submission`] is the stricter
//! rule set applied to the record right before it is sent, and stops at the
//! first failure.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::form::{Field, WaitlistForm};

// Anything but browser whitespace (`\s` in a JS regex) or `@`. Spelled out
// because the regex crate's `\s` includes U+0085 and leaves out U+FEFF.
const NOT_SPACE_OR_AT: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{NOT_SPACE_OR_AT}+@{NOT_SPACE_OR_AT}+\.{NOT_SPACE_OR_AT}+$"
    ))
    .unwrap()
});

// Decimal literal as accepted by browser number coercion: sign, digits,
// optional fraction, optional exponent. ASCII digits only.
static DECIMAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

const MIN_TEXT_LEN: usize = 2;

/// Per-field messages from the inline check, kept in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }

    /// Drop the error for one field, e.g. once the visitor edits it.
    /// Returns true if there was one.
    pub fn clear(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, *m))
    }
}

/// Inline check run before any network activity.
///
/// Looks at the values exactly as typed (no trimming) and reports every
/// failing field at once.
pub fn validate_form(form: &WaitlistForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if char_len(&form.full_name) < MIN_TEXT_LEN {
        errors.insert(Field::FullName, "Please enter your full name");
    }
    if !is_email(&form.email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }
    if form.state.is_empty() {
        errors.insert(Field::State, "Please enter your state/region");
    }
    if !form.farm_size.is_empty() && parse_number(&form.farm_size).is_none() {
        errors.insert(Field::FarmSize, "Please enter a valid number for farm size");
    }

    errors
}

/// The four submission rules, in order: full name, email, state, farm size.
///
/// Only the first failure is reported.
pub fn check_submission(form: &WaitlistForm) -> Result<(), ValidationError> {
    if char_len(js_trim(&form.full_name)) < MIN_TEXT_LEN {
        return Err(ValidationError {
            field: Field::FullName,
            message: "Full name must be at least 2 characters long",
        });
    }
    if !is_email(&form.email) {
        return Err(ValidationError {
            field: Field::Email,
            message: "Please enter a valid email address",
        });
    }
    if char_len(js_trim(&form.state)) < MIN_TEXT_LEN {
        return Err(ValidationError {
            field: Field::State,
            message: "State/Region must be at least 2 characters long",
        });
    }
    if !form.farm_size.is_empty() && !parse_number(&form.farm_size).is_some_and(|n| n >= 0.0) {
        return Err(ValidationError {
            field: Field::FarmSize,
            message: "Farm size must be a valid positive number",
        });
    }
    Ok(())
}

pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Whitespace as browsers define it for `trim()` and `Number()`.
pub fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// `str::trim` with [`is_js_whitespace`].
pub fn js_trim(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

/// Parse a string the way a browser's `Number(value)` would.
///
/// Whitespace-only input is zero. Accepts signed decimals with optional
/// exponent, signed `Infinity`, and unsigned `0x`/`0o`/`0b` integers.
/// Returns `None` where the browser would produce `NaN`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = js_trim(raw);
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(n) = parse_radix_literal(s) {
        return Some(n);
    }

    if DECIMAL_REGEX.is_match(s) {
        return s.parse::<f64>().ok();
    }

    None
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
