//! Declarative rule records and their evaluation.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::{Record, Scalar};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Car plates are `ABC123`, motorcycle plates `ABC12D`.
static PLATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[A-Z]{3}(?:[0-9]{3}|[0-9]{2}[A-Z])$").unwrap());

/// Accepted date and date-time layouts, tried in order.
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// One side of a numeric range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Unbounded,
    Inclusive(f64),
    Exclusive(f64),
}

impl Bound {
    fn admits_above(&self, n: f64) -> bool {
        match *self {
            Bound::Unbounded => true,
            Bound::Inclusive(min) => n >= min,
            Bound::Exclusive(min) => n > min,
        }
    }

    fn admits_below(&self, n: f64) -> bool {
        match *self {
            Bound::Unbounded => true,
            Bound::Inclusive(max) => n <= max,
            Bound::Exclusive(max) => n < max,
        }
    }
}

/// Named value formats checked by pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `local@domain.tld` with no whitespace.
    Email,
    /// Vehicle plate, car or motorcycle layout, any letter case.
    Plate,
    /// Calendar date, optionally with a time component.
    Date,
}

impl Format {
    fn matches(&self, scalar: Scalar<'_>) -> bool {
        match self {
            Format::Email => EMAIL_PATTERN.is_match(&scalar.as_text()),
            Format::Plate => PLATE_PATTERN.is_match(scalar.as_text().trim()),
            Format::Date => parse_date(scalar).is_some(),
        }
    }
}

/// What a rule checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check {
    /// Field must be present.
    Required,
    /// Value must match a named format.
    Format(Format),
    /// Value must parse as a number within the bounds.
    Range { min: Bound, max: Bound },
    /// Value must be written with a number of decimal digits in `[min, max]`.
    Digits { min: usize, max: usize },
    /// Text must have at least this many characters, ignoring outer whitespace.
    MinLength(usize),
    /// Date must not fall after the evaluation date.
    NotFuture,
}

/// A single rule: a check on one field and the message shown when it fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub const fn required(field: &'static str, message: &'static str) -> Self {
        Self { field, check: Check::Required, message }
    }

    pub const fn format(field: &'static str, format: Format, message: &'static str) -> Self {
        Self { field, check: Check::Format(format), message }
    }

    pub const fn range(field: &'static str, min: Bound, max: Bound, message: &'static str) -> Self {
        Self { field, check: Check::Range { min, max }, message }
    }

    /// Value must be a number `>= 0`.
    pub const fn non_negative(field: &'static str, message: &'static str) -> Self {
        Self::range(field, Bound::Inclusive(0.0), Bound::Unbounded, message)
    }

    /// Value must be a number `> 0`.
    pub const fn positive(field: &'static str, message: &'static str) -> Self {
        Self::range(field, Bound::Exclusive(0.0), Bound::Unbounded, message)
    }

    pub const fn digits(field: &'static str, min: usize, max: usize, message: &'static str) -> Self {
        Self { field, check: Check::Digits { min, max }, message }
    }

    pub const fn min_length(field: &'static str, min: usize, message: &'static str) -> Self {
        Self { field, check: Check::MinLength(min), message }
    }

    pub const fn not_future(field: &'static str, message: &'static str) -> Self {
        Self { field, check: Check::NotFuture, message }
    }

    /// Returns true if this is a presence rule.
    pub fn is_required(&self) -> bool {
        matches!(self.check, Check::Required)
    }

    /// Returns true if the rule reads the field as a number.
    pub fn is_numeric(&self) -> bool {
        matches!(self.check, Check::Range { .. } | Check::Digits { .. })
    }

    /// Evaluate the rule against a record.
    ///
    /// Non-presence rules pass vacuously on an absent field; presence is
    /// reported by the field's `Required` rule alone.
    pub fn passes(&self, record: &Record, now: DateTime<Utc>) -> bool {
        let Some(scalar) = record.scalar(self.field) else {
            return !self.is_required();
        };

        match self.check {
            Check::Required => true,
            Check::Format(format) => format.matches(scalar),
            Check::Range { min, max } => scalar
                .as_number()
                .is_some_and(|n| min.admits_above(n) && max.admits_below(n)),
            Check::Digits { min, max } => {
                let text = scalar.as_text();
                let digits = text.trim();
                digits.chars().all(|c| c.is_ascii_digit()) && (min..=max).contains(&digits.len())
            }
            Check::MinLength(min) => scalar.as_text().trim().chars().count() >= min,
            // Unparseable dates are left to the field's `Format::Date` rule.
            Check::NotFuture => parse_date(scalar).is_none_or(|date| date <= now.date_naive()),
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Required => f.write_str("required"),
            Check::Format(Format::Email) => f.write_str("email address"),
            Check::Format(Format::Plate) => f.write_str("plate ABC123 or ABC12D"),
            Check::Format(Format::Date) => f.write_str("date YYYY-MM-DD"),
            Check::Range { min, max } => {
                let mut parts = Vec::new();
                match min {
                    Bound::Inclusive(v) => parts.push(format!(">= {v}")),
                    Bound::Exclusive(v) => parts.push(format!("> {v}")),
                    Bound::Unbounded => {}
                }
                match max {
                    Bound::Inclusive(v) => parts.push(format!("<= {v}")),
                    Bound::Exclusive(v) => parts.push(format!("< {v}")),
                    Bound::Unbounded => {}
                }
                if parts.is_empty() {
                    f.write_str("number")
                } else {
                    write!(f, "number {}", parts.join(" and "))
                }
            }
            Check::Digits { min, max } if min == max => write!(f, "exactly {min} digits"),
            Check::Digits { min, max } => write!(f, "{min} to {max} digits"),
            Check::MinLength(min) => write!(f, "at least {min} characters"),
            Check::NotFuture => f.write_str("not in the future"),
        }
    }
}

/// Parse a date from `YYYY-MM-DD`, RFC 3339, or a local date-time layout.
pub(crate) fn parse_date(scalar: Scalar<'_>) -> Option<NaiveDate> {
    let Scalar::Text(text) = scalar else {
        return None;
    };
    let text = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
}
