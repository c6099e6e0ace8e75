use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

use crate::ordered_tree::KeyOrder;

/// Convenience alias for record validation results.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors raised while validating the fields of a [`Tourist`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    EmptySurname,
    NotANumber { field: &'static str, input: String },
    NonPositivePassport(i64),
    NegativeDays(i64),
    OutOfRange { field: &'static str, value: i64 },
    InvalidText,
}

impl RecordError {
    pub fn out_of_range(field: &'static str, value: i64) -> Self {
        RecordError::OutOfRange { field, value }
    }

    pub fn not_a_number(field: &'static str, input: impl Into<String>) -> Self {
        RecordError::NotANumber {
            field,
            input: input.into(),
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::EmptySurname => write!(f, "surname must not be empty"),
            RecordError::NotANumber { field, input } => {
                write!(f, "{} expects a whole number, found '{}'", field, input)
            }
            RecordError::NonPositivePassport(code) => {
                write!(f, "passport code must be greater than 0, found {}", code)
            }
            RecordError::NegativeDays(days) => {
                write!(f, "days must not be negative, found {}", days)
            }
            RecordError::OutOfRange { field, value } => {
                write!(f, "{} is too large, found {}", field, value)
            }
            RecordError::InvalidText => write!(f, "input is not valid UTF-8 text"),
        }
    }
}

impl Error for RecordError {}

/// A registered tourist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tourist {
    pub surname: String,
    pub passport_code: u32,
    pub days: u32,
}

impl Tourist {
    /// Builds a tourist, validating every field.
    pub fn new(surname: &str, passport_code: i64, days: i64) -> RecordResult<Self> {
        Ok(Self {
            surname: parse_surname(surname)?,
            passport_code: check_passport_code(passport_code)?,
            days: check_days(days)?,
        })
    }

    /// Number of days as a float, for [`OrderedTree::average`](crate::OrderedTree::average).
    pub fn days_f64(&self) -> f64 {
        f64::from(self.days)
    }
}

/// Orders tourists by surname.
#[derive(Debug, Clone, Copy, Default)]
pub struct BySurname;

impl KeyOrder<Tourist> for BySurname {
    fn compare(&self, a: &Tourist, b: &Tourist) -> Ordering {
        a.surname.cmp(&b.surname)
    }
}

/// Orders tourists by passport code.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByPassportCode;

impl KeyOrder<Tourist> for ByPassportCode {
    fn compare(&self, a: &Tourist, b: &Tourist) -> Ordering {
        a.passport_code.cmp(&b.passport_code)
    }
}

/// Takes the first word of `input` as a surname.
pub fn parse_surname(input: &str) -> RecordResult<String> {
    input
        .split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or(RecordError::EmptySurname)
}

/// Parses a passport code, which must be a positive integer.
pub fn parse_passport_code(input: &str) -> RecordResult<u32> {
    check_passport_code(parse_integer("passport code", input)?)
}

/// Parses a day count, which must be a non-negative integer.
pub fn parse_days(input: &str) -> RecordResult<u32> {
    check_days(parse_integer("days", input)?)
}

fn parse_integer(field: &'static str, input: &str) -> RecordResult<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| RecordError::not_a_number(field, trimmed))
}

fn check_passport_code(code: i64) -> RecordResult<u32> {
    if code <= 0 {
        return Err(RecordError::NonPositivePassport(code));
    }
    u32::try_from(code).map_err(|_| RecordError::out_of_range("passport code", code))
}

fn check_days(days: i64) -> RecordResult<u32> {
    if days < 0 {
        return Err(RecordError::NegativeDays(days));
    }
    u32::try_from(days).map_err(|_| RecordError::out_of_range("days", days))
}
