//! Synchronous field validators for the money-movement forms.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::data::Amount;

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+?1[ .-]?)?\(?[0-9]{3}\)?[ .-]?[0-9]{3}[ .-]?[0-9]{4}$").expect("phone pattern")
});
static ROUTING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9}$").expect("routing pattern"));
static ACCOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8,12}$").expect("account pattern"));
static AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$?([0-9]{1,3}(,[0-9]{3})+|[0-9]+)(\.[0-9]{1,2})?$").expect("amount pattern")
});

/// A field-level validation failure, shown inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Enter a valid phone number, e.g. +1 (555) 123-4567")]
    Phone,
    #[error("Routing number must be exactly 9 digits")]
    RoutingNumber,
    #[error("Account number must be 8 to 12 digits")]
    AccountNumber,
    #[error("Enter an amount like 25.00")]
    AmountFormat,
    #[error("Amount must be greater than zero")]
    AmountNotPositive,
    #[error("Amount exceeds the {0} limit")]
    AmountOverLimit(Amount),
    #[error("Use the YYYY-MM-DD format")]
    DateFormat,
    #[error("Date cannot be in the past")]
    DateInPast,
}

pub fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed.to_string())
}

pub fn phone(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required("Phone number"));
    }
    if !PHONE.is_match(trimmed) {
        return Err(ValidationError::Phone);
    }
    Ok(trimmed.to_string())
}

pub fn routing_number(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if !ROUTING.is_match(trimmed) {
        return Err(ValidationError::RoutingNumber);
    }
    Ok(trimmed.to_string())
}

pub fn account_number(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if !ACCOUNT.is_match(trimmed) {
        return Err(ValidationError::AccountNumber);
    }
    Ok(trimmed.to_string())
}

/// Parses a positive dollar amount with at most two decimals.
///
/// Accepts an optional leading `$` and thousands separators.
pub fn amount(value: &str) -> Result<Amount, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required("Amount"));
    }
    if !AMOUNT.is_match(trimmed) {
        return Err(ValidationError::AmountFormat);
    }

    let digits: String = trimmed.chars().filter(|c| *c != '$' && *c != ',').collect();
    let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let dollars: i64 = whole.parse().map_err(|_| ValidationError::AmountFormat)?;
    let cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| ValidationError::AmountFormat)? * 10,
        _ => frac.parse().map_err(|_| ValidationError::AmountFormat)?,
    };
    let total = dollars
        .checked_mul(100)
        .and_then(|c| c.checked_add(cents))
        .ok_or(ValidationError::AmountFormat)?;

    let parsed = Amount::from_cents(total);
    if !parsed.is_positive() {
        return Err(ValidationError::AmountNotPositive);
    }
    Ok(parsed)
}

pub fn amount_within(value: &str, limit: Amount) -> Result<Amount, ValidationError> {
    let parsed = amount(value)?;
    if parsed > limit {
        return Err(ValidationError::AmountOverLimit(limit));
    }
    Ok(parsed)
}

/// Parses a `YYYY-MM-DD` date that is not before `today`.
pub fn future_date(value: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let parsed = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::DateFormat)?;
    if parsed < today {
        return Err(ValidationError::DateInPast);
    }
    Ok(parsed)
}
