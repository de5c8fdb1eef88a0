//! Console input conversion
//!
//! Turns one line typed at a prompt into the value the prompt asked for.
//! All functions are pure (no I/O) for easy testing. Each takes the name of
//! the field being read so the resulting error can be logged as
//! "Error reading <field>: ...".

use crate::types::BankError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a whole line as an integer
///
/// Surrounding whitespace is ignored; anything else on the line is an error.
pub fn parse_integer(field: &str, line: &str) -> Result<i64, BankError> {
    line.trim()
        .parse::<i64>()
        .map_err(|_| BankError::invalid_input(field, line))
}

/// Parse a whole line as a decimal amount
///
/// Accepts plain (`12.5`) and scientific (`1.25e1`) notation. Digit
/// separators (`1_000`) are rejected. So are values outside the `Decimal`
/// range and exponents beyond 28 (`1e30`, `1e-31`). A plain fraction with
/// more than 28 places is rounded to 28, so a small enough one reads as 0.
pub fn parse_decimal(field: &str, line: &str) -> Result<Decimal, BankError> {
    let trimmed = line.trim();
    if trimmed.contains('_') {
        return Err(BankError::invalid_input(field, line));
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| BankError::invalid_input(field, line))
}

/// Read a single identifier token such as a card number
///
/// The line must hold exactly one whitespace-free token.
pub fn parse_token(field: &str, line: &str) -> Result<String, BankError> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => Ok(token.to_string()),
        _ => Err(BankError::invalid_input(field, line)),
    }
}
