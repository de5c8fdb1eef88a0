//! Financial formulas
//!
//! Pure functions behind the tax calculator and the loan options. Inputs are
//! not clamped: negative amounts or rates produce negative results. Only
//! arithmetic overflow is rejected.

use crate::types::{BankError, TaxBreakdown};
use rust_decimal::{Decimal, RoundingStrategy};

/// Tax applied to the final amount (5%)
pub const TAX_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Borrowing rate used when none is configured
pub const DEFAULT_BORROWING_RATE: i64 = 50;

/// Base multiplier added to the per-year borrowing rate
const BORROWING_ONE: i64 = 1;

/// Round an amount to cents for display
///
/// Halves round away from zero, so `0.0575` shows as `0.06`.
pub fn money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute the final amount after interest and the tax owed on it
///
/// `final = initial + initial * rate`, `tax = final * TAX_RATE`.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if either product or the sum overflows.
pub fn final_amount_and_tax(initial: Decimal, rate: Decimal) -> Result<TaxBreakdown, BankError> {
    let interest = initial
        .checked_mul(rate)
        .ok_or_else(|| BankError::arithmetic_overflow("tax calculation"))?;

    let final_amount = initial
        .checked_add(interest)
        .ok_or_else(|| BankError::arithmetic_overflow("tax calculation"))?;

    let tax = final_amount
        .checked_mul(TAX_RATE)
        .ok_or_else(|| BankError::arithmetic_overflow("tax calculation"))?;

    Ok(TaxBreakdown { final_amount, tax })
}

/// Compute loan interest with integer arithmetic
///
/// `interest = principal * (1 + borrowing_rate * years)`. Defined for every
/// integer input including zero and negative values.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if the result does not fit in an `i64`.
pub fn loan_interest(principal: i64, years: i64, borrowing_rate: i64) -> Result<i64, BankError> {
    borrowing_rate
        .checked_mul(years)
        .and_then(|rate| rate.checked_add(BORROWING_ONE))
        .and_then(|factor| principal.checked_mul(factor))
        .ok_or_else(|| BankError::arithmetic_overflow("loan interest"))
}
