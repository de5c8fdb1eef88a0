//! Results of the financial calculators

use super::account::AccountNumber;
use rust_decimal::Decimal;

/// Output of the tax calculator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBreakdown {
    /// Initial amount plus interest
    pub final_amount: Decimal,

    /// Tax owed on the final amount
    pub tax: Decimal,
}

/// Confirmation of a loan credited to an account
#[derive(Debug, Clone, PartialEq)]
pub struct LoanReceipt {
    /// Account the principal was credited to
    pub account: AccountNumber,

    /// Borrowed amount
    pub principal: i64,

    /// Interest computed by [`loan_interest`](crate::core::finance::loan_interest)
    pub interest: i64,

    /// Principal plus interest
    pub total_payback: Decimal,

    /// Balance after crediting the principal
    pub new_balance: Decimal,
}
