//! Account-related types for the bank simulator
//!
//! This module defines the Account structure held by the
//! [`AccountStore`](crate::core::AccountStore).

use rust_decimal::Decimal;

/// Account number as typed at the console prompt
pub type AccountNumber = i64;

/// A single customer account
///
/// Accounts only ever exist in the "open" state. The balance is mutated in
/// place by deposits, withdrawals and loans; withdrawals never take it below
/// zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The number the customer enters to select this account
    pub number: AccountNumber,

    /// Account holder name
    pub owner: String,

    /// Current balance
    pub balance: Decimal,
}

impl Account {
    /// Create an account with the given opening balance
    ///
    /// # Arguments
    ///
    /// * `number` - The account number
    /// * `owner` - The account holder
    /// * `balance` - The opening balance
    pub fn new(number: AccountNumber, owner: impl Into<String>, balance: Decimal) -> Self {
        Account {
            number,
            owner: owner.into(),
            balance,
        }
    }
}
