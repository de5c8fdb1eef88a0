//! Error types for the bank simulator
//!
//! This module defines every error that can occur while serving a session.
//! Where an error is shown to the customer, its `Display` text is the exact
//! console message.
//!
//! # Error Categories
//!
//! - **Input Errors**: A console line could not be parsed into the expected type
//! - **Rule Violations**: Non-positive amounts, insufficient funds, unknown accounts
//! - **Arithmetic Errors**: Overflow in balance updates or formulas
//! - **I/O Errors**: The audit log could not be opened or the console failed

use super::account::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank simulator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Deposit or withdrawal amount was zero or negative
    #[error("You have inputted an invalid amount.")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Loan principal was zero or negative
    #[error("You have inputted an invalid loan amount.")]
    InvalidLoanAmount {
        /// The rejected principal
        principal: i64,
    },

    /// Withdrawal exceeds the current balance
    ///
    /// The account is left unchanged.
    #[error("Insufficient funds.")]
    InsufficientFunds {
        /// Balance at the time of the request
        available: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// No account with this number exists in the store
    #[error("Account not found in our system.")]
    AccountNotFound {
        /// The number that was looked up
        account: AccountNumber,
    },

    /// A console line could not be parsed
    ///
    /// Always recovered locally: the session logs it and aborts the
    /// current operation.
    #[error("expected {field}, got '{input}'")]
    InvalidInput {
        /// What was being read (e.g. "deposit amount")
        field: String,
        /// The raw line as typed
        input: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected and no state changes.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// The audit log could not be opened
    ///
    /// This is fatal at startup.
    #[error("Error opening log file {path}: {message}")]
    LogFile {
        /// The configured log path
        path: String,
        /// Description of the underlying failure
        message: String,
    },

    /// I/O error while talking to the console or writing the log
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

impl BankError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an InvalidLoanAmount error
    pub fn invalid_loan_amount(principal: i64) -> Self {
        BankError::InvalidLoanAmount { principal }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(available: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds {
            available,
            requested,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        BankError::AccountNotFound { account }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: &str, input: &str) -> Self {
        BankError::InvalidInput {
            field: field.to_string(),
            input: input.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a LogFile error
    pub fn log_file(path: &str, error: &std::io::Error) -> Self {
        BankError::LogFile {
            path: path.to_string(),
            message: error.to_string(),
        }
    }
}
