//! Payment-related types
//!
//! A payment request only lives for the duration of one
//! authorize → capture sequence; nothing here is stored.

use rust_decimal::Decimal;
use std::fmt;

/// Payment backends offered by the payment sub-menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Charge a credit card, identified by card number
    CreditCard,

    /// Pull from a bank account, identified by account identifier
    BankTransfer,
}

impl PaymentMethod {
    /// Map a payment sub-menu choice to a method
    ///
    /// `1` selects credit card, `2` bank transfer; anything else is rejected.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(PaymentMethod::CreditCard),
            2 => Some(PaymentMethod::BankTransfer),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::CreditCard => write!(f, "credit card"),
            PaymentMethod::BankTransfer => write!(f, "bank transfer"),
        }
    }
}

/// One payment to push through a processor
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    /// Amount to authorize and capture
    pub amount: Decimal,

    /// Which backend handles it
    pub method: PaymentMethod,

    /// Card number or bank account identifier
    pub identifier: String,
}

/// Result of [`process_payment`](crate::core::process_payment)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Authorized and captured
    Processed,

    /// The processor declined authorization; nothing was captured
    AuthorizationFailed,
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentOutcome::Processed => write!(f, "processed"),
            PaymentOutcome::AuthorizationFailed => write!(f, "authorization failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::credit_card(1, Some(PaymentMethod::CreditCard))]
    #[case::bank_transfer(2, Some(PaymentMethod::BankTransfer))]
    #[case::zero(0, None)]
    #[case::out_of_range(3, None)]
    #[case::negative(-1, None)]
    fn test_from_choice(#[case] choice: i64, #[case] expected: Option<PaymentMethod>) {
        assert_eq!(PaymentMethod::from_choice(choice), expected);
    }
}
