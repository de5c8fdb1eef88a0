//! Core traits for payment backends
//!
//! Any backend (the two mock processors, or a real gateway integration)
//! plugs into the session through this trait; the session never knows which
//! concrete processor it is talking to.

use rust_decimal::Decimal;

/// Two-phase payment capability set
///
/// Each step returns whether the backend accepted it and appends a
/// human-readable description of what it did to `notices`.
pub trait PaymentProcessor {
    /// Reserve or approve `amount`
    fn authorize(&self, amount: Decimal, notices: &mut Vec<String>) -> bool;

    /// Finalize the charge for a previously authorized `amount`
    fn capture(&self, amount: Decimal, notices: &mut Vec<String>) -> bool;

    /// Return `amount` to the payer
    fn refund(&self, amount: Decimal, notices: &mut Vec<String>) -> bool;
}
