//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account-related types
//! - `payment`: Payment requests and outcomes
//! - `finance`: Calculator results
//! - `error`: Error types for the bank simulator

pub mod account;
pub mod error;
pub mod finance;
pub mod payment;

pub use account::{Account, AccountNumber};
pub use error::BankError;
pub use finance::{LoanReceipt, TaxBreakdown};
pub use payment::{PaymentMethod, PaymentOutcome, PaymentRequest};
