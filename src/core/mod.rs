//! Core business logic module
//!
//! This module contains the banking components:
//! - `traits` - The payment processor capability set
//! - `finance` - Tax and loan formulas
//! - `account_store` - Account lookup and balance operations
//! - `payment` - Mock processors and the authorize/capture flow

pub mod account_store;
pub mod finance;
pub mod payment;
pub mod traits;

pub use account_store::AccountStore;
pub use finance::{final_amount_and_tax, loan_interest, money, DEFAULT_BORROWING_RATE, TAX_RATE};
pub use payment::{process_payment, BankTransferProcessor, CreditCardProcessor};
pub use traits::PaymentProcessor;
