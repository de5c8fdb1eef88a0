//! Bank Simulator Library
//! # Overview
//!
//! This library provides an interactive, single-account banking simulator driven by text prompts
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, PaymentRequest, errors, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::finance`] - Tax and loan interest formulas
//!   - [`core::account_store`] - Account lookup and balance operations
//!   - [`core::payment`] - Mock payment processors and the authorize/capture flow
//! - [`io`] - Console input parsing and the audit log
//! - [`session`] - The prompt state machine and its console runner
//!
//! # Operations
//!
//! From the main menu a customer can:
//!
//! - **Deposit**: Credit a positive amount to the account
//! - **Withdraw**: Debit a positive amount covered by the balance
//! - **Tax calculator**: Final amount after interest, and 5% tax on it
//! - **Loan interest**: Quote `principal * (1 + rate * years)`
//! - **Loan borrowing**: Credit a loan principal and report the payback
//! - **Payment**: Authorize and capture through a credit card or bank transfer processor
//! - **Balance check**: Show the current balance
//!
//! Every action is appended to an audit log.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use core::{AccountStore, PaymentProcessor};
pub use io::{FileLog, LogSink, MemoryLog};
pub use session::{run_session, Session, SessionConfig};
pub use types::{Account, AccountNumber, BankError, PaymentMethod, PaymentRequest};
