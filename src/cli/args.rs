use crate::core::DEFAULT_BORROWING_RATE;
use crate::session::SessionConfig;
use crate::types::{Account, AccountNumber};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Interactive single-account banking simulator
#[derive(Parser, Debug)]
#[command(name = "bank-simulator")]
#[command(about = "Interactive single-account banking simulator", long_about = None)]
pub struct CliArgs {
    /// Audit log path
    #[arg(
        long = "log-file",
        value_name = "PATH",
        default_value = "input.log",
        help = "File every action is appended to"
    )]
    pub log_file: PathBuf,

    /// Integer borrowing rate used by the loan options
    #[arg(
        long = "borrowing-rate",
        value_name = "RATE",
        default_value_t = DEFAULT_BORROWING_RATE,
        allow_negative_numbers = true,
        help = "Per-year borrowing rate for loan interest (default: 50)"
    )]
    pub borrowing_rate: i64,

    /// Menu numbering
    #[arg(
        long = "menu",
        value_name = "LAYOUT",
        default_value = "extended",
        help = "Menu layout: 'extended' (with loan borrowing) or 'classic'"
    )]
    pub menu: MenuLayout,

    /// Number of the seeded account
    #[arg(long = "account-number", value_name = "NUMBER", default_value_t = 1)]
    pub account_number: AccountNumber,

    /// Owner of the seeded account
    #[arg(long = "owner", value_name = "NAME", default_value = "Users")]
    pub owner: String,

    /// Opening balance of the seeded account
    #[arg(long = "opening-balance", value_name = "AMOUNT", default_value = "2000")]
    pub opening_balance: Decimal,
}

/// Available menu numberings
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MenuLayout {
    /// 1 deposit, 2 withdraw, 3 tax, 4 loan interest, 5 loan borrowing,
    /// 6 payment, 7 balance, 0 exit
    Extended,
    /// 1 deposit, 2 withdraw, 3 tax, 4 loan interest, 5 payment,
    /// 6 balance, 0 exit
    Classic,
}

impl CliArgs {
    /// Create a SessionConfig from CLI arguments
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            borrowing_rate: self.borrowing_rate,
            layout: self.menu,
        }
    }

    /// The account the session starts with
    pub fn seed_account(&self) -> Account {
        Account::new(self.account_number, self.owner.clone(), self.opening_balance)
    }
}
