//! Bank Simulator CLI
//!
//! Interactive command-line banking session over a single account.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --menu classic --borrowing-rate 7
//! cargo run -- --log-file /tmp/bank.log --opening-balance 500
//! ```
//!
//! The program prompts for an account number, then offers the main menu until
//! the customer exits. Every action is appended to the audit log
//! (`input.log` by default).
//!
//! # Exit Codes
//!
//! - 0: Session ended (menu exit, declined to continue, or input closed)
//! - 1: Error (log file cannot be opened, console not writable)

use bank_simulator::cli;
use bank_simulator::core::AccountStore;
use bank_simulator::io::FileLog;
use bank_simulator::session::{run_session, Session};
use std::io;
use std::process;

fn main() {
    env_logger::init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // The audit log must be available before any interaction
    let mut sink = match FileLog::open(&args.log_file) {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let store = AccountStore::with_account(args.seed_account());
    let mut session = Session::new(args.to_session_config(), store);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run_session(&mut session, stdin.lock(), &mut stdout, &mut sink) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
