//! Benchmark suite for scripted console sessions
//!
//! Measures how fast the session state machine and runner get through a
//! scripted customer session, using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use bank_simulator::core::AccountStore;
use bank_simulator::io::MemoryLog;
use bank_simulator::session::{run_session, Session, SessionConfig};
use bank_simulator::types::Account;
use rust_decimal::Decimal;
use std::io::Cursor;

fn main() {
    divan::main();
}

/// One pass through every menu option, answering "y" to continue each time
const ROUND: &str = "1\n10\ny\n2\n10\ny\n3\n1000\n0.1\ny\n4\n100\n2\ny\n5\n100\n2\ny\n6\n1\n4111\n20\ny\n7\ny\n";

fn scripted_input(rounds: usize) -> String {
    let mut input = String::from("1\n");
    input.push_str(&ROUND.repeat(rounds));
    input.push_str("0\n");
    input
}

#[divan::bench(args = [1, 100, 1000])]
fn scripted_session(bencher: divan::Bencher, rounds: usize) {
    let input = scripted_input(rounds);

    bencher.bench_local(|| {
        let store = AccountStore::with_account(Account::new(1, "Users", Decimal::new(2000, 0)));
        let mut session = Session::new(SessionConfig::default(), store);
        let mut output = Vec::new();
        let mut log = MemoryLog::new();

        run_session(&mut session, Cursor::new(input.as_str()), &mut output, &mut log)
            .expect("Session failed");
    });
}
