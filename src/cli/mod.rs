// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, MenuLayout};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Every flag has a default, so running without arguments starts the
/// standard session. On invalid arguments or `--help`, clap prints the
/// message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
