//! Interactive session module
//!
//! This module drives the text-prompt banking loop:
//! - `menu` - Menu numbering and the actions behind each choice
//! - `machine` - The session state machine (pure: input in, effects out)
//! - `runner` - Connects a session to a console and an audit log

use crate::cli::MenuLayout;
use crate::core::DEFAULT_BORROWING_RATE;

pub mod machine;
pub mod menu;
pub mod runner;

pub use machine::{Effect, Session, State};
pub use menu::MenuAction;
pub use runner::run_session;

/// Settings that change how a session behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Per-year borrowing rate for the loan options
    pub borrowing_rate: i64,

    /// Menu numbering in use
    pub layout: MenuLayout,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            borrowing_rate: DEFAULT_BORROWING_RATE,
            layout: MenuLayout::Extended,
        }
    }
}
