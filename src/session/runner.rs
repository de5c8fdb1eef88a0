//! Console runner
//!
//! Drives a [`Session`] from any line source to any writer, sending audit
//! entries to a [`LogSink`]. The binary wires it to stdin, stdout and the
//! log file; tests use in-memory buffers.
//!
//! # Error Handling
//!
//! Console write failures end the run with an error. A failing audit sink
//! only produces a `warn!` diagnostic; the session continues.

use crate::io::audit_log::{LogEntry, LogSink};
use crate::session::machine::{Effect, Session};
use crate::types::BankError;
use log::warn;
use std::io::{BufRead, Write};

/// Run `session` until it finishes or input runs out
///
/// Each prompt is written without a trailing newline and flushed before
/// reading. A read error is treated like the end of input.
///
/// # Errors
///
/// Returns `Io` if writing to `output` fails.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    sink: &mut dyn LogSink,
) -> Result<(), BankError> {
    let mut lines = input.lines();

    while let Some(prompt) = session.prompt() {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let line = match lines.next() {
            Some(Ok(line)) => Some(line),
            Some(Err(e)) => {
                warn!("Failed to read console input: {}", e);
                None
            }
            None => None,
        };

        for effect in session.step(line.as_deref()) {
            match effect {
                Effect::Say(text) => writeln!(output, "{}", text)?,
                Effect::Log(message) => {
                    if let Err(e) = sink.record(LogEntry::info(message)) {
                        warn!("Failed to write audit entry: {}", e);
                    }
                }
            }
        }
    }

    output.flush()?;
    Ok(())
}
