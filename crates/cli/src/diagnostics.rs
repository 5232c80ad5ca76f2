// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output for failed comparisons.
//!
//! Provides ANSI color support with automatic terminal detection. Each report
//! is rendered in full and emitted with a single write, so reports from
//! concurrent comparisons never interleave.

use parking_lot::Mutex;
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::Arc;

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    emit(&mut io::stderr().lock(), &render_error(msg, is_tty));
}

/// Render an error line with explicit terminal flag.
fn render_error(msg: impl fmt::Display, is_terminal: bool) -> String {
    if is_terminal {
        format!("\x1b[31mError: {}\x1b[0m\n", msg)
    } else {
        format!("Error: {}\n", msg)
    }
}

/// Render a mismatch report: the normalized actual output, then the diff.
fn render_mismatch(expected_path: &Path, actual: &str, diff: &str) -> String {
    format!(
        "\nActual Yaml File Instead of: {}\n{}\nDiff From Expected:\n{}\n",
        expected_path.display(),
        actual,
        diff
    )
}

fn emit<W: Write + ?Sized>(writer: &mut W, report: &str) {
    let _ = writer.write_all(report.as_bytes());
    let _ = writer.flush();
}

enum Sink {
    /// Process stdout, locked per report
    Stdout,
    Writer(Mutex<Box<dyn Write + Send>>),
}

/// Destination for comparison diagnostics.
pub struct Diagnostics {
    sink: Sink,
    is_terminal: bool,
}

impl Diagnostics {
    /// Diagnostics on stdout
    pub fn stdout() -> Self {
        Self {
            sink: Sink::Stdout,
            is_terminal: io::stdout().is_terminal(),
        }
    }

    /// Discard all diagnostics
    pub fn silent() -> Self {
        Self::to_writer(io::sink())
    }

    /// Diagnostics to an arbitrary writer, without colors
    pub fn to_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Sink::Writer(Mutex::new(Box::new(writer))),
            is_terminal: false,
        }
    }

    /// Diagnostics captured in memory, for assertions in tests
    pub fn capture() -> (Self, DiagnosticBuffer) {
        let buffer = DiagnosticBuffer::default();
        (Self::to_writer(buffer.clone()), buffer)
    }

    pub fn error(&self, msg: impl fmt::Display) {
        self.write_report(&render_error(msg, self.is_terminal));
    }

    pub fn mismatch(&self, expected_path: &Path, actual: &str, diff: &str) {
        self.write_report(&render_mismatch(expected_path, actual, diff));
    }

    fn write_report(&self, report: &str) {
        match &self.sink {
            Sink::Stdout => emit(&mut io::stdout().lock(), report),
            Sink::Writer(writer) => emit(&mut **writer.lock(), report),
        }
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("is_terminal", &self.is_terminal)
            .finish_non_exhaustive()
    }
}

/// Shared in-memory diagnostic sink
#[derive(Clone, Debug, Default)]
pub struct DiagnosticBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl DiagnosticBuffer {
    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }
}

impl Write for DiagnosticBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
