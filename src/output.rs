//! Output sink: line-oriented writes to the user's stdout and stderr.

use owo_colors::OwoColorize;
use std::io::Write;
use tracing::debug;

/// Where command output and diagnostics go. Nothing is ever read back.
pub trait OutputSink {
    /// One line of command output.
    fn write_out(&mut self, line: &str);

    /// One line of diagnostics (warnings, notices).
    fn write_err(&mut self, line: &str);

    /// Render backend warnings, one per line, on the diagnostic stream.
    fn display_warnings(&mut self, warnings: &[String]) {
        for warning in warnings {
            self.write_err(warning);
        }
    }
}

/// Writes to the process's stdout/stderr; diagnostics are highlighted when `color` is set.
pub struct TerminalSink {
    color: bool,
}

impl TerminalSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl OutputSink for TerminalSink {
    // A closed pipe ends output; there is nowhere left to report it.
    fn write_out(&mut self, line: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", line) {
            debug!(error = %e, "Dropped stdout line");
        }
    }

    fn write_err(&mut self, line: &str) {
        let mut err = std::io::stderr().lock();
        let written = if self.color {
            writeln!(err, "{}", line.yellow().bold())
        } else {
            writeln!(err, "{}", line)
        };
        if let Err(e) = written {
            debug!(error = %e, "Dropped stderr line");
        }
    }
}

/// In-memory sink, used by tests and by callers that post-process output.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    pub out: Vec<String>,
    pub err: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn out_text(&self) -> String {
        self.out.join("\n")
    }

    pub fn err_text(&self) -> String {
        self.err.join("\n")
    }
}

impl OutputSink for BufferSink {
    fn write_out(&mut self, line: &str) {
        self.out.push(line.to_string());
    }

    fn write_err(&mut self, line: &str) {
        self.err.push(line.to_string());
    }
}
