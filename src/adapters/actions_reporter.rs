//! Reporter writing GitHub Actions workflow commands to stdout.

use std::io::Write;

use crate::ports::Reporter;

/// Emits plain info lines plus `::debug::` and `::error::` workflow commands.
#[derive(Debug, Clone, Default)]
pub struct ActionsReporter;

impl ActionsReporter {
    pub fn new() -> Self {
        Self
    }

    fn emit(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout leaves nothing else to report to.
        let _ = writeln!(stdout, "{}", line);
    }
}

/// Escape a message so the runner reads it as a single command.
pub fn escape_data(message: &str) -> String {
    message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Render a workflow command line, e.g. `::error::boom`.
pub fn workflow_command(command: &str, message: &str) -> String {
    format!("::{}::{}", command, escape_data(message))
}

impl Reporter for ActionsReporter {
    fn info(&self, message: &str) {
        self.emit(message);
    }

    fn debug(&self, message: &str) {
        self.emit(&workflow_command("debug", message));
    }

    fn fail(&self, message: &str) {
        self.emit(&workflow_command("error", message));
    }
}
