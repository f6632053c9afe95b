//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Command results go to stdout, diagnostics to stderr.
pub(crate) struct Output {
    out: Term,
    err: Term,
    red: Style,
    cyan_bold: Style,
    dim: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Print a result line to stdout.
    pub(crate) fn print(&self, msg: &str) -> std::io::Result<()> {
        self.out.write_line(msg)
    }

    /// Print a highlighted result line to stdout (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) -> std::io::Result<()> {
        self.out.write_line(&self.cyan_bold.apply_to(msg).to_string())
    }

    /// Print a de-emphasized result line to stdout.
    pub(crate) fn dim(&self, msg: &str) -> std::io::Result<()> {
        self.out.write_line(&self.dim.apply_to(msg).to_string())
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }
}
