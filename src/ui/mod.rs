//! Terminal output.
//!
//! labcheck is a CI tool, so there are no prompts or spinners: just styled,
//! line-oriented output. Colors come from `console`, which already backs
//! off when stdout is not a terminal; `--no-color` disables them outright.

use console::style;

/// Line-oriented terminal output with a quiet mode.
///
/// Checker output itself is always printed verbatim; quiet mode only
/// suppresses labcheck's own headers and status lines.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    quiet: bool,
}

impl Output {
    /// Create an output handle.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Section header for one checker invocation.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("{}", style(msg).bold());
        }
    }

    /// Plain informational line.
    pub fn message(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg);
        }
    }

    /// Success line.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("{} {}", style("✓").green().bold(), msg);
        }
    }

    /// Error line. Always printed, quiet or not.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red().bold(), msg);
    }
}
