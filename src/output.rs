//! Output layer for the scorejoin CLI.
//!
//! Centralizes stdout/stderr separation:
//! - stdout: data (the run summary, the "answer")
//! - stderr: diagnostics (progress, verbose messages, errors)

/// Output helper that centralizes all CLI output
#[derive(Debug, Clone)]
pub struct Output {
    pub quiet: bool,
    pub verbose: bool,
}

impl Output {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Write a diagnostic/progress message to stderr
    /// Suppressed when --quiet is set
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{}", message);
    }

    /// Write a verbose diagnostic message to stderr
    /// Only shown with --verbose
    pub fn verbose(&self, message: &str) {
        if self.quiet || !self.verbose {
            return;
        }
        eprintln!("{}", message);
    }

    /// Write a warning to stderr
    /// Shown unless --quiet is set
    pub fn warn(&self, message: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{}", message);
    }

    /// Check if we're in quiet mode
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}
