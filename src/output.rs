//! Output formatting and styling module.
//!
//! All terminal output goes through a [`Reporter`], which styles messages with
//! `colored` and writes them to any `Write` sink. The binary hands it stdout;
//! tests hand it a `Vec<u8>` and inspect what was printed.

use crate::file_organizer::FileOutcome;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};

/// Writes styled status lines to an output sink.
///
/// - Success messages (green ✓)
/// - Error messages (red ✗)
/// - Warning messages (yellow ⚠)
/// - Info messages (cyan)
/// - Prompts, written without a trailing newline and flushed
pub struct Reporter<W: Write> {
    out: W,
    show_progress: bool,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter writing to `out`, with progress bars disabled.
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_progress: false,
        }
    }

    /// Enables or disables progress bars for batch operations.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Prints a success message in green with a checkmark.
    ///
    /// # Example
    ///
    /// ```
    /// use shotsort::output::Reporter;
    ///
    /// let mut reporter = Reporter::new(Vec::new());
    /// reporter.success("Deleted: Screenshot 1.png").unwrap();
    /// let printed = String::from_utf8(reporter.into_inner()).unwrap();
    /// assert!(printed.contains("Deleted: Screenshot 1.png"));
    /// ```
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", "✓".green(), message)
    }

    /// Prints an error message in red with an X mark.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", "✗".red(), message)
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", "⚠".yellow(), message)
    }

    /// Prints an info message in cyan.
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.cyan())
    }

    /// Prints a regular message without styling.
    pub fn plain(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    /// Prints a section header preceded by a blank line.
    pub fn header(&mut self, header: &str) -> io::Result<()> {
        writeln!(self.out, "\n{}", header.bold())
    }

    /// Prints a prompt and flushes so it shows before input is read.
    pub fn prompt(&mut self, message: &str) -> io::Result<()> {
        write!(self.out, "{}", message)?;
        self.out.flush()
    }

    /// Prints the line for a single file outcome.
    pub fn outcome(&mut self, outcome: &FileOutcome) -> io::Result<()> {
        match outcome {
            FileOutcome::Moved { name, destination } => {
                self.success(&format!("Moved: {} → {}", name, destination.display()))
            }
            FileOutcome::Deleted { name } => self.success(&format!("Deleted: {}", name)),
            FileOutcome::Failed {
                name,
                operation,
                error,
            } => self.error(&format!("Error {} {}: {}", operation.verb(), name, error)),
        }
    }

    /// Creates a progress bar for a batch of `total` files.
    ///
    /// The bar is hidden unless progress was enabled with [`with_progress`].
    ///
    /// [`with_progress`]: Reporter::with_progress
    pub fn progress_bar(&self, total: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
        pb.set_style(style);
        pb
    }

    /// Consumes the reporter and returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
