//! Per-item reporting for user-facing output.
//!
//! Every rename, skip and failure is reported here as it happens, on stdout.
//! Tracing covers the same events at `info`/`warn` level on stderr when
//! verbose logging is enabled.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::rename::{RenameError, RenameOperation, SkipReason};

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stdout().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stdout
    pub fn new() -> Self {
        Self {
            writer: Box::new(io::stdout()),
            silent: false,
            colors_enabled: should_use_colors(),
        }
    }

    /// Create a progress reporter with a custom writer
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    /// Create a silent progress reporter
    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
        }
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors_enabled
    }

    /// Report entering a directory during the tree walk
    pub fn directory_start(&mut self, dir: &Path) {
        if self.silent {
            return;
        }
        let line = format!("Processing directory: '{}'", dir.display());
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", line.bold());
        } else {
            let _ = writeln!(self.writer, "{}", line);
        }
    }

    /// Report a performed rename, with full paths
    pub fn renamed(&mut self, op: &RenameOperation) {
        self.operation("Renamed:", op, false);
    }

    /// Report a rename that a dry run would perform
    pub fn would_rename(&mut self, op: &RenameOperation) {
        self.operation("Would rename:", op, true);
    }

    /// Report a file moved back to its original path
    pub fn restored(&mut self, op: &RenameOperation) {
        self.operation("Restored:", op, false);
    }

    /// Report a restore that a dry run would perform
    pub fn would_restore(&mut self, op: &RenameOperation) {
        self.operation("Would restore:", op, true);
    }

    fn operation(&mut self, label: &str, op: &RenameOperation, planned: bool) {
        if self.silent {
            return;
        }
        let from = op.source_path.display().to_string();
        let to = op.destination_path.display().to_string();
        self.pair(label, &from, &to, planned);
    }

    /// Report a renamed folder by name only
    pub fn folder_renamed(&mut self, op: &RenameOperation, planned: bool) {
        if self.silent {
            return;
        }
        let label = if planned { "Would rename:" } else { "Renamed:" };
        let (from, to) = (op.source_name.clone(), op.destination_name.clone());
        self.pair(label, &from, &to, planned);
    }

    fn pair(&mut self, label: &str, from: &str, to: &str, planned: bool) {
        if self.colors_enabled {
            let label = if planned { label.yellow() } else { label.green() };
            let _ = writeln!(
                self.writer,
                "{} '{}' {} '{}'",
                label,
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "{} '{}' -> '{}'", label, from, to);
        }
    }

    /// Report an item left untouched
    pub fn skipped(&mut self, path: &Path, reason: SkipReason) {
        if self.silent {
            return;
        }
        let line = format!("Skipped ({}): '{}'", reason.description(), path.display());
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", line.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", line);
        }
    }

    /// Report a per-item failure (non-fatal)
    pub fn failed(&mut self, path: &Path, error: &RenameError) {
        if self.silent {
            return;
        }
        let line = format!("Failed: '{}': {}", path.display(), error);
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "✗".red().bold(), line.red());
        } else {
            let _ = writeln!(self.writer, "{}", line);
        }
    }

    /// Report a directory created while restoring
    pub fn directory_created(&mut self, dir: &Path) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer, "Created directory: '{}'", dir.display());
    }

    /// Report starting a restore
    pub fn restore_start(&mut self, total: usize, log_path: &Path) {
        if self.silent {
            return;
        }
        let line = format!(
            "Restoring {} renames from '{}' (newest first)",
            total,
            log_path.display()
        );
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", line.bold());
        } else {
            let _ = writeln!(self.writer, "{}", line);
        }
    }

    /// Report the log file written by the renamer
    pub fn log_written(&mut self, path: &Path, records: usize) {
        if self.silent {
            return;
        }
        let line = format!("Rename log ({} records) saved to: '{}'", records, path.display());
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", line.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", line);
        }
    }

    /// Report an error that ends part of the run
    pub fn error(&mut self, message: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "✗".red().bold(), message.red());
        } else {
            let _ = writeln!(self.writer, "Error: {}", message);
        }
    }
}
