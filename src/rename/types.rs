use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-item rename failures. None of these abort a batch.
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    Filesystem {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why an item was left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Filename does not have the `[tag] Title ...` shape
    PatternMismatch,
    /// No season/episode marker and no bracketed episode number
    ExtractionFailure,
    /// Name is not valid UTF-8 and cannot be matched
    NonUtf8Name,
    /// Derived name is empty or equal to the current one
    Unchanged,
    /// The renamed file recorded in the log no longer exists
    SourceMissing,
    /// An entry with the derived name already exists
    TargetExists,
}

impl SkipReason {
    pub fn description(&self) -> &'static str {
        match self {
            SkipReason::PatternMismatch => "filename does not match",
            SkipReason::ExtractionFailure => "no episode number found",
            SkipReason::NonUtf8Name => "name is not valid UTF-8",
            SkipReason::Unchanged => "name unchanged",
            SkipReason::SourceMissing => "file does not exist",
            SkipReason::TargetExists => "target already exists",
        }
    }
}

/// A single rename, performed or planned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOperation {
    /// Full path before the rename
    pub source_path: PathBuf,
    /// File or directory name before the rename
    pub source_name: String,
    /// Full path after the rename
    pub destination_path: PathBuf,
    /// File or directory name after the rename
    pub destination_name: String,
}

impl RenameOperation {
    /// Rename within the same parent directory
    pub fn new(source_path: PathBuf, destination_name: String) -> Self {
        let destination_path = source_path
            .parent()
            .map(|p| p.join(&destination_name))
            .unwrap_or_else(|| PathBuf::from(&destination_name));

        Self::between(source_path, destination_path)
    }

    /// Rename between two arbitrary paths
    pub fn between(source_path: PathBuf, destination_path: PathBuf) -> Self {
        Self {
            source_name: file_name_of(&source_path),
            destination_name: file_name_of(&destination_path),
            source_path,
            destination_path,
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Outcome for one file, log record or folder
#[derive(Debug)]
pub enum RenameOutcome {
    Renamed(RenameOperation),
    /// Would have been renamed (dry run)
    Planned(RenameOperation),
    Skipped { path: PathBuf, reason: SkipReason },
    Failed { path: PathBuf, error: RenameError },
}

impl RenameOutcome {
    pub fn path(&self) -> &Path {
        match self {
            RenameOutcome::Renamed(op) | RenameOutcome::Planned(op) => &op.source_path,
            RenameOutcome::Skipped { path, .. } | RenameOutcome::Failed { path, .. } => path,
        }
    }
}

/// Options shared by every rename batch
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    pub dry_run: bool,
}

/// Collected outcomes of one batch
#[derive(Debug, Default)]
pub struct RenameReport {
    pub outcomes: Vec<RenameOutcome>,
    pub dry_run: bool,
}

impl RenameReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            outcomes: Vec::new(),
            dry_run,
        }
    }

    pub fn push(&mut self, outcome: RenameOutcome) {
        self.outcomes.push(outcome);
    }

    /// Operations that were performed, or would be in a dry run
    pub fn operations(&self) -> impl Iterator<Item = &RenameOperation> {
        self.outcomes.iter().filter_map(|o| match o {
            RenameOutcome::Renamed(op) | RenameOutcome::Planned(op) => Some(op),
            _ => None,
        })
    }

    pub fn renamed_count(&self) -> usize {
        self.operations().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::Skipped { .. }))
            .count()
    }

    /// Skips that were reported to the user (unchanged names are silent)
    pub fn reported_skip_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| {
                matches!(o, RenameOutcome::Skipped { reason, .. } if *reason != SkipReason::Unchanged)
            })
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::Failed { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }
}
