//! Undo a renamer run using its CSV log.
//!
//! Records are processed newest first. Reversal only reduces collisions
//! between records that share a path; it does not rule them out, and a
//! collision shows up as a per-record failure.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::history::{read_log, LogError, RenameRecord};
use crate::progress::Progress;
use crate::rename::{
    RenameError, RenameOperation, RenameOptions, RenameOutcome, RenameReport, SkipReason,
};

#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("Rename log not found: {0}")]
    LogNotFound(PathBuf),

    #[error(transparent)]
    Log(#[from] LogError),
}

/// Rename every file recorded in the log back to its original path
pub fn restore_from_log(
    log_path: &Path,
    options: &RenameOptions,
    progress: &mut Progress,
) -> Result<RenameReport, RestoreError> {
    if !log_path.is_file() {
        return Err(RestoreError::LogNotFound(log_path.to_path_buf()));
    }

    info!("Loading rename log from: {:?}", log_path);

    let log = read_log(log_path)?;

    progress.restore_start(log.len(), log_path);

    let mut report = RenameReport::new(options.dry_run);

    for record in log.records().iter().rev() {
        let outcome = restore_record(record, options, progress);

        match &outcome {
            RenameOutcome::Renamed(op) => {
                info!("Restored: {:?} -> {:?}", op.source_path, op.destination_path);
                progress.restored(op);
            }
            RenameOutcome::Planned(op) => progress.would_restore(op),
            RenameOutcome::Skipped { path, reason } => {
                debug!("Skipping {:?}: {}", path, reason.description());
                progress.skipped(path, *reason);
            }
            RenameOutcome::Failed { path, error } => {
                warn!("{}", error);
                progress.failed(path, error);
            }
        }

        report.push(outcome);
    }

    Ok(report)
}

fn restore_record(
    record: &RenameRecord,
    options: &RenameOptions,
    progress: &mut Progress,
) -> RenameOutcome {
    let current = &record.new_path;
    let original = &record.old_path;

    if !current.is_file() {
        return RenameOutcome::Skipped {
            path: current.clone(),
            reason: SkipReason::SourceMissing,
        };
    }

    if original.symlink_metadata().is_ok() {
        return RenameOutcome::Failed {
            path: current.clone(),
            error: RenameError::DestinationExists(original.clone()),
        };
    }

    let op = RenameOperation::between(current.clone(), original.clone());

    if options.dry_run {
        return RenameOutcome::Planned(op);
    }

    if let Some(parent) = original.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            if let Err(source) = fs::create_dir_all(parent) {
                return RenameOutcome::Failed {
                    path: current.clone(),
                    error: RenameError::CreateDirectory {
                        path: parent.to_path_buf(),
                        source,
                    },
                };
            }
            info!("Created directory: {:?}", parent);
            progress.directory_created(parent);
        }
    }

    match fs::rename(&op.source_path, &op.destination_path) {
        Ok(()) => RenameOutcome::Renamed(op),
        Err(source) => RenameOutcome::Failed {
            path: current.clone(),
            error: RenameError::Filesystem {
                from: op.source_path,
                to: op.destination_path,
                source,
            },
        },
    }
}
