use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::history::{RenameLog, RenameRecord};
use crate::parser::{parse_episode_filename, ParseError};
use crate::progress::Progress;
use crate::scanner::{collect_directories, list_files, ScannerError};

use super::types::{
    RenameError, RenameOperation, RenameOptions, RenameOutcome, RenameReport, SkipReason,
};

/// Result of renaming a whole tree
#[derive(Debug)]
pub struct EpisodeRenameResult {
    pub report: RenameReport,
    pub log: RenameLog,
}

/// Rename episode files in `root` and every directory below it.
///
/// Directories are processed top-down, each one independently. Only a
/// missing or unreadable `root` aborts the run.
pub fn rename_tree(
    root: &Path,
    options: &RenameOptions,
    progress: &mut Progress,
) -> Result<EpisodeRenameResult, ScannerError> {
    let directories = collect_directories(root)?;

    info!("Processing {} directories under {:?}", directories.len(), root);

    let mut report = RenameReport::new(options.dry_run);
    let mut log = RenameLog::new();

    for dir in &directories {
        progress.directory_start(dir);
        rename_files_in_directory(dir, options, &mut report, &mut log, progress);
    }

    Ok(EpisodeRenameResult { report, log })
}

/// Rename every matching regular file directly inside `dir`.
///
/// Each successful rename appends one record to `log`; skips and failures
/// only go to `report`.
pub fn rename_files_in_directory(
    dir: &Path,
    options: &RenameOptions,
    report: &mut RenameReport,
    log: &mut RenameLog,
    progress: &mut Progress,
) {
    let files = match list_files(dir) {
        Ok(files) => files,
        Err(source) => {
            let error = RenameError::DirectoryUnreadable {
                path: dir.to_path_buf(),
                source,
            };
            warn!("{}", error);
            progress.failed(dir, &error);
            report.push(RenameOutcome::Failed {
                path: dir.to_path_buf(),
                error,
            });
            return;
        }
    };

    debug!("{} files in {:?}", files.len(), dir);

    let mut claims = DirectoryClaims::default();

    for path in files {
        let outcome = rename_episode_file(&path, options, &mut claims);

        match &outcome {
            RenameOutcome::Renamed(op) => {
                info!("Renamed: {:?} -> {:?}", op.source_path, op.destination_path);
                progress.renamed(op);
                log.push(RenameRecord::new(
                    op.source_path.clone(),
                    op.destination_path.clone(),
                ));
            }
            RenameOutcome::Planned(op) => progress.would_rename(op),
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
}

/// Names claimed and freed by earlier files of the same directory.
///
/// A dry run touches nothing on disk, so it consults these to report the
/// same collisions a real run would hit.
#[derive(Debug, Default)]
struct DirectoryClaims {
    destinations: HashSet<PathBuf>,
    vacated: HashSet<PathBuf>,
}

impl DirectoryClaims {
    fn is_taken(&self, destination: &Path, dry_run: bool) -> bool {
        let on_disk = destination.symlink_metadata().is_ok();
        if !dry_run {
            return on_disk;
        }
        self.destinations.contains(destination) || (on_disk && !self.vacated.contains(destination))
    }

    fn claim(&mut self, op: &RenameOperation) {
        self.destinations.insert(op.destination_path.clone());
        self.vacated.insert(op.source_path.clone());
    }
}

/// Parse and rename a single file
fn rename_episode_file(
    path: &Path,
    options: &RenameOptions,
    claims: &mut DirectoryClaims,
) -> RenameOutcome {
    let skip = |reason| RenameOutcome::Skipped {
        path: path.to_path_buf(),
        reason,
    };

    // The whole path goes into the CSV log, so it must be UTF-8 before anything moves
    if path.to_str().is_none() {
        return skip(SkipReason::NonUtf8Name);
    }

    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return skip(SkipReason::NonUtf8Name),
    };

    let parsed = match parse_episode_filename(name) {
        Ok(parsed) => parsed,
        Err(ParseError::PatternMismatch(_)) => return skip(SkipReason::PatternMismatch),
        Err(ParseError::ExtractionFailure(_)) => return skip(SkipReason::ExtractionFailure),
    };

    if parsed.season_defaulted {
        debug!("No season marker in {:?}, using season 1", name);
    }

    let new_name = parsed.canonical_name();
    if new_name == name {
        return skip(SkipReason::Unchanged);
    }

    let op = RenameOperation::new(path.to_path_buf(), new_name);

    if claims.is_taken(&op.destination_path, options.dry_run) {
        return RenameOutcome::Failed {
            path: path.to_path_buf(),
            error: RenameError::DestinationExists(op.destination_path),
        };
    }

    if options.dry_run {
        claims.claim(&op);
        return RenameOutcome::Planned(op);
    }

    match fs::rename(&op.source_path, &op.destination_path) {
        Ok(()) => RenameOutcome::Renamed(op),
        Err(source) => RenameOutcome::Failed {
            path: path.to_path_buf(),
            error: RenameError::Filesystem {
                from: op.source_path,
                to: op.destination_path,
                source,
            },
        },
    }
}
