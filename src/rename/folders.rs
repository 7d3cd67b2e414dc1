use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::progress::Progress;
use crate::scanner::{scan_directory, ScannerError};

use super::name_builder::sanitize_name;
use super::types::{
    RenameError, RenameOperation, RenameOptions, RenameOutcome, RenameReport, SkipReason,
};

// CJK Unified Ideographs
static CHINESE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\x{4E00}-\x{9FFF}]+").unwrap());

static BRACKETED_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").unwrap());

/// First maximal run of Chinese characters in `text`
pub fn extract_chinese(text: &str) -> Option<&str> {
    CHINESE_RUN_REGEX.find(text).map(|m| m.as_str())
}

/// Remove every `[...]` segment and trim the result
pub fn remove_bracketed(text: &str) -> String {
    BRACKETED_REGEX.replace_all(text, "").trim().to_string()
}

/// Derive the new name for a folder, or `None` if it should stay as is.
///
/// Chinese text outside the bracketed tags is preferred, so
/// `[字幕组] 番剧名称 [1080p]` becomes `番剧名称`. A name whose only Chinese
/// text sits inside brackets falls back to that text; a name without any
/// Chinese just loses its bracketed tags.
pub fn derive_folder_name(name: &str) -> Option<String> {
    let stripped = remove_bracketed(name);

    let candidate = extract_chinese(&stripped)
        .or_else(|| extract_chinese(name))
        .unwrap_or(&stripped);

    let candidate = sanitize_name(candidate);

    if candidate.is_empty() || candidate == name {
        None
    } else {
        Some(candidate)
    }
}

/// Rename each immediate subdirectory of `base` to its derived name.
///
/// Files in `base` are ignored. An existing entry with the derived name is
/// never replaced.
pub fn rename_folders(
    base: &Path,
    options: &RenameOptions,
    progress: &mut Progress,
) -> Result<RenameReport, ScannerError> {
    let entries = scan_directory(base)?;

    info!("Found {} subdirectories in {:?}", entries.len(), base);

    let mut report = RenameReport::new(options.dry_run);

    for entry in entries {
        // The scanned name is lossy; a replacement character must not end up in a new name
        if entry.path.file_name().and_then(|n| n.to_str()).is_none() {
            debug!("Skipping non-UTF-8 folder {:?}", entry.path);
            progress.skipped(&entry.path, SkipReason::NonUtf8Name);
            report.push(RenameOutcome::Skipped {
                path: entry.path,
                reason: SkipReason::NonUtf8Name,
            });
            continue;
        }

        let new_name = match derive_folder_name(&entry.name) {
            Some(n) => n,
            None => {
                debug!("Leaving {:?} unchanged", entry.name);
                report.push(RenameOutcome::Skipped {
                    path: entry.path,
                    reason: SkipReason::Unchanged,
                });
                continue;
            }
        };

        let op = RenameOperation::new(entry.path, new_name);

        if op.destination_path.symlink_metadata().is_ok() {
            warn!("Target already exists: {:?}", op.destination_name);
            progress.skipped(&op.destination_path, SkipReason::TargetExists);
            report.push(RenameOutcome::Skipped {
                path: op.source_path,
                reason: SkipReason::TargetExists,
            });
            continue;
        }

        if options.dry_run {
            progress.folder_renamed(&op, true);
            report.push(RenameOutcome::Planned(op));
            continue;
        }

        match fs::rename(&op.source_path, &op.destination_path) {
            Ok(()) => {
                info!("Renamed folder: {} -> {}", op.source_name, op.destination_name);
                progress.folder_renamed(&op, false);
                report.push(RenameOutcome::Renamed(op));
            }
            Err(source) => {
                let path = op.source_path.clone();
                let error = RenameError::Filesystem {
                    from: op.source_path,
                    to: op.destination_path,
                    source,
                };
                warn!("{}", error);
                progress.failed(&path, &error);
                report.push(RenameOutcome::Failed { path, error });
            }
        }
    }

    Ok(report)
}
