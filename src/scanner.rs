use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
}

impl DirectoryEntry {
    pub fn new(name: String, path: PathBuf) -> Self {
        Self { name, path }
    }
}

fn check_directory(target: &Path) -> Result<(), ScannerError> {
    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    Ok(())
}

fn read_dir_checked(target: &Path) -> Result<fs::ReadDir, ScannerError> {
    fs::read_dir(target).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(target.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })
}

/// List the immediate subdirectories of `target`, sorted by name
pub fn scan_directory(target: &Path) -> Result<Vec<DirectoryEntry>, ScannerError> {
    debug!(path = ?target, "Scanning directory");

    check_directory(target)?;

    let mut entries = Vec::new();

    for entry in read_dir_checked(target)? {
        let entry = entry?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        if !path.is_dir() {
            trace!(path = ?path, "Skipping non-directory");
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();

        debug!(name = %name, "Found subdirectory");
        entries.push(DirectoryEntry::new(name, path));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = entries.len(), "Scan complete");

    Ok(entries)
}

/// Collect `root` and every directory below it, top-down and sorted by name.
///
/// Symlinks are not followed. Subdirectories that cannot be read are still
/// returned so the caller can report them when listing their files.
pub fn collect_directories(root: &Path) -> Result<Vec<PathBuf>, ScannerError> {
    debug!(path = ?root, "Walking directory tree");

    check_directory(root)?;
    read_dir_checked(root)?;

    let mut directories = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(error = %e, "Skipping unreadable entry during walk");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            trace!(path = ?entry.path(), "Found directory");
            directories.push(entry.into_path());
        }
    }

    debug!(count = directories.len(), "Walk complete");

    Ok(directories)
}

/// List the regular files directly inside `dir`, sorted by name
pub fn list_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_file() {
            files.push(path);
        } else {
            trace!(path = ?path, "Skipping non-file");
        }
    }

    files.sort();

    Ok(files)
}
