use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::*;

/// Errors reading or writing the rename log
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to write rename log {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to read rename log {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Rename log {path} is missing the '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },
}

impl LogError {
    pub fn path(&self) -> &Path {
        match self {
            LogError::Write { path, .. } => path,
            LogError::Read { path, .. } => path,
            LogError::MissingColumn { path, .. } => path,
        }
    }
}

/// Write the log as CSV, replacing any existing file at `path`
pub fn write_log(log: &RenameLog, path: &Path) -> Result<(), LogError> {
    let temp_path = temp_path_for(path);
    let write_error = |source: csv::Error| LogError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Err(e) = write_records(log, &temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_error(e));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_error(e.into())
    })?;

    info!("Rename log with {} records written to: {:?}", log.len(), path);

    Ok(())
}

fn write_records(log: &RenameLog, path: &Path) -> Result<(), csv::Error> {
    debug!("Writing rename log to temporary file {:?}", path);

    // Header is written by hand so an empty log still gets one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record([OLD_PATH_COLUMN, NEW_PATH_COLUMN])?;
    for record in log {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from(DEFAULT_LOG_NAME));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_test_log() -> RenameLog {
        RenameLog::from(vec![
            RenameRecord::new(
                "D/[Group] My Show S01E05 [Extra].mkv",
                "D/My Show S01E05.mkv",
            ),
            RenameRecord::new("D/[字幕组] 番剧 S01E01.mkv", "D/番剧 S01E01.mkv"),
        ])
    }

    #[test]
    fn test_write_log() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rename_log.csv");

        write_log(&create_test_log(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Old Path,New Path");
        assert_eq!(
            lines[1],
            "D/[Group] My Show S01E05 [Extra].mkv,D/My Show S01E05.mkv"
        );
        assert_eq!(lines[2], "D/[字幕组] 番剧 S01E01.mkv,D/番剧 S01E01.mkv");
    }

    #[test]
    fn test_write_empty_log_has_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_log(&RenameLog::new(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "Old Path,New Path");
    }

    #[test]
    fn test_write_quotes_commas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let log = RenameLog::from(vec![RenameRecord::new("D/[G] A, B S01E01.mkv", "D/A, B S01E01.mkv")]);

        write_log(&log, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"D/[G] A, B S01E01.mkv\",\"D/A, B S01E01.mkv\""));
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rename_log.csv");
        fs::write(&path, "stale content\nmore\nmore\nmore\n").unwrap();

        write_log(&RenameLog::new(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rename_log.csv");

        write_log(&create_test_log(), &path).unwrap();

        assert!(!temp_path_for(&path).exists());
        assert_eq!(temp_path_for(&path), dir.path().join("rename_log.csv.tmp"));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("rename_log.csv");

        let result = write_log(&create_test_log(), &path);

        match result {
            Err(err @ LogError::Write { .. }) => assert_eq!(err.path(), path.as_path()),
            other => panic!("Expected write error, got {:?}", other),
        }
    }
}
