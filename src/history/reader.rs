use std::path::Path;

use tracing::debug;

use super::types::*;
use super::writer::LogError;

/// Read a rename log written by [`write_log`](super::write_log).
///
/// Columns are located by their header names; extra columns are ignored.
pub fn read_log(path: &Path) -> Result<RenameLog, LogError> {
    let read_error = |source: csv::Error| LogError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .from_path(path)
        .map_err(read_error)?;

    let headers = reader.headers().map_err(read_error)?.clone();
    for column in [OLD_PATH_COLUMN, NEW_PATH_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(LogError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut log = RenameLog::new();
    for record in reader.deserialize::<RenameRecord>() {
        log.push(record.map_err(read_error)?);
    }

    debug!("Read {} records from {:?}", log.len(), path);

    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::write_log;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_read_log() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rename_log.csv");
        fs::write(
            &path,
            "Old Path,New Path\n\
             D/[Group] My Show S01E05 [Extra].mkv,D/My Show S01E05.mkv\n\
             D/[Group] My Show S01E06.mkv,D/My Show S01E06.mkv\n",
        )
        .unwrap();

        let log = read_log(&path).unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(
            log.records()[0].old_path,
            PathBuf::from("D/[Group] My Show S01E05 [Extra].mkv")
        );
        assert_eq!(log.records()[1].new_path, PathBuf::from("D/My Show S01E06.mkv"));
    }

    #[test]
    fn test_read_written_log_with_unicode_and_commas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rename_log.csv");
        let log = RenameLog::from(vec![
            RenameRecord::new("D/[字幕组] 番剧, 第一季 S01E01.mkv", "D/番剧, 第一季 S01E01.mkv"),
            RenameRecord::new("D/[G] \"Quoted\" S01E02.mkv", "D/\"Quoted\" S01E02.mkv"),
        ]);
        write_log(&log, &path).unwrap();

        assert_eq!(read_log(&path).unwrap(), log);
    }

    #[test]
    fn test_read_columns_by_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reordered.csv");
        fs::write(&path, "New Path,Note,Old Path\nnew.mkv,x,old.mkv\n").unwrap();

        let log = read_log(&path).unwrap();

        assert_eq!(log.records()[0], RenameRecord::new("old.mkv", "new.mkv"));
    }

    #[test]
    fn test_read_missing_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "Old Path,Target\na,b\n").unwrap();

        let result = read_log(&path);
        assert!(matches!(
            result,
            Err(LogError::MissingColumn {
                column: "New Path",
                ..
            })
        ));
    }

    #[test]
    fn test_read_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();

        let result = read_log(&path);
        assert!(matches!(result, Err(LogError::MissingColumn { .. })));
    }

    #[test]
    fn test_read_ragged_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        fs::write(&path, "Old Path,New Path\nonly-one-field\n").unwrap();

        let result = read_log(&path);
        assert!(matches!(result, Err(LogError::Read { .. })));
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = read_log(Path::new("/nonexistent/rename_log.csv"));
        assert!(matches!(result, Err(LogError::Read { .. })));
    }
}
