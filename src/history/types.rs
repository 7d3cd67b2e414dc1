use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default log file name, resolved against the working directory
pub const DEFAULT_LOG_NAME: &str = "rename_log.csv";

pub const OLD_PATH_COLUMN: &str = "Old Path";
pub const NEW_PATH_COLUMN: &str = "New Path";

/// One performed rename, persisted as one CSV row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRecord {
    #[serde(rename = "Old Path")]
    pub old_path: PathBuf,

    #[serde(rename = "New Path")]
    pub new_path: PathBuf,
}

impl RenameRecord {
    pub fn new(old_path: impl Into<PathBuf>, new_path: impl Into<PathBuf>) -> Self {
        Self {
            old_path: old_path.into(),
            new_path: new_path.into(),
        }
    }
}

/// All renames of one run, in the order they happened
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameLog {
    records: Vec<RenameRecord>,
}

impl RenameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RenameRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[RenameRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenameRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<RenameRecord>> for RenameLog {
    fn from(records: Vec<RenameRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a RenameLog {
    type Item = &'a RenameRecord;
    type IntoIter = std::slice::Iter<'a, RenameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
