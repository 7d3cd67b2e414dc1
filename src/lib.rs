pub mod cli;
pub mod error;
pub mod history;
pub mod logging;
pub mod output;
pub mod parser;
pub mod progress;
pub mod rename;
pub mod restore;
pub mod scanner;

pub use error::{AppError, ExitCode};
pub use history::{read_log, write_log, LogError, RenameLog, RenameRecord, DEFAULT_LOG_NAME};
pub use parser::{
    extract_bracket_episode, extract_season_episode, parse_episode_filename, EpisodeFilename,
    ParseError,
};
pub use rename::{
    derive_folder_name, rename_files_in_directory, rename_folders, rename_tree, RenameError,
    RenameOperation, RenameOptions, RenameOutcome, RenameReport, SkipReason,
};
pub use restore::{restore_from_log, RestoreError};
pub use scanner::{collect_directories, scan_directory, DirectoryEntry, ScannerError};
