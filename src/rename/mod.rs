mod episodes;
mod folders;
mod name_builder;
mod types;

pub use episodes::{rename_files_in_directory, rename_tree, EpisodeRenameResult};
pub use folders::{derive_folder_name, extract_chinese, remove_bracketed, rename_folders};
pub use name_builder::{build_episode_name, sanitize_name};
pub use types::{
    RenameError, RenameOperation, RenameOptions, RenameOutcome, RenameReport, SkipReason,
};
