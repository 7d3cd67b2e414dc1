use clap::Parser;
use std::path::PathBuf;

use crate::history::DEFAULT_LOG_NAME;

/// Arguments for `anirename`
#[derive(Parser, Debug)]
#[command(name = "anirename")]
#[command(author, version, long_about = None)]
#[command(
    about = "Rename episode files to 'Title SxxExx', recursing into subdirectories, and record every rename in a CSV log"
)]
pub struct RenameArgs {
    /// Root directory to process
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// CSV log file, resolved against the current directory
    #[arg(short, long, default_value = DEFAULT_LOG_NAME)]
    pub output: PathBuf,

    /// Simulate changes without modifying the filesystem
    #[arg(long)]
    pub dry: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for `anirename-restore`
#[derive(Parser, Debug)]
#[command(name = "anirename-restore")]
#[command(author, version, long_about = None)]
#[command(about = "Restore original file names from a CSV rename log")]
pub struct RestoreArgs {
    /// CSV log written by anirename
    #[arg(short, long, default_value = DEFAULT_LOG_NAME)]
    pub csv: PathBuf,

    /// Simulate changes without modifying the filesystem
    #[arg(long)]
    pub dry: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for `anirename-folders`
#[derive(Parser, Debug)]
#[command(name = "anirename-folders")]
#[command(author, version, long_about = None)]
#[command(
    about = "Rename the subdirectories of the current directory to their Chinese title, or strip their [bracketed] tags"
)]
pub struct FolderArgs {
    /// Simulate changes without modifying the filesystem
    #[arg(long)]
    pub dry: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
