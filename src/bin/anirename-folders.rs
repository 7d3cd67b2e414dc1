use anirename::cli::FolderArgs;
use anirename::error::AppError;
use anirename::logging;
use anirename::output::{display_dry_run, display_execution_result, BatchKind};
use anirename::progress::Progress;
use anirename::rename::{rename_folders, RenameOptions};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = FolderArgs::parse();

    logging::init(args.verbose);

    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: FolderArgs) -> Result<(), AppError> {
    let base = std::env::current_dir()
        .map_err(|e| AppError::Other(format!("Cannot determine current directory: {}", e)))?;

    info!("Renaming folders in {:?}", base);

    let mut progress = Progress::new();
    let options = RenameOptions { dry_run: args.dry };

    let report = rename_folders(&base, &options, &mut progress)?;

    let mut stdout = std::io::stdout();

    let displayed = if args.dry {
        display_dry_run(&report, BatchKind::Folders, &mut stdout)
    } else {
        display_execution_result(&report, BatchKind::Folders, &mut stdout)
    };
    displayed.map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    Ok(())
}
