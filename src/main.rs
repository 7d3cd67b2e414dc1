use anirename::cli::RenameArgs;
use anirename::error::AppError;
use anirename::history::write_log;
use anirename::logging;
use anirename::output::{display_dry_run, display_execution_result, BatchKind};
use anirename::progress::Progress;
use anirename::rename::{rename_tree, RenameOptions};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = RenameArgs::parse();

    logging::init(args.verbose);

    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: RenameArgs) -> Result<(), AppError> {
    // The log always lands relative to where the tool was started, not under -d
    let cwd = std::env::current_dir()
        .map_err(|e| AppError::Other(format!("Cannot determine current directory: {}", e)))?;
    let log_path = cwd.join(&args.output);

    let mut progress = Progress::new();
    let options = RenameOptions { dry_run: args.dry };

    info!("Renaming episodes under {:?}", args.directory);

    let result = rename_tree(&args.directory, &options, &mut progress)?;

    let mut stdout = std::io::stdout();

    if args.dry {
        display_dry_run(&result.report, BatchKind::Files, &mut stdout)
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
        return Ok(());
    }

    display_execution_result(&result.report, BatchKind::Files, &mut stdout)
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    // Renames already performed stay applied even if the log cannot be written
    if let Err(e) = write_log(&result.log, &log_path) {
        progress.error(&e.to_string());
        return Err(e.into());
    }

    progress.log_written(&log_path, result.log.len());

    Ok(())
}
