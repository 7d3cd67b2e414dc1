use anirename::cli::RestoreArgs;
use anirename::error::AppError;
use anirename::logging;
use anirename::output::{display_dry_run, display_execution_result, BatchKind};
use anirename::progress::Progress;
use anirename::rename::RenameOptions;
use anirename::restore::{restore_from_log, RestoreError};
use clap::Parser;
use tracing::{debug, error, warn};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = RestoreArgs::parse();

    logging::init(args.verbose);

    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: RestoreArgs) -> Result<(), AppError> {
    let mut progress = Progress::new();
    let options = RenameOptions { dry_run: args.dry };

    let report = match restore_from_log(&args.csv, &options, &mut progress) {
        Ok(report) => report,
        Err(RestoreError::LogNotFound(path)) => {
            // Nothing to restore is not an error
            warn!("Rename log not found: {:?}", path);
            progress.error(&format!("Rename log not found: {}", path.display()));
            return Ok(());
        }
        Err(RestoreError::Log(e)) => return Err(e.into()),
    };

    let mut stdout = std::io::stdout();

    let displayed = if args.dry {
        display_dry_run(&report, BatchKind::Restores, &mut stdout)
    } else {
        display_execution_result(&report, BatchKind::Restores, &mut stdout)
    };
    displayed.map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    Ok(())
}
