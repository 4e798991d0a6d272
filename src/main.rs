use catalog_prep::cli::{self, Args};
use catalog_prep::core::{AppError, ErrorReporter};
use catalog_prep::logging;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    let _guard = match logging::init(&args) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("warning: logging disabled: {:#}", err);
            None
        }
    };

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let error = err.downcast::<AppError>().unwrap_or_else(AppError::from);
            if let Err(io_err) = ErrorReporter::stderr().report(&error) {
                eprintln!("{} ({})", error, io_err);
            }
            ExitCode::FAILURE
        }
    }
}
