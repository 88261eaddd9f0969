//! resourcedump CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse arguments, set up logging,
//! run the work orders and exit with an appropriate status.

use std::process::ExitCode;

use resourcedump::{Arguments, Error};

mod cli;

use cli::errors::AppError;

fn main() -> ExitCode {
    let args = match Arguments::from_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            match &e {
                // clap picks stdout for --version and stderr for real errors
                Error::Usage(usage) => {
                    let _ = usage.print();
                }
                other => eprintln!("resourcedump: {other}"),
            }
            return ExitCode::from(AppError::from(e).exit_code());
        }
    };

    cli::init_logging(args.log_enabled());

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
