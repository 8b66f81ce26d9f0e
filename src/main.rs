use std::io;
use std::process::ExitCode;

use clap::Parser;
use indefinite::cli::{self, Args};
use indefinite::logger::setup_logger;

fn main() -> ExitCode {
    setup_logger();

    // Usage errors exit here with status 2
    let args = Args::parse();

    match cli::run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
