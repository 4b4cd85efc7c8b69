//! Command-line UTF-8 validator.
//!
//! With no argument, validates standard input and prints its number of code
//! points, or reports the offset of the first malformed byte. With one
//! argument, validates the argument's bytes instead and prints their number of
//! code points, or `invalid`.
//!
//! Exits with status 1 for invalid input or bad usage, and 2 if the built-in
//! self-test fails.

use std::{
    ffi::OsString,
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Result;
use clap::{ArgAction, Parser, error::ErrorKind};
use tracing::{debug, error, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;
use utf8dfa::{
    avec::{count_slice, reader},
    check::self_test,
};

const INPUT_ERROR: u8 = 1;
const INTERNAL_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "utf8dfa")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Simple UTF-8 validator", long_about = None)]
struct Cli {
    /// Bytes to validate instead of standard input
    #[arg(allow_hyphen_values = true)]
    input: Option<OsString>,

    /// Log diagnostics to standard error (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    if let Err(err) = self_test() {
        eprintln!("internal tests failed: {err}");
        return ExitCode::from(INTERNAL_ERROR);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(INPUT_ERROR),
            };
        }
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::from(INPUT_ERROR)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();

    let Some(input) = cli.input else {
        debug!("validating standard input");

        // Standard input is buffered, so reading one byte at a time is cheap.
        return match reader::count(&mut io::stdin().lock()) {
            Ok(n) => {
                writeln!(stdout, "{n}")?;
                Ok(ExitCode::SUCCESS)
            }
            Err(reader::Error::Io(err)) => Err(err.into()),
            Err(err) => {
                eprintln!("{err}");
                Ok(ExitCode::from(INPUT_ERROR))
            }
        };
    };

    let bytes = input.into_encoded_bytes();
    debug!(len = bytes.len(), "validating argument");

    match count_slice(&bytes) {
        Ok(n) => {
            writeln!(stdout, "{n}")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            debug!(%err, "argument is not UTF-8");
            writeln!(stdout, "invalid")?;
            Ok(ExitCode::from(INPUT_ERROR))
        }
    }
}
