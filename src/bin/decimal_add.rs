// ============================================================================
// decimal-add
// Adds whitespace-separated pairs of decimal literals read from a file
// ============================================================================

use anyhow::{bail, Context};
use clap::Parser;
use decimal_adder::driver::{DriverConfig, DriverError, PairRunner};
use decimal_adder::interfaces::WriterSink;
use decimal_adder::utils::logger;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "decimal-add")]
#[command(about = "Add pairs of decimal numbers without floating-point rounding")]
struct Cli {
    /// Input file; prompted for on stdin when omitted
    file: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn prompt_for_file() -> anyhow::Result<PathBuf> {
    print!("Enter file name: ");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read file name from stdin")?;

    match line.split_whitespace().next() {
        Some(name) => Ok(PathBuf::from(name)),
        None => bail!("no file name given"),
    }
}

const OPEN_FAILURE_MESSAGE: &str = "Error: Cannot open file.";

/// Message and exit status for errors that end the run before any pair is
/// read; `None` for errors that should propagate.
fn open_failure(error: &DriverError) -> Option<(&'static str, i32)> {
    error.is_open_failure().then_some((OPEN_FAILURE_MESSAGE, 1))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let input = match cli.file {
        Some(path) => path,
        None => prompt_for_file()?,
    };
    let config = DriverConfig::new(input).with_verbose(cli.verbose);
    logger::init_logger(config.verbose);
    tracing::debug!("Driver config: {:?}", config);

    let runner = PairRunner::new(Arc::new(WriterSink::stdout()));
    match runner.run_path(&config) {
        Ok(summary) => {
            tracing::debug!("Run summary: {:?}", summary);
            Ok(())
        },
        Err(e) => match open_failure(&e) {
            Some((message, code)) => {
                tracing::error!("{}", e);
                println!("{}", message);
                std::process::exit(code);
            },
            None => Err(e).context("run aborted"),
        },
    }
}
