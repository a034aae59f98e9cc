use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use sber_report_to_tsv::{TransformOptions, TransformReport, transform_report_bytes};
use tracing_subscriber::EnvFilter;

/// Conventional exit status of a process killed by SIGPIPE.
const SIGPIPE_EXIT: u8 = 141;

#[derive(Debug, Parser)]
#[command(
    name = "sber2tsv",
    version,
    about = "Flatten Sberbank's fixed-width card account statement into a tab-delimited table"
)]
struct Cli {
    /// Statement file; '-' or absent reads standard input.
    #[arg(default_value = "-")]
    file: PathBuf,
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read standard input")?;
        return Ok(bytes);
    }
    std::fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))
}

fn log_report(report: &TransformReport) {
    for warning in &report.warnings {
        eprintln!("warning: {}", warning.message);
    }
}

enum Outcome {
    Done,
    PipeClosed,
}

fn run(cli: &Cli) -> Result<Outcome> {
    let bytes = read_input(&cli.file)?;
    let (tsv, report) = transform_report_bytes(&bytes, &TransformOptions::default())
        .with_context(|| format!("failed to transform '{}'", cli.file.display()))?;
    log_report(&report);

    let mut stdout = std::io::stdout().lock();
    match stdout.write_all(tsv.as_bytes()).and_then(|()| stdout.flush()) {
        Ok(()) => Ok(Outcome::Done),
        Err(error) if error.kind() == ErrorKind::BrokenPipe => Ok(Outcome::PipeClosed),
        Err(error) => Err(error.into()),
    }
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sber_report_to_tsv=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        // a closed downstream pipe ends the run quietly
        Ok(Outcome::PipeClosed) => ExitCode::from(SIGPIPE_EXIT),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(1)
        }
    }
}
