use std::{fs::File, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use salestotal::run;

const RESULTS_FILE: &str = "SalesResults.txt";

/// Compute total sales from JSON data.
///
/// Each sale's product is priced by the first catalogue title that contains
/// it, ignoring case. The result is also written to SalesResults.txt in the
/// current directory.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to price catalogue JSON file
    catalogue: PathBuf,
    /// Path to sales record JSON file
    sales: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let report = match run(&args.catalogue, &args.sales) {
        Ok(report) => report,
        Err(e) => {
            println!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };
    for warning in report.warnings() {
        println!("{warning}");
    }
    println!("{report}");
    let file = File::create(RESULTS_FILE).with_context(|| format!("creating {RESULTS_FILE}"))?;
    report
        .write_results(file)
        .with_context(|| format!("writing {RESULTS_FILE}"))?;
    Ok(ExitCode::SUCCESS)
}
