//! JSEL CLI - Command-line tool for JSON list selection
//!
//! Reads a document of the form `{ "list": [...], "indices": <int> | [<int>, ...] }`,
//! extracts the elements named by `indices`, and writes them as a JSON array.

use clap::Parser;
use jsel_io::{execute_select, Result, SelectRequest, SelectSummary};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "jsel")]
#[command(about = "Select elements from a JSON list by index")]
#[command(version)]
struct Cli {
    /// Input document ({ "list": [...], "indices": ... })
    #[arg(default_value = "input.json")]
    input: PathBuf,
    /// Output file for the selected values
    #[arg(default_value = "output.json")]
    output: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let summary = execute_select(SelectRequest {
        input: cli.input,
        output: cli.output.clone(),
    })?;
    report_summary(&summary, &cli.output)?;
    Ok(())
}

fn report_summary(summary: &SelectSummary, output: &Path) -> Result<()> {
    let mut stderr = std::io::stderr().lock();
    writeln!(
        &mut stderr,
        "Selected {} of {} values to {}",
        summary.values_selected,
        summary.list_len,
        output.display()
    )?;
    Ok(())
}
