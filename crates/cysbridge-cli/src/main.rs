mod cli;
mod config;
mod error;
mod logging;
mod output;
mod progress;

use crate::cli::Cli;
use crate::config::PartialScanConfig;
use crate::error::{CliError, Result};
use crate::output::FileReport;
use crate::progress::FileProgress;
use clap::Parser;
use cysbridge::engine::config::ScanConfig;
use cysbridge::engine::error::EngineError;
use cysbridge::workflows::scan;
use std::fmt::Display;
use std::io::Write;
use tracing::{debug, info, warn};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!(
        "🚀 CysBridge CLI v{} starting up.",
        env!("CARGO_PKG_VERSION")
    );
    debug!("Full CLI arguments parsed: {:?}", &cli);

    configure_threads(cli.threads)?;

    let config = PartialScanConfig::load(&cli)?.merge_with_cli(&cli)?;
    debug!(?config, "Resolved scan configuration.");

    let show_greetings = !cli.quiet && !cli.json;
    if show_greetings {
        println!("{}", output::banner());
    }

    let outcome = {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        scan_inputs(&cli, &config, &mut out)
    };

    if show_greetings {
        println!("\n{}", output::FAREWELL);
    }
    outcome
}

#[cfg(feature = "parallel")]
fn configure_threads(threads: Option<usize>) -> Result<()> {
    if let Some(num_threads) = threads {
        info!(
            "Setting Rayon global thread pool to {} threads.",
            num_threads
        );
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }
    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn configure_threads(threads: Option<usize>) -> Result<()> {
    if threads.is_some() {
        warn!("Ignoring --threads: this build does not include the `parallel` feature.");
    }
    Ok(())
}

/// Scans every input in order, isolating failures per file.
///
/// Text reports are written to `out` as each file completes; with `--json`
/// a single array is written once all files are done. Fails only when no
/// input could be processed.
fn scan_inputs<W: Write>(cli: &Cli, config: &ScanConfig, out: &mut W) -> Result<()> {
    let total = cli.inputs.len();
    let multiple = total > 1;
    let progress = FileProgress::new(total, !cli.quiet && multiple);

    let mut reports = Vec::new();
    let mut failures = 0usize;

    for path in &cli.inputs {
        progress.start(path);
        match scan::run(path, config) {
            Ok(result) => {
                info!(
                    path = %path.display(),
                    source = %result.source,
                    candidates = result.candidates,
                    bridges = result.bridges.len(),
                    "Input scanned."
                );
                if cli.json {
                    reports.push(FileReport::success(path, result));
                } else {
                    let mut text = String::new();
                    // Writing into a String cannot fail.
                    let _ = output::write_text_result(&mut text, path, &result, multiple);
                    progress.suspend(|| out.write_all(text.as_bytes()))?;
                }
            }
            Err(e) => {
                failures += 1;
                debug!(path = %path.display(), error = ?e, "Input failed.");
                let message = output::could_not_process_message(path, failure_reason(&e));
                progress.suspend(|| eprintln!("❌ {}", message));
                if cli.json {
                    reports.push(FileReport::failure(path, &e));
                }
            }
        }
        progress.advance();
    }
    progress.finish();

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        writeln!(out)?;
    }
    out.flush()?;

    if failures == total {
        return Err(CliError::AllInputsFailed { count: total });
    }
    if failures > 0 {
        warn!(
            failed = failures,
            total, "Some inputs could not be processed."
        );
    }
    Ok(())
}

fn failure_reason(error: &EngineError) -> &dyn Display {
    match error {
        EngineError::StructureRead { source, .. } => source as &dyn Display,
        other => other as &dyn Display,
    }
}
