use clap::Parser;
use cysbridge::engine::config::SourceSelection;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "CysBridge CLI - Finds potential disulfide bridges in experimental and predicted protein structures.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// PDB files to scan, processed in the order given.
    #[arg(required = true, value_name = "PDB")]
    pub inputs: Vec<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output, the banner and the progress bar
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for the pairwise screen.
    /// Only effective when built with the `parallel` feature.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,

    // --- Configuration ---
    /// Path to a scan configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How to decide the source type of each input: 'auto' scans the header
    /// for predictor markers, 'experimental' or 'predicted' force it.
    #[arg(long, value_name = "KIND")]
    pub source: Option<SourceSelection>,

    /// Scan only the first model of multi-model files.
    #[arg(long)]
    pub first_model: bool,

    /// Override the highest SG B-factor admitted for experimental structures.
    #[arg(long, value_name = "FLOAT")]
    pub max_b_factor: Option<f64>,

    /// Override the lowest SG pLDDT admitted for predicted structures.
    #[arg(long, value_name = "FLOAT")]
    pub min_plddt: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S criteria.distance-max=2.3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    // --- Output ---
    /// Print the results as a JSON array instead of the text report.
    #[arg(long)]
    pub json: bool,
}
