//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tagger",
    version,
    about = "Print QR-coded tag labels for cut pieces",
    long_about = "Turn a cutting-list CSV into a printable PDF of tag labels.\n\n\
                  Each row becomes one 100x50 mm page carrying the product name and\n\
                  price from the product catalog, the SKU, and a QR code of the order id."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow order ids and other row values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render every row of a cutting list into a PDF of tag labels.
    Generate(GenerateArgs),

    /// Show the labels a cutting list would produce without rendering them.
    Preview(PreviewArgs),

    /// Fetch and list the product catalog.
    Catalog(CatalogArgs),

    /// Write a sample cutting list with the expected columns.
    Sample(SampleArgs),
}

/// Catalog override shared by the commands that need one.
#[derive(Args)]
pub struct CatalogArg {
    /// Catalog URL or local JSON file (overrides the configured endpoint).
    #[arg(long = "catalog", value_name = "URL|FILE")]
    pub catalog: Option<String>,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Cutting list CSV.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Output PDF path (default: tag-labels.pdf).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub catalog: CatalogArg,

    /// Also save each rendered label as a PNG in this directory.
    #[arg(long = "preview-dir", value_name = "DIR")]
    pub preview_dir: Option<PathBuf>,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Cutting list CSV.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    #[command(flatten)]
    pub catalog: CatalogArg,
}

#[derive(Parser)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub catalog: CatalogArg,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Where to write the template.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "tag_sample.csv"
    )]
    pub output: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
