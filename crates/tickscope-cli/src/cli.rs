//! CLI argument definitions for Tickscope.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `analyze` | Full analytics bundle for one symbol |
//! | `bars` | Daily OHLCV bars for one symbol |
//! | `quote` | Latest snapshot for one or more symbols |
//! | `symbols` | List every symbol the active feed serves |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! The active feed is chosen from the environment: a non-empty
//! `TICKSCOPE_ALPHAVANTAGE_API_KEY` selects the live Alpha Vantage feed,
//! otherwise deterministic synthetic data is served.
//!
//! # Examples
//!
//! ```bash
//! # Full analysis, human-readable
//! tickscope analyze FPT
//!
//! # Reproducible indicator placeholders
//! tickscope analyze FPT --seed 7 --format json --pretty
//!
//! # Last 30 bars
//! tickscope bars VNM --limit 30
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Tickscope - stock analytics over daily OHLCV series
#[derive(Debug, Parser)]
#[command(
    name = "tickscope",
    author,
    version,
    about = "Stock analytics over daily OHLCV series",
    long_about = "Tickscope computes calendar performance buckets, trend classification, \
placeholder valuation ratios, and random-walk price forecasts from daily bars.\n\
\n\
Data comes from Alpha Vantage when TICKSCOPE_ALPHAVANTAGE_API_KEY is set, \
or from a deterministic synthetic feed otherwise.\n\
\n\
Use 'tickscope <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines for terminal display.
    Text,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Full analytics bundle for one symbol.
    ///
    /// Computes monthly/yearly performance, trend, placeholder indicators,
    /// evaluation lines, and quarter + year price forecasts.
    ///
    /// # Examples
    ///
    ///   tickscope analyze FPT
    ///   tickscope analyze FPT --seed 7 --format json --pretty
    Analyze(AnalyzeArgs),

    /// Daily OHLCV bars for one symbol.
    ///
    /// # Examples
    ///
    ///   tickscope bars VNM
    ///   tickscope bars VNM --limit 30
    Bars(BarsArgs),

    /// Latest snapshot for one or more symbols.
    ///
    /// # Examples
    ///
    ///   tickscope quote FPT
    ///   tickscope quote FPT VNM HPG --format json
    Quote(QuoteArgs),

    /// List every symbol the active feed serves.
    Symbols,
}

/// Arguments for the `analyze` command.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Market symbol to analyze.
    pub symbol: String,

    /// Seed for the indicator placeholder rng.
    ///
    /// The valuation ratios are illustrative random draws; pass a seed to
    /// make them reproducible across runs.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `bars` command.
#[derive(Debug, Args)]
pub struct BarsArgs {
    /// Market symbol to fetch bars for.
    pub symbol: String,

    /// Number of most recent bars to return (0 means all).
    #[arg(long, default_value_t = 0)]
    pub limit: usize,
}

/// Arguments for the `quote` command.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// One or more market symbols (e.g., FPT, VNM, HPG).
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,
}
