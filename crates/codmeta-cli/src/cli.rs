//! CLI argument definitions.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "codmeta",
    version,
    about = "COD metadata service - normalize and export boundary metadata",
    long_about = "Normalize the curated COD boundary metadata sheet into typed\n\
                  canonical records and export them as CSV, JSON, XML, YAML or XLSX,\n\
                  either over HTTP or as a one-shot file export."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server.
    Serve(ServeArgs),

    /// Fetch the sheet once and write one export format.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long = "bind", value_name = "ADDR", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Export format.
    #[arg(value_enum, value_name = "FORMAT")]
    pub format: FormatArg,

    /// Restrict the export to one location (ISO 3166-1 alpha-3).
    #[arg(long = "iso3", value_name = "CODE")]
    pub iso3: Option<String>,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Json,
    Xml,
    Yaml,
    Xlsx,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
