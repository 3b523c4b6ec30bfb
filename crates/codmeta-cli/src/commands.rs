//! Command implementations.

use std::fs;
use std::io::{self, Write};

use anyhow::Context;
use tracing::info;

use codmeta_ingest::{RowSource, SheetSource, SourceConfig, filter_location};
use codmeta_output::{to_csv, to_xlsx, to_xml, to_yaml};
use codmeta_server::AppState;
use codmeta_transform::{build_long, build_nested, build_nested_for, split_wide};

use crate::cli::{ExportArgs, FormatArg, ServeArgs};

pub fn run_serve(args: &ServeArgs) -> anyhow::Result<()> {
    let config = SourceConfig::from_env().context("reading source configuration")?;
    let state = AppState::from_config(config);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(codmeta_server::serve(state, args.bind))?;
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> anyhow::Result<()> {
    let config = SourceConfig::from_env().context("reading source configuration")?;
    let source = SheetSource::new(reqwest::Client::new(), config);
    let runtime = tokio::runtime::Runtime::new()?;
    let rows = runtime
        .block_on(source.rows())
        .context("fetching source sheet")?;
    let rows = match args.iso3.as_deref() {
        Some(code) if !code.is_empty() => filter_location(rows, code),
        _ => rows,
    };
    let records = build_long(&rows)?;
    info!(records = records.len(), format = ?args.format, "exporting");

    let bytes = match args.format {
        FormatArg::Csv => to_csv(&records)?.into_bytes(),
        FormatArg::Json => {
            let json = match args.iso3.as_deref() {
                Some(code) if !code.is_empty() => {
                    serde_json::to_string_pretty(&build_nested_for(&records, code))?
                }
                _ => serde_json::to_string_pretty(&build_nested(&records))?,
            };
            json.into_bytes()
        }
        FormatArg::Xml => match args.iso3.as_deref() {
            Some(code) if !code.is_empty() => {
                to_xml(&build_nested_for(&records, code))?.into_bytes()
            }
            _ => to_xml(&build_nested(&records))?.into_bytes(),
        },
        FormatArg::Yaml => match args.iso3.as_deref() {
            Some(code) if !code.is_empty() => {
                to_yaml(&build_nested_for(&records, code))?.into_bytes()
            }
            _ => to_yaml(&build_nested(&records))?.into_bytes(),
        },
        FormatArg::Xlsx => to_xlsx(&split_wide(&records))?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = bytes.len(), "export written");
        }
        None => io::stdout().write_all(&bytes)?,
    }
    Ok(())
}
