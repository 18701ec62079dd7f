// src/logging.rs
// =============================================================================
// tracing subscriber setup.
//
// Three outputs:
//   stderr            filtered by --verbosity
//   <out>/info.log    same filter as stderr, no colors, appended
//   <out>/error.log   ERROR events only, appended
//
// --verbosity: 1 = errors and important messages (the per-request fetch
// chatter is turned down to warnings), 2 = normal, 3 = everything.
// RUST_LOG, when set, replaces the verbosity filter.
// =============================================================================

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::fetch::LOG_TARGET;

pub const INFO_LOG: &str = "info.log";
pub const ERROR_LOG: &str = "error.log";

/// Filter directive for a verbosity level
pub fn directive(verbosity: u8) -> String {
    match verbosity {
        0 | 1 => format!("info,{}=warn", LOG_TARGET),
        2 => "info".to_string(),
        _ => format!("info,{}=debug,{}=debug", env!("CARGO_CRATE_NAME"), LOG_TARGET),
    }
}

fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(verbosity)))
}

fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))
}

/// Installs the global subscriber. Creates `out_dir` if it doesn't exist.
pub fn init(out_dir: &Path, verbosity: u8) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("cannot create {}", out_dir.display()))?;

    let info_file = Arc::new(open_log(&out_dir.join(INFO_LOG))?);
    let error_file = Arc::new(open_log(&out_dir.join(ERROR_LOG))?);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter(verbosity)),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(info_file)
                .with_filter(filter(verbosity)),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(error_file)
                .with_filter(LevelFilter::ERROR),
        )
        .try_init()
        .context("logging was already initialized")?;

    Ok(())
}
