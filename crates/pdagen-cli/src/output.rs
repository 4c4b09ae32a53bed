use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;

use anyhow::{anyhow, Result};
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::config::{OutputFormat, RunConfig};

static JSON_MODE: OnceLock<bool> = OnceLock::new();

pub fn init(cfg: &RunConfig) -> Result<()> {
    let _ = JSON_MODE.set(cfg.format == OutputFormat::Json);

    // Diagnostics go to stderr; stdout carries exactly one result line.
    tracing_subscriber::fmt()
        .with_env_filter(cfg.env_filter()?)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}

pub fn is_json() -> bool {
    JSON_MODE.get().copied().unwrap_or(false)
}

/// Print a result: the JSON form of `value` in JSON mode, `line` otherwise.
pub fn print<T: Serialize>(value: &T, line: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    if is_json() {
        let s = serde_json::to_string(value)?;
        writeln!(out, "{s}")?;
    } else {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

pub fn report_error(err: &anyhow::Error) {
    let choice = if io::stderr().is_terminal() { ColorChoice::Auto } else { ColorChoice::Never };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(stderr, "error:");
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {err:#}");
}
