//! Binary entrypoint: read UI events as JSON lines from stdin, write snapshots to stdout.
//!
//! The initial snapshot is written before any input is read. After that, each
//! input line produces exactly one output line:
//! - A Snapshot (the event was applied; a rejected submit still yields one)
//! - An ErrorOutput (the line was not a valid event; state is unchanged)
//!
//! Logs go to stderr, filtered by RUST_LOG (default "warn").

use std::io::{self, BufRead, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use incident_dashboard::types::ErrorOutput;
use incident_dashboard::{Config, Dashboard, DashboardError};

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  if let Err(e) = run() {
    error!(error = %e, "incident-dashboard failed");
    std::process::exit(1);
  }
}

fn run() -> Result<(), DashboardError> {
  let config = Config::from_env()?;
  let mut dashboard = Dashboard::new(config)?;
  info!(incidents = dashboard.state().store.len(), "dashboard ready");

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  emit(&mut out, &dashboard.snapshot())?;

  for line in stdin.lock().lines() {
    let line = line?;

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    match dashboard.process_line(trimmed, Utc::now()) {
      Ok(snapshot) => emit(&mut out, &snapshot)?,
      Err(e) => {
        warn!(error = %e, "invalid event line");
        emit(&mut out, &ErrorOutput::from(&e))?;
      }
    }
  }

  out.flush()?;
  Ok(())
}

/// Write one JSON line and flush so the renderer sees it immediately.
fn emit<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), DashboardError> {
  serde_json::to_writer(&mut *out, value)?;
  writeln!(out)?;
  out.flush()?;
  Ok(())
}
