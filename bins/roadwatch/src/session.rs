//! Session wiring: store construction, position resolution, confirmations.

use anyhow::{Context, Result};
use console::Term;
use roadwatch_cli::progress;
use roadwatch_geo::Coordinate;
use roadwatch_reports::{FixedPosition, LocationError, LocationProvider, Reporter};
use roadwatch_store::JsonBinStore;

/// Builds a reporter with the persisted collection already loaded.
///
/// A store that cannot be reached is not an error here: the reporter starts
/// from an empty collection and the failure is logged.
pub async fn open(quiet: bool) -> Result<Reporter<JsonBinStore>> {
    let store = JsonBinStore::from_env()
        .context("store not configured (set ROADWATCH_BIN_ID and ROADWATCH_MASTER_KEY)")?;
    let mut reporter = Reporter::new(store);

    if quiet {
        reporter.load().await;
    } else {
        let pb = progress::spinner("Loading reports...");
        reporter.load().await;
        pb.finish_and_clear();
    }

    Ok(reporter)
}

/// Resolves the current position for this run: one sample, never persisted.
pub fn current_position(at: Option<Coordinate>) -> Result<Coordinate, LocationError> {
    let provider = at.map(FixedPosition).ok_or_else(|| {
        LocationError::Unavailable("no position supplied (use --at or ROADWATCH_POSITION)".into())
    })?;
    provider.current_position()
}

/// Interactive yes/no prompt; `--yes` short-circuits to true.
///
/// Anything but an explicit yes declines, including a closed stdin.
pub fn confirm(question: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }

    let term = Term::stderr();
    eprint!("{question} [y/N] ");
    match term.read_line() {
        Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
