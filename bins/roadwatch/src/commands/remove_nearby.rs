//! Remove every report near the current position

use crate::session;
use anyhow::Result;
use roadwatch_cli::output::{format_count, Status};
use roadwatch_geo::Coordinate;
use roadwatch_reports::{RemoveOutcome, NEARBY_RADIUS_M};
use serde_json::json;

pub async fn run(at: Option<Coordinate>, assume_yes: bool, format: &str) -> Result<()> {
    let position = session::current_position(at)?;
    let mut reporter = session::open(format == "json").await?;

    let outcome = reporter
        .remove_nearby(&position, |count| {
            session::confirm(
                &format!(
                    "Remove {} near your position?",
                    format_count(count, "pothole", "potholes")
                ),
                assume_yes,
            )
        })
        .await;

    if format == "json" {
        let row = match outcome {
            RemoveOutcome::NothingToRemove => json!({"outcome": "nothing-to-remove", "removed": 0}),
            RemoveOutcome::Cancelled => json!({"outcome": "cancelled", "removed": 0}),
            RemoveOutcome::Removed(count) => json!({"outcome": "removed", "removed": count}),
        };
        println!("{}", serde_json::to_string_pretty(&row)?);
        return Ok(());
    }

    match outcome {
        RemoveOutcome::NothingToRemove => Status::info(&format!(
            "No potholes within {NEARBY_RADIUS_M:.0} m to remove."
        )),
        RemoveOutcome::Cancelled => Status::info("Cancelled, nothing removed."),
        RemoveOutcome::Removed(count) => Status::success(&format!(
            "{} removed.",
            format_count(count, "pothole", "potholes")
        )),
    }
    Ok(())
}
