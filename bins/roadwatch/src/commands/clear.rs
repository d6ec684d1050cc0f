//! Remove every report on record

use crate::session;
use anyhow::Result;
use roadwatch_cli::output::{format_count, Status};
use roadwatch_reports::RemoveOutcome;
use serde_json::json;

pub async fn run(assume_yes: bool, format: &str) -> Result<()> {
    let mut reporter = session::open(format == "json").await?;

    let outcome = reporter
        .clear_all(|count| {
            session::confirm(
                &format!(
                    "Clear all {}?",
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
        RemoveOutcome::NothingToRemove => Status::info("No potholes on record."),
        RemoveOutcome::Cancelled => Status::info("Cancelled, nothing removed."),
        RemoveOutcome::Removed(count) => Status::success(&format!(
            "{} removed.",
            format_count(count, "pothole", "potholes")
        )),
    }
    Ok(())
}
