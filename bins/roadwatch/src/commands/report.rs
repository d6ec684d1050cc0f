//! Report a pothole at the current position

use crate::session;
use anyhow::Result;
use roadwatch_cli::output::Status;
use roadwatch_cli::progress;
use roadwatch_geo::Coordinate;

pub async fn run(at: Option<Coordinate>, format: &str) -> Result<()> {
    let position = session::current_position(at)?;
    let mut reporter = session::open(format == "json").await?;

    if format == "json" {
        let report = reporter.submit(position).await;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let pb = progress::spinner("Saving...");
    let report = reporter.submit(position).await;
    progress::finish_success(&pb, "Pothole reported!");

    Status::info(&format!(
        "id: {}  position: {:.5},{:.5}",
        report.id, report.lat, report.lng
    ));
    Ok(())
}
