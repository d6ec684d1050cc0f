//! List reports near the current position

use crate::session;
use anyhow::Result;
use roadwatch_cli::output::{format_count, format_distance, Status};
use roadwatch_geo::{haversine_distance_meters, Coordinate};
use roadwatch_reports::NEARBY_RADIUS_M;
use serde_json::json;

pub async fn run(at: Option<Coordinate>, format: &str) -> Result<()> {
    let position = session::current_position(at)?;
    let reporter = session::open(format == "json").await?;
    let nearby = reporter.nearby(&position);

    if format == "json" {
        let rows: Vec<_> = nearby
            .iter()
            .map(|report| {
                json!({
                    "id": report.id,
                    "lat": report.lat,
                    "lng": report.lng,
                    "distance_m": haversine_distance_meters(&position, &report.position()),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if nearby.is_empty() {
        Status::info(&format!(
            "No potholes within {NEARBY_RADIUS_M:.0} m of your position."
        ));
        return Ok(());
    }

    Status::warning(&format!(
        "{} within {NEARBY_RADIUS_M:.0} m of your position!",
        format_count(nearby.len(), "pothole", "potholes")
    ));
    for report in nearby {
        let distance = haversine_distance_meters(&position, &report.position());
        println!(
            "  {:>8}  {:.5},{:.5}  {}",
            format_distance(distance),
            report.lat,
            report.lng,
            report.id
        );
    }
    Ok(())
}
