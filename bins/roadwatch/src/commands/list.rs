//! List all reports on record

use crate::session;
use anyhow::Result;
use roadwatch_cli::output::{format_count, format_distance, Status};
use roadwatch_geo::{haversine_distance_meters, Coordinate};
use serde_json::json;

pub async fn run(at: Option<Coordinate>, format: &str) -> Result<()> {
    let reporter = session::open(format == "json").await?;
    let reports = reporter.reports();

    if format == "json" {
        let rows: Vec<_> = reports
            .iter()
            .map(|report| match at {
                Some(position) => json!({
                    "id": report.id,
                    "lat": report.lat,
                    "lng": report.lng,
                    "distance_m": haversine_distance_meters(&position, &report.position()),
                }),
                None => json!({
                    "id": report.id,
                    "lat": report.lat,
                    "lng": report.lng,
                }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if reports.is_empty() {
        Status::info("No potholes on record.");
        return Ok(());
    }

    Status::header(&format!(
        "{} on record",
        format_count(reports.len(), "pothole", "potholes")
    ));
    for report in reports {
        match at {
            Some(position) => {
                let distance = haversine_distance_meters(&position, &report.position());
                println!(
                    "  {:.5},{:.5}  {:>8} away  {}",
                    report.lat,
                    report.lng,
                    format_distance(distance),
                    report.id
                );
            }
            None => println!("  {:.5},{:.5}  {}", report.lat, report.lng, report.id),
        }
    }
    Ok(())
}
