//! A single reported pothole location.

use chrono::Utc;
use roadwatch_geo::{Coordinate, Located};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reported hazard location.
///
/// Reports are immutable once created: the lifecycle is create, then remove.
/// The wire representation matches the persisted document exactly
/// (`id`/`lat`/`lng`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Opaque unique id, generated at creation time.
    pub id: String,
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lng: f64,
}

impl Report {
    /// Creates a report at the given position with a freshly generated id.
    pub fn at(position: Coordinate) -> Self {
        Self {
            id: new_report_id(),
            lat: position.latitude,
            lng: position.longitude,
        }
    }

    /// The position of this report.
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

impl Located for Report {
    fn coordinate(&self) -> Coordinate {
        self.position()
    }
}

/// Best-effort unique id: millisecond timestamp plus a short random suffix.
///
/// Uniqueness across distributed clients is not guaranteed and there is no
/// collision check; within a session the random suffix keeps same-millisecond
/// ids apart.
fn new_report_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{millis}-{}", &suffix[..9])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_carries_position() {
        let position = Coordinate::new(52.5200, 13.4050);
        let report = Report::at(position);
        assert_eq!(report.lat, 52.5200);
        assert_eq!(report.lng, 13.4050);
        assert_eq!(report.position(), position);
    }

    #[test]
    fn test_ids_differ_within_a_session() {
        let position = Coordinate::new(0.0, 0.0);
        let a = Report::at(position);
        let b = Report::at(position);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_id_shape() {
        let report = Report::at(Coordinate::new(0.0, 0.0));
        let (millis, suffix) = report.id.split_once('-').expect("timestamp-suffix id");
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 9);
    }

    #[test]
    fn test_wire_field_names() {
        let report = Report {
            id: "1700000000000-abc123def".to_string(),
            lat: 52.52,
            lng: 13.405,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["id"], "1700000000000-abc123def");
        assert_eq!(json["lat"], 52.52);
        assert_eq!(json["lng"], 13.405);
    }

    #[test]
    fn test_deserializes_from_wire() {
        let report: Report =
            serde_json::from_str(r#"{"id":"x-1","lat":1.5,"lng":-2.5}"#).unwrap();
        assert_eq!(report.id, "x-1");
        assert_eq!(report.lat, 1.5);
        assert_eq!(report.lng, -2.5);
    }
}
