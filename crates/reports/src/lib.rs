//! Report domain model and lifecycle orchestration for Roadwatch.
//!
//! This crate owns the in-memory report collection and the operations on it:
//! filing a report at the current position, finding nearby reports, and
//! removing them individually or wholesale. Persistence is reached through
//! the [`ReportStore`] trait so the whole-document backend can be swapped
//! without touching lifecycle logic.
//!
//! # Example
//!
//! ```no_run
//! use roadwatch_geo::Coordinate;
//! use roadwatch_reports::{Reporter, ReportStore};
//!
//! async fn file_report<S: ReportStore>(store: S) {
//!     let mut reporter = Reporter::new(store);
//!     reporter.load().await;
//!
//!     let position = Coordinate::new(52.5200, 13.4050);
//!     let report = reporter.submit(position).await;
//!     println!("filed report {}", report.id);
//! }
//! ```

pub mod location;
pub mod report;
pub mod reporter;
pub mod store;

pub use location::{FixedPosition, LocationError, LocationProvider};
pub use report::Report;
pub use reporter::{RemoveOutcome, Reporter};
pub use store::{ReportStore, StoreError, StoreResult};

/// Radius in meters within which a report counts as "nearby".
pub const NEARBY_RADIUS_M: f64 = 20.0;
