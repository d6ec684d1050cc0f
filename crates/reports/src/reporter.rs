//! Report lifecycle orchestration.
//!
//! [`Reporter`] owns the in-memory report collection for a session and is the
//! only writer to it. Every mutation is followed by a wholesale save through
//! the configured [`ReportStore`]; a failed save is logged and the in-memory
//! collection stays the source of truth until the next save.

use crate::{Report, ReportStore, NEARBY_RADIUS_M};
use roadwatch_geo::{within_radius, Coordinate};
use tracing::{debug, warn};

/// Outcome of a removal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Nothing matched; no confirmation was requested.
    NothingToRemove,
    /// The user declined the confirmation.
    Cancelled,
    /// Reports were removed (count of removed entries).
    Removed(usize),
}

/// Owns the report collection and drives its lifecycle.
pub struct Reporter<S> {
    store: S,
    reports: Vec<Report>,
}

impl<S: ReportStore> Reporter<S> {
    /// Creates a reporter with an empty collection.
    pub fn new(store: S) -> Self {
        Self {
            store,
            reports: Vec::new(),
        }
    }

    /// Loads the persisted collection.
    ///
    /// On any store failure the session starts from an empty collection; the
    /// failure is logged and never propagates to the caller.
    pub async fn load(&mut self) -> &[Report] {
        match self.store.load().await {
            Ok(reports) => {
                debug!(count = reports.len(), "loaded report collection");
                self.reports = reports;
            }
            Err(e) => {
                warn!(error = %e, "failed to load reports, starting with empty collection");
                self.reports.clear();
            }
        }
        &self.reports
    }

    /// The current in-memory collection.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Files a new report at `position` and persists the collection.
    ///
    /// The report is kept locally even if the save fails; the change may then
    /// be lost on the next reload.
    pub async fn submit(&mut self, position: Coordinate) -> Report {
        let report = Report::at(position);
        debug!(id = %report.id, lat = report.lat, lng = report.lng, "filing report");
        self.reports.push(report.clone());
        self.persist().await;
        report
    }

    /// Reports within [`NEARBY_RADIUS_M`] meters of `position`.
    ///
    /// Recomputed from the current collection on every call.
    pub fn nearby(&self, position: &Coordinate) -> Vec<&Report> {
        within_radius(position, &self.reports, NEARBY_RADIUS_M)
    }

    /// Removes every report near `position`, after confirmation.
    ///
    /// With no nearby reports this is a no-op and `confirm` is never invoked.
    /// Otherwise `confirm` receives the match count; declining cancels the
    /// operation without touching the collection.
    pub async fn remove_nearby<F>(&mut self, position: &Coordinate, confirm: F) -> RemoveOutcome
    where
        F: FnOnce(usize) -> bool,
    {
        let ids: Vec<String> = self
            .nearby(position)
            .iter()
            .map(|report| report.id.clone())
            .collect();

        if ids.is_empty() {
            return RemoveOutcome::NothingToRemove;
        }
        if !confirm(ids.len()) {
            return RemoveOutcome::Cancelled;
        }

        self.reports.retain(|report| !ids.contains(&report.id));
        self.persist().await;
        RemoveOutcome::Removed(ids.len())
    }

    /// Empties the collection, after confirmation.
    pub async fn clear_all<F>(&mut self, confirm: F) -> RemoveOutcome
    where
        F: FnOnce(usize) -> bool,
    {
        if self.reports.is_empty() {
            return RemoveOutcome::NothingToRemove;
        }
        if !confirm(self.reports.len()) {
            return RemoveOutcome::Cancelled;
        }

        let count = self.reports.len();
        self.reports.clear();
        self.persist().await;
        RemoveOutcome::Removed(count)
    }

    /// Wholesale write of the current collection.
    async fn persist(&self) {
        if let Err(e) = self.store.save(&self.reports).await {
            warn!(error = %e, "failed to persist reports, keeping in-memory state");
        }
    }
}
