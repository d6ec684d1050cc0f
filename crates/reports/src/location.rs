//! Current-position sampling.
//!
//! The device position is ephemeral: sampled once per session, never
//! persisted. Platform location sources hide behind [`LocationProvider`].

use roadwatch_geo::Coordinate;
use thiserror::Error;

/// Errors from a location source.
#[derive(Debug, Error)]
pub enum LocationError {
    /// No position source is configured or the fix failed
    #[error("location unavailable: {0}")]
    Unavailable(String),

    /// The platform refused access to the location
    #[error("location permission denied")]
    PermissionDenied,

    /// No fix arrived within the source's time budget
    #[error("timed out waiting for a position fix")]
    Timeout,
}

/// A source of the device's current position.
///
/// Returns a single sample; callers decide when to refresh.
pub trait LocationProvider {
    /// Samples the current position.
    fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// Position supplied up front, e.g. from a CLI flag or an environment
/// variable.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinate);

impl LocationProvider for FixedPosition {
    fn current_position(&self) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}
