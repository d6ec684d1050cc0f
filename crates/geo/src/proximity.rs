//! Radius-based proximity filtering.
//!
//! A linear scan over candidate positions; collections here are small
//! (tens to low hundreds of entries), so no spatial index is involved.

use crate::{haversine_distance_meters, Coordinate};

/// Anything that has a geographic position.
pub trait Located {
    /// The position of this item.
    fn coordinate(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

/// Returns the items within `radius_m` meters of `center`.
///
/// The boundary is inclusive: an item at exactly `radius_m` is kept.
///
/// # Example
/// ```
/// use roadwatch_geo::{within_radius, Coordinate};
///
/// let center = Coordinate::new(52.5200, 13.4050);
/// let points = vec![
///     Coordinate::new(52.5200, 13.4050),
///     Coordinate::new(48.8566, 2.3522),
/// ];
///
/// let near = within_radius(&center, &points, 20.0);
/// assert_eq!(near.len(), 1);
/// ```
pub fn within_radius<'a, T: Located>(
    center: &Coordinate,
    items: &'a [T],
    radius_m: f64,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| haversine_distance_meters(center, &item.coordinate()) <= radius_m)
        .collect()
}
