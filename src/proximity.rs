//! Proximity gate for stamp eligibility, plus the distance display rule.

use crate::haversine::distance_meters;
use crate::types::Coordinate;

/// Radius within which a stamp may be collected.
pub const STAMP_RADIUS_METERS: f64 = 50.0;

/// True when `user` is at most `radius_meters` from `target` (inclusive).
pub fn is_within_radius(user: &Coordinate, target: &Coordinate, radius_meters: f64) -> bool {
    distance_meters(user, target) <= radius_meters
}

/// Display form of a distance: whole meters below 1 km, else km to one decimal.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round() as i64)
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

/// [`format_distance`] for a kilometer value.
pub fn format_distance_km(km: f64) -> String {
    format_distance(km * 1000.0)
}
