//! Great-circle distance.
//!
//! Meters are canonical; kilometers are always derived from the meter value.

use crate::types::Coordinate;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two coordinates in meters.
pub fn distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1_rad = from.lat().to_radians();
    let lat2_rad = to.lat().to_radians();
    let delta_lat = (to.lat() - from.lat()).to_radians();
    let delta_lng = (to.lng() - from.lng()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just outside [0, 1] near antipodes.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Haversine distance in kilometers.
pub fn distance_km(from: &Coordinate, to: &Coordinate) -> f64 {
    distance_meters(from, to) / 1000.0
}
