//! Test fixtures for tour-planner.
//!
//! Provides realistic test data including:
//! - Sightseeing spots around the old domain border town (33.59 N, 130.40 E)
//! - Helpers for placing coordinates a known distance apart

pub mod hankyou_spots;

pub use hankyou_spots::*;

use tour_planner::Coordinate;
use tour_planner::haversine::EARTH_RADIUS_M;

pub fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).unwrap()
}

/// Coordinate exactly `meters` due north of `from` along the meridian.
pub fn north_of(from: &Coordinate, meters: f64) -> Coordinate {
    coord(from.lat() + (meters / EARTH_RADIUS_M).to_degrees(), from.lng())
}
