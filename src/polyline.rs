//! Polyline representation for route geometries.
//!
//! A plan's geometry is the user's position followed by each stop in visiting
//! order. Map layers draw it as-is; the planner measures it hop by hop.

use serde::{Deserialize, Serialize};

use crate::haversine::{distance_km, distance_meters};
use crate::traits::Locatable;
use crate::types::Coordinate;

/// An ordered path of coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Path starting at `start` and visiting `stops` in order.
    pub fn from_route<T: Locatable>(start: &Coordinate, stops: &[T]) -> Self {
        let mut points = Vec::with_capacity(stops.len() + 1);
        points.push(*start);
        points.extend(stops.iter().map(Locatable::coordinate));
        Self { points }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Straight-line length of each consecutive hop, in meters.
    pub fn hop_meters(&self) -> impl Iterator<Item = f64> + '_ {
        self.points
            .windows(2)
            .map(|pair| distance_meters(&pair[0], &pair[1]))
    }

    /// Sum of consecutive hops in kilometers. Zero for fewer than two points.
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| distance_km(&pair[0], &pair[1]))
            .sum()
    }
}
