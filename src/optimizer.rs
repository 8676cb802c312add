//! Greedy visiting order for a set of stops.
//!
//! Nearest-neighbor construction only: no 2-opt or relocate pass runs
//! afterwards, so the output is stable and cheap but not a shortest tour.
//! Time and difficulty estimates are tuned against this ordering.

use crate::haversine::distance_meters;
use crate::polyline::Polyline;
use crate::traits::Locatable;
use crate::types::Coordinate;

/// Order `candidates` by repeatedly stepping to the closest unvisited one,
/// starting from `start`.
///
/// Returns a permutation of `candidates`. Ties go to the candidate that comes
/// first in the input, since the scan only replaces its best on a strictly
/// smaller distance.
pub fn optimize_route<'a, T: Locatable>(candidates: &'a [T], start: &Coordinate) -> Vec<&'a T> {
    let mut unvisited: Vec<&T> = candidates.iter().collect();
    let mut route = Vec::with_capacity(unvisited.len());
    let mut current = *start;

    while !unvisited.is_empty() {
        let mut nearest_index = 0;
        let mut nearest_distance = distance_meters(&current, &unvisited[0].coordinate());

        for (index, candidate) in unvisited.iter().enumerate().skip(1) {
            let distance = distance_meters(&current, &candidate.coordinate());
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest_index = index;
            }
        }

        let nearest = unvisited.remove(nearest_index);
        current = nearest.coordinate();
        route.push(nearest);
    }

    route
}

/// Total straight-line length in km of `start` -> stop 1 -> stop 2 -> ...
pub fn route_distance_km<T: Locatable>(start: &Coordinate, stops: &[T]) -> f64 {
    Polyline::from_route(start, stops).length_km()
}
