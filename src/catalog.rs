//! Point-of-interest catalog.
//!
//! Holds the spot dataset for a session in its original order; that order
//! feeds the planner's tie-breaking and theme ordering.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::haversine::distance_meters;
use crate::types::{Coordinate, PointOfInterest};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    points: Vec<PointOfInterest>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(points: Vec<PointOfInterest>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(points.len());
        for (i, point) in points.iter().enumerate() {
            if index.insert(point.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(point.id.clone()));
            }
        }
        Ok(Self { points, index })
    }

    /// Parse a JSON array of spot records.
    pub fn from_json_str(input: &str) -> Result<Self, CatalogError> {
        let points: Vec<PointOfInterest> = serde_json::from_str(input)?;
        let catalog = Self::new(points)?;
        tracing::info!(points = catalog.len(), "loaded point catalog");
        Ok(catalog)
    }

    pub fn points(&self) -> &[PointOfInterest] {
        &self.points
    }

    pub fn get(&self, id: &str) -> Option<&PointOfInterest> {
        self.index.get(id).map(|&i| &self.points[i])
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Spots that hand out a stamp.
    pub fn stamp_points(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.points.iter().filter(|p| p.is_collectible())
    }

    /// Stamp value available across the whole catalog.
    pub fn total_stamp_value(&self) -> u32 {
        self.points.iter().map(PointOfInterest::stamps).sum()
    }

    /// Closest spot to `location` with its distance in meters. First wins on ties.
    pub fn nearest(&self, location: &Coordinate) -> Option<(&PointOfInterest, f64)> {
        let mut best: Option<(&PointOfInterest, f64)> = None;
        for point in &self.points {
            let distance = distance_meters(location, &point.coordinate);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((point, distance)),
            }
        }
        best
    }

    /// Spots within `radius_meters` of `location`, closest first.
    pub fn within(&self, location: &Coordinate, radius_meters: f64) -> Vec<(&PointOfInterest, f64)> {
        let mut nearby: Vec<(&PointOfInterest, f64)> = self
            .points
            .iter()
            .map(|point| (point, distance_meters(location, &point.coordinate)))
            .filter(|(_, distance)| *distance <= radius_meters)
            .collect();
        nearby.sort_by(|a, b| a.1.total_cmp(&b.1));
        nearby
    }
}
