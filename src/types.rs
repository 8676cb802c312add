//! Data model shared by the planner, the proximity gate and the ledger.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;
use crate::traits::Locatable;

/// A validated WGS84 position in degrees.
///
/// Latitude is within [-90, 90] and longitude within [-180, 180]; both checks
/// happen on construction and on deserialization, so distance code never sees
/// out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::InvalidLongitude(lng));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// (lat, lng) tuple.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.lat, raw.lng)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            lat: coordinate.lat,
            lng: coordinate.lng,
        }
    }
}

impl Locatable for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Shrine,
    Cafe,
    Nature,
    Viewpoint,
    Convenience,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Shrine => "shrine",
            Category::Cafe => "cafe",
            Category::Nature => "nature",
            Category::Viewpoint => "viewpoint",
            Category::Convenience => "convenience",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sightseeing spot. Reference data: loaded once, never mutated by the core.
///
/// The serialized shape matches the spot datasets (`lat`/`lng` inline,
/// `type`, `stamps`, `coupon`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(rename = "stamps", default, skip_serializing_if = "Option::is_none")]
    pub stamp_value: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(rename = "coupon", default)]
    pub has_coupon: bool,
}

impl PointOfInterest {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coordinate: Coordinate,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinate,
            category,
            stamp_value: None,
            description: String::new(),
            rating: None,
            has_coupon: false,
        }
    }

    pub fn with_stamps(mut self, stamps: u32) -> Self {
        self.stamp_value = Some(stamps);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_coupon(mut self) -> Self {
        self.has_coupon = true;
        self
    }

    /// Stamp value counted towards totals; missing counts as zero.
    pub fn stamps(&self) -> u32 {
        self.stamp_value.unwrap_or(0)
    }

    /// A spot is collectible only when it carries a positive stamp value.
    pub fn is_collectible(&self) -> bool {
        self.stamps() > 0
    }
}

impl Locatable for PointOfInterest {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Walking,
    Bicycle,
}

/// Per-request filters for plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConstraints {
    /// Spots farther than this from the user are dropped.
    pub max_distance_km: f64,
    /// Themed plans longer than this are dropped (the exhaustive plan is kept).
    pub max_time_minutes: u32,
    /// Empty means every category.
    pub category_filter: BTreeSet<Category>,
    pub include_stamp_focus: bool,
    pub transport_mode: TransportMode,
}

impl Default for RouteConstraints {
    fn default() -> Self {
        Self {
            max_distance_km: 10.0,
            max_time_minutes: 240,
            category_filter: BTreeSet::new(),
            include_stamp_focus: true,
            transport_mode: TransportMode::Walking,
        }
    }
}

impl RouteConstraints {
    pub fn allows(&self, category: Category) -> bool {
        self.category_filter.is_empty() || self.category_filter.contains(&category)
    }
}

/// Difficulty tier, ordered from lightest to heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}
