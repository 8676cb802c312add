//! Error types shared across the crate.

use std::io;

use crate::proximity::format_distance;

/// A latitude/longitude pair outside the valid ranges.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),
}

/// Why a stamp could not be collected.
///
/// All variants are ordinary outcomes the caller branches on; none of them
/// leaves the ledger modified.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CollectionError {
    #[error("point {0} has no stamp to collect")]
    NotCollectible(String),

    #[error("stamp for point {0} was already collected")]
    AlreadyCollected(String),

    #[error("current location is unavailable")]
    LocationUnavailable,

    #[error("still {} away from the stamp point", still_away(.distance_meters))]
    TooFar { distance_meters: f64 },
}

fn still_away(distance_meters: &f64) -> String {
    format_distance(*distance_meters)
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate point id {0}")]
    DuplicateId(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}
