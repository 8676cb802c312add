//! Tunable options and TOML loading.
//!
//! Every default reproduces the fixed constants of the planner: 4 km/h on
//! foot, 15 km/h by bicycle, 15 minutes per stop, a 50 m stamp radius and a
//! five minute location cache.

use std::fs;
use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;
use crate::proximity::STAMP_RADIUS_METERS;
use crate::types::{Coordinate, TransportMode};

/// Upper bounds (inclusive) a route must stay within to qualify for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyThreshold {
    pub max_km: f64,
    pub max_minutes: u32,
}

impl DifficultyThreshold {
    pub const EASY: DifficultyThreshold = DifficultyThreshold {
        max_km: 2.0,
        max_minutes: 90,
    };

    pub const MEDIUM: DifficultyThreshold = DifficultyThreshold {
        max_km: 5.0,
        max_minutes: 180,
    };
}

/// A tier table where either bound may be left out.
#[derive(Deserialize)]
struct PartialThreshold {
    max_km: Option<f64>,
    max_minutes: Option<u32>,
}

impl PartialThreshold {
    fn or(self, fallback: DifficultyThreshold) -> DifficultyThreshold {
        DifficultyThreshold {
            max_km: self.max_km.unwrap_or(fallback.max_km),
            max_minutes: self.max_minutes.unwrap_or(fallback.max_minutes),
        }
    }
}

fn easy_threshold<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DifficultyThreshold, D::Error> {
    Ok(PartialThreshold::deserialize(deserializer)?.or(DifficultyThreshold::EASY))
}

fn medium_threshold<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DifficultyThreshold, D::Error> {
    Ok(PartialThreshold::deserialize(deserializer)?.or(DifficultyThreshold::MEDIUM))
}

/// Size caps for the themed candidate pools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeLimits {
    /// Distance from the user that counts as "nearby".
    pub nearby_radius_km: f64,
    pub nearby: usize,
    pub landmark: usize,
    pub shrine: usize,
    pub stamp_rally: usize,
    pub exhaustive: usize,
}

impl Default for ThemeLimits {
    fn default() -> Self {
        Self {
            nearby_radius_km: 2.0,
            nearby: 4,
            landmark: 6,
            shrine: 5,
            stamp_rally: 8,
            exhaustive: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    pub walking_speed_kmh: f64,
    pub bicycle_speed_kmh: f64,
    /// Fixed visiting time assumed at every stop.
    pub dwell_minutes_per_stop: f64,
    #[serde(deserialize_with = "easy_threshold")]
    pub easy: DifficultyThreshold,
    #[serde(deserialize_with = "medium_threshold")]
    pub medium: DifficultyThreshold,
    pub themes: ThemeLimits,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            walking_speed_kmh: 4.0,
            bicycle_speed_kmh: 15.0,
            dwell_minutes_per_stop: 15.0,
            easy: DifficultyThreshold::EASY,
            medium: DifficultyThreshold::MEDIUM,
            themes: ThemeLimits::default(),
        }
    }
}

impl PlannerOptions {
    pub fn speed_kmh(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Walking => self.walking_speed_kmh,
            TransportMode::Bicycle => self.bicycle_speed_kmh,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.walking_speed_kmh > 0.0) || !(self.bicycle_speed_kmh > 0.0) {
            return Err(ConfigError::Invalid("speeds must be positive".to_string()));
        }
        if !(self.dwell_minutes_per_stop >= 0.0) {
            return Err(ConfigError::Invalid(
                "dwell_minutes_per_stop must not be negative".to_string(),
            ));
        }
        if !(self.themes.nearby_radius_km >= 0.0) {
            return Err(ConfigError::Invalid(
                "themes.nearby_radius_km must not be negative".to_string(),
            ));
        }
        // A lighter tier wider than the next one would let difficulty drop
        // as distance grows.
        if !(self.easy.max_km <= self.medium.max_km) || self.easy.max_minutes > self.medium.max_minutes {
            return Err(ConfigError::Invalid(
                "easy thresholds must not exceed medium thresholds".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerOptions {
    /// How close the user must be to collect a stamp.
    pub radius_meters: f64,
}

impl Default for LedgerOptions {
    fn default() -> Self {
        Self {
            radius_meters: STAMP_RADIUS_METERS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationOptions {
    /// How long a location fix stays usable.
    pub max_age_secs: i64,
    /// Used when no fresh fix is available.
    pub fallback: Option<Coordinate>,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            max_age_secs: 300,
            fallback: None,
        }
    }
}

/// Top-level configuration document.
///
/// ```toml
/// [planner]
/// walking_speed_kmh = 4.5
///
/// [planner.themes]
/// exhaustive = 10
///
/// [ledger]
/// radius_meters = 30.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub planner: PlannerOptions,
    pub ledger: LedgerOptions,
    pub location: LocationOptions,
}

impl TourConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: TourConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.as_ref().display(), "loaded tour config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.planner.validate()?;
        if !(self.ledger.radius_meters >= 0.0) {
            return Err(ConfigError::Invalid(
                "ledger.radius_meters must not be negative".to_string(),
            ));
        }
        if self.location.max_age_secs < 0 {
            return Err(ConfigError::Invalid(
                "location.max_age_secs must not be negative".to_string(),
            ));
        }
        if Duration::try_seconds(self.location.max_age_secs).is_none() {
            return Err(ConfigError::Invalid(
                "location.max_age_secs is too large".to_string(),
            ));
        }
        Ok(())
    }
}
