//! Cached user location.
//!
//! The host platform delivers one fix per request. The cache keeps the last
//! fix for a limited time and can fall back to a fixed coordinate, which the
//! rest of the crate treats like any other position.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LocationOptions;
use crate::traits::LocationProvider;
use crate::types::Coordinate;

/// Map centre of the sightseeing area (33.5904 N, 130.4017 E).
pub const DEFAULT_CENTER: (f64, f64) = (33.5904, 130.4017);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub coordinate: Coordinate,
    pub acquired_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct LocationCache {
    max_age: Duration,
    fallback: Option<Coordinate>,
    last_fix: Option<LocationFix>,
}

impl Default for LocationCache {
    fn default() -> Self {
        Self::new(&LocationOptions::default())
    }
}

impl LocationCache {
    pub fn new(options: &LocationOptions) -> Self {
        Self {
            // Out-of-range ages are rejected by config validation; anything
            // that slips through never expires.
            max_age: Duration::try_seconds(options.max_age_secs).unwrap_or(Duration::MAX),
            fallback: options.fallback,
            last_fix: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Coordinate) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn record(&mut self, fix: LocationFix) {
        self.last_fix = Some(fix);
    }

    /// Ask `provider` for one fix and cache it on success.
    ///
    /// A failed request leaves any earlier fix in place until it expires.
    pub fn refresh<P: LocationProvider>(&mut self, provider: &P, now: DateTime<Utc>) -> Option<Coordinate> {
        match provider.current_location() {
            Ok(coordinate) => {
                self.record(LocationFix {
                    coordinate,
                    acquired_at: now,
                });
                Some(coordinate)
            }
            Err(err) => {
                debug!(reason = %err, "location request failed");
                None
            }
        }
    }

    pub fn last_fix(&self) -> Option<&LocationFix> {
        self.last_fix.as_ref()
    }

    /// The cached fix if it is no older than `max_age`.
    pub fn current_at(&self, now: DateTime<Utc>) -> Option<Coordinate> {
        self.last_fix
            .filter(|fix| now - fix.acquired_at <= self.max_age)
            .map(|fix| fix.coordinate)
    }

    pub fn current(&self) -> Option<Coordinate> {
        self.current_at(Utc::now())
    }

    /// The fresh fix, else the fallback coordinate if one is configured.
    pub fn resolve_at(&self, now: DateTime<Utc>) -> Option<Coordinate> {
        if let Some(coordinate) = self.current_at(now) {
            return Some(coordinate);
        }
        if let Some(fallback) = self.fallback {
            warn!(lat = fallback.lat(), lng = fallback.lng(), "no fresh location, using fallback");
            return Some(fallback);
        }
        None
    }

    pub fn resolve(&self) -> Option<Coordinate> {
        self.resolve_at(Utc::now())
    }
}
