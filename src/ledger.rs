//! Session-scoped stamp ledger.
//!
//! Entries are created at most once per spot and never updated. Totals are
//! always recomputed from the entries; nothing is counted on the side.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::LedgerOptions;
use crate::error::CollectionError;
use crate::haversine::distance_meters;
use crate::types::{Coordinate, PointOfInterest};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub point_id: String,
    pub collected_at: DateTime<Utc>,
    pub stamp_value: u32,
    /// Whether the spot hands out a coupon with its stamp.
    pub has_coupon: bool,
}

/// Collected versus collectible stamp value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampProgress {
    pub collected: u32,
    pub available: u32,
}

impl StampProgress {
    /// Rounded percentage; 0 when nothing is available.
    pub fn percent(&self) -> u32 {
        if self.available == 0 {
            return 0;
        }
        (self.collected as f64 / self.available as f64 * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StampLedger {
    options: LedgerOptions,
    entries: Vec<LedgerEntry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl StampLedger {
    pub fn new(options: LedgerOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn options(&self) -> &LedgerOptions {
        &self.options
    }

    /// Collect the stamp for `point` if the user stands close enough.
    pub fn collect(
        &mut self,
        point: &PointOfInterest,
        user_location: Option<&Coordinate>,
    ) -> Result<LedgerEntry, CollectionError> {
        self.collect_at(point, user_location, Utc::now())
    }

    /// Like [`StampLedger::collect`] with an explicit timestamp.
    ///
    /// Checks run in a fixed order: collectible, not yet collected, location
    /// known, within radius. The first failing check wins and the ledger is
    /// left untouched.
    pub fn collect_at(
        &mut self,
        point: &PointOfInterest,
        user_location: Option<&Coordinate>,
        now: DateTime<Utc>,
    ) -> Result<LedgerEntry, CollectionError> {
        if !point.is_collectible() {
            return Err(CollectionError::NotCollectible(point.id.clone()));
        }
        if self.contains(&point.id) {
            debug!(point = %point.id, "stamp already collected");
            return Err(CollectionError::AlreadyCollected(point.id.clone()));
        }
        let Some(user_location) = user_location else {
            return Err(CollectionError::LocationUnavailable);
        };

        let distance = distance_meters(user_location, &point.coordinate);
        if distance > self.options.radius_meters {
            debug!(point = %point.id, distance, radius = self.options.radius_meters, "too far to collect stamp");
            return Err(CollectionError::TooFar {
                distance_meters: distance,
            });
        }

        let entry = LedgerEntry {
            point_id: point.id.clone(),
            collected_at: now,
            stamp_value: point.stamps(),
            has_coupon: point.has_coupon,
        };
        self.index.insert(entry.point_id.clone(), self.entries.len());
        self.entries.push(entry.clone());

        info!(point = %point.id, stamps = entry.stamp_value, total = self.total_stamps(), "stamp collected");
        Ok(entry)
    }

    pub fn contains(&self, point_id: &str) -> bool {
        self.index.contains_key(point_id)
    }

    pub fn entry(&self, point_id: &str) -> Option<&LedgerEntry> {
        self.index.get(point_id).map(|&i| &self.entries[i])
    }

    /// Entries in collection order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of stamp values over all entries.
    pub fn total_stamps(&self) -> u32 {
        self.entries.iter().map(|e| e.stamp_value).sum()
    }

    /// Number of collected spots that come with a coupon.
    pub fn coupon_count(&self) -> usize {
        self.entries.iter().filter(|e| e.has_coupon).count()
    }

    pub fn progress(&self, available: u32) -> StampProgress {
        StampProgress {
            collected: self.total_stamps(),
            available,
        }
    }
}

/// Collect `point` into `ledger`, stamped with the current time.
pub fn collect_stamp(
    point: &PointOfInterest,
    user_location: Option<&Coordinate>,
    ledger: &mut StampLedger,
) -> Result<LedgerEntry, CollectionError> {
    ledger.collect(point, user_location)
}

/// [`collect_stamp`] with an explicit timestamp.
pub fn collect_stamp_at(
    point: &PointOfInterest,
    user_location: Option<&Coordinate>,
    ledger: &mut StampLedger,
    now: DateTime<Utc>,
) -> Result<LedgerEntry, CollectionError> {
    ledger.collect_at(point, user_location, now)
}
