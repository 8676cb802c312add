//! tour-planner core
//!
//! Distance, proximity gating, greedy route ordering and themed route plans
//! for a sightseeing companion, plus the session-scoped stamp ledger.

pub mod catalog;
pub mod config;
pub mod error;
pub mod haversine;
pub mod ledger;
pub mod location;
pub mod metrics;
pub mod optimizer;
pub mod planner;
pub mod polyline;
pub mod proximity;
pub mod traits;
pub mod types;

pub use catalog::Catalog;
pub use config::{LedgerOptions, PlannerOptions, TourConfig};
pub use error::{CatalogError, CollectionError, ConfigError, CoordinateError};
pub use ledger::{collect_stamp, collect_stamp_at, LedgerEntry, StampLedger, StampProgress};
pub use planner::{generate_plans, Planner, RoutePlan, Theme};
pub use types::{Category, Coordinate, Difficulty, PointOfInterest, RouteConstraints, TransportMode};
