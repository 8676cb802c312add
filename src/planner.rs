//! Themed route plan generation.
//!
//! Spots are annotated with their distance from the user and filtered by the
//! request's constraints. Each theme then picks its own pool from what is
//! left, orders it with the nearest-neighbor optimizer and gets measured.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PlannerOptions;
use crate::haversine::distance_km;
use crate::metrics::{classify_difficulty_with, estimate_time_with, format_minutes};
use crate::optimizer::{optimize_route, route_distance_km};
use crate::polyline::Polyline;
use crate::proximity::format_distance_km;
use crate::traits::Locatable;
use crate::types::{Category, Coordinate, Difficulty, PointOfInterest, RouteConstraints};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Spots close to the user, in catalog order.
    Nearby,
    /// Viewpoints, highest stamp value first.
    Landmark,
    /// Shrines and temples, in catalog order.
    Shrine,
    /// Stamp-bearing spots, highest stamp value first.
    StampRally,
    /// Everything that passed the filters.
    ///
    /// This theme ignores `max_time_minutes` so there is always a "see it
    /// all" option. That exemption mirrors long-standing behavior and may be
    /// an accident rather than a deliberate fallback.
    Exhaustive,
}

impl Theme {
    /// Generation order; also the tie order between plans of equal length.
    pub const ALL: [Theme; 5] = [
        Theme::Nearby,
        Theme::Landmark,
        Theme::Shrine,
        Theme::StampRally,
        Theme::Exhaustive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Nearby => "Nearby stroll: the highlights around you in a short loop",
            Theme::Landmark => "Landmark course: historic buildings and viewpoints",
            Theme::Shrine => "Shrine and temple walk",
            Theme::StampRally => "Stamp rally: collect as many stamps as possible",
            Theme::Exhaustive => "Complete tour: every spot in the area",
        }
    }

    pub fn respects_time_budget(&self) -> bool {
        !matches!(self, Theme::Exhaustive)
    }
}

/// A themed visiting sequence with its estimates. Recomputed per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub theme: Theme,
    pub label: String,
    /// Where the route starts (the user's location at request time).
    pub start: Coordinate,
    pub stops: Vec<PointOfInterest>,
    pub total_distance_km: f64,
    pub estimated_minutes: u32,
    pub total_stamp_value: u32,
    pub difficulty: Difficulty,
}

impl RoutePlan {
    /// Start followed by each stop, for drawing on a map.
    pub fn polyline(&self) -> Polyline {
        Polyline::from_route(&self.start, &self.stops)
    }

    pub fn formatted_distance(&self) -> String {
        format_distance_km(self.total_distance_km)
    }

    pub fn formatted_time(&self) -> String {
        format_minutes(self.estimated_minutes)
    }
}

/// A spot that survived filtering, with its distance from the user.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    point: &'a PointOfInterest,
    distance_from_user_km: f64,
}

impl Locatable for Candidate<'_> {
    fn coordinate(&self) -> Coordinate {
        self.point.coordinate
    }
}

#[derive(Debug, Clone, Default)]
pub struct Planner {
    options: PlannerOptions,
}

impl Planner {
    pub fn new(options: PlannerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    /// Candidate plans sorted by estimated minutes (stable on ties).
    ///
    /// No location, no spots, or nothing left after filtering all yield an
    /// empty list.
    pub fn plans(
        &self,
        points: &[PointOfInterest],
        user_location: Option<&Coordinate>,
        constraints: &RouteConstraints,
    ) -> Vec<RoutePlan> {
        let Some(start) = user_location else {
            debug!("no user location, skipping route planning");
            return Vec::new();
        };

        let pool = filter_candidates(points, start, constraints);
        debug!(total = points.len(), kept = pool.len(), "filtered route candidates");
        if pool.is_empty() {
            return Vec::new();
        }

        let mut plans: Vec<RoutePlan> = Theme::ALL
            .iter()
            .filter_map(|theme| {
                let themed = self.theme_pool(*theme, &pool, constraints);
                self.build_plan(*theme, &themed, start, constraints)
            })
            .collect();

        plans.sort_by_key(|plan| plan.estimated_minutes);
        plans
    }

    fn theme_pool<'a>(
        &self,
        theme: Theme,
        pool: &[Candidate<'a>],
        constraints: &RouteConstraints,
    ) -> Vec<Candidate<'a>> {
        let limits = &self.options.themes;
        match theme {
            Theme::Nearby => pool
                .iter()
                .filter(|c| c.distance_from_user_km <= limits.nearby_radius_km)
                .take(limits.nearby)
                .copied()
                .collect(),
            Theme::Landmark => {
                let mut themed = of_category(pool, Category::Viewpoint);
                sort_by_stamps_desc(&mut themed);
                themed.truncate(limits.landmark);
                themed
            }
            Theme::Shrine => {
                let mut themed = of_category(pool, Category::Shrine);
                themed.truncate(limits.shrine);
                themed
            }
            Theme::StampRally => {
                if !constraints.include_stamp_focus {
                    return Vec::new();
                }
                let mut themed: Vec<Candidate<'a>> = pool
                    .iter()
                    .filter(|c| c.point.is_collectible())
                    .copied()
                    .collect();
                sort_by_stamps_desc(&mut themed);
                themed.truncate(limits.stamp_rally);
                themed
            }
            Theme::Exhaustive => pool.iter().take(limits.exhaustive).copied().collect(),
        }
    }

    fn build_plan(
        &self,
        theme: Theme,
        themed: &[Candidate<'_>],
        start: &Coordinate,
        constraints: &RouteConstraints,
    ) -> Option<RoutePlan> {
        if themed.is_empty() {
            return None;
        }

        let ordered = optimize_route(themed, start);
        let total_distance_km = route_distance_km(start, &ordered);
        let estimated_minutes = estimate_time_with(
            &self.options,
            total_distance_km,
            ordered.len(),
            constraints.transport_mode,
        );

        if theme.respects_time_budget() && estimated_minutes > constraints.max_time_minutes {
            debug!(
                ?theme,
                estimated_minutes,
                max = constraints.max_time_minutes,
                "dropping plan over time budget"
            );
            return None;
        }

        let stops: Vec<PointOfInterest> = ordered.iter().map(|c| c.point.clone()).collect();
        let total_stamp_value = stops.iter().map(PointOfInterest::stamps).sum();

        Some(RoutePlan {
            theme,
            label: theme.label().to_string(),
            start: *start,
            stops,
            total_distance_km,
            estimated_minutes,
            total_stamp_value,
            difficulty: classify_difficulty_with(&self.options, total_distance_km, estimated_minutes),
        })
    }
}

/// Plans for `user_location` with default planner options.
pub fn generate_plans(
    points: &[PointOfInterest],
    user_location: &Coordinate,
    constraints: &RouteConstraints,
) -> Vec<RoutePlan> {
    Planner::default().plans(points, Some(user_location), constraints)
}

fn filter_candidates<'a>(
    points: &'a [PointOfInterest],
    start: &Coordinate,
    constraints: &RouteConstraints,
) -> Vec<Candidate<'a>> {
    points
        .iter()
        .map(|point| Candidate {
            point,
            distance_from_user_km: distance_km(start, &point.coordinate),
        })
        .filter(|c| c.distance_from_user_km <= constraints.max_distance_km)
        .filter(|c| constraints.allows(c.point.category))
        .collect()
}

fn of_category<'a>(pool: &[Candidate<'a>], category: Category) -> Vec<Candidate<'a>> {
    pool.iter()
        .filter(|c| c.point.category == category)
        .copied()
        .collect()
}

fn sort_by_stamps_desc(candidates: &mut [Candidate<'_>]) {
    candidates.sort_by(|a, b| b.point.stamps().cmp(&a.point.stamps()));
}
