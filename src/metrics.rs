//! Time and difficulty estimates for an ordered route.

use crate::config::PlannerOptions;
use crate::types::{Difficulty, TransportMode};

/// Estimated minutes for a route with the default speeds and dwell time.
pub fn estimate_time(total_distance_km: f64, stop_count: usize, mode: TransportMode) -> u32 {
    estimate_time_with(&PlannerOptions::default(), total_distance_km, stop_count, mode)
}

/// Travel time at the mode's speed plus a fixed dwell per stop, rounded to
/// the nearest minute.
pub fn estimate_time_with(
    options: &PlannerOptions,
    total_distance_km: f64,
    stop_count: usize,
    mode: TransportMode,
) -> u32 {
    debug_assert!(total_distance_km >= 0.0, "negative route distance");

    let travel_minutes = total_distance_km / options.speed_kmh(mode) * 60.0;
    let dwell_minutes = stop_count as f64 * options.dwell_minutes_per_stop;
    (travel_minutes + dwell_minutes).round().max(0.0) as u32
}

/// Difficulty tier with the default thresholds.
pub fn classify_difficulty(total_distance_km: f64, estimated_minutes: u32) -> Difficulty {
    classify_difficulty_with(&PlannerOptions::default(), total_distance_km, estimated_minutes)
}

/// First tier whose distance AND time bounds both hold; `Hard` otherwise.
pub fn classify_difficulty_with(
    options: &PlannerOptions,
    total_distance_km: f64,
    estimated_minutes: u32,
) -> Difficulty {
    if total_distance_km <= options.easy.max_km && estimated_minutes <= options.easy.max_minutes {
        Difficulty::Easy
    } else if total_distance_km <= options.medium.max_km
        && estimated_minutes <= options.medium.max_minutes
    {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

/// "45min" under an hour, "2h 5min" otherwise.
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}min", hours, mins)
    } else {
        format!("{}min", mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walking_estimate() {
        // 1 km at 4 km/h = 15 min, plus 3 stops * 15 min
        assert_eq!(estimate_time(1.0, 3, TransportMode::Walking), 60);
    }

    #[test]
    fn test_bicycle_estimate() {
        // 3 km at 15 km/h = 12 min, plus 2 stops
        assert_eq!(estimate_time(3.0, 2, TransportMode::Bicycle), 42);
    }

    #[test]
    fn test_estimate_rounds_to_nearest_minute() {
        // 0.1 km walking = 1.5 min -> 2
        assert_eq!(estimate_time(0.1, 0, TransportMode::Walking), 2);
        // 0.09 km walking = 1.35 min -> 1
        assert_eq!(estimate_time(0.09, 0, TransportMode::Walking), 1);
        assert_eq!(estimate_time(0.0, 0, TransportMode::Walking), 0);
    }

    #[test]
    fn test_difficulty_tiers() {
        assert_eq!(classify_difficulty(2.0, 90), Difficulty::Easy);
        assert_eq!(classify_difficulty(2.1, 60), Difficulty::Medium);
        assert_eq!(classify_difficulty(5.0, 180), Difficulty::Medium);
        assert_eq!(classify_difficulty(5.1, 100), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_needs_both_bounds() {
        // Short but slow
        assert_eq!(classify_difficulty(1.0, 120), Difficulty::Medium);
        assert_eq!(classify_difficulty(1.0, 200), Difficulty::Hard);
        // Long but fast
        assert_eq!(classify_difficulty(4.0, 30), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_monotonic_in_distance() {
        for mode in [TransportMode::Walking, TransportMode::Bicycle] {
            for stops in [0usize, 1, 4, 8, 12] {
                let mut previous = Difficulty::Easy;
                let mut km = 0.0;
                while km <= 20.0 {
                    let minutes = estimate_time(km, stops, mode);
                    let tier = classify_difficulty(km, minutes);
                    assert!(tier >= previous, "tier dropped at {} km, {} stops", km, stops);
                    previous = tier;
                    km += 0.05;
                }
            }
        }
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0min");
        assert_eq!(format_minutes(45), "45min");
        assert_eq!(format_minutes(60), "1h 0min");
        assert_eq!(format_minutes(125), "2h 5min");
    }
}
