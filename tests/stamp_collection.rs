//! Proximity-gated stamp collection over a session.

mod fixtures;

use fixtures::*;
use tour_planner::{collect_stamp, Catalog, CollectionError, LedgerOptions, StampLedger};

#[test]
fn too_far_then_close_enough_then_already_collected() {
    let shrine = spot("hankyou-shrine");
    let mut ledger = StampLedger::default();

    let far = north_of(&shrine.coordinate, 100.0);
    match collect_stamp(&shrine, Some(&far), &mut ledger) {
        Err(CollectionError::TooFar { distance_meters }) => {
            assert!((distance_meters - 100.0).abs() < 1.0, "got {}", distance_meters);
        }
        other => panic!("expected TooFar, got {:?}", other),
    }
    assert!(ledger.is_empty());
    assert_eq!(ledger.total_stamps(), 0);

    let close = north_of(&shrine.coordinate, 10.0);
    let entry = collect_stamp(&shrine, Some(&close), &mut ledger).unwrap();
    assert_eq!(entry.point_id, "hankyou-shrine");
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.total_stamps(), 1);

    let again = collect_stamp(&shrine, Some(&close), &mut ledger);
    assert_eq!(
        again,
        Err(CollectionError::AlreadyCollected("hankyou-shrine".to_string()))
    );
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.total_stamps(), 1);
}

#[test]
fn radius_boundary_is_inclusive() {
    let deck = spot("observation-deck");
    let mut ledger = StampLedger::default();

    let just_outside = north_of(&deck.coordinate, 51.0);
    assert!(matches!(
        collect_stamp(&deck, Some(&just_outside), &mut ledger),
        Err(CollectionError::TooFar { .. })
    ));

    let just_inside = north_of(&deck.coordinate, 49.9);
    assert!(collect_stamp(&deck, Some(&just_inside), &mut ledger).is_ok());
}

#[test]
fn spots_without_stamps_are_not_collectible() {
    let store = spot("seven-eleven");
    let mut ledger = StampLedger::default();
    let err = collect_stamp(&store, Some(&store.coordinate), &mut ledger).unwrap_err();
    assert_eq!(err, CollectionError::NotCollectible("seven-eleven".to_string()));
}

#[test]
fn no_location_is_reported_not_panicked() {
    let cafe = spot("kominka-cafe");
    let mut ledger = StampLedger::default();
    assert_eq!(
        collect_stamp(&cafe, None, &mut ledger),
        Err(CollectionError::LocationUnavailable)
    );
}

#[test]
fn walking_the_area_collects_everything_once() {
    let catalog = Catalog::new(hankyou_points()).unwrap();
    let mut ledger = StampLedger::new(LedgerOptions::default());

    // Visit every spot twice, standing on it.
    for _ in 0..2 {
        for point in catalog.points() {
            let _ = collect_stamp(point, Some(&point.coordinate), &mut ledger);
            let sum: u32 = ledger.entries().iter().map(|e| e.stamp_value).sum();
            assert_eq!(ledger.total_stamps(), sum);
        }
    }

    assert_eq!(ledger.len(), catalog.stamp_points().count());
    assert_eq!(ledger.total_stamps(), catalog.total_stamp_value());
    // Only the kominka cafe pairs a coupon with a stamp.
    assert_eq!(ledger.coupon_count(), 1);
    assert_eq!(ledger.progress(catalog.total_stamp_value()).percent(), 100);
}

#[test]
fn too_far_message_shows_remaining_distance() {
    let bamboo = spot("bamboo-path");
    let mut ledger = StampLedger::default();
    let user = north_of(&bamboo.coordinate, 1500.0);
    let err = collect_stamp(&bamboo, Some(&user), &mut ledger).unwrap_err();
    assert_eq!(err.to_string(), "still 1.5km away from the stamp point");
}
