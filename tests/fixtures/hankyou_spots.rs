//! Spots of the sightseeing area used across the integration tests.
//!
//! Coordinates match the app's bundled dataset, so distances between them are
//! the ones users actually see on the map.

use tour_planner::{Category, PointOfInterest};

use super::coord;

/// A spot record as it appears in the bundled dataset.
#[derive(Debug, Clone)]
pub struct Spot {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub category: Category,
    pub stamps: Option<u32>,
    pub coupon: bool,
}

impl Spot {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        lat: f64,
        lng: f64,
        category: Category,
    ) -> Self {
        Self {
            id,
            name,
            lat,
            lng,
            category,
            stamps: None,
            coupon: false,
        }
    }

    pub const fn stamps(mut self, stamps: u32) -> Self {
        self.stamps = Some(stamps);
        self
    }

    pub const fn coupon(mut self) -> Self {
        self.coupon = true;
        self
    }

    pub fn to_point(&self) -> PointOfInterest {
        PointOfInterest {
            id: self.id.to_string(),
            name: self.name.to_string(),
            coordinate: coord(self.lat, self.lng),
            category: self.category,
            stamp_value: self.stamps,
            description: String::new(),
            rating: None,
            has_coupon: self.coupon,
        }
    }
}

/// Map centre; also the app's fallback location.
pub const CENTER: (f64, f64) = (33.5904, 130.4017);

pub const SPOTS: &[Spot] = &[
    Spot::new("hankyou-shrine", "Hankyou Shrine", 33.5904, 130.4017, Category::Shrine).stamps(1),
    Spot::new("kominka-cafe", "Kominka Cafe", 33.5914, 130.4027, Category::Cafe)
        .stamps(1)
        .coupon(),
    Spot::new("bamboo-path", "Bamboo Grove Path", 33.5924, 130.4037, Category::Nature).stamps(2),
    Spot::new("observation-deck", "Observation Deck", 33.5934, 130.4047, Category::Viewpoint)
        .stamps(3),
    Spot::new("seven-eleven", "Seven-Eleven Hankyou", 33.5894, 130.4007, Category::Convenience),
    Spot::new("family-mart", "FamilyMart Chuo", 33.5884, 130.3997, Category::Convenience),
    Spot::new("wafuu-cafe-ume", "Wafuu Cafe Ume", 33.5909, 130.4022, Category::Cafe).coupon(),
    Spot::new("soba-takean", "Soba Take-no-an", 33.5919, 130.4032, Category::Cafe),
    // ~43 km south of the centre, outside the default planning radius.
    Spot::new("housenji-temple", "Housenji Temple", 33.20541304916532, 130.37116642460438, Category::Shrine)
        .stamps(2),
];

pub fn hankyou_points() -> Vec<PointOfInterest> {
    SPOTS.iter().map(Spot::to_point).collect()
}

pub fn spot(id: &str) -> PointOfInterest {
    SPOTS
        .iter()
        .find(|s| s.id == id)
        .map(Spot::to_point)
        .unwrap_or_else(|| panic!("no fixture spot {}", id))
}
