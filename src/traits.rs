//! Seams between the planning core and its surroundings.
//!
//! Routing code is generic over [`Locatable`] so annotated candidates and
//! plain spots go through the same optimizer.

use crate::types::Coordinate;

/// Anything with a fixed position on the map.
pub trait Locatable {
    fn coordinate(&self) -> Coordinate;
}

impl<T: Locatable + ?Sized> Locatable for &T {
    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}

/// One-shot access to the host platform's location service.
///
/// Implementations answer a single request; the core never polls or retries.
pub trait LocationProvider {
    type Error: std::fmt::Display;

    fn current_location(&self) -> Result<Coordinate, Self::Error>;
}
