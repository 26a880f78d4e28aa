//! Struct definitions and implementations for [`Coordinates`].
//!
//! A coordinate pair is a pure value: two points are the same location
//! exactly when their fields are equal.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A geographic point in degrees: latitude in [-90, 90], longitude in
/// [-180, 180].
///
/// Wrapping the fields in [`OrderedFloat`] gives the type `Eq` and
/// `Hash`, so a coordinate pair can be compared and keyed by value.
/// Range validity is the caller's concern; out-of-range values still
/// produce numerically defined (if geometrically meaningless) results
/// downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl Coordinates {
    /// Builds a coordinate pair from plain degree values.
    pub fn new(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Latitude in degrees as a plain float.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude.into_inner()
    }

    /// Longitude in degrees as a plain float.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude.into_inner()
    }
}

#[cfg(test)]
mod coordinates_tests {
    use super::*;

    #[test]
    fn test_value_identity() {
        let a = Coordinates::new(21.4225, 39.8262);
        let b = Coordinates::new(21.4225, 39.8262);
        let c = Coordinates::new(21.4225, 39.8263);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_degree_accessors() {
        let point = Coordinates::new(-33.8688, 151.2093);
        assert_eq!(point.latitude_deg(), -33.8688);
        assert_eq!(point.longitude_deg(), 151.2093);
    }
}
