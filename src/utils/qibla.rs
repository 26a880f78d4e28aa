//! The qibla calculator: bearing and distance from an observer to the
//! Kaaba, with a coarse accuracy tier.
//!
//! Everything here is a stateless pure function. The caller obtains a
//! position from the device location service first; acquisition
//! failures, timeouts, and permission prompts never reach this module.

use ordered_float::OrderedFloat;

use crate::types::location::Coordinates;
use crate::types::qibla::{Accuracy, QiblaResult};
use crate::utils::haversine;

/// The Kaaba in Mecca, the fixed target of every qibla reading.
pub static MECCA: Coordinates = Coordinates {
    latitude: OrderedFloat(21.4225),
    longitude: OrderedFloat(39.8262),
};

/// Computes the qibla reading for an observer position.
///
/// The direction is the initial great-circle bearing toward
/// [`MECCA`], degrees clockwise from north in [0, 360); the distance
/// is the haversine great-circle distance in kilometers. Total over
/// finite input: out-of-range coordinates give geometrically
/// meaningless but well-defined numbers, never an error.
///
/// An observer standing exactly at the target gets a direction of 0°,
/// the `atan2(0, 0)` convention.
pub fn qibla_direction(current: &Coordinates) -> QiblaResult {
    let distance_km = haversine::distance(current, &MECCA);
    QiblaResult {
        direction: bearing(current, &MECCA),
        distance_km,
        accuracy: Accuracy::from_distance_km(distance_km),
    }
}

/// Initial bearing along the great circle from `from` to `to`, degrees
/// clockwise from north, normalized into [0, 360).
pub fn bearing(from: &Coordinates, to: &Coordinates) -> f64 {
    let phi1 = from.latitude_deg().to_radians();
    let phi2 = to.latitude_deg().to_radians();
    let delta_lambda = (to.longitude_deg() - from.longitude_deg()).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    normalize_degrees(y.atan2(x).to_degrees())
}

/// The rotation the compass needle applies: the qibla bearing relative
/// to where the device currently points, normalized into [0, 360).
pub fn compass_rotation(direction_deg: f64, device_heading_deg: f64) -> f64 {
    normalize_degrees(direction_deg - device_heading_deg)
}

/// Renders a distance for display: meters under 1 km, whole kilometers
/// under 1000 km, thousands of kilometers beyond that.
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{}m", (distance_km * 1000.0).round() as i64)
    } else if distance_km < 1000.0 {
        format!("{}km", distance_km.round() as i64)
    } else {
        format!("{}k km", (distance_km / 1000.0).round() as i64)
    }
}

/// Folds an angle in degrees into [0, 360).
fn normalize_degrees(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}
