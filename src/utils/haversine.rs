//! Great-circle distance via the haversine formula.

use crate::types::location::Coordinates;

/// Mean Earth radius in kilometers for the spherical-Earth model.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returns the great-circle distance between two points in kilometers.
///
/// Symmetric in its arguments and never negative; the maximum possible
/// value is half the Earth's circumference, about 20015 km.
pub fn distance(from: &Coordinates, to: &Coordinates) -> f64 {
    let phi1 = from.latitude_deg().to_radians();
    let phi2 = to.latitude_deg().to_radians();
    let delta_phi = (to.latitude_deg() - from.latitude_deg()).to_radians();
    let delta_lambda = (to.longitude_deg() - from.longitude_deg()).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
