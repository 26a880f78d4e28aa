//! Types returned by the qibla direction calculation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How much trust to put in a compass pointed along the computed
/// bearing.
///
/// Compass and sensor noise carry a roughly fixed angular error, so the
/// farther the observer is from the target the larger the absolute miss
/// that error translates to. This is a usability heuristic; the bearing
/// formula itself is exact up to the spherical-Earth approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accuracy {
    High,
    Medium,
    Low,
}

impl Accuracy {
    /// Classifies a great-circle distance into an accuracy tier.
    ///
    /// Under 1000 km is `High`, 1000 km through 5000 km inclusive is
    /// `Medium`, beyond that is `Low`.
    pub fn from_distance_km(distance_km: f64) -> Accuracy {
        if distance_km < 1000.0 {
            Accuracy::High
        } else if distance_km <= 5000.0 {
            Accuracy::Medium
        } else {
            Accuracy::Low
        }
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Accuracy::High => "high",
            Accuracy::Medium => "medium",
            Accuracy::Low => "low",
        };
        write!(f, "{}", label)
    }
}

/// The outcome of a qibla calculation for one observer position.
///
/// Recomputed on demand for every reading; never cached or persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QiblaResult {
    /// Initial great-circle bearing toward the target, degrees
    /// clockwise from north, always in [0, 360).
    pub direction: f64,

    /// Great-circle distance to the target in kilometers, never
    /// negative.
    #[serde(rename = "distance")]
    pub distance_km: f64,

    /// Coarse confidence tier derived from the distance.
    pub accuracy: Accuracy,
}
