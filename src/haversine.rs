//! Great-circle distance metric.
//!
//! Drop-in replacement for [`crate::distance::Euclidean`] when the places
//! span more than a small area. Distances are reported in kilometres.

use crate::traits::DistanceMetric;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine-based distance metric.
#[derive(Debug, Clone)]
pub struct Haversine {
    /// Sphere radius in kilometers.
    pub radius_km: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl Haversine {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Calculate haversine distance between two points in kilometers.
    fn haversine_km(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        self.radius_km * c
    }
}

impl DistanceMetric for Haversine {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        self.haversine_km(from, to)
    }
}
