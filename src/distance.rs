//! Planar distance on raw latitude/longitude degrees.
//!
//! Treats degrees as Cartesian coordinates. Only reasonable over small
//! regions (a city); use [`crate::haversine::Haversine`] for anything wider.

use crate::traits::DistanceMetric;

/// `sqrt(Δlat² + Δlng²)` in degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Euclidean {
    /// Squared distance, for comparisons that don't need the actual value.
    pub fn squared(from: (f64, f64), to: (f64, f64)) -> f64 {
        let delta_lat = to.0 - from.0;
        let delta_lng = to.1 - from.1;
        delta_lat * delta_lat + delta_lng * delta_lng
    }
}

impl DistanceMetric for Euclidean {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        Self::squared(from, to).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point() {
        assert_eq!(Euclidean.distance((36.1, -115.1), (36.1, -115.1)), 0.0);
    }

    #[test]
    fn test_pythagorean_triple() {
        let dist = Euclidean.distance((0.0, 0.0), (3.0, 4.0));
        assert!((dist - 5.0).abs() < 1e-12, "expected 5, got {}", dist);
        assert_eq!(Euclidean::squared((0.0, 0.0), (3.0, 4.0)), 25.0);
    }

    #[test]
    fn test_symmetric() {
        let a = (36.17, -115.14);
        let b = (36.10, -115.17);
        assert_eq!(Euclidean.distance(a, b), Euclidean.distance(b, a));
    }

    #[test]
    fn test_ordering_matches_squared() {
        let origin = (0.0, 0.0);
        let near = (1.0, 1.0);
        let far = (0.0, 2.0);
        assert!(Euclidean.distance(origin, near) < Euclidean.distance(origin, far));
        assert!(Euclidean::squared(origin, near) < Euclidean::squared(origin, far));
    }
}
