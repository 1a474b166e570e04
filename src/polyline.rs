//! Polyline representation for planned route geometry.
//!
//! Holds decoded coordinates. Encoding to the compact polyline format, if a
//! frontend wants it, happens at the API boundary, not in the planner.

use serde::{Deserialize, Serialize};

/// A route path as decoded (latitude, longitude) points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    /// Number of segments between consecutive points.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Sum of segment lengths under `distance`.
    pub fn length_with<F>(&self, distance: F) -> f64
    where
        F: Fn((f64, f64), (f64, f64)) -> f64,
    {
        self.points
            .windows(2)
            .map(|pair| distance(pair[0], pair[1]))
            .sum()
    }
}
