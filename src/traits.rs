//! Core domain traits for the route planner.
//!
//! These are intentionally minimal. Concrete apps can implement them for
//! their own data models; `crate::model` provides the backend's records.

use std::fmt::Debug;
use std::hash::Hash;

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// Category identifier.
///
/// Ordered so candidate merging within an iteration is deterministic.
pub trait CategoryKey: Id + Ord + Debug {}

impl<T> CategoryKey for T where T: Id + Ord + Debug {}

/// A point of interest that can become a stop on a route.
pub trait PointOfInterest {
    type Id: Id;
    type CategoryId: CategoryKey;

    fn id(&self) -> &Self::Id;

    /// The single category this place belongs to.
    fn category_id(&self) -> &Self::CategoryId;

    /// Location coordinates (lat, lng) in degrees.
    fn location(&self) -> (f64, f64);
}

/// Looks up places by category.
///
/// No ordering guarantee is required; the planner orders candidates itself.
pub trait PlaceRepository {
    type Place: PointOfInterest;
    type Error: std::error::Error + Send + Sync + 'static;

    fn places_by_category(
        &self,
        category: &<Self::Place as PointOfInterest>::CategoryId,
    ) -> Result<Vec<Self::Place>, Self::Error>;
}

/// Distance between two (lat, lng) coordinates.
///
/// Only the ordering of distances matters to the planner; the unit is
/// whatever the metric reports and is carried through to route legs.
pub trait DistanceMetric {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64;
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        (**self).distance(from, to)
    }
}

/// Alias for the category id type of a repository's places.
pub type CategoryOf<R> = <<R as PlaceRepository>::Place as PointOfInterest>::CategoryId;
