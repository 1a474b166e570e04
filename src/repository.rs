//! In-memory place repository.

use std::collections::HashMap;
use std::convert::Infallible;

use crate::traits::{PlaceRepository, PointOfInterest};

/// Places grouped by category, in insertion order.
///
/// Suitable for tests and for callers that already hold the catalog in
/// memory. Unknown categories yield an empty list.
#[derive(Debug, Clone)]
pub struct InMemoryPlaceRepository<P: PointOfInterest> {
    by_category: HashMap<P::CategoryId, Vec<P>>,
}

impl<P: PointOfInterest> Default for InMemoryPlaceRepository<P> {
    fn default() -> Self {
        Self {
            by_category: HashMap::new(),
        }
    }
}

impl<P: PointOfInterest> InMemoryPlaceRepository<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, place: P) {
        self.by_category
            .entry(place.category_id().clone())
            .or_default()
            .push(place);
    }

    pub fn len(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P: PointOfInterest> FromIterator<P> for InMemoryPlaceRepository<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut repository = Self::new();
        for place in iter {
            repository.insert(place);
        }
        repository
    }
}

impl<P: PointOfInterest + Clone> PlaceRepository for InMemoryPlaceRepository<P> {
    type Place = P;
    type Error = Infallible;

    fn places_by_category(&self, category: &P::CategoryId) -> Result<Vec<P>, Infallible> {
        Ok(self.by_category.get(category).cloned().unwrap_or_default())
    }
}
