//! Concrete records for the recommendation backend.
//!
//! Field names follow the backend's JSON (camelCase), so these types can be
//! decoded straight from its responses.

use serde::{Deserialize, Serialize};

use crate::traits::PointOfInterest;

pub type PlaceId = i64;
pub type CategoryId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub category_id: CategoryId,
    /// Accepted payment option ids.
    #[serde(default, rename = "pOptions")]
    pub payment_options: Option<Vec<i64>>,
}

impl Place {
    pub fn new(
        id: PlaceId,
        name: impl Into<String>,
        category_id: CategoryId,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            latitude,
            longitude,
            category_id,
            payment_options: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl PointOfInterest for Place {
    type Id = PlaceId;
    type CategoryId = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn category_id(&self) -> &Self::CategoryId {
        &self.category_id
    }

    fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Place category. The planner treats ids as opaque; `parent_id` is
/// carried for callers and never traversed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
}

/// One persisted stop of a saved route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePoint<PlaceId> {
    pub place_id: PlaceId,
    /// 1-based position within the route.
    pub sequence_number: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_decodes_backend_json() {
        let json = r#"{
            "id": 7,
            "name": "Bellagio Fountains",
            "description": null,
            "categoryId": 3,
            "latitude": 36.1126,
            "longitude": -115.1767,
            "pOptions": [1, 2]
        }"#;
        let place: Place = serde_json::from_str(json).expect("decode place");
        assert_eq!(place.id, 7);
        assert_eq!(place.category_id, 3);
        assert_eq!(place.location(), (36.1126, -115.1767));
        assert_eq!(place.payment_options, Some(vec![1, 2]));
    }

    #[test]
    fn test_place_optional_fields_default() {
        let json = r#"{"id":1,"name":"x","categoryId":2,"latitude":0.0,"longitude":0.0}"#;
        let place: Place = serde_json::from_str(json).expect("decode place");
        assert!(place.description.is_none());
        assert!(place.payment_options.is_none());
    }

    #[test]
    fn test_category_parent() {
        let json = r#"{"id":4,"name":"Museums","parentId":1}"#;
        let category: Category = serde_json::from_str(json).expect("decode category");
        assert_eq!(category.parent_id, Some(1));
    }

    #[test]
    fn test_route_point_serializes_camel_case() {
        let point = RoutePoint {
            place_id: 9_i64,
            sequence_number: 1,
        };
        let value = serde_json::to_value(&point).expect("encode");
        assert_eq!(value["placeId"], 9);
        assert_eq!(value["sequenceNumber"], 1);
    }
}
