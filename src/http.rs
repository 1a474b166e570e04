//! HTTP adapter that reads places from the recommendation backend.
//!
//! The backend's per-category endpoint omits coordinates, so places are
//! read from the paged catalog (`GET /place?page=N`) and filtered locally.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::{Category, CategoryId, Place};
use crate::repository::InMemoryPlaceRepository;
use crate::traits::PlaceRepository;

#[derive(Debug, thiserror::Error)]
pub enum HttpRepositoryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("place catalog did not end within {0} pages")]
    TooManyPages(u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpRepositoryConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Upper bound on catalog pages read per lookup.
    pub max_pages: u32,
}

impl Default for HttpRepositoryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 10,
            max_pages: 1000,
        }
    }
}

/// Reads places from `GET {base_url}/place?page=N`, starting at page 1 and
/// stopping at the first empty page.
///
/// Every lookup re-reads the catalog. Use [`HttpPlaceRepository::snapshot`]
/// to read it once and plan against the in-memory copy.
///
/// Transport failures, non-2xx statuses and malformed bodies are returned
/// as errors; retrying is left to the caller.
#[derive(Debug, Clone)]
pub struct HttpPlaceRepository {
    config: HttpRepositoryConfig,
    client: reqwest::blocking::Client,
}

impl HttpPlaceRepository {
    pub fn new(config: HttpRepositoryConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HttpRepositoryConfig {
        &self.config
    }

    /// All categories known to the backend (`GET /categories`).
    pub fn categories(&self) -> Result<Vec<Category>, HttpRepositoryError> {
        let url = format!("{}/categories", self.base_url());
        debug!(%url, "fetching categories");
        Ok(self.get_json(url)?)
    }

    /// Every place in the catalog, in page order.
    pub fn all_places(&self) -> Result<Vec<Place>, HttpRepositoryError> {
        let mut places = Vec::new();

        for page in 1..=self.config.max_pages {
            let batch: Vec<Place> = self.get_json(self.page_url(page))?;
            if batch.is_empty() {
                debug!(pages = page - 1, places = places.len(), "read place catalog");
                return Ok(places);
            }
            places.extend(batch);
        }

        Err(HttpRepositoryError::TooManyPages(self.config.max_pages))
    }

    /// Read the catalog once into an in-memory repository.
    pub fn snapshot(&self) -> Result<InMemoryPlaceRepository<Place>, HttpRepositoryError> {
        let repository: InMemoryPlaceRepository<Place> = self.all_places()?.into_iter().collect();
        info!(places = repository.len(), "took place catalog snapshot");
        Ok(repository)
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn page_url(&self, page: u32) -> String {
        format!("{}/place?page={}", self.base_url(), page)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<T>())
    }
}

impl PlaceRepository for HttpPlaceRepository {
    type Place = Place;
    type Error = HttpRepositoryError;

    fn places_by_category(&self, category: &CategoryId) -> Result<Vec<Place>, HttpRepositoryError> {
        let mut places = self.all_places()?;
        places.retain(|place| place.category_id == *category);
        Ok(places)
    }
}
