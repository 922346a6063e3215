use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sixcities_shared::{OfferDetail, ReviewsMap, SameCityNearby, find_focal};

use crate::config::{nearby_limit, static_dir};

#[derive(Debug, Deserialize)]
struct SeedFile {
    offers: Vec<OfferDetail>,
    #[serde(default)]
    reviews: ReviewsMap,
}

/// Immutable offer and review collections, with the list payloads serialized
/// once at load so every request shares the same bytes.
#[derive(Debug)]
pub struct Catalog {
    pub offers: Vec<OfferDetail>,
    pub reviews: ReviewsMap,
    pub offers_json: Bytes,
    pub reviews_json: Bytes,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(offers: Vec<OfferDetail>, reviews: ReviewsMap) -> Result<Self, String> {
        let mut seen = HashSet::with_capacity(offers.len());
        if let Some(duplicate) = offers.iter().find(|offer| !seen.insert(&offer.id)) {
            return Err(format!("duplicate offer id {}", duplicate.id));
        }

        let offers_json = serde_json::to_vec(&offers)
            .map(Bytes::from)
            .map_err(|e| format!("serialize offers: {e}"))?;
        let reviews_json = serde_json::to_vec(&reviews)
            .map(Bytes::from)
            .map_err(|e| format!("serialize reviews: {e}"))?;

        Ok(Self {
            offers,
            reviews,
            offers_json,
            reviews_json,
            loaded_at: Utc::now(),
        })
    }

    pub fn from_seed_json(raw: &[u8]) -> Result<Self, String> {
        let seed: SeedFile = serde_json::from_slice(raw).map_err(|e| format!("parse error: {e}"))?;
        Self::new(seed.offers, seed.reviews)
    }

    pub async fn load(path: &Path) -> Result<Self, String> {
        let raw = tokio::fs::read(path)
            .await
            .map_err(|e| format!("read {}: {e}", path.display()))?;
        Self::from_seed_json(&raw)
    }

    pub fn find(&self, route_id: &str) -> Option<&OfferDetail> {
        find_focal(&self.offers, route_id)
    }

    pub fn review_count(&self) -> usize {
        self.reviews.values().map(Vec::len).sum()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub nearby: SameCityNearby,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            nearby: SameCityNearby {
                limit: nearby_limit(),
            },
            static_dir: static_dir(),
        }
    }
}
