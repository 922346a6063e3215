use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use sixcities_shared::{OfferDetail, ReviewsMap};

/// Collections the detail page works from, already resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub offers: Vec<OfferDetail>,
    pub reviews: ReviewsMap,
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<T>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

pub async fn fetch_offers() -> Result<Vec<OfferDetail>, String> {
    fetch_json("/api/offers").await
}

pub async fn fetch_reviews() -> Result<ReviewsMap, String> {
    fetch_json("/api/reviews").await
}

/// Fetch offers and reviews concurrently.
pub async fn load_catalog() -> Result<Catalog, String> {
    let (offers, reviews) = futures::join!(fetch_offers(), fetch_reviews());
    Ok(Catalog {
        offers: offers?,
        reviews: reviews?,
    })
}
