use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use sixcities_shared::{NearbyQuery, OfferDetail, OfferId, Review, reviews_for};

use crate::state::AppState;

const MAX_OFFER_ID_LEN: usize = 64;

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let catalog = &state.catalog;
    Json(serde_json::json!({
        "status": "ok",
        "offers": catalog.offers.len(),
        "reviews": catalog.review_count(),
        "loaded_at": catalog.loaded_at.to_rfc3339(),
    }))
}

/// Serve the pre-serialized offer list.
pub async fn get_offers(State(state): State<AppState>) -> impl IntoResponse {
    json_bytes_response(state.catalog.offers_json.clone(), "public, max-age=60")
}

pub async fn get_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OfferDetail>, StatusCode> {
    let id = normalize_offer_id(&id)?;
    state
        .catalog
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn get_nearby(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<OfferDetail>>, StatusCode> {
    let id = normalize_offer_id(&id)?;
    let catalog = &state.catalog;
    let focal = catalog.find(&id).ok_or(StatusCode::NOT_FOUND)?;
    let nearby = state
        .nearby
        .nearby(focal, &catalog.offers)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(nearby))
}

/// Serve the pre-serialized id → reviews mapping.
pub async fn get_reviews(State(state): State<AppState>) -> impl IntoResponse {
    json_bytes_response(state.catalog.reviews_json.clone(), "public, max-age=60")
}

/// Reviews for one listing; a listing without reviews answers with `[]`.
pub async fn get_offer_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Review>>, StatusCode> {
    let id = normalize_offer_id(&id)?;
    Ok(Json(
        reviews_for(&state.catalog.reviews, &OfferId::new(id)).to_vec(),
    ))
}

fn normalize_offer_id(raw: &str) -> Result<String, StatusCode> {
    // Ids compare by exact string equality, so edge whitespace is rejected, not trimmed.
    if raw.is_empty() || raw.len() > MAX_OFFER_ID_LEN || raw.trim() != raw {
        return Err(StatusCode::BAD_REQUEST);
    }
    if raw.chars().any(|c| c.is_control() || matches!(c, '/' | '?' | '#')) {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(raw.to_owned())
}

fn json_bytes_response(body: Bytes, cache_control: &'static str) -> Response {
    let mut response = Response::new(Body::from(body));
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(cache_control));
    response
}
