use std::path::Path;

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, header},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::routes;
use crate::state::AppState;

pub(crate) fn build_app(state: AppState) -> Router {
    // Client-side paths such as /offer/{id} and /not_found resolve to the SPA shell.
    let index = ServeFile::new(state.static_dir.join("index.html"));
    let static_assets = Router::new()
        .fallback_service(
            ServeDir::new(&state.static_dir)
                .precompressed_br()
                .precompressed_gzip()
                .fallback(index),
        )
        .layer(middleware::from_fn(set_static_cache_control));

    let app = Router::new()
        .route("/api/offers", get(routes::api::get_offers))
        .route("/api/offers/{id}", get(routes::api::get_offer))
        .route("/api/offers/{id}/nearby", get(routes::api::get_nearby))
        .route("/api/reviews", get(routes::api::get_reviews))
        .route("/api/reviews/{id}", get(routes::api::get_offer_reviews))
        .route("/api/health", get(routes::api::health));

    app.layer(CompressionLayer::new())
        .fallback_service(static_assets)
        .with_state(state)
}

async fn set_static_cache_control(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    if response.status().is_success()
        && let Some(cache_control) = cache_control_for_path(&path)
    {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(cache_control),
        );
    }

    response
}

fn cache_control_for_path(path: &str) -> Option<&'static str> {
    if is_hashed_bundle_asset(path) {
        return Some("public, max-age=31536000, immutable");
    }

    if path.starts_with("/img/") || path.starts_with("/css/") {
        return Some("public, max-age=86400");
    }

    None
}

fn is_hashed_bundle_asset(path: &str) -> bool {
    let Some(ext) = Path::new(path).extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    // Trunk only fingerprints the wasm module and its JS glue for this client.
    if !matches!(ext, "wasm" | "js") {
        return false;
    }

    let Some(filename) = Path::new(path).file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    filename
        .split(['-', '_', '.'])
        .any(|segment| segment.len() >= 8 && segment.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::state::test_support::test_state;

    #[test]
    fn immutable_cache_for_hashed_bundle_assets() {
        assert_eq!(
            cache_control_for_path("/sixcities-client-71578f6b278221f3_bg.wasm"),
            Some("public, max-age=31536000, immutable")
        );
        assert_eq!(
            cache_control_for_path("/sixcities-client-71578f6b278221f3.js"),
            Some("public, max-age=31536000, immutable")
        );
        assert_eq!(cache_control_for_path("/input-a93762ff3bf6d63a.css"), None);
    }

    #[test]
    fn short_cache_for_unhashed_static_assets() {
        assert_eq!(
            cache_control_for_path("/img/pin-active.svg"),
            Some("public, max-age=86400")
        );
        assert_eq!(
            cache_control_for_path("/css/main.css"),
            Some("public, max-age=86400")
        );
    }

    #[test]
    fn no_cache_header_override_for_html_or_spa_paths() {
        assert_eq!(cache_control_for_path("/"), None);
        assert_eq!(cache_control_for_path("/index.html"), None);
        assert_eq!(cache_control_for_path("/offer/1"), None);
    }

    #[tokio::test]
    async fn offer_route_answers_without_network() {
        let response = build_app(test_state())
            .oneshot(
                Request::builder()
                    .uri("/api/offers/3")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
            Some(&b"application/json"[..])
        );
    }

    #[tokio::test]
    async fn invalid_offer_id_is_bad_request() {
        let response = build_app(test_state())
            .oneshot(
                Request::builder()
                    .uri("/api/offers/%20%20")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
