//! CORS layer built from the listing configuration

use axum::http::HeaderValue;
use rollcall_core::config::ListingConfig;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build a CORS layer from configuration
///
/// Returns `None` when CORS is disabled. A `*` entry in the allowed
/// origins makes the layer permissive; otherwise only the listed origins
/// are allowed. Origins that fail to parse as header values are skipped.
#[must_use]
pub fn cors_layer(listing: &ListingConfig) -> Option<CorsLayer> {
    if !listing.enable_cors {
        return None;
    }

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    let layer = if listing.cors_origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = listing
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    };

    Some(layer)
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::util::ServiceExt;

    fn listing(enable_cors: bool, origins: Vec<&str>) -> ListingConfig {
        ListingConfig {
            default_page_size: 20,
            max_page_size: 100,
            enable_cors,
            cors_origins: origins.into_iter().map(String::from).collect(),
        }
    }

    async fn allow_origin_header(layer: CorsLayer, origin: &str) -> Option<String> {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(layer);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("Origin", origin)
                    .body(Body::empty())
                    .expect("build request"),
            )
            .await
            .expect("router response");

        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().expect("header value").to_string())
    }

    #[test]
    fn test_disabled_cors_yields_no_layer() {
        assert!(cors_layer(&listing(false, vec!["*"])).is_none());
    }

    #[tokio::test]
    async fn test_wildcard_allows_any_origin() {
        let layer = cors_layer(&listing(true, vec!["*"])).expect("layer");
        let header = allow_origin_header(layer, "https://anywhere.example.edu").await;
        assert_eq!(header.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn test_listed_origin_is_echoed() {
        let layer =
            cors_layer(&listing(true, vec!["https://admin.example.edu"])).expect("layer");
        let header = allow_origin_header(layer, "https://admin.example.edu").await;
        assert_eq!(header.as_deref(), Some("https://admin.example.edu"));
    }

    #[tokio::test]
    async fn test_unlisted_origin_gets_no_header() {
        let layer =
            cors_layer(&listing(true, vec!["https://admin.example.edu"])).expect("layer");
        let header = allow_origin_header(layer, "https://evil.example.com").await;
        assert!(header.is_none());
    }
}
