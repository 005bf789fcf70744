use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri, header},
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{get, post},
};
use mime_guess::from_path;
use rust_embed::Embed;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    docs::ApiDoc,
    handlers::{
        comment::submit_comment::submit_comment,
        server::{healthcheck::healthcheck, root::root_handler},
    },
    init::state::ServerState,
};

use super::middleware::logging::log_middleware;

const MAX_REQUEST_SIZE: usize = 1024 * 64; // 64KB

#[derive(Embed)]
#[folder = "static/"]
struct EmbeddedAssets;

/// Serves static files embedded in the binary, prioritizing pre-compressed .gz files.
async fn static_asset_handler(uri: Uri) -> impl IntoResponse {
    let mut path = uri.path().trim_start_matches('/').to_string();
    if path.is_empty() {
        path = "index.html".to_string();
    }

    // 1. Check for a pre-compressed .gz file first
    let gzip_path = format!("{path}.gz");
    if let Some(content) = EmbeddedAssets::get(&gzip_path) {
        let mime = from_path(&path).first_or_octet_stream(); // Guess MIME from original path
        return (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime.as_ref()),
                (header::CONTENT_ENCODING, "gzip"),
            ],
            content.data,
        )
            .into_response();
    }

    // 2. Fallback to the uncompressed file (if it exists)
    if let Some(content) = EmbeddedAssets::get(&path) {
        let mime = from_path(&path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data,
        )
            .into_response();
    }

    // 3. If nothing is found, return an error
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

pub fn build_router(state: Arc<ServerState>) -> axum::Router {
    let log_middleware = from_fn_with_state(state.clone(), log_middleware);
    let compression_middleware = CompressionLayer::new().gzip(true);
    let cors_layer = CorsLayer::very_permissive();

    let api_router = Router::new()
        .route("/api", post(submit_comment))
        .route("/api/healthcheck/server", get(healthcheck))
        .route("/api/healthcheck/state", get(root_handler))
        .layer(compression_middleware)
        .layer(log_middleware)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_SIZE))
        .layer(cors_layer)
        .with_state(state.clone());

    // Final router: merge API routes, mount docs, and set the static asset
    // handler as the fallback
    Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(get(static_asset_handler))
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, Uri, header};
    use axum::response::IntoResponse;

    use super::static_asset_handler;

    #[tokio::test]
    async fn the_root_path_serves_the_embedded_index() {
        let response = static_asset_handler(Uri::from_static("/"))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
    }

    #[tokio::test]
    async fn asset_mime_types_are_guessed_from_the_path() {
        let response = static_asset_handler(Uri::from_static("/app.js"))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.contains("javascript"));
    }

    #[tokio::test]
    async fn unknown_paths_return_not_found() {
        let response = static_asset_handler(Uri::from_static("/no-such-file.bin"))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
