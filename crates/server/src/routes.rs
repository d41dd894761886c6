use axum::extract::{Path, State};
use axum::http::Uri;
use axum::routing::get;
use axum::{Json, Router};
use bioskop_catalog::UpstreamTitle;
use bioskop_catalog::mapper;
use bioskop_core::id::{self, CatalogKey};
use bioskop_core::manifest::{self, Manifest};
use bioskop_core::types::{CatalogResponse, MetaResponse, StreamsResponse};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::error::NotFound;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/manifest.json", get(get_manifest))
        .route(
            "/catalog/movie/bioskopOnlineMovies.json",
            get(catalog_without_search),
        )
        .route(
            "/catalog/movie/bioskopOnlineMovies/{search}",
            get(catalog_search),
        )
        .route("/stream/movie/{id}", get(stream_lookup))
        .route("/meta/movie/{id}", get(meta_lookup))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn not_found(uri: Uri) -> NotFound {
    NotFound(uri.path().to_string())
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

async fn get_manifest() -> Json<&'static Manifest> {
    Json(manifest::manifest())
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The catalog requires the search extra; without it there is nothing to list.
async fn catalog_without_search() -> Json<CatalogResponse> {
    Json(CatalogResponse::default())
}

async fn catalog_search(
    State(state): State<AppState>,
    Path(search): Path<String>,
) -> Json<CatalogResponse> {
    let keyword = id::extract_search_keyword(&search);
    if keyword.is_empty() {
        debug!(segment = %search, "no search keyword, returning empty catalog");
        return Json(CatalogResponse::default());
    }

    let metas = match state.catalog.search_titles(&keyword).await {
        Ok(titles) => titles.into_iter().map(mapper::to_catalog_entry).collect(),
        Err(err) => {
            warn!(
                provider = state.catalog.name(),
                keyword = %keyword,
                error = %err,
                "catalog search failed"
            );
            Vec::new()
        }
    };

    Json(CatalogResponse { metas })
}

// ---------------------------------------------------------------------------
// Stream / Meta
// ---------------------------------------------------------------------------

/// `null` body for foreign ids, otherwise a single playback link.
async fn stream_lookup(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Json<Option<StreamsResponse>> {
    let Some(key) = catalog_key(&raw_id) else {
        return Json(None);
    };

    let title = fetch_title(&state, &key).await;
    let stream = mapper::to_stream_entry(title, key.as_str(), &state.site_url);

    Json(Some(StreamsResponse {
        streams: vec![stream],
    }))
}

/// `null` body for foreign ids, otherwise full metadata or a placeholder.
async fn meta_lookup(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Json<Option<MetaResponse>> {
    let Some(key) = catalog_key(&raw_id) else {
        return Json(None);
    };

    let title = fetch_title(&state, &key).await;
    let meta = mapper::to_full_meta(title, key.as_str());

    Json(Some(MetaResponse { meta }))
}

fn catalog_key(raw_id: &str) -> Option<CatalogKey> {
    match id::normalize(raw_id) {
        Ok(key) => Some(key),
        Err(err) => {
            debug!(error = %err, "skipping lookup");
            None
        }
    }
}

/// Title detail, or `None` when the catalog has nothing usable for `key`.
async fn fetch_title(state: &AppState, key: &CatalogKey) -> Option<UpstreamTitle> {
    match state.catalog.get_title(key.as_str()).await {
        Ok(title) => Some(title),
        Err(err) => {
            warn!(
                provider = state.catalog.name(),
                hashed_id = %key,
                error = %err,
                "title lookup failed"
            );
            None
        }
    }
}
