use axum::extract::State;
use axum::response::{Html, Json};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::error::{CatalogError, CatalogResult};
use crate::render::ViewRenderer;
use crate::store::traits::CatalogStore;

/// Shared request state: the storage collaborator plus the rendering
/// collaborator.
pub struct AppState<S> {
    pub store: Arc<S>,
    pub views: Arc<dyn ViewRenderer>,
}

impl<S> AppState<S> {
    pub fn new(store: Arc<S>, views: Arc<dyn ViewRenderer>) -> Self {
        Self { store, views }
    }
}

// Manual impl: the store itself does not need to be Clone behind the Arc.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            views: self.views.clone(),
        }
    }
}

pub(crate) fn render_view<S>(
    state: &AppState<S>,
    view: &str,
    context: Value,
) -> CatalogResult<Html<String>> {
    let body = state
        .views
        .render(view, &context)
        .map_err(CatalogError::Render)?;
    Ok(Html(body))
}

/// Optional form field: empty after sanitization means absent.
pub(crate) fn opt(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Catalog home page: record counts for each collection, fetched in
/// parallel.
pub async fn index<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> CatalogResult<Html<String>> {
    let (brand_count, bike_count, bike_instance_count) = tokio::try_join!(
        state.store.count_brands(),
        state.store.count_bikes(),
        state.store.count_bike_instances(),
    )?;

    let ctx = json!({
        "title": "Velo Catalog Home",
        "brand_count": brand_count,
        "bike_count": bike_count,
        "bike_instance_count": bike_instance_count,
    });
    render_view(&state, "index", ctx)
}
