use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Handler-facing error type and the single top-level fault handler.
///
/// Validation failures never pass through here; they are the form
/// redisplay path inside the create handlers.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A lookup by identifier matched nothing.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// A fault from the storage collaborator, propagated unchanged.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),

    /// A fault from the rendering collaborator.
    #[error("view rendering failed: {0}")]
    Render(anyhow::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            CatalogError::NotFound { entity } => {
                (StatusCode::NOT_FOUND, format!("{entity} not found")).into_response()
            }
            CatalogError::Storage(err) => {
                log::error!("storage fault: {err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
            CatalogError::Render(err) => {
                log::error!("render fault: {err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
