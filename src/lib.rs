pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod render;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export logic types
pub use logic::{FieldError, FieldRules, FormValidator, ValidationOutcome};

// Export all model types
pub use model::*;

// Export collaborator seams and the in-memory store
pub use render::{HtmlRenderer, ViewRenderer};
pub use store::{CatalogStore, MemoryStore};
