use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::api::handlers::AppState;
use crate::api::{bike_handlers, brand_handlers, handlers, instance_handlers};
use crate::store::traits::CatalogStore;

pub fn create_router<S: CatalogStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Catalog home
        .route("/catalog", get(handlers::index::<S>))
        // Brands
        .route("/catalog/brands", get(brand_handlers::brand_list::<S>))
        .route(
            "/catalog/brand/create",
            get(brand_handlers::brand_create_get::<S>),
        )
        .route(
            "/catalog/brand/create",
            post(brand_handlers::brand_create_post::<S>),
        )
        .route("/catalog/brand/:id", get(brand_handlers::brand_detail::<S>))
        .route(
            "/catalog/brand/:id/delete",
            get(brand_handlers::brand_delete_get),
        )
        .route(
            "/catalog/brand/:id/delete",
            post(brand_handlers::brand_delete_post),
        )
        .route(
            "/catalog/brand/:id/update",
            get(brand_handlers::brand_update_get),
        )
        .route(
            "/catalog/brand/:id/update",
            post(brand_handlers::brand_update_post),
        )
        // Bikes
        .route("/catalog/bikes", get(bike_handlers::bike_list::<S>))
        .route(
            "/catalog/bike/create",
            get(bike_handlers::bike_create_get::<S>),
        )
        .route(
            "/catalog/bike/create",
            post(bike_handlers::bike_create_post::<S>),
        )
        .route("/catalog/bike/:id", get(bike_handlers::bike_detail::<S>))
        .route(
            "/catalog/bike/:id/delete",
            get(bike_handlers::bike_delete_get),
        )
        .route(
            "/catalog/bike/:id/delete",
            post(bike_handlers::bike_delete_post),
        )
        .route(
            "/catalog/bike/:id/update",
            get(bike_handlers::bike_update_get),
        )
        .route(
            "/catalog/bike/:id/update",
            post(bike_handlers::bike_update_post),
        )
        // Bike instances
        .route(
            "/catalog/bikeinstances",
            get(instance_handlers::bike_instance_list::<S>),
        )
        .route(
            "/catalog/bikeinstance/create",
            get(instance_handlers::bike_instance_create_get::<S>),
        )
        .route(
            "/catalog/bikeinstance/create",
            post(instance_handlers::bike_instance_create_post::<S>),
        )
        .route(
            "/catalog/bikeinstance/:id",
            get(instance_handlers::bike_instance_detail::<S>),
        )
        .route(
            "/catalog/bikeinstance/:id/delete",
            get(instance_handlers::bike_instance_delete_get),
        )
        .route(
            "/catalog/bikeinstance/:id/delete",
            post(instance_handlers::bike_instance_delete_post),
        )
        .route(
            "/catalog/bikeinstance/:id/update",
            get(instance_handlers::bike_instance_update_get),
        )
        .route(
            "/catalog/bikeinstance/:id/update",
            post(instance_handlers::bike_instance_update_post),
        )
        // Static assets (stylesheet)
        .nest_service("/static", ServeDir::new("static"))
}
