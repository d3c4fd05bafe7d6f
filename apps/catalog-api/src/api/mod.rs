//! API routes module

pub mod health;
pub mod index;
pub mod products;

use axum::{Router, routing::get};
use axum_helpers::health_router;
use core_config::AppInfo;
use database::postgres::DatabaseConnection;
use domain_products::{ProductRepository, ProductService};

/// Create all API routes
pub fn routes<R: ProductRepository + 'static>(
    service: ProductService<R>,
    db: DatabaseConnection,
    app_info: AppInfo,
) -> Router {
    Router::new()
        .route("/", get(index::index))
        .nest("/products", products::router(service))
        .merge(health_router(app_info))
        .merge(health::router(db))
}
