//! Products API routes

use axum::Router;
use database::postgres::DatabaseConnection;
use domain_products::{PgProductRepository, ProductRepository, ProductService, handlers};

/// Service backed by the PostgreSQL repository
pub fn postgres_service(db: DatabaseConnection) -> ProductService<PgProductRepository> {
    ProductService::new(PgProductRepository::new(db))
}

/// Create products router
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    handlers::router(service)
}
