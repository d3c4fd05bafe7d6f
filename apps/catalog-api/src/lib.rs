//! Catalog API - product catalog REST service
//!
//! The binary wires configuration, PostgreSQL and the HTTP server together;
//! the library half exposes the router so it can be driven in tests.

pub mod api;
pub mod config;
pub mod openapi;

use axum::Router;
use core_config::{AppInfo, cors::CorsConfig};
use database::postgres::DatabaseConnection;
use domain_products::{ProductRepository, ProductService};
use std::io;

/// Full HTTP application: API routes plus docs, fallbacks and middleware.
pub fn build_router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    db: DatabaseConnection,
    app_info: AppInfo,
    cors: &CorsConfig,
) -> io::Result<Router> {
    let apis = api::routes(service, db, app_info);
    axum_helpers::create_router::<openapi::ApiDoc>(apis, cors)
}
