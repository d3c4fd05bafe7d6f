use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AuditEvent, AuditOutcome, ClientMeta, IdPath, QueryParams, ValidatedJson,
    errors::responses::{
        BadRequestQueryResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, ServiceUnavailableResponse, UnsupportedMediaTypeResponse,
    },
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::ProductResult;
use crate::models::{Category, NewProduct, Product, ProductQuery};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, NewProduct, Category),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestQueryResponse,
            UnsupportedMediaTypeResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List products, optionally filtered by one criterion
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    params(ProductQuery),
    responses(
        (status = 200, description = "Products ordered by id", body = Vec<Product>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(query): QueryParams<ProductQuery>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products(query).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body(content = NewProduct, content_type = "application/json"),
    responses(
        (status = 201, description = "Product created", body = Product,
            headers(("Location" = String, description = "Path of the new product"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 415, response = UnsupportedMediaTypeResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(input): ValidatedJson<NewProduct>,
) -> ProductResult<impl IntoResponse> {
    let client = ClientMeta::from_headers(&headers);
    let product = match service.create_product(input).await {
        Ok(product) => product,
        Err(e) => {
            AuditEvent::new("product.create", AuditOutcome::Failure)
                .with_client(client)
                .with_details(json!({ "error": e.to_string() }))
                .log();
            return Err(e);
        }
    };
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), product.id);

    AuditEvent::new("product.create", AuditOutcome::Success)
        .with_resource("product", product.id)
        .with_client(client)
        .with_details(json!({
            "name": product.name,
            "category": product.category,
        }))
        .log();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Replace every field of a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body(content = NewProduct, content_type = "application/json"),
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 415, response = UnsupportedMediaTypeResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<NewProduct>,
) -> ProductResult<Json<Product>> {
    let result = service.update_product(id, input).await;
    let outcome = match &result {
        Ok(_) => AuditOutcome::Success,
        Err(_) => AuditOutcome::Failure,
    };

    AuditEvent::new("product.update", outcome)
        .with_resource("product", id)
        .with_client(ClientMeta::from_headers(&headers))
        .log();

    Ok(Json(result?))
}

/// Delete a product
///
/// Always answers 204, whether or not the product existed.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Product deleted or already absent"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    headers: HeaderMap,
) -> ProductResult<impl IntoResponse> {
    let existed = service.delete_product(id).await?;

    AuditEvent::new("product.delete", AuditOutcome::Success)
        .with_resource("product", id)
        .with_client(ClientMeta::from_headers(&headers))
        .with_details(json!({ "existed": existed }))
        .log();

    Ok(StatusCode::NO_CONTENT)
}
