//! Product CRUD handlers: each runs its declared rule set, gates on the
//! accumulated errors, then performs exactly one service call.

use crate::error::AppError;
use crate::model::{Product, ProductInput, ProductUpdate};
use crate::response;
use crate::service::ProductService;
use crate::state::AppState;
use crate::validation::{self, CREATE_RULES, UPDATE_RULES};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

/// Get a list of products.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "Successful response", body = [Product])
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::list(state.store.as_ref()).await?;
    Ok(response::ok(products))
}

/// Get a product by its unique ID.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "The ID of the product to retrieve")),
    responses(
        (status = 200, description = "Successful response", body = Product),
        (status = 400, description = "Bad Request - Invalid ID"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut errors = Vec::new();
    let Some(id) = validation::check_id(&raw_id, &mut errors) else {
        return Err(AppError::Validation(errors));
    };
    let product = ProductService::get(state.store.as_ref(), id).await?;
    Ok(response::ok(product))
}

/// Create a new product record.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Bad Request - invalid input data")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let errors = validation::check_body(CREATE_RULES, &body);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let input = ProductInput::from_body(&body);
    let product = ProductService::create(state.store.as_ref(), input).await?;
    Ok(response::created(product))
}

/// Update a product with user input, replacing all fields.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "The ID of the product to update")),
    request_body = ProductUpdate,
    responses(
        (status = 200, description = "Successful response", body = Product),
        (status = 400, description = "Bad Request - Invalid ID or invalid input data"),
        (status = 404, description = "Product Not Found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    // The id rule and the body rules accumulate into one error list.
    let mut errors = Vec::new();
    let id = validation::check_id(&raw_id, &mut errors);
    errors.extend(validation::check_body(UPDATE_RULES, &body));
    match (id, errors.is_empty()) {
        (Some(id), true) => {
            let input = ProductUpdate::from_body(&body);
            let product = ProductService::update(state.store.as_ref(), id, input).await?;
            Ok(response::ok(product))
        }
        _ => Err(AppError::Validation(errors)),
    }
}

/// Toggle a product's availability.
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "The ID of the product to update")),
    responses(
        (status = 200, description = "Successful response", body = Product),
        (status = 400, description = "Bad Request - Invalid ID"),
        (status = 404, description = "Product Not Found")
    )
)]
pub async fn update_availability(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut errors = Vec::new();
    let Some(id) = validation::check_id(&raw_id, &mut errors) else {
        return Err(AppError::Validation(errors));
    };
    let product = ProductService::toggle_availability(state.store.as_ref(), id).await?;
    Ok(response::ok(product))
}

/// Delete a product by its ID.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "The ID of the product to delete")),
    responses(
        (status = 200, description = "Successful response", body = String),
        (status = 400, description = "Bad Request - Invalid ID"),
        (status = 404, description = "Product Not Found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut errors = Vec::new();
    let Some(id) = validation::check_id(&raw_id, &mut errors) else {
        return Err(AppError::Validation(errors));
    };
    ProductService::delete(state.store.as_ref(), id).await?;
    Ok(response::ok("Producto Eliminado"))
}
