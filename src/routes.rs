//! Router assembly: the /api/products mount, the /api greeting, and the
//! Swagger UI.

use crate::doc::ApiDoc;
use crate::handlers::product::{
    create_product, delete_product, get_product_by_id, list_products, update_availability,
    update_product,
};
use crate::state::AppState;
use axum::{
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

async fn api_index() -> Json<serde_json::Value> {
    Json(json!({ "msg": "Desde API" }))
}

/// Product routes relative to the /api/products mount.
pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product_by_id)
                .put(update_product)
                .patch(update_availability)
                .delete(delete_product),
        )
        .with_state(state)
}

/// Full application: product routes, the /api greeting, and /docs.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api/products", product_routes(state))
        .route("/api", get(api_index))
        .route("/api/", get(api_index))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
