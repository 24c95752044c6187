//! Generated OpenAPI document, served with Swagger UI at /docs.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST API Rust / Axum",
        version = "1.0.0",
        description = "API Docs for Products"
    ),
    paths(
        crate::handlers::product::list_products,
        crate::handlers::product::get_product_by_id,
        crate::handlers::product::create_product,
        crate::handlers::product::update_product,
        crate::handlers::product::update_availability,
        crate::handlers::product::delete_product,
    ),
    components(schemas(
        crate::model::Product,
        crate::model::ProductInput,
        crate::model::ProductUpdate,
    )),
    tags(
        (name = "Products", description = "API operations related to products")
    )
)]
pub struct ApiDoc;
