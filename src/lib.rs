//! Product catalog REST API: validated CRUD over a single `products` table,
//! with generated OpenAPI docs.

pub mod doc;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod validation;

pub use error::AppError;
pub use model::{Product, ProductInput, ProductUpdate};
pub use routes::app;
pub use service::ProductService;
pub use state::AppState;
pub use store::{sync_schema, MemoryStore, PgStore, ProductStore};
