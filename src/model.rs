//! Product entity and request payload types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A catalog product. `id` is assigned by storage on creation and never
/// reused; `availability` defaults to true for new rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    /// The Product ID
    #[schema(example = 1)]
    pub id: i32,
    /// The Product name
    #[schema(example = "Monitor HP 144Hz 2ms 4K")]
    pub name: String,
    /// The Product price
    #[schema(example = 300.0)]
    pub price: f64,
    /// The Product availability
    #[schema(example = true)]
    pub availability: bool,
}

/// Body for POST /api/products.
#[derive(Debug, ToSchema)]
pub struct ProductInput {
    #[schema(example = "Monitor Curvo ASUS 47 Pulgadas 4K")]
    pub name: String,
    #[schema(example = 599.0)]
    pub price: f64,
}

/// Body for PUT /api/products/{id}. All three fields replace the stored row.
#[derive(Debug, ToSchema)]
pub struct ProductUpdate {
    #[schema(example = "Monitor Curvo 49 Pulgadas")]
    pub name: String,
    #[schema(example = 399.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

impl ProductInput {
    /// Builds a typed payload from a body that already passed the create
    /// rules. Numeric strings are coerced the way a loosely-typed storage
    /// layer would cast them.
    pub fn from_body(body: &Value) -> Self {
        Self {
            name: text_field(body, "name"),
            price: number_field(body, "price"),
        }
    }
}

impl ProductUpdate {
    /// Builds a typed payload from a body that already passed the update
    /// rules.
    pub fn from_body(body: &Value) -> Self {
        Self {
            name: text_field(body, "name"),
            price: number_field(body, "price"),
            availability: bool_field(body, "availability"),
        }
    }
}

fn text_field(body: &Value, key: &str) -> String {
    match body.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn number_field(body: &Value, key: &str) -> f64 {
    match body.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn bool_field(body: &Value, key: &str) -> bool {
    match body.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(s.as_str(), "true" | "1"),
        _ => false,
    }
}
