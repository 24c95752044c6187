//! Product persistence: the `ProductStore` seam, the PostgreSQL
//! implementation, and an in-memory implementation for tests and DB-less
//! runs.

use crate::error::AppError;
use crate::model::Product;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::RwLock;

/// Row CRUD against the products table. One call maps to one statement;
/// read-then-write sequencing is the service layer's job.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, AppError>;
    async fn fetch(&self, id: i32) -> Result<Option<Product>, AppError>;
    /// Inserts a row; storage assigns the id and availability defaults true.
    async fn insert(&self, name: &str, price: f64) -> Result<Product, AppError>;
    /// Replaces name, price, and availability wholesale. None when no row
    /// has the id.
    async fn update(
        &self,
        id: i32,
        name: &str,
        price: f64,
        availability: bool,
    ) -> Result<Option<Product>, AppError>;
    /// Removes the row. Ids are never reused afterwards.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

/// Create the products table if missing. Idempotent; called once at
/// bootstrap. `price > 0` is enforced by validation, not by the table.
pub async fn sync_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id           SERIAL PRIMARY KEY,
            name         TEXT NOT NULL,
            price        DOUBLE PRECISION NOT NULL,
            availability BOOLEAN NOT NULL DEFAULT TRUE
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// PostgreSQL-backed store over a shared connection pool.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgStore {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, availability FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn fetch(&self, id: i32) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, availability FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, name: &str, price: f64) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price) VALUES ($1, $2) \
             RETURNING id, name, price, availability",
        )
        .bind(name)
        .bind(price)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        name: &str,
        price: f64,
        availability: bool,
    ) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $2, price = $3, availability = $4 WHERE id = $1 \
             RETURNING id, name, price, availability",
        )
        .bind(id)
        .bind(name)
        .bind(price)
        .bind(availability)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// In-memory store with the same id semantics as the table: ids come from a
/// monotonically increasing counter and are never handed out twice.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    rows: Vec<Product>,
    next_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Ok(inner.rows.clone())
    }

    async fn fetch(&self, id: i32) -> Result<Option<Product>, AppError> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Ok(inner.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, name: &str, price: f64) -> Result<Product, AppError> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.next_id += 1;
        let product = Product {
            id: inner.next_id,
            name: name.to_string(),
            price,
            availability: true,
        };
        inner.rows.push(product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        id: i32,
        name: &str,
        price: f64,
        availability: bool,
    ) -> Result<Option<Product>, AppError> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let Some(row) = inner.rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        row.name = name.to_string();
        row.price = price;
        row.availability = availability;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let before = inner.rows.len();
        inner.rows.retain(|p| p.id != id);
        Ok(inner.rows.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_sequential_ids_and_defaults_availability() {
        let store = MemoryStore::new();
        let a = store.insert("Monitor", 300.0).await.unwrap();
        let b = store.insert("Teclado", 50.0).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(a.availability);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let a = store.insert("Monitor", 300.0).await.unwrap();
        assert!(store.delete(a.id).await.unwrap());
        let b = store.insert("Teclado", 50.0).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.fetch(a.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_replaces_all_fields_and_misses_unknown_ids() {
        let store = MemoryStore::new();
        let a = store.insert("Monitor", 300.0).await.unwrap();
        let updated = store
            .update(a.id, "Monitor Curvo", 499.0, false)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Monitor Curvo");
        assert_eq!(updated.price, 499.0);
        assert!(!updated.availability);
        assert!(store.update(999, "x", 1.0, true).await.unwrap().is_none());
    }
}
