//! ProductService: one persistence operation per invocation, strictly after
//! validation. Not-found is a normal control-flow outcome here, not a fault.

use crate::error::AppError;
use crate::model::{Product, ProductInput, ProductUpdate};
use crate::store::ProductStore;

// The not-found wording differs between the lookup and mutation paths.
// Clients match on the exact strings, so both are kept verbatim.
const NOT_FOUND_GET: &str = "Producto no encontrado";
const NOT_FOUND_MUTATE: &str = "Producto No Encontrado";

pub struct ProductService;

impl ProductService {
    pub async fn list(store: &dyn ProductStore) -> Result<Vec<Product>, AppError> {
        store.list().await
    }

    pub async fn get(store: &dyn ProductStore, id: i32) -> Result<Product, AppError> {
        store
            .fetch(id)
            .await?
            .ok_or(AppError::NotFound(NOT_FOUND_GET))
    }

    /// Creates a row; storage assigns the id and availability defaults true.
    pub async fn create(
        store: &dyn ProductStore,
        input: ProductInput,
    ) -> Result<Product, AppError> {
        store.insert(&input.name, input.price).await
    }

    /// Replaces name, price, and availability wholesale.
    pub async fn update(
        store: &dyn ProductStore,
        id: i32,
        input: ProductUpdate,
    ) -> Result<Product, AppError> {
        store
            .fetch(id)
            .await?
            .ok_or(AppError::NotFound(NOT_FOUND_MUTATE))?;
        store
            .update(id, &input.name, input.price, input.availability)
            .await?
            .ok_or(AppError::NotFound(NOT_FOUND_MUTATE))
    }

    /// Flips availability to the negation of its stored value.
    pub async fn toggle_availability(
        store: &dyn ProductStore,
        id: i32,
    ) -> Result<Product, AppError> {
        let current = store
            .fetch(id)
            .await?
            .ok_or(AppError::NotFound(NOT_FOUND_MUTATE))?;
        store
            .update(id, &current.name, current.price, !current.availability)
            .await?
            .ok_or(AppError::NotFound(NOT_FOUND_MUTATE))
    }

    pub async fn delete(store: &dyn ProductStore, id: i32) -> Result<(), AppError> {
        store
            .fetch(id)
            .await?
            .ok_or(AppError::NotFound(NOT_FOUND_MUTATE))?;
        store.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn get_unknown_id_uses_the_lookup_message() {
        let store = MemoryStore::new();
        let err = ProductService::get(&store, 9999).await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Producto no encontrado"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn mutations_on_unknown_ids_use_the_mutation_message() {
        let store = MemoryStore::new();
        let err = ProductService::toggle_availability(&store, 9999)
            .await
            .unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Producto No Encontrado"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn toggling_twice_restores_availability() {
        let store = MemoryStore::new();
        let created = ProductService::create(
            &store,
            ProductInput {
                name: "Monitor".into(),
                price: 300.0,
            },
        )
        .await
        .unwrap();
        assert!(created.availability);

        let once = ProductService::toggle_availability(&store, created.id)
            .await
            .unwrap();
        assert!(!once.availability);
        let twice = ProductService::toggle_availability(&store, created.id)
            .await
            .unwrap();
        assert_eq!(twice.availability, created.availability);
    }
}
