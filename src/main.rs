//! Server bootstrap: opens the database pool, syncs the schema, and mounts
//! the router. A failed database connection is logged and the server starts
//! anyway; requests that need storage then fail downstream.

use product_api::{app, sync_schema, AppState, MemoryStore, PgStore, ProductStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_api=info,tower_http=info")),
        )
        .init();

    let store = build_store().await;
    let state = AppState { store };

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(4000);
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("REST API en http://localhost:{}", port);
    axum::serve(listener, app(state)).await?;
    Ok(())
}

/// Postgres when DATABASE_URL is set, in-memory otherwise. The pool is
/// created lazily so an unreachable database does not abort startup.
async fn build_store() -> Arc<dyn ProductStore> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        tracing::warn!("DATABASE_URL no definida, usando almacenamiento en memoria");
        return Arc::new(MemoryStore::new());
    };
    match sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&database_url)
    {
        Ok(pool) => {
            match sync_schema(&pool).await {
                Ok(()) => tracing::info!("Conexión exitosa a la BD"),
                Err(_) => tracing::error!("Hubo un error al conectar a la BD"),
            }
            Arc::new(PgStore::new(pool))
        }
        Err(_) => {
            tracing::error!("Hubo un error al conectar a la BD");
            Arc::new(MemoryStore::new())
        }
    }
}
