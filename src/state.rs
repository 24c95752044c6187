//! Shared application state for all routes.

use crate::store::ProductStore;
use std::sync::Arc;

/// Built once at bootstrap and cloned into each handler. The store handle
/// lives for the whole process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}
