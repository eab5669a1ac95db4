//! Shared application state handed to every handler.

use std::sync::Arc;

use basket_core::CoreResult;
use basket_store::{InMemoryCartStore, ProductCatalog};

use crate::config::ApiConfig;
use crate::services::CartService;

/// State cloned into each request.
///
/// Everything behind it is reference counted, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Cart engine over the process-wide store
    pub cart_service: CartService,

    /// User key for all cart routes
    pub user_key: Arc<str>,
}

impl AppState {
    /// Seeds the catalog and starts with an empty cart store.
    ///
    /// Fails if the seed catalog does not pass validation.
    pub fn new(config: &ApiConfig) -> CoreResult<Self> {
        let store = Arc::new(InMemoryCartStore::new());
        let catalog = Arc::new(ProductCatalog::seeded()?);

        Ok(AppState {
            cart_service: CartService::new(store, catalog),
            user_key: Arc::from(config.mock_user_id.as_str()),
        })
    }
}
