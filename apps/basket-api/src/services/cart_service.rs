//! # Cart Service
//!
//! The cart engine: applies the cart rules from `basket-core` to carts held
//! in a [`CartStore`], consulting the [`ProductCatalog`].
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler (user key resolved)                                       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  CartService::add_to_cart(user_key, product_id, quantity)               │
//! │        │                                                                │
//! │        ├── 1. validate quantity ─────────────► InvalidArgument          │
//! │        ├── 2. catalog lookup ────────────────► NotFound                 │
//! │        ├── 3. store.with_cart_mut(...)         (exclusive access)       │
//! │        │        └── Cart::add_item                                      │
//! │        └── 4. return copy of updated cart                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service never keeps a reference to a cart past a single call; every
//! operation returns an owned copy.

use std::sync::Arc;

use basket_core::validation::{validate_quantity, validate_quantity_to_remove};
use basket_core::{Cart, CheckoutSummary, CoreError, ProductId, RemoveOutcome};
use basket_store::{CartStore, InMemoryCartStore, ProductCatalog};
use tracing::{debug, info};

use super::{ServiceError, ServiceResult};

/// Units removed when the caller does not say how many.
pub const DEFAULT_REMOVE_QUANTITY: i64 = 1;

/// Cart operations for any user key.
#[derive(Debug)]
pub struct CartService<S = InMemoryCartStore> {
    store: Arc<S>,
    catalog: Arc<ProductCatalog>,
}

impl<S> Clone for CartService<S> {
    fn clone(&self) -> Self {
        CartService {
            store: Arc::clone(&self.store),
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<S: CartStore> CartService<S> {
    /// Creates a service over an existing store and catalog.
    pub fn new(store: Arc<S>, catalog: Arc<ProductCatalog>) -> Self {
        CartService { store, catalog }
    }

    /// The catalog this service prices items from.
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Adds `quantity` units of a catalog product to the user's cart.
    ///
    /// ## Errors
    /// - `InvalidArgument` when `quantity <= 0`
    /// - `NotFound` when `product_id` is not in the catalog
    ///
    /// In both cases the cart is left unchanged.
    pub fn add_to_cart(
        &self,
        user_key: &str,
        product_id: ProductId,
        quantity: i64,
    ) -> ServiceResult<Cart> {
        debug!(user_key = %user_key, product_id, quantity, "add_to_cart");

        validate_quantity(quantity).map_err(CoreError::from)?;
        let product = self
            .catalog
            .get(product_id)
            .ok_or(CoreError::ProductNotFound(product_id))?;

        let cart = self.store.with_cart_mut(user_key, |cart| {
            cart.add_item(product, quantity)?;
            Ok::<Cart, CoreError>(cart.clone())
        })??;

        Ok(cart)
    }

    /// Removes up to `quantity_to_remove` units of a product from the cart.
    ///
    /// A product that is not in the cart is ignored and the unchanged cart is
    /// returned. Removing at least the line's quantity drops the line.
    pub fn remove_from_cart(
        &self,
        user_key: &str,
        product_id: ProductId,
        quantity_to_remove: i64,
    ) -> ServiceResult<Cart> {
        debug!(user_key = %user_key, product_id, quantity_to_remove, "remove_from_cart");

        validate_quantity_to_remove(quantity_to_remove).map_err(CoreError::from)?;

        let (outcome, cart) = self.store.with_cart_mut(user_key, |cart| {
            let outcome = cart.remove_item(product_id, quantity_to_remove)?;
            Ok::<(RemoveOutcome, Cart), CoreError>((outcome, cart.clone()))
        })??;

        debug!(user_key = %user_key, product_id, ?outcome, "remove_from_cart applied");
        Ok(cart)
    }

    /// Returns the user's cart, empty if they have none yet.
    pub fn get_cart(&self, user_key: &str) -> ServiceResult<Cart> {
        debug!(user_key = %user_key, "get_cart");
        Ok(self.store.get_cart(user_key)?)
    }

    /// Totals and clears the user's cart.
    ///
    /// ## Errors
    /// - `InvalidState` when the cart is empty; storage is not touched
    pub fn checkout(&self, user_key: &str) -> ServiceResult<CheckoutSummary> {
        debug!(user_key = %user_key, "checkout");

        let summary = self.store.with_cart_mut(user_key, Cart::checkout)??;

        info!(
            user_key = %user_key,
            order_id = %summary.order_id,
            items = summary.items_purchased.len(),
            total = %summary.total_cost,
            "checkout complete"
        );
        Ok(summary)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
