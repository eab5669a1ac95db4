//! # Cart Store
//!
//! Process-wide mapping from user key to cart.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    InMemoryCartStore                                    │
//! │                                                                         │
//! │  RwLock<HashMap<String, Cart>>                                          │
//! │                                                                         │
//! │  get_cart ──────── read lock (write lock only to create empty entry)    │
//! │  replace_cart ──── write lock, last writer wins                         │
//! │  clear_cart ────── write lock, entry removed                            │
//! │  with_cart_mut ─── write lock held for the whole mutation               │
//! │                                                                         │
//! │  NOTE: get → mutate → replace from outside can lose updates for the     │
//! │        same key. Engine operations use with_cart_mut instead.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is an ordinary value: construct one at process start and hand
//! it to whatever needs it. Tests build a fresh store each.

use std::collections::HashMap;
use std::sync::RwLock;

use basket_core::Cart;
use tracing::trace;

use crate::error::{StoreError, StoreResult};

const STORE_NAME: &str = "cart store";

/// Storage contract for carts, keyed by user.
///
/// Implementations must be safe to share between request threads.
pub trait CartStore: Send + Sync {
    /// Returns a copy of the user's cart, creating an empty one if needed.
    fn get_cart(&self, user_key: &str) -> StoreResult<Cart>;

    /// Overwrites the user's cart.
    fn replace_cart(&self, user_key: &str, cart: Cart) -> StoreResult<()>;

    /// Removes the user's cart entirely. A later `get_cart` starts empty.
    fn clear_cart(&self, user_key: &str) -> StoreResult<()>;

    /// Runs `f` against the stored cart with exclusive access.
    ///
    /// No other operation on the store interleaves with `f`. An entry that
    /// `f` empties, or that this call created and `f` left empty, is dropped.
    /// An entry that was already empty is left in place.
    fn with_cart_mut<F, R>(&self, user_key: &str, f: F) -> StoreResult<R>
    where
        F: FnOnce(&mut Cart) -> R;
}

/// [`CartStore`] backed by a lock-guarded `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<String, Cart>>,
}

impl InMemoryCartStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of carts currently held.
    pub fn len(&self) -> StoreResult<usize> {
        let carts = self.carts.read().map_err(StoreError::poisoned(STORE_NAME))?;
        Ok(carts.len())
    }

    /// Checks whether no carts are held.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl CartStore for InMemoryCartStore {
    fn get_cart(&self, user_key: &str) -> StoreResult<Cart> {
        {
            let carts = self.carts.read().map_err(StoreError::poisoned(STORE_NAME))?;
            if let Some(cart) = carts.get(user_key) {
                return Ok(cart.clone());
            }
        }

        trace!(user_key = %user_key, "creating empty cart");
        let mut carts = self.carts.write().map_err(StoreError::poisoned(STORE_NAME))?;
        Ok(carts.entry(user_key.to_string()).or_default().clone())
    }

    fn replace_cart(&self, user_key: &str, cart: Cart) -> StoreResult<()> {
        let mut carts = self.carts.write().map_err(StoreError::poisoned(STORE_NAME))?;
        carts.insert(user_key.to_string(), cart);
        Ok(())
    }

    fn clear_cart(&self, user_key: &str) -> StoreResult<()> {
        let mut carts = self.carts.write().map_err(StoreError::poisoned(STORE_NAME))?;
        if carts.remove(user_key).is_some() {
            trace!(user_key = %user_key, "cart cleared");
        }
        Ok(())
    }

    fn with_cart_mut<F, R>(&self, user_key: &str, f: F) -> StoreResult<R>
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut carts = self.carts.write().map_err(StoreError::poisoned(STORE_NAME))?;
        let created = !carts.contains_key(user_key);
        let cart = carts.entry(user_key.to_string()).or_default();
        let was_empty = cart.is_empty();
        let result = f(cart);

        // Drop only what this call emptied or created; a pre-existing empty
        // entry stays as it was.
        if cart.is_empty() && (created || !was_empty) {
            carts.remove(user_key);
        }

        Ok(result)
    }
}
