//! # basket-store: In-Memory State for Basket
//!
//! Owns every piece of mutable state in the service. Nothing here is
//! persisted; all carts are lost on restart.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Basket Data Flow                                 │
//! │                                                                         │
//! │  CartService (basket-api)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   basket-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────┐          ┌─────────────────────────┐    │   │
//! │  │   │  ProductCatalog  │          │  CartStore (trait)      │    │   │
//! │  │   │  (catalog.rs)    │          │  InMemoryCartStore      │    │   │
//! │  │   │                  │          │  (cart_store.rs)        │    │   │
//! │  │   │  read-only Vec   │          │  RwLock<HashMap<..>>    │    │   │
//! │  │   └──────────────────┘          └─────────────────────────┘    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Seeded, read-only product catalog
//! - [`cart_store`] - Cart storage contract and its in-memory implementation
//! - [`error`] - Storage error types

pub mod cart_store;
pub mod catalog;
pub mod error;

pub use cart_store::{CartStore, InMemoryCartStore};
pub use catalog::{seed_products, ProductCatalog};
pub use error::{StoreError, StoreResult};
