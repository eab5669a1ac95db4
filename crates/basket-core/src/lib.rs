//! # basket-core: Pure Business Logic for Basket
//!
//! This crate holds the cart rules of the service as pure functions and
//! plain data types, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Basket Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    basket-api (axum)                            │   │
//! │  │    POST /api/cart/add, /remove/{id}, /checkout, GET /api/cart   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartService                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │ LineItem  │  │  (cents)  │  │  Summary  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                basket-store (in-memory state)                   │   │
//! │  │              ProductCatalog, CartStore                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLineItem, CheckoutSummary)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart mutation rules (add, remove, checkout)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::{Cart, Money, Product};
//!
//! let laptop = Product::new(1, "Laptop", Money::from_major_minor(1200, 0));
//! let mut cart = Cart::new();
//!
//! cart.add_item(&laptop, 2).unwrap();
//! assert_eq!(cart.total().unwrap().cents(), 240_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, RemoveOutcome};
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// User key used while identity resolution is not wired in.
///
/// Every cart route operates on this key. A production binding replaces it
/// with the authenticated user's id.
pub const MOCK_USER_ID: &str = "testUser123";

/// Confirmation message attached to every successful checkout.
pub const CHECKOUT_CONFIRMATION: &str = "Payment Successful. Order processed.";
