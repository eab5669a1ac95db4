//! # HTTP Routes
//!
//! ```text
//! routes/
//! ├── mod.rs      ◄─── You are here (router assembly, health)
//! ├── cart.rs     ◄─── /api/cart/*
//! └── product.rs  ◄─── /api/products
//! ```

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::state::AppState;

pub mod cart;
pub mod product;

/// Builds the full router with `state` attached to every route.
pub fn router(state: AppState) -> Router {
    let cart = Router::new()
        .route("/", get(cart::get_cart))
        .route("/add", post(cart::add_to_cart))
        .route("/remove/:product_id", post(cart::remove_from_cart))
        .route("/checkout", post(cart::checkout));

    let api = Router::new()
        .nest("/cart", cart)
        .route("/products", get(product::list_products));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(Extension(state))
}

/// Liveness probe.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
