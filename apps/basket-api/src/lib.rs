//! # Basket API Library
//!
//! HTTP surface of the in-memory cart service.
//!
//! ## Module Organization
//! ```text
//! basket_api/
//! ├── lib.rs          ◄─── You are here (app assembly, tracing setup)
//! ├── config.rs       ◄─── Environment configuration
//! ├── state.rs        ◄─── Shared handler state
//! ├── error.rs        ◄─── API error type and status mapping
//! ├── services/
//! │   ├── mod.rs      ◄─── ServiceError
//! │   └── cart_service.rs ◄─── Cart engine
//! └── routes/
//!     ├── mod.rs      ◄─── Router assembly
//!     ├── cart.rs     ◄─── Cart handlers
//!     └── product.rs  ◄─── Catalog handler
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;
use basket_core::CoreResult;
use tracing_subscriber::EnvFilter;

use config::ApiConfig;
use state::AppState;

/// Builds the application router with fresh state.
pub fn build_app(config: &ApiConfig) -> CoreResult<Router> {
    Ok(routes::router(AppState::new(config)?))
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies. Calling this
/// twice is harmless.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
