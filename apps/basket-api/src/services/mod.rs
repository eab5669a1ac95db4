//! # Services
//!
//! Business operations exposed by the API, independent of HTTP.
//!
//! ```text
//! services/
//! ├── mod.rs           ◄─── You are here (ServiceError)
//! └── cart_service.rs  ◄─── Add, remove, view, checkout
//! ```

pub mod cart_service;

pub use cart_service::{CartService, DEFAULT_REMOVE_QUANTITY};

use basket_core::CoreError;
use basket_store::StoreError;
use thiserror::Error;

/// Failure of a service operation.
///
/// `Core` carries the caller-recoverable taxonomy; `Store` is always an
/// internal fault.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
