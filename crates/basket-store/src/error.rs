//! # Store Error Types
//!
//! Error types for cart storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::sync::PoisonError (a writer panicked mid-update)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Names the store that failed                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in API app) ← Generic 500, details only in logs             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::PoisonError;

use thiserror::Error;

/// Storage faults.
///
/// None of these are caused by caller input; they are always surfaced as
/// an internal error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A thread panicked while holding the store lock.
    #[error("{store} lock poisoned")]
    LockPoisoned { store: &'static str },
}

impl StoreError {
    pub(crate) fn poisoned<T>(store: &'static str) -> impl FnOnce(PoisonError<T>) -> Self {
        move |_| StoreError::LockPoisoned { store }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
