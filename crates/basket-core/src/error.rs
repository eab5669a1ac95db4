//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  basket-core errors (this file)                                        │
//! │  ├── CoreError        - Cart rule violations (typed taxonomy)          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  basket-store errors (separate crate)                                  │
//! │  └── StoreError       - Storage faults (always internal)               │
//! │                                                                         │
//! │  API errors (in app)                                                   │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ServiceError → ApiError → Client  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Boundaries match on [`ErrorKind`] rather than on individual variants, so a
//! new variant only has to pick its kind.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Error Kind
// =============================================================================

/// The caller-facing category of a [`CoreError`].
///
/// All three are expected, recoverable-by-caller conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed caller input (non-positive quantities).
    InvalidArgument,
    /// A referenced product does not exist in the catalog.
    NotFound,
    /// The operation is not permitted given current data.
    InvalidState,
}

// =============================================================================
// Core Error
// =============================================================================

/// Cart rule violations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input failed validation before any state was touched.
    #[error("{0}")]
    InvalidArgument(#[from] ValidationError),

    /// Product id does not resolve in the catalog.
    #[error("Product with ID {0} not found.")]
    ProductNotFound(ProductId),

    /// Checkout was requested for a cart with no line items.
    #[error("Cannot checkout with an empty cart.")]
    EmptyCart,

    /// A quantity or amount no longer fits in the fixed-point representation.
    #[error("{what} exceeds the supported range")]
    AmountOverflow { what: &'static str },
}

impl CoreError {
    /// Returns the taxonomy member this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidArgument(_) | CoreError::AmountOverflow { .. } => {
                ErrorKind::InvalidArgument
            }
            CoreError::ProductNotFound(_) => ErrorKind::NotFound,
            CoreError::EmptyCart => ErrorKind::InvalidState,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before business logic runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive.")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative.")]
    MustNotBeNegative { field: String },

    /// Duplicate value (e.g., duplicate product id in a catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
