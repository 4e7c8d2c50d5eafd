//! # Error Types
//!
//! Domain-specific error types for botica-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         Error Types                              │
//! │                                                                  │
//! │  botica-core errors (this file)                                  │
//! │  ├── CoreError        - Cart/domain rule violations              │
//! │  └── ValidationError  - Input validation failures                │
//! │                                                                  │
//! │  botica-auth errors (separate crate)                             │
//! │  └── AuthError        - Login/token failures                     │
//! │                                                                  │
//! │  Flow: ValidationError → CoreError → API layer → Frontend        │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note the pricing engine itself raises nothing: malformed input degrades
//! silently there. These errors belong to the cart operations and the
//! input-layer validators around the engine.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and domain rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cart has reached the maximum number of unique line items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity would exceed the maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Operation referenced a product that is not in the cart.
    #[error("Product {0} not in cart")]
    ItemNotInCart(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the input-layer validators in [`crate::validation`] before
/// data reaches the pricing engine.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., bad barcode characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
