//! # botica-core: Pure Business Logic for Botica POS
//!
//! This crate is the **heart** of Botica POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Botica POS Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                    Frontend (React)                           │ │
//! │  │    POS Cart UI ──► Discount Picker ──► Transaction Summary    │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │ HTTP/JSON                         │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │                    Backend Routes                             │ │
//! │  │    login, dashboard, sales, products (SQL lives here)         │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │               ★ botica-core (THIS CRATE) ★                    │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐ ┌──────────┐ ┌──────┐ ┌───────────┐ ┌─────────┐ │ │
//! │  │  │ pricing │ │ discount │ │ cart │ │ dashboard │ │validation│ │ │
//! │  │  │ Totals  │ │ DiscType │ │ Cart │ │ overview  │ │  rules  │ │ │
//! │  │  └─────────┘ └──────────┘ └──────┘ └───────────┘ └─────────┘ │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pricing`] - The pricing engine: subtotal, discount, VAT, totals
//! - [`discount`] - Discount tiers (Senior/PWD/Employee/Custom)
//! - [`cart`] - Cart operations (add/update/remove/clear)
//! - [`dashboard`] - Read-only aggregation for the manager dashboard
//! - [`types`] - Domain types (Product, Sale, etc.)
//! - [`validation`] - Input-layer validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic - same input,
//!    same output
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Decimal Money**: all monetary values are `rust_decimal::Decimal`,
//!    never floats, so the totals identities hold exactly
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use botica_core::discount::DiscountType;
//! use botica_core::pricing::{compute_totals, CartItem};
//! use rust_decimal_macros::dec;
//!
//! let items = vec![CartItem::new("paracetamol-500", dec!(100), 2)];
//! let totals = compute_totals(&items, &DiscountType::Senior);
//!
//! // 200 - 20% = 160, plus 12% VAT = 179.20
//! assert_eq!(totals.total, dec!(179.20));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod dashboard;
pub mod discount;
pub mod error;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use botica_core::Totals` instead of
// `use botica_core::pricing::Totals`

pub use cart::Cart;
pub use discount::DiscountType;
pub use error::{CoreError, CoreResult, ValidationError};
pub use pricing::{compute_totals, CartItem, Totals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Value-added tax rate applied to the post-discount subtotal.
///
/// ## Why a constant?
/// The 12% VAT rate is statutory (Philippine VAT) and identical for every
/// branch. If it ever changes it changes everywhere at once, so it is a
/// single compile-time constant rather than per-product configuration.
pub const VAT_RATE: Decimal = dec!(0.12);

/// Maximum unique line items allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps transactions reviewable at the counter.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
