//! # Pricing Engine
//!
//! Computes the totals breakdown for a POS transaction: subtotal, per-item
//! discount, VAT, and grand total.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Totals Pipeline                               │
//! │                                                                     │
//! │  CartItem[] ──► subtotal = Σ price × qty                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  per-item discount = price × qty × rate   (computed ONCE per item)  │
//! │       │                                                             │
//! │       ├──► annotated onto each returned item                        │
//! │       └──► discount_amount = Σ per-item discounts                   │
//! │                     │                                               │
//! │                     ▼                                               │
//! │  discounted_subtotal = subtotal − discount_amount                   │
//! │                     │                                               │
//! │                     ▼                                               │
//! │  vat = discounted_subtotal × 12%                                    │
//! │                     │                                               │
//! │                     ▼                                               │
//! │  total = discounted_subtotal + vat                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `discounted_subtotal + vat == total` exactly (the fields are derived
//!   in sequence, never recomputed independently)
//! - `discount_amount` equals the sum of the per-item `discount` fields on
//!   the returned items, because each item's discount is computed once and
//!   reused for both figures (no second arithmetic path to diverge)
//! - the engine never mutates the caller's items; it returns augmented
//!   copies
//!
//! ## What the engine does NOT do
//! No validation (negative prices, zero quantities, and out-of-range custom
//! percents pass straight through), no currency formatting, no persistence.
//! The input layer validates ([`crate::validation`]); the render layer
//! formats.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::discount::DiscountType;
use crate::VAT_RATE;

// =============================================================================
// Cart Item
// =============================================================================

/// One line item of a transaction: a product identity with its frozen unit
/// price and quantity.
///
/// `discount` is `None` on input and filled in by [`compute_totals`] on the
/// returned copies, mirroring the shape the frontend renders in the
/// transaction summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID (UUID) or barcode - opaque to the pricing engine.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    #[ts(as = "String")]
    pub price: Decimal,

    /// Quantity in cart.
    pub quantity: i64,

    /// Peso discount for this line, filled in by the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>", optional)]
    pub discount: Option<Decimal>,
}

impl CartItem {
    /// Creates a line item with no discount annotation yet.
    pub fn new(product_id: impl Into<String>, price: Decimal, quantity: i64) -> Self {
        CartItem {
            product_id: product_id.into(),
            name: String::new(),
            price,
            quantity,
            discount: None,
        }
    }

    /// Line total before any discount (`price × quantity`).
    #[inline]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

// =============================================================================
// Totals
// =============================================================================

/// The totals breakdown produced by [`compute_totals`].
///
/// Derived, never stored: recomputed from scratch on every cart change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of `price × quantity` over all items, before any discount.
    #[ts(as = "String")]
    pub subtotal: Decimal,

    /// Sum of the per-item discounts.
    #[ts(as = "String")]
    pub discount_amount: Decimal,

    /// `subtotal − discount_amount`.
    #[ts(as = "String")]
    pub discounted_subtotal: Decimal,

    /// `discounted_subtotal × VAT_RATE`.
    #[ts(as = "String")]
    pub vat: Decimal,

    /// `discounted_subtotal + vat`.
    #[ts(as = "String")]
    pub total: Decimal,

    /// The caller's items, each annotated with its computed discount.
    pub items: Vec<CartItem>,
}

// =============================================================================
// Engine Operations
// =============================================================================

/// Peso discount for a single line: `price × quantity × rate`.
///
/// `DiscountType::None` returns zero unconditionally, before any rate
/// arithmetic - the explicit default-zero arm of the original dispatch.
pub fn item_discount(price: Decimal, quantity: i64, selection: &DiscountType) -> Decimal {
    if selection.is_none() {
        return Decimal::ZERO;
    }

    price * Decimal::from(quantity) * selection.rate()
}

/// Subtotal before any discounts: `Σ price × quantity`.
///
/// Order-independent; an empty cart yields zero.
pub fn subtotal(items: &[CartItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |sum, item| sum + item.line_total())
}

/// Total peso discount across all items for the given selection.
pub fn total_discount(items: &[CartItem], selection: &DiscountType) -> Decimal {
    items.iter().fold(Decimal::ZERO, |sum, item| {
        sum + item_discount(item.price, item.quantity, selection)
    })
}

/// VAT on the post-discount subtotal: `discounted_subtotal × 12%`.
pub fn vat(discounted_subtotal: Decimal) -> Decimal {
    discounted_subtotal * VAT_RATE
}

/// Computes the full totals breakdown for a cart and discount selection.
///
/// Each item's discount is computed exactly once, then used for both the
/// item annotation and the aggregate sum. This guarantees the displayed
/// per-item discounts always add up to `discount_amount`.
///
/// ## Example
/// ```rust
/// use botica_core::discount::DiscountType;
/// use botica_core::pricing::{compute_totals, CartItem};
/// use rust_decimal_macros::dec;
///
/// let items = vec![
///     CartItem::new("biogesic-500", dec!(100), 2),
///     CartItem::new("neozep-forte", dec!(50), 1),
/// ];
///
/// let totals = compute_totals(&items, &DiscountType::Senior);
/// assert_eq!(totals.subtotal, dec!(250));
/// assert_eq!(totals.discount_amount, dec!(50));
/// assert_eq!(totals.vat, dec!(24));
/// assert_eq!(totals.total, dec!(224));
/// ```
pub fn compute_totals(items: &[CartItem], selection: &DiscountType) -> Totals {
    let mut subtotal = Decimal::ZERO;
    let mut discount_amount = Decimal::ZERO;

    let items: Vec<CartItem> = items
        .iter()
        .map(|item| {
            let line_discount = item_discount(item.price, item.quantity, selection);
            subtotal += item.line_total();
            discount_amount += line_discount;

            let mut annotated = item.clone();
            annotated.discount = Some(line_discount);
            annotated
        })
        .collect();

    let discounted_subtotal = subtotal - discount_amount;
    let vat = vat(discounted_subtotal);
    let total = discounted_subtotal + vat;

    Totals {
        subtotal,
        discount_amount,
        discounted_subtotal,
        vat,
        total,
        items,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
