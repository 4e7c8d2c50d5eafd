//! # Domain Types
//!
//! Core domain types used throughout Botica POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                             │
//! │                                                                  │
//! │  ┌─────────────────┐    ┌─────────────────┐                      │
//! │  │    Product      │    │      Sale       │                      │
//! │  │  ─────────────  │    │  ─────────────  │                      │
//! │  │  id (UUID)      │    │  id (UUID)      │                      │
//! │  │  barcode        │    │  invoice_number │                      │
//! │  │  name / brand   │    │  totals fields  │                      │
//! │  │  price          │    │  payment info   │                      │
//! │  │  stock/critical │    │  branch         │                      │
//! │  └─────────────────┘    └─────────────────┘                      │
//! │                                                                  │
//! │  PaymentMethod: Cash │ Gcash │ Card                              │
//! │  PaymentStatus: Paid │ Voided                                    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, used for relations
//! - Business ID: (barcode, invoice_number) - human-readable

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product
// =============================================================================

/// A pharmacy product available for sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Barcode (EAN-13, UPC-A, etc.).
    pub barcode: Option<String>,

    /// Generic name shown on the receipt (e.g. "Paracetamol 500mg").
    pub name: String,

    /// Brand name, if branded (e.g. "Biogesic").
    pub brand_name: Option<String>,

    /// Product category (e.g. "Analgesic").
    pub category: Option<String>,

    /// Unit price.
    #[ts(as = "String")]
    pub price: Decimal,

    /// Stock level at or below which the product counts as low stock.
    pub critical: i64,

    /// Current stock level.
    pub stock: i64,

    /// Whether product is active (soft delete).
    pub is_active: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Display name: `"Name (Brand)"` when branded, plain name otherwise.
    pub fn display_name(&self) -> String {
        match &self.brand_name {
            Some(brand) => format!("{} ({})", self.name, brand),
            None => self.name.clone(),
        }
    }

    /// Checks whether the product is at or below its critical stock level.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.critical
    }
}

// =============================================================================
// Payment Method
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// GCash mobile wallet.
    Gcash,
    /// Card payment on external terminal.
    Card,
}

// =============================================================================
// Payment Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Sale has been paid and finalized.
    Paid,
    /// Sale was cancelled/refunded.
    Voided,
}

// =============================================================================
// Sale
// =============================================================================

/// A completed sale transaction.
///
/// Carries the frozen totals breakdown from the pricing engine; these
/// figures are snapshots, never recomputed after the sale closes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub invoice_number: String,
    pub branch: String,
    /// Registered customer, if any (walk-ins are `None`).
    pub customer_id: Option<String>,
    #[ts(as = "String")]
    pub subtotal: Decimal,
    #[ts(as = "String")]
    pub discount_amount: Decimal,
    #[ts(as = "String")]
    pub vat: Decimal,
    #[ts(as = "String")]
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(name: &str, brand: Option<&str>) -> Product {
        Product {
            id: "p-1".to_string(),
            barcode: None,
            name: name.to_string(),
            brand_name: brand.map(str::to_string),
            category: None,
            price: dec!(10),
            critical: 10,
            stock: 50,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn display_name_includes_brand_when_present() {
        assert_eq!(
            product("Paracetamol 500mg", Some("Biogesic")).display_name(),
            "Paracetamol 500mg (Biogesic)"
        );
        assert_eq!(product("Lagundi Syrup", None).display_name(), "Lagundi Syrup");
    }

    #[test]
    fn low_stock_is_at_or_below_critical() {
        let mut p = product("Paracetamol 500mg", None);
        assert!(!p.is_low_stock()); // 50 > 10

        p.stock = 10;
        assert!(p.is_low_stock()); // boundary counts

        p.stock = 3;
        assert!(p.is_low_stock());
    }
}
