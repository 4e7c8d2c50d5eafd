//! # Discount Tiers
//!
//! The discount selection applied to a POS transaction.
//!
//! ## Tier Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Tier        Rate    Basis                                      │
//! │  ─────────   ─────   ─────────────────────────────────────────  │
//! │  Senior      20%     Statutory (senior citizen discount)        │
//! │  PWD         20%     Statutory (persons with disability)        │
//! │  Employee    10%     Store policy                               │
//! │  Custom(v)   v/100   Cashier-entered percent, 0-100 by          │
//! │                      convention (see note below)                │
//! │  None        0%      Default                                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unknown tags behave as no discount
//! The original multi-branch conditional fell through to 0 for anything it
//! did not recognize. The enum is matched exhaustively, so "unknown" cannot
//! occur at the type level, but `None` keeps the explicit zero arm.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Discount applied to a whole transaction.
///
/// Selected once per sale (not per line item); every line item in the cart
/// receives the same rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "value")]
pub enum DiscountType {
    /// No discount (the default).
    #[default]
    None,
    /// Senior citizen discount (20%).
    Senior,
    /// Persons-with-disability discount (20%).
    Pwd,
    /// Employee discount (10%).
    Employee,
    /// Cashier-entered percent, e.g. `Custom(dec!(10))` = 10%.
    Custom(#[ts(as = "String")] Decimal),
}

impl DiscountType {
    /// Returns the discount rate in `[0, 1]`.
    ///
    /// ## Custom percent is NOT clamped above
    /// The engine uses the entered percent as-is: `Custom(150)` yields a
    /// rate of 1.5 and a negative total downstream. Rejecting out-of-range
    /// input is the input layer's job (see
    /// [`validate_custom_discount`](crate::validation::validate_custom_discount)).
    /// Non-positive percents yield a zero rate, so the rate is never
    /// negative.
    ///
    /// ## Example
    /// ```rust
    /// use botica_core::discount::DiscountType;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(DiscountType::Senior.rate(), dec!(0.20));
    /// assert_eq!(DiscountType::Custom(dec!(10)).rate(), dec!(0.10));
    /// assert_eq!(DiscountType::None.rate(), dec!(0));
    /// ```
    pub fn rate(&self) -> Decimal {
        match self {
            DiscountType::Senior | DiscountType::Pwd => dec!(0.20),
            DiscountType::Employee => dec!(0.10),
            DiscountType::Custom(percent) if *percent > Decimal::ZERO => {
                percent / Decimal::ONE_HUNDRED
            }
            DiscountType::Custom(_) | DiscountType::None => Decimal::ZERO,
        }
    }

    /// Checks whether this selection grants any discount at all.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, DiscountType::None)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
