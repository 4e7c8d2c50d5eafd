//! # Cart Operations
//!
//! Manages the line items and discount selection of an in-progress sale.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     Cart Operations                              │
//! │                                                                  │
//! │  Frontend Action        Operation              State Change      │
//! │  ───────────────        ─────────              ────────────      │
//! │  Scan/Click Product ──► add_item() ──────────► items.push(item)  │
//! │  Change Quantity ─────► update_quantity() ───► items[i].qty = n  │
//! │  Click Remove ────────► remove_item() ───────► items.remove(i)   │
//! │  Pick Discount ───────► set_discount() ──────► discount = sel    │
//! │  Click Clear ─────────► clear() ─────────────► items.clear()     │
//! │  Render Summary ──────► totals() ────────────► (read only)       │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `totals()` recomputes from scratch on every call - the breakdown is
//! derived state, never cached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::discount::DiscountType;
use crate::error::{CoreError, CoreResult};
use crate::pricing::{compute_totals, CartItem, Totals};
use crate::types::Product;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// The shopping cart for one in-progress transaction.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product again
///   increases its quantity)
/// - Quantity is always > 0 (updating to 0 removes the item)
/// - At most [`MAX_CART_ITEMS`] unique items, [`MAX_ITEM_QUANTITY`] per line
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<CartItem>,

    /// Discount selection for the whole transaction.
    pub discount: DiscountType,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart with no discount.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            discount: DiscountType::None,
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the product price changes
    /// afterwards, the cart line keeps the price the customer saw.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_qty = item.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        self.items.push(CartItem {
            product_id: product.id.clone(),
            name: product.display_name(),
            price: product.price,
            quantity,
            discount: None,
        });
        Ok(())
    }

    /// Updates the quantity of an item in the cart.
    ///
    /// ## Behavior
    /// - Quantity 0 removes the item
    /// - Unknown product id is an error
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::ItemNotInCart(product_id.to_string())),
        }
    }

    /// Removes an item from the cart by product ID.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::ItemNotInCart(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Sets the discount selection for the transaction.
    pub fn set_discount(&mut self, discount: DiscountType) {
        self.discount = discount;
    }

    /// Clears all items and resets the discount.
    pub fn clear(&mut self) {
        self.items.clear();
        self.discount = DiscountType::None;
        self.created_at = Utc::now();
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Computes the current totals breakdown via the pricing engine.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.items, &self.discount)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
