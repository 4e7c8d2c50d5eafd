//! # Dashboard Aggregation
//!
//! Read-only aggregation for the manager dashboard: the overview cards,
//! the recent-transactions panel, and the low-stock panel.
//!
//! All functions here are pure folds over in-memory slices. The backend
//! fetches the rows; this module owns the aggregation rules so the figures
//! are identical wherever they are rendered.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;

use crate::types::{PaymentMethod, PaymentStatus, Product, Sale};

/// How many rows the recent-transactions and low-stock panels show.
pub const PANEL_LIMIT: usize = 5;

// =============================================================================
// Overview
// =============================================================================

/// The four overview cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    /// Sum of sale totals created today.
    #[ts(as = "String")]
    pub today_sales: Decimal,
    /// Count of active products.
    pub total_products: usize,
    /// Count of all sales ever recorded.
    pub total_orders: usize,
    /// Count of distinct registered customers that have purchased
    /// (walk-ins without a customer id are not counted).
    pub total_customers: usize,
}

/// Computes the overview cards.
///
/// `today` is passed in by the caller so the day boundary is decided at
/// the edge (the backend applies the branch timezone before calling).
pub fn overview(sales: &[Sale], products: &[Product], today: NaiveDate) -> DashboardOverview {
    let today_sales = sales
        .iter()
        .filter(|s| s.created_at.date_naive() == today)
        .fold(Decimal::ZERO, |sum, s| sum + s.total);

    let total_customers = sales
        .iter()
        .filter_map(|s| s.customer_id.as_deref())
        .collect::<HashSet<_>>()
        .len();

    DashboardOverview {
        today_sales,
        total_products: products.iter().filter(|p| p.is_active).count(),
        total_orders: sales.len(),
        total_customers,
    }
}

// =============================================================================
// Recent Transactions
// =============================================================================

/// One row of the recent-transactions panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub transaction_id: String,
    pub invoice_number: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub branch_name: String,
}

/// The newest `limit` transactions, most recent first.
pub fn recent_transactions(sales: &[Sale], limit: usize) -> Vec<TransactionSummary> {
    let mut sorted: Vec<&Sale> = sales.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    sorted
        .into_iter()
        .take(limit)
        .map(|s| TransactionSummary {
            transaction_id: s.id.clone(),
            invoice_number: s.invoice_number.clone(),
            created_at: s.created_at,
            total_amount: s.total,
            payment_method: s.payment_method,
            payment_status: s.payment_status,
            branch_name: s.branch.clone(),
        })
        .collect()
}

// =============================================================================
// Low Stock
// =============================================================================

/// One row of the low-stock panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItem {
    pub id: String,
    /// Display name with brand, e.g. "Paracetamol 500mg (Biogesic)".
    pub name: String,
    pub barcode: Option<String>,
    pub category: Option<String>,
    pub critical: i64,
    pub stock: i64,
}

/// Active products at or below their critical stock level, lowest stock
/// first, ties broken by name.
pub fn low_stock_items(products: &[Product], limit: usize) -> Vec<LowStockItem> {
    let mut low: Vec<&Product> = products
        .iter()
        .filter(|p| p.is_active && p.is_low_stock())
        .collect();

    low.sort_by(|a, b| a.stock.cmp(&b.stock).then_with(|| a.name.cmp(&b.name)));

    low.into_iter()
        .take(limit)
        .map(|p| LowStockItem {
            id: p.id.clone(),
            name: p.display_name(),
            barcode: p.barcode.clone(),
            category: p.category.clone(),
            critical: p.critical,
            stock: p.stock,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn sale(id: &str, total: Decimal, day: u32, customer: Option<&str>) -> Sale {
        Sale {
            id: id.to_string(),
            invoice_number: format!("INV-{}", id),
            branch: "Main".to_string(),
            customer_id: customer.map(str::to_string),
            subtotal: total,
            discount_amount: Decimal::ZERO,
            vat: Decimal::ZERO,
            total,
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Paid,
            created_at: Utc.with_ymd_and_hms(2024, 3, day, 10, 0, 0).unwrap(),
        }
    }

    fn product(id: &str, name: &str, stock: i64, critical: i64, active: bool) -> Product {
        Product {
            id: id.to_string(),
            barcode: None,
            name: name.to_string(),
            brand_name: None,
            category: None,
            price: dec!(10),
            critical,
            stock,
            is_active: active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn overview_counts() {
        let sales = vec![
            sale("1", dec!(100), 15, Some("c1")),
            sale("2", dec!(50), 15, Some("c1")), // same customer
            sale("3", dec!(75), 14, Some("c2")), // yesterday
            sale("4", dec!(25), 15, None),       // walk-in
        ];
        let products = vec![
            product("p1", "A", 50, 10, true),
            product("p2", "B", 50, 10, false), // inactive, not counted
        ];

        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let o = overview(&sales, &products, today);

        assert_eq!(o.today_sales, dec!(175)); // 100 + 50 + 25
        assert_eq!(o.total_products, 1);
        assert_eq!(o.total_orders, 4);
        assert_eq!(o.total_customers, 2); // c1, c2
    }

    #[test]
    fn overview_of_nothing_is_zero() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let o = overview(&[], &[], today);
        assert_eq!(o.today_sales, Decimal::ZERO);
        assert_eq!(o.total_orders, 0);
        assert_eq!(o.total_customers, 0);
    }

    #[test]
    fn recent_transactions_sorted_and_limited() {
        let sales = vec![
            sale("old", dec!(1), 10, None),
            sale("newest", dec!(2), 20, None),
            sale("mid", dec!(3), 15, None),
        ];

        let recent = recent_transactions(&sales, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].transaction_id, "newest");
        assert_eq!(recent[1].transaction_id, "mid");
        assert_eq!(recent[0].invoice_number, "INV-newest");
    }

    #[test]
    fn low_stock_filters_and_sorts() {
        let products = vec![
            product("p1", "Amoxicillin", 3, 10, true),
            product("p2", "Biogesic", 1, 10, true),
            product("p3", "Cetirizine", 50, 10, true), // healthy stock
            product("p4", "Dextromethorphan", 1, 10, false), // inactive
            product("p5", "Ascof", 1, 10, true),       // ties with p2 on stock
        ];

        let low = low_stock_items(&products, PANEL_LIMIT);
        let names: Vec<&str> = low.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Ascof", "Biogesic", "Amoxicillin"]);
    }

    #[test]
    fn low_stock_boundary_is_inclusive() {
        let products = vec![product("p1", "A", 10, 10, true)];
        assert_eq!(low_stock_items(&products, PANEL_LIMIT).len(), 1);
    }
}
