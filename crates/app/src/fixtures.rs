//! Bundled JSON fixtures.
//!
//! Stand-ins for listing endpoints the backend does not serve yet (order
//! history, non-ingredient inventory, products, staff). The shapes match
//! what those endpoints are expected to return, so swapping a fixture for
//! a live fetch is a one-line change in the owning screen.

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Completed order as the cashier screen records it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: i64,
    pub sub_total: f64,
    pub discount: f64,
    pub total_amount: f64,
    pub order_type: String,
    pub payment_method: String,
    pub amount_paid: f64,
    pub change: f64,
    pub date_time: String,
}

/// Stock line for the non-ingredient inventory categories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StockItem {
    pub id: i64,
    pub name: String,
    pub stock: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: i64,
    pub description: String,
    pub total_amount: f64,
    pub date_time: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// One of: mainDish, beverage, desserts, others.
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StaffMember {
    pub id: i64,
    pub fname: String,
    pub lname: String,
    pub role: String,
}

/// A fixture that fails to parse yields an empty listing rather than a
/// crash, the same way a failed fetch leaves a screen empty.
fn load<T: DeserializeOwned>(name: &str, raw: &str) -> Vec<T> {
    match serde_json::from_str(raw) {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!(fixture = name, error = %err, "bundled fixture failed to parse");
            Vec::new()
        }
    }
}

pub fn order_history() -> Vec<OrderRecord> {
    load("order_history", include_str!("../fixtures/order_history.json"))
}

pub fn beverages() -> Vec<StockItem> {
    load("beverages", include_str!("../fixtures/beverages.json"))
}

pub fn desserts() -> Vec<StockItem> {
    load("desserts", include_str!("../fixtures/desserts.json"))
}

pub fn others() -> Vec<StockItem> {
    load("others", include_str!("../fixtures/others.json"))
}

pub fn expenses() -> Vec<ExpenseRecord> {
    load("expenses", include_str!("../fixtures/expenses.json"))
}

pub fn products() -> Vec<ProductItem> {
    load("products", include_str!("../fixtures/products.json"))
}

pub fn staff() -> Vec<StaffMember> {
    load("staff", include_str!("../fixtures/staff.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_parses_to_a_non_empty_listing() {
        assert!(!order_history().is_empty());
        assert!(!beverages().is_empty());
        assert!(!desserts().is_empty());
        assert!(!others().is_empty());
        assert!(!expenses().is_empty());
        assert!(!products().is_empty());
        assert!(!staff().is_empty());
    }

    #[test]
    fn products_cover_all_four_categories() {
        let rows = products();
        for category in ["mainDish", "beverage", "desserts", "others"] {
            assert!(
                rows.iter().any(|p| p.category == category),
                "no products in {category}"
            );
        }
    }

    #[test]
    fn order_totals_are_consistent() {
        for order in order_history() {
            let expected = order.sub_total - order.discount;
            assert!(
                (order.total_amount - expected).abs() < 0.01,
                "order {} total does not match subtotal minus discount",
                order.id
            );
            let change = order.amount_paid - order.total_amount;
            assert!(
                (order.change - change).abs() < 0.01,
                "order {} change does not match payment",
                order.id
            );
        }
    }
}
