//! Cashier order history, fixture-backed until the endpoint exists.

use std::cmp::Ordering;

use crate::fixtures::{self, OrderRecord};
use crate::table::{TableRow, TableState};

impl TableRow for OrderRecord {
    fn matches(&self, needle: &str) -> bool {
        self.order_type.to_lowercase().contains(needle)
            || self.payment_method.to_lowercase().contains(needle)
            || self.date_time.contains(needle)
    }

    fn cmp_by(&self, other: &Self, column: &'static str) -> Ordering {
        match column {
            "total_amount" => self
                .total_amount
                .partial_cmp(&other.total_amount)
                .unwrap_or(Ordering::Equal),
            "date_time" => self.date_time.cmp(&other.date_time),
            _ => self.id.cmp(&other.id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderHistoryScreen {
    pub table: TableState<OrderRecord>,
}

impl OrderHistoryScreen {
    pub fn new() -> Self {
        Self {
            table: TableState::new(fixtures::order_history()),
        }
    }
}

impl Default for OrderHistoryScreen {
    fn default() -> Self {
        Self::new()
    }
}
