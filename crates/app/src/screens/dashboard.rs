//! Dashboard summary cards.
//!
//! Placeholder figures until the backend grows a summary endpoint; the
//! cards and their ranges match what the screens show today.

/// One stat card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub category: &'static str,
    pub value: String,
    pub range: &'static str,
}

fn card(category: &'static str, value: &str, range: &'static str) -> SummaryCard {
    SummaryCard {
        category,
        value: value.to_string(),
        range,
    }
}

pub fn admin_cards() -> Vec<SummaryCard> {
    vec![
        card("Current Sales", "\u{20B1}30,000.00", "Last 30 days"),
        card("Current Expenses", "\u{20B1}20,000.00", "Last 30 days"),
        card("Inventory Level", "In Stock", "All products"),
        card("Net Profit", "\u{20B1}50,000.00", "From Last 30 days"),
    ]
}

pub fn cashier_cards() -> Vec<SummaryCard> {
    vec![
        card("Today's Orders", "0", "Since opening"),
        card("Today's Sales", "\u{20B1}0.00", "Since opening"),
    ]
}
