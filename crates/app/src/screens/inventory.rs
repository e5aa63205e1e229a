//! Inventory screen: a category selector over one live table and three
//! fixture-backed ones.

use std::cmp::Ordering;

use brewpos_client::ApiClient;

use crate::fixtures::{self, StockItem};
use crate::screens::ingredients::IngredientsScreen;
use crate::table::{TableRow, TableState};

impl TableRow for StockItem {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    fn cmp_by(&self, other: &Self, column: &'static str) -> Ordering {
        match column {
            "stock" => self.stock.cmp(&other.stock),
            _ => self.name.cmp(&other.name),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InventoryCategory {
    #[default]
    Ingredients,
    Beverage,
    Desserts,
    Others,
}

impl InventoryCategory {
    pub const ALL: [InventoryCategory; 4] = [
        InventoryCategory::Ingredients,
        InventoryCategory::Beverage,
        InventoryCategory::Desserts,
        InventoryCategory::Others,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InventoryCategory::Ingredients => "Ingredients",
            InventoryCategory::Beverage => "Beverage",
            InventoryCategory::Desserts => "Desserts",
            InventoryCategory::Others => "Others",
        }
    }
}

/// The inventory page. Ingredients are live; the other categories list
/// bundled fixtures until their endpoints exist.
#[derive(Debug, Clone)]
pub struct InventoryScreen {
    pub category: InventoryCategory,
    pub ingredients: IngredientsScreen,
    pub beverage: TableState<StockItem>,
    pub desserts: TableState<StockItem>,
    pub others: TableState<StockItem>,
}

impl InventoryScreen {
    pub fn new(client: ApiClient, low_threshold: i64) -> Self {
        Self {
            category: InventoryCategory::default(),
            ingredients: IngredientsScreen::new(client, low_threshold),
            beverage: TableState::new(fixtures::beverages()),
            desserts: TableState::new(fixtures::desserts()),
            others: TableState::new(fixtures::others()),
        }
    }

    pub fn select(&mut self, category: InventoryCategory) {
        self.category = category;
    }
}
