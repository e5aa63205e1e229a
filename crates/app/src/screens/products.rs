//! Product listing with a category selector, fixture-backed.

use std::cmp::Ordering;

use crate::fixtures::{self, ProductItem};
use crate::table::{TableRow, TableState};

impl TableRow for ProductItem {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    fn cmp_by(&self, other: &Self, column: &'static str) -> Ordering {
        match column {
            "price" => self
                .price
                .partial_cmp(&other.price)
                .unwrap_or(Ordering::Equal),
            _ => self.name.cmp(&other.name),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ProductCategory {
    #[default]
    MainDish,
    Beverage,
    Desserts,
    Others,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::MainDish,
        ProductCategory::Beverage,
        ProductCategory::Desserts,
        ProductCategory::Others,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::MainDish => "Main Dish",
            ProductCategory::Beverage => "Beverage",
            ProductCategory::Desserts => "Desserts",
            ProductCategory::Others => "Others",
        }
    }

    /// Category key as it appears in the product data.
    fn key(&self) -> &'static str {
        match self {
            ProductCategory::MainDish => "mainDish",
            ProductCategory::Beverage => "beverage",
            ProductCategory::Desserts => "desserts",
            ProductCategory::Others => "others",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductListScreen {
    pub category: ProductCategory,
    pub table: TableState<ProductItem>,
}

impl ProductListScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            category: ProductCategory::default(),
            table: TableState::new(Vec::new()),
        };
        screen.reload();
        screen
    }

    pub fn select(&mut self, category: ProductCategory) {
        self.category = category;
        self.reload();
    }

    fn reload(&mut self) {
        let key = self.category.key();
        let rows = fixtures::products()
            .into_iter()
            .filter(|product| product.category == key)
            .collect();
        self.table.set_rows(rows);
    }
}

impl Default for ProductListScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_category_swaps_the_rows() {
        let mut screen = ProductListScreen::new();
        assert!(
            screen
                .table
                .rows()
                .iter()
                .all(|p| p.category == "mainDish")
        );

        screen.select(ProductCategory::Desserts);
        assert!(!screen.table.rows().is_empty());
        assert!(screen.table.rows().iter().all(|p| p.category == "desserts"));
    }
}
