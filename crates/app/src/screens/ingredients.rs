//! Ingredient CRUD: the one inventory category with a live backend.

use std::cmp::Ordering;

use brewpos_client::{ApiClient, IngredientDto, IngredientUpdate, NewIngredient};
use brewpos_core::IngredientId;

use crate::screens::Notice;
use crate::table::{TableRow, TableState};

/// Stock-level contract for the quantity cell. What "low" looks like is
/// the rendering layer's business; the cutoff is not.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockLevel {
    Low,
    Ok,
}

pub fn stock_level(stock: i64, low_threshold: i64) -> StockLevel {
    if stock <= low_threshold {
        StockLevel::Low
    } else {
        StockLevel::Ok
    }
}

impl TableRow for IngredientDto {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }

    fn cmp_by(&self, other: &Self, column: &'static str) -> Ordering {
        match column {
            "stock" => self.stock.cmp(&other.stock),
            _ => self.name.cmp(&other.name),
        }
    }
}

/// Ingredients table with add/update/disable, refreshed after every
/// mutation.
#[derive(Debug, Clone)]
pub struct IngredientsScreen {
    client: ApiClient,
    pub table: TableState<IngredientDto>,
    pub loading: bool,
    pub notice: Option<Notice>,
    pub low_threshold: i64,
}

impl IngredientsScreen {
    pub fn new(client: ApiClient, low_threshold: i64) -> Self {
        Self {
            client,
            table: TableState::new(Vec::new()),
            loading: false,
            notice: None,
            low_threshold,
        }
    }

    pub fn level(&self, row: &IngredientDto) -> StockLevel {
        stock_level(row.stock, self.low_threshold)
    }

    /// Fetch the full list. On failure the rows already on screen stay.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.client.fetch_ingredients().await {
            Ok(rows) => self.table.set_rows(rows),
            Err(err) => self.notice = Some(Notice::from_error(&err)),
        }
        self.loading = false;
    }

    pub async fn add(&mut self, item: NewIngredient) {
        match self.client.add_ingredient(&item).await {
            Ok(message) => {
                self.notice = Some(Notice::from_message(&message));
                self.refresh().await;
            }
            Err(err) => self.notice = Some(Notice::from_error(&err)),
        }
    }

    pub async fn update(&mut self, id: IngredientId, update: IngredientUpdate) {
        match self.client.update_ingredient(id, &update).await {
            Ok(message) => {
                self.notice = Some(Notice::from_message(&message));
                self.refresh().await;
            }
            Err(err) => self.notice = Some(Notice::from_error(&err)),
        }
    }

    /// Soft delete; the backend keeps the row and hides it from fetches.
    pub async fn disable(&mut self, id: IngredientId) {
        match self.client.disable_ingredient(id).await {
            Ok(message) => {
                self.notice = Some(Notice::from_message(&message));
                self.refresh().await;
            }
            Err(err) => self.notice = Some(Notice::from_error(&err)),
        }
    }

    /// Hand the current notice to the snackbar and forget it.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
