//! Expenses screen: bundled listing plus the add-expense form.
//!
//! The listing endpoint for this screen does not exist yet, so it reads
//! the bundled fixture; the add form posts to the live backend.

use std::cmp::Ordering;

use brewpos_client::{ApiClient, NewExpense};

use crate::fixtures::{self, ExpenseRecord};
use crate::screens::Notice;
use crate::table::{TableRow, TableState};

impl TableRow for ExpenseRecord {
    fn matches(&self, needle: &str) -> bool {
        self.description.to_lowercase().contains(needle)
    }

    fn cmp_by(&self, other: &Self, column: &'static str) -> Ordering {
        match column {
            "total_amount" => self
                .total_amount
                .partial_cmp(&other.total_amount)
                .unwrap_or(Ordering::Equal),
            "date_time" => self.date_time.cmp(&other.date_time),
            _ => self.description.cmp(&other.description),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExpensesScreen {
    client: ApiClient,
    pub table: TableState<ExpenseRecord>,
    pub notice: Option<Notice>,
}

impl ExpensesScreen {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            table: TableState::new(fixtures::expenses()),
            notice: None,
        }
    }

    pub async fn add(&mut self, description: impl Into<String>, total_amount: f64) {
        let expense = NewExpense {
            description: description.into(),
            total_amount,
        };
        match self.client.add_expense(&expense).await {
            Ok(message) => self.notice = Some(Notice::from_message(&message)),
            Err(err) => self.notice = Some(Notice::from_error(&err)),
        }
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
