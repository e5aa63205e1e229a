//! Reporting views (admin).
//!
//! The sales report reuses [`crate::screens::sales::SalesScreen`] on its
//! own route; this module adds the expenses report (server-paginated with
//! a page total) and the profit report (sales minus expenses over a
//! shared range).

use brewpos_client::{ApiClient, DateRange, ExpenseDto, PageQuery};

use crate::screens::Notice;
use crate::table::Pager;

#[derive(Debug, Clone)]
pub struct ExpensesReportScreen {
    client: ApiClient,
    pub rows: Vec<ExpenseDto>,
    pub pager: Pager,
    pub range: Option<DateRange>,
    /// Sum of `total_amount` across the rows of the fetched page.
    pub page_total: f64,
    pub loading: bool,
    pub notice: Option<Notice>,
}

impl ExpensesReportScreen {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            rows: Vec::new(),
            pager: Pager::new(10),
            range: None,
            page_total: 0.0,
            loading: false,
            notice: None,
        }
    }

    fn query(&self) -> PageQuery {
        PageQuery {
            page: self.pager.page,
            page_size: self.pager.page_size,
            range: self.range,
        }
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.client.fetch_expenses(&self.query()).await {
            Ok(page) => {
                self.pager.absorb(page.last_page, page.total);
                self.page_total = page.data.iter().map(ExpenseDto::amount).sum();
                self.rows = page.data;
            }
            Err(err) => self.notice = Some(Notice::from_error(&err)),
        }
        self.loading = false;
    }

    pub async fn set_range(&mut self, range: Option<DateRange>) {
        self.range = range;
        self.pager.reset();
        self.refresh().await;
    }

    pub async fn next_page(&mut self) {
        if self.pager.next() {
            self.refresh().await;
        }
    }

    pub async fn prev_page(&mut self) {
        if self.pager.prev() {
            self.refresh().await;
        }
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}

/// Page size used when walking a full listing for totals.
const SWEEP_PAGE_SIZE: u32 = 100;

/// Net profit over a date range: every sales page minus every expenses
/// page. Both listings are swept page by page, bounded by the backend's
/// own `last_page`.
#[derive(Debug, Clone)]
pub struct ProfitReportScreen {
    client: ApiClient,
    pub range: Option<DateRange>,
    pub sales_total: f64,
    pub expenses_total: f64,
    pub loading: bool,
    pub notice: Option<Notice>,
}

impl ProfitReportScreen {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            range: None,
            sales_total: 0.0,
            expenses_total: 0.0,
            loading: false,
            notice: None,
        }
    }

    pub fn profit(&self) -> f64 {
        self.sales_total - self.expenses_total
    }

    pub async fn set_range(&mut self, range: Option<DateRange>) {
        self.range = range;
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.sweep().await {
            Ok((sales, expenses)) => {
                self.sales_total = sales;
                self.expenses_total = expenses;
            }
            Err(notice) => self.notice = Some(notice),
        }
        self.loading = false;
    }

    async fn sweep(&self) -> Result<(f64, f64), Notice> {
        let mut sales_total = 0.0;
        let mut page = 1;
        loop {
            let envelope = self
                .client
                .fetch_sales(&PageQuery {
                    page,
                    page_size: SWEEP_PAGE_SIZE,
                    range: self.range,
                })
                .await
                .map_err(|err| Notice::from_error(&err))?;
            sales_total += envelope.data.iter().map(|sale| sale.amount()).sum::<f64>();
            if page >= envelope.last_page {
                break;
            }
            page += 1;
        }

        let mut expenses_total = 0.0;
        let mut page = 1;
        loop {
            let envelope = self
                .client
                .fetch_expenses(&PageQuery {
                    page,
                    page_size: SWEEP_PAGE_SIZE,
                    range: self.range,
                })
                .await
                .map_err(|err| Notice::from_error(&err))?;
            expenses_total += envelope.data.iter().map(ExpenseDto::amount).sum::<f64>();
            if page >= envelope.last_page {
                break;
            }
            page += 1;
        }

        Ok((sales_total, expenses_total))
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
