//! Sales listing: a pass-through consumer of the server-paginated
//! endpoint. The same view model backs the sales screen and the sales
//! report route.

use brewpos_client::{ApiClient, DateRange, PageQuery, SaleDto};

use crate::screens::Notice;
use crate::table::Pager;

#[derive(Debug, Clone)]
pub struct SalesScreen {
    client: ApiClient,
    pub rows: Vec<SaleDto>,
    pub pager: Pager,
    pub range: Option<DateRange>,
    pub loading: bool,
    pub notice: Option<Notice>,
}

impl SalesScreen {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            rows: Vec::new(),
            pager: Pager::new(10),
            range: None,
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

    /// Fetch the current page. A failed fetch keeps the rows already on
    /// screen.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.client.fetch_sales(&self.query()).await {
            Ok(page) => {
                self.pager.absorb(page.last_page, page.total);
                self.rows = page.data;
            }
            Err(_) => self.notice = Some(Notice::error("Error fetching records")),
        }
        self.loading = false;
    }

    /// Apply (or clear) the date filter; either way the listing restarts
    /// from the first page.
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

    pub async fn set_page_size(&mut self, size: u32) {
        self.pager.set_page_size(size);
        self.refresh().await;
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
