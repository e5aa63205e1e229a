//! Shared table machinery.
//!
//! The screens come in two flavors: small local datasets that are sorted,
//! filtered, and paged in memory ([`TableState`]), and backend-paginated
//! lists where the server reports `last_page`/`total` and the client only
//! keeps a cursor ([`Pager`]).

use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn flip(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// Column sort state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorting {
    pub column: &'static str,
    pub dir: SortDir,
}

/// Row contract for the in-memory table: a text match for the global
/// filter box and an ordering key per sortable column.
pub trait TableRow {
    fn matches(&self, needle: &str) -> bool;
    fn cmp_by(&self, other: &Self, column: &'static str) -> Ordering;
}

/// In-memory sortable/filterable/paginated row set.
#[derive(Debug, Clone)]
pub struct TableState<T> {
    rows: Vec<T>,
    sorting: Option<Sorting>,
    filter: String,
    page_index: usize,
    page_size: usize,
}

impl<T: TableRow + Clone> TableState<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            sorting: None,
            filter: String::new(),
            page_index: 0,
            page_size: 10,
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.page_index = 0;
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Changing the filter returns to the first page.
    pub fn set_filter(&mut self, needle: impl Into<String>) {
        self.filter = needle.into();
        self.page_index = 0;
    }

    pub fn sorting(&self) -> Option<&Sorting> {
        self.sorting.as_ref()
    }

    /// Clicking a header: first click sorts ascending, clicking the same
    /// column again flips the direction.
    pub fn toggle_sort(&mut self, column: &'static str) {
        self.sorting = match self.sorting.take() {
            Some(sorting) if sorting.column == column => Some(Sorting {
                column,
                dir: sorting.dir.flip(),
            }),
            _ => Some(Sorting {
                column,
                dir: SortDir::Asc,
            }),
        };
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page_index = 0;
    }

    pub fn next_page(&mut self) {
        if self.page_index + 1 < self.page_count() {
            self.page_index += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn page_count(&self) -> usize {
        let visible = self.filtered().len();
        visible.div_ceil(self.page_size).max(1)
    }

    /// Rows for the current page after filter and sort.
    pub fn visible(&self) -> Vec<T> {
        let mut rows = self.filtered();
        if let Some(sorting) = &self.sorting {
            rows.sort_by(|a, b| {
                let ord = a.cmp_by(b, sorting.column);
                match sorting.dir {
                    SortDir::Asc => ord,
                    SortDir::Desc => ord.reverse(),
                }
            });
        }
        rows.into_iter()
            .skip(self.page_index * self.page_size)
            .take(self.page_size)
            .collect()
    }

    fn filtered(&self) -> Vec<T> {
        let needle = self.filter.trim().to_lowercase();
        if needle.is_empty() {
            return self.rows.clone();
        }
        self.rows
            .iter()
            .filter(|row| row.matches(&needle))
            .cloned()
            .collect()
    }
}

/// Server-side pagination cursor. `page` is 1-based, as the wire expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub page_size: u32,
    pub last_page: u32,
    pub total: u64,
}

impl Pager {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            last_page: 0,
            total: 0,
        }
    }

    /// Take the counts reported by the backend for the fetched page.
    pub fn absorb(&mut self, last_page: u32, total: u64) {
        self.last_page = last_page;
        self.total = total;
    }

    /// Advance if there is a next page. Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if self.page < self.last_page {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// A new page size restarts from the first page.
    pub fn set_page_size(&mut self, size: u32) {
        self.page_size = size.max(1);
        self.page = 1;
    }

    /// Back to the first page (used when a filter changes).
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// 1-based row number of the first row on the current page; the
    /// tables number rows continuously across pages.
    pub fn first_row_number(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: String,
        stock: i64,
    }

    impl Item {
        fn new(name: &str, stock: i64) -> Self {
            Self {
                name: name.to_string(),
                stock,
            }
        }
    }

    impl TableRow for Item {
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

    fn sample() -> Vec<Item> {
        vec![
            Item::new("Sugar", 40),
            Item::new("Arabica beans", 12),
            Item::new("Whole milk", 3),
            Item::new("Brown sugar", 25),
        ]
    }

    #[test]
    fn filter_is_case_insensitive_and_resets_the_page() {
        let mut table = TableState::new(sample());
        table.set_page_size(2);
        table.next_page();
        assert_eq!(table.page_index(), 1);

        table.set_filter("SUGAR");
        assert_eq!(table.page_index(), 0);
        let visible = table.visible();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|i| i.name.to_lowercase().contains("sugar")));
    }

    #[test]
    fn toggling_the_same_column_flips_direction() {
        let mut table = TableState::new(sample());
        table.toggle_sort("stock");
        assert_eq!(table.visible()[0].name, "Whole milk");

        table.toggle_sort("stock");
        assert_eq!(table.visible()[0].name, "Sugar");
    }

    #[test]
    fn pages_slice_after_sort() {
        let mut table = TableState::new(sample());
        table.set_page_size(3);
        table.toggle_sort("name");

        assert_eq!(table.page_count(), 2);
        assert_eq!(table.visible().len(), 3);
        table.next_page();
        assert_eq!(table.visible().len(), 1);
        // No page past the last one.
        table.next_page();
        assert_eq!(table.page_index(), 1);
    }

    #[test]
    fn empty_table_still_reports_one_page() {
        let table: TableState<Item> = TableState::new(Vec::new());
        assert_eq!(table.page_count(), 1);
        assert!(table.visible().is_empty());
    }

    #[test]
    fn pager_clamps_at_both_ends() {
        let mut pager = Pager::new(10);
        pager.absorb(3, 25);

        assert!(!pager.prev(), "already on the first page");
        assert!(pager.next());
        assert!(pager.next());
        assert!(!pager.next(), "already on the last page");
        assert_eq!(pager.page, 3);

        assert_eq!(pager.first_row_number(), 21);

        pager.set_page_size(25);
        assert_eq!(pager.page, 1);
    }
}
