use chrono::{Days, NaiveDate};

/// Sentinel for "no categorical filter".
pub const CATEGORY_ALL: &str = "all";

/// Record shape the list view can filter and page over.
pub trait ListRecord: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;

    /// Substring match against an already lowercased search term.
    /// Implementations check their two designated text fields.
    fn matches_search(&self, term: &str) -> bool;

    /// Lowercase categorical value compared against the filter.
    fn category(&self) -> &str;

    /// Date used by the date-window predicate and sort.
    /// `None` (missing or unparsable) never matches a window.
    fn date(&self) -> Option<NaiveDate>;
}

/// Date filter, doubling as the sort key: `Latest` keeps the trailing
/// 30 days and sorts newest first, `Earliest` keeps records older than
/// a year and sorts oldest first, `Anytime` keeps source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    #[default]
    Anytime,
    Latest,
    Earliest,
}

impl DateWindow {
    pub const LATEST_WINDOW_DAYS: u64 = 30;
    pub const EARLIEST_CUTOFF_DAYS: u64 = 365;

    pub fn as_str(&self) -> &'static str {
        match self {
            DateWindow::Anytime => "anytime",
            DateWindow::Latest => "latest",
            DateWindow::Earliest => "earliest",
        }
    }

    /// Parses a dropdown value, falling back to `Anytime`.
    pub fn from_param(s: &str) -> Self {
        match s {
            "latest" => DateWindow::Latest,
            "earliest" => DateWindow::Earliest,
            _ => DateWindow::Anytime,
        }
    }

    pub fn contains(&self, date: Option<NaiveDate>, today: NaiveDate) -> bool {
        match self {
            DateWindow::Anytime => true,
            DateWindow::Latest => match date {
                Some(d) => d >= today - Days::new(Self::LATEST_WINDOW_DAYS),
                None => false,
            },
            DateWindow::Earliest => match date {
                Some(d) => d < today - Days::new(Self::EARLIEST_CUTOFF_DAYS),
                None => false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub search_term: String,
    pub category: String,
    pub date_window: DateWindow,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: CATEGORY_ALL.to_string(),
            date_window: DateWindow::Anytime,
        }
    }
}

/// Owns one table's record set, filter and page position, and derives
/// the visible page as a pure transformation.
///
/// The current-time reference is injected (`today`); the model never
/// reads the wall clock, which keeps the date-window predicate
/// deterministic under test.
#[derive(Debug, Clone)]
pub struct ListViewModel<R: ListRecord> {
    records: Vec<R>,
    filter: FilterSpec,
    page: usize,
    rows_per_page: usize,
    today: NaiveDate,
}

impl<R: ListRecord> ListViewModel<R> {
    /// `rows_per_page` is fixed per view and must be positive.
    pub fn new(rows_per_page: usize, today: NaiveDate) -> Self {
        debug_assert!(rows_per_page > 0);
        Self {
            records: Vec::new(),
            filter: FilterSpec::default(),
            page: 0,
            rows_per_page: rows_per_page.max(1),
            today,
        }
    }

    /// Replaces the working set wholesale (initial load, saved edit,
    /// delete). Never mutates records in place.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    pub fn set_date_window(&mut self, window: DateWindow) {
        self.filter.date_window = window;
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(self.rows_per_page)
    }

    /// Requested page clamped into range; recomputed on every read so
    /// the view can never point past the end after a filter change.
    pub fn current_page(&self) -> usize {
        self.page.min(self.page_count().saturating_sub(1))
    }

    /// Sets the page when in range, otherwise a no-op. Guards against
    /// stale pagination controls.
    pub fn set_page(&mut self, page: usize) {
        if page < self.page_count() {
            self.page = page;
        }
    }

    /// Filter, then sort by the date window, then slice the current
    /// page.
    pub fn visible_page(&self) -> Vec<R> {
        let mut rows = self.filtered();
        match self.filter.date_window {
            DateWindow::Latest => rows.sort_by(|a, b| b.date().cmp(&a.date())),
            DateWindow::Earliest => rows.sort_by(|a, b| a.date().cmp(&b.date())),
            DateWindow::Anytime => {}
        }
        let start = self.current_page() * self.rows_per_page;
        rows.into_iter().skip(start).take(self.rows_per_page).collect()
    }

    fn filtered(&self) -> Vec<R> {
        let term = self.filter.search_term.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                (term.is_empty() || r.matches_search(&term))
                    && (self.filter.category == CATEGORY_ALL
                        || r.category().eq_ignore_ascii_case(&self.filter.category))
                    && self.filter.date_window.contains(r.date(), self.today)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: &'static str,
        date: &'static str,
    }

    impl ListRecord for Row {
        fn id(&self) -> &str {
            self.id
        }

        fn matches_search(&self, term: &str) -> bool {
            self.name.to_lowercase().contains(term)
                || self.description.to_lowercase().contains(term)
        }

        fn category(&self) -> &str {
            self.category
        }

        fn date(&self) -> Option<NaiveDate> {
            NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: "1",
                name: "Invoice Q1",
                description: "First quarter billing",
                category: "invoice",
                date: "2025-06-01",
            },
            Row {
                id: "2",
                name: "Report",
                description: "Annual summary",
                category: "report",
                date: "2023-02-10",
            },
            Row {
                id: "3",
                name: "Contract",
                description: "Supplier agreement",
                category: "contract",
                date: "2025-05-30",
            },
        ]
    }

    fn model(rows_per_page: usize) -> ListViewModel<Row> {
        let mut m = ListViewModel::new(rows_per_page, today());
        m.set_records(rows());
        m
    }

    // Ids are 'static so the result does not borrow the model.
    fn visible_ids(m: &ListViewModel<Row>) -> Vec<&'static str> {
        m.visible_page().iter().map(|r| r.id).collect::<Vec<_>>()
    }

    #[test]
    fn search_matches_either_text_field_case_insensitively() {
        let mut m = model(10);
        m.set_search_term("inv");
        assert_eq!(visible_ids(&m), ["1"]);

        m.set_search_term("SUMMARY");
        assert_eq!(visible_ids(&m), ["2"]);
    }

    #[test]
    fn category_all_is_a_sentinel_not_a_value() {
        let mut m = model(10);
        m.set_category("report");
        assert_eq!(visible_ids(&m), ["2"]);

        m.set_category(CATEGORY_ALL);
        assert_eq!(m.visible_page().len(), 3);
    }

    #[test]
    fn latest_window_keeps_trailing_thirty_days_and_sorts_descending() {
        let mut m = model(10);
        m.set_date_window(DateWindow::Latest);
        assert_eq!(visible_ids(&m), ["1", "3"]);
    }

    #[test]
    fn earliest_window_keeps_records_older_than_a_year_ascending() {
        let mut m = model(10);
        m.set_date_window(DateWindow::Earliest);
        assert_eq!(visible_ids(&m), ["2"]);
    }

    #[test]
    fn missing_date_never_matches_a_window() {
        let mut m = ListViewModel::new(10, today());
        m.set_records(vec![Row {
            id: "9",
            name: "Broken",
            description: "",
            category: "report",
            date: "not-a-date",
        }]);
        m.set_date_window(DateWindow::Latest);
        assert!(m.visible_page().is_empty());
        m.set_date_window(DateWindow::Anytime);
        assert_eq!(m.visible_page().len(), 1);
    }

    #[test]
    fn visible_page_never_violates_the_active_filter() {
        let mut m = model(10);
        m.set_search_term("r");
        m.set_category("report");
        m.set_date_window(DateWindow::Earliest);
        for row in m.visible_page() {
            assert!(row.matches_search("r"));
            assert_eq!(row.category, "report");
            assert!(DateWindow::Earliest.contains(row.date(), today()));
        }
    }

    #[test]
    fn page_count_is_ceil_of_filtered_length() {
        let m = model(2);
        assert_eq!(m.page_count(), 2);

        let empty: ListViewModel<Row> = ListViewModel::new(2, today());
        assert_eq!(empty.page_count(), 0);
    }

    #[test]
    fn paging_slices_in_source_order() {
        let mut m = model(1);
        assert_eq!(m.page_count(), 3);
        m.set_page(1);
        assert_eq!(visible_ids(&m), ["2"]);
    }

    #[test]
    fn two_records_at_one_row_per_page_split_into_two_pages() {
        let mut m = ListViewModel::new(1, today());
        m.set_records(rows().into_iter().take(2).collect());
        assert_eq!(m.page_count(), 2);

        m.set_page(1);
        assert_eq!(visible_ids(&m), ["2"]);
    }

    #[test]
    fn set_page_out_of_range_is_a_no_op() {
        let mut m = model(2);
        m.set_page(5);
        assert_eq!(m.current_page(), 0);
        m.set_page(1);
        assert_eq!(m.current_page(), 1);
    }

    #[test]
    fn page_clamps_when_a_filter_shrinks_the_set() {
        let mut m = model(1);
        m.set_page(2);
        assert_eq!(m.current_page(), 2);

        m.set_search_term("invoice");
        assert_eq!(m.page_count(), 1);
        assert_eq!(m.current_page(), 0);
        assert_eq!(visible_ids(&m), ["1"]);

        // No rows at all: page count 0, current page pinned to 0.
        m.set_search_term("nothing matches this");
        assert_eq!(m.page_count(), 0);
        assert_eq!(m.current_page(), 0);
        assert!(m.visible_page().is_empty());
    }

    #[test]
    fn setting_the_same_filter_twice_is_idempotent() {
        let mut m = model(2);
        m.set_search_term("r");
        m.set_category("report");
        let first = visible_ids(&m);
        m.set_search_term("r");
        m.set_category("report");
        assert_eq!(visible_ids(&m), first);
    }
}
