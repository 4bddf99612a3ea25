//! Per-view selection state.
//!
//! A listing page owns one [`ViewState`]; the pipeline itself stays a set of
//! pure functions fed from it.

use roster_model::{Page, Query, Record, RecordScope, ReportLayout, SortSpec};

use crate::filter::filter;
use crate::format::DisplayFormatter;
use crate::paginate::{PageWindow, paginate};
use crate::scope::apply_scope;
use crate::sort::sort;

#[derive(Debug, Clone)]
pub struct ViewState {
    scope: RecordScope,
    query: Query,
    sort: Option<SortSpec>,
    page: Page,
    default_sort: Option<SortSpec>,
}

/// One rendered page.
#[derive(Debug, Clone)]
pub struct ViewOutput<'a> {
    pub rows: Vec<&'a Record>,
    pub window: PageWindow,
}

impl ViewState {
    pub fn new(layout: &ReportLayout, page_size: usize) -> Self {
        Self {
            scope: RecordScope::default(),
            query: Query::default(),
            sort: layout.default_sort.clone(),
            page: Page::first(page_size),
            default_sort: layout.default_sort.clone(),
        }
    }

    pub fn scope(&self) -> &RecordScope {
        &self.scope
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Apply a new upstream scope. The record set changes, so query, sort,
    /// and page return to their defaults.
    pub fn set_scope(&mut self, scope: RecordScope) {
        self.scope = scope;
        self.reset();
    }

    /// New search text; the view returns to page 1.
    pub fn set_query(&mut self, input: &str) {
        self.query = Query::new(input);
        self.page = Page::first(self.page.size());
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    /// Header click on `field`.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(SortSpec::toggled(self.sort.as_ref(), field));
    }

    pub fn go_to(&mut self, index: usize) {
        self.page = self.page.with_index(index);
    }

    /// New page size; the view returns to page 1.
    pub fn set_page_size(&mut self, size: usize) {
        self.page = Page::first(size);
    }

    fn reset(&mut self) {
        self.query = Query::default();
        self.sort = self.default_sort.clone();
        self.page = Page::first(self.page.size());
    }

    /// Scoped, filtered, and sorted records; the input to pagination and to
    /// export.
    pub fn shaped<'a>(
        &self,
        records: &'a [Record],
        layout: &ReportLayout,
        formatter: &dyn DisplayFormatter,
    ) -> Vec<&'a Record> {
        let scoped = apply_scope(records, &self.scope, layout);
        let filtered = filter(scoped, &self.query, &layout.search_fields, formatter);
        sort(filtered, self.sort.as_ref(), &layout.fields())
    }

    pub fn run<'a>(
        &self,
        records: &'a [Record],
        layout: &ReportLayout,
        formatter: &dyn DisplayFormatter,
    ) -> ViewOutput<'a> {
        let shaped = self.shaped(records, layout, formatter);
        let window = PageWindow::new(shaped.len(), self.page);
        let rows = paginate(&shaped, self.page).to_vec();
        ViewOutput { rows, window }
    }
}
