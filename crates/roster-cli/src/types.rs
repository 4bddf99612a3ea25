use roster_pipeline::PageWindow;

/// One rendered page of a report, ready for the terminal.
#[derive(Debug)]
pub struct PageReport {
    pub title: String,
    pub scope_lines: Vec<String>,
    pub headers: Vec<String>,
    /// Right-align flags, one per column.
    pub numeric: Vec<bool>,
    pub rows: Vec<Vec<String>>,
    pub window: PageWindow,
}

#[derive(Debug)]
pub struct ReportListing {
    pub key: String,
    pub title: String,
    pub columns: usize,
    pub default_sort: Option<String>,
}
