//! Terminal rendering with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_report::NO_DATA_TEXT;

use crate::types::{PageReport, ReportListing};

pub fn page_table(report: &PageReport) -> Table {
    let mut table = Table::new();
    table.set_header(report.headers.iter().map(|header| header_cell(header)));
    apply_table_style(&mut table);
    for (index, numeric) in report.numeric.iter().enumerate() {
        if *numeric {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    if report.rows.is_empty() {
        table.add_row(vec![dim_cell(NO_DATA_TEXT)]);
    }
    for row in &report.rows {
        table.add_row(row.iter().map(|value| {
            if value.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(value)
            }
        }));
    }
    table
}

pub fn print_page(report: &PageReport) {
    println!("{}", report.title);
    for line in &report.scope_lines {
        println!("{line}");
    }
    println!("{}", page_table(report));
    println!("{}", report.window.label());
}

pub fn listing_table(listings: &[ReportListing]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Report"),
        header_cell("Title"),
        header_cell("Columns"),
        header_cell("Default sort"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for listing in listings {
        table.add_row(vec![
            Cell::new(&listing.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&listing.title),
            Cell::new(listing.columns),
            match &listing.default_sort {
                Some(sort) => Cell::new(sort),
                None => dim_cell("-"),
            },
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::Page;
    use roster_pipeline::PageWindow;

    fn report(rows: Vec<Vec<String>>, total: usize) -> PageReport {
        PageReport {
            title: "Salary Report".to_string(),
            scope_lines: Vec::new(),
            headers: vec!["Employee".to_string(), "Net Pay".to_string()],
            numeric: vec![false, true],
            rows,
            window: PageWindow::new(total, Page::first(10)),
        }
    }

    #[test]
    fn renders_rows_and_placeholders() {
        let mut table = page_table(&report(
            vec![
                vec!["Amy Pond".to_string(), "1200.00".to_string()],
                vec!["Rory".to_string(), String::new()],
            ],
            2,
        ));
        table.force_no_tty();
        let rendered = table.to_string();
        assert!(rendered.contains("Employee"));
        assert!(rendered.contains("Amy Pond"));
        assert!(rendered.contains("1200.00"));
        assert_eq!(rendered.lines().filter(|line| line.contains('-')).count(), 1);
    }

    #[test]
    fn empty_page_shows_no_data() {
        let mut table = page_table(&report(Vec::new(), 0));
        table.force_no_tty();
        assert!(table.to_string().contains(NO_DATA_TEXT));
    }
}
