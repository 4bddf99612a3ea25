//! Printable document export.
//!
//! Produces a self-contained XHTML page with embedded print CSS. Rows are split
//! into printed pages that each repeat the table header; body rows alternate
//! `odd`/`even` classes for striping.

use std::borrow::Cow;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::info;

use roster_model::{ColumnSpec, Record};
use roster_pipeline::{DisplayFormatter, headers, page_count, project_row};

use crate::error::{ExportError, Result};

/// XHTML namespace.
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Text shown in place of table rows when there is nothing to list.
pub const NO_DATA_TEXT: &str = "No data available";

const PRINT_CSS: &str = "\
body { font-family: Helvetica, Arial, sans-serif; font-size: 10pt; color: #222; margin: 16mm; }
h1 { font-size: 16pt; margin: 0 0 4mm 0; }
ul.meta { list-style: none; padding: 0; margin: 0 0 4mm 0; color: #555; }
table { width: 100%; border-collapse: collapse; }
thead { display: table-header-group; }
th { background: #2f5597; color: #fff; text-align: left; padding: 4px 6px; }
td { padding: 3px 6px; border-bottom: 1px solid #ddd; }
tr.even td { background: #f2f5fb; }
td.no-data { text-align: center; font-style: italic; color: #777; padding: 12px; }
p.page-number { text-align: right; font-size: 8pt; color: #777; }
section.page { page-break-after: always; }
section.page:last-child { page-break-after: auto; }
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Body rows per printed page.
    pub rows_per_page: usize,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self { rows_per_page: 25 }
    }
}

fn encode_err(error: impl std::fmt::Display) -> ExportError {
    ExportError::Document(error.to_string())
}

/// Render `records` as a printable document.
///
/// The title and metadata lines head the first page. An empty record set
/// renders one page whose table holds a single "No data available" row.
pub fn to_document(
    title: &str,
    metadata_lines: &[String],
    columns: &[ColumnSpec],
    records: &[&Record],
    formatter: &dyn DisplayFormatter,
    options: &DocumentOptions,
) -> Result<Vec<u8>> {
    let rows_per_page = options.rows_per_page.max(1);
    let pages = page_count(records.len(), rows_per_page);
    let header_row = headers(columns);

    let mut buffer = Vec::new();
    buffer.write_all(b"<!DOCTYPE html>\n")?;
    let mut xml = Writer::new_with_indent(buffer, b' ', 2);

    let mut html = BytesStart::new("html");
    html.push_attribute(("xmlns", XHTML_NS));
    html.push_attribute(("lang", "en"));
    xml.write_event(Event::Start(html)).map_err(encode_err)?;

    xml.write_event(Event::Start(BytesStart::new("head")))
        .map_err(encode_err)?;
    let mut meta = BytesStart::new("meta");
    meta.push_attribute(("charset", "utf-8"));
    xml.write_event(Event::Empty(meta)).map_err(encode_err)?;
    write_text_element(&mut xml, "title", title, None)?;
    xml.write_event(Event::Start(BytesStart::new("style")))
        .map_err(encode_err)?;
    xml.write_event(Event::Text(BytesText::from_escaped(PRINT_CSS)))
        .map_err(encode_err)?;
    xml.write_event(Event::End(BytesEnd::new("style")))
        .map_err(encode_err)?;
    xml.write_event(Event::End(BytesEnd::new("head")))
        .map_err(encode_err)?;

    xml.write_event(Event::Start(BytesStart::new("body")))
        .map_err(encode_err)?;
    for page_index in 0..pages {
        let mut section = BytesStart::new("section");
        section.push_attribute(("class", "page"));
        xml.write_event(Event::Start(section)).map_err(encode_err)?;

        if page_index == 0 {
            write_text_element(&mut xml, "h1", title, None)?;
            if !metadata_lines.is_empty() {
                write_start(&mut xml, "ul", Some("meta"))?;
                for line in metadata_lines {
                    write_text_element(&mut xml, "li", line, None)?;
                }
                write_end(&mut xml, "ul")?;
            }
        }

        write_start(&mut xml, "table", None)?;
        write_start(&mut xml, "thead", None)?;
        write_start(&mut xml, "tr", None)?;
        for header in &header_row {
            write_text_element(&mut xml, "th", header, None)?;
        }
        write_end(&mut xml, "tr")?;
        write_end(&mut xml, "thead")?;

        write_start(&mut xml, "tbody", None)?;
        if records.is_empty() {
            write_start(&mut xml, "tr", None)?;
            let mut cell = BytesStart::new("td");
            let span = columns.len().max(1).to_string();
            cell.push_attribute(("colspan", span.as_str()));
            cell.push_attribute(("class", "no-data"));
            xml.write_event(Event::Start(cell)).map_err(encode_err)?;
            xml.write_event(Event::Text(BytesText::new(NO_DATA_TEXT)))
                .map_err(encode_err)?;
            write_end(&mut xml, "td")?;
            write_end(&mut xml, "tr")?;
        } else {
            let start = page_index * rows_per_page;
            let end = (start + rows_per_page).min(records.len());
            for (offset, record) in records[start..end].iter().enumerate() {
                let stripe = if (start + offset) % 2 == 0 { "odd" } else { "even" };
                write_start(&mut xml, "tr", Some(stripe))?;
                for value in project_row(record, columns, formatter) {
                    write_text_element(&mut xml, "td", &value, None)?;
                }
                write_end(&mut xml, "tr")?;
            }
        }
        write_end(&mut xml, "tbody")?;
        write_end(&mut xml, "table")?;

        let label = format!("Page {} of {}", page_index + 1, pages);
        write_text_element(&mut xml, "p", &label, Some("page-number"))?;
        write_end(&mut xml, "section")?;
    }
    write_end(&mut xml, "body")?;
    write_end(&mut xml, "html")?;

    let mut bytes = xml.into_inner();
    bytes.push(b'\n');
    info!(
        rows = records.len(),
        pages,
        bytes = bytes.len(),
        "document export built"
    );
    Ok(bytes)
}

fn write_start<W: Write>(xml: &mut Writer<W>, name: &str, class: Option<&str>) -> Result<()> {
    let mut start = BytesStart::new(name);
    if let Some(class) = class {
        start.push_attribute(("class", class));
    }
    xml.write_event(Event::Start(start)).map_err(encode_err)
}

fn write_end<W: Write>(xml: &mut Writer<W>, name: &str) -> Result<()> {
    xml.write_event(Event::End(BytesEnd::new(name)))
        .map_err(encode_err)
}

/// Write `<name class="..">text</name>`; empty text still yields a start/end
/// pair so table cells keep their position.
fn write_text_element<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    text: &str,
    class: Option<&str>,
) -> Result<()> {
    write_start(xml, name, class)?;
    let text = xml_chars(text);
    if !text.is_empty() {
        xml.write_event(Event::Text(BytesText::new(&text)))
            .map_err(encode_err)?;
    }
    write_end(xml, name)
}

/// Drop characters XML 1.0 cannot carry even escaped: C0 controls other than
/// tab, newline, and carriage return, plus U+FFFE and U+FFFF.
fn xml_chars(text: &str) -> Cow<'_, str> {
    let forbidden = |c: char| {
        (c < ' ' && !matches!(c, '\t' | '\n' | '\r')) || matches!(c, '\u{fffe}' | '\u{ffff}')
    };
    if text.chars().any(forbidden) {
        Cow::Owned(text.chars().filter(|c| !forbidden(*c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::Reader;
    use roster_model::FieldRef;
    use roster_pipeline::StandardFormatter;

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("Name", FieldRef::text("name")),
            ColumnSpec::new("Status", FieldRef::text("status")),
        ]
    }

    fn render(records: &[Record], rows_per_page: usize) -> String {
        let refs: Vec<&Record> = records.iter().collect();
        let bytes = to_document(
            "Attendance <March>",
            &["Location: Pune & Nashik".to_string()],
            &columns(),
            &refs,
            &StandardFormatter::default(),
            &DocumentOptions { rows_per_page },
        )
        .unwrap();
        String::from_utf8(bytes).unwrap()
    }

    fn assert_well_formed(document: &str) {
        let body = document
            .strip_prefix("<!DOCTYPE html>\n")
            .expect("doctype first");
        let mut reader = Reader::from_str(body);
        reader.config_mut().check_end_names = true;
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(error) => panic!("malformed document: {error}"),
            }
        }
    }

    fn people(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| {
                Record::new()
                    .with("name", format!("Person {i}"))
                    .with("status", "present")
            })
            .collect()
    }

    #[test]
    fn renders_title_metadata_and_escaped_text() {
        let document = render(&people(2), 25);
        assert_well_formed(&document);
        assert!(document.contains("<h1>Attendance &lt;March&gt;</h1>"));
        assert!(document.contains("<li>Location: Pune &amp; Nashik</li>"));
        assert!(document.contains("<th>Status</th>"));
        assert!(document.contains("<td>Person 1</td>"));
        assert!(document.contains("Page 1 of 1"));
    }

    #[test]
    fn stripes_rows_and_splits_pages() {
        let document = render(&people(5), 2);
        assert_well_formed(&document);
        assert_eq!(document.matches("<section class=\"page\">").count(), 3);
        assert_eq!(document.matches("<th>Name</th>").count(), 3);
        assert_eq!(document.matches("<tr class=\"odd\">").count(), 3);
        assert_eq!(document.matches("<tr class=\"even\">").count(), 2);
        assert!(document.contains("Page 3 of 3"));
        assert_eq!(document.matches("<h1>").count(), 1);
    }

    #[test]
    fn control_characters_are_dropped() {
        let records = vec![
            Record::new()
                .with("name", "A\u{1}my\u{1b}")
                .with("status", "on\tsite"),
        ];
        let document = render(&records, 25);
        assert_well_formed(&document);
        assert!(document.contains("<td>Amy</td>"));
        assert!(document.contains("<td>on\tsite</td>"));
    }

    #[test]
    fn empty_records_render_no_data_state() {
        let document = render(&[], 25);
        assert_well_formed(&document);
        assert!(document.contains(NO_DATA_TEXT));
        assert!(document.contains("colspan=\"2\""));
        assert!(document.contains("Page 1 of 1"));
    }
}
