use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info, info_span, trace, warn};

use roster_ingest::{DataLocation, FetchRequest, RecordSource};
use roster_model::{
    DateRange, Page, Record, RecordScope, ReportLayout, SortDirection, SortSpec,
};
use roster_pipeline::{
    PageWindow, ViewState, builtin_layouts, headers, layout_by_key, project_rows,
};
use roster_report::{ExportFormat, ExportRequest, exporter_for};

use crate::cli::{ExportArgs, SelectionArgs, ViewArgs};
use crate::config::Settings;
use crate::export::{ExportOutcome, default_output_path, export_guarded};
use crate::logging::redact_value;
use crate::types::{PageReport, ReportListing};

pub fn run_reports() -> Vec<ReportListing> {
    builtin_layouts()
        .into_iter()
        .map(|layout| ReportListing {
            columns: layout.columns.len(),
            default_sort: layout
                .default_sort
                .as_ref()
                .map(|sort| match sort.direction {
                    SortDirection::Asc => format!("{} asc", sort.field),
                    SortDirection::Desc => format!("{} desc", sort.field),
                }),
            key: layout.key,
            title: layout.title,
        })
        .collect()
}

/// Everything a view or export needs after argument resolution.
struct Selection {
    layout: ReportLayout,
    records: Vec<Record>,
    view: ViewState,
}

fn select(args: &SelectionArgs) -> Result<Selection> {
    let layout = layout_by_key(&args.report).ok_or_else(|| {
        let known: Vec<String> = builtin_layouts().into_iter().map(|l| l.key).collect();
        anyhow!(
            "unknown report '{}' (expected one of: {})",
            args.report,
            known.join(", ")
        )
    })?;

    let mut scope = RecordScope::default();
    if let Some(month) = args.month {
        scope = scope.with_date_range(DateRange::month_of(month));
    } else if let (Some(from), Some(to)) = (args.from, args.to) {
        scope = scope.with_date_range(DateRange::new(from, to).context("date range")?);
    }
    if let Some(location) = &args.location {
        scope = scope.with_location(location.as_str());
    }

    let source = DataLocation::new(&args.data);
    let records = source
        .fetch(&FetchRequest::new(layout.key.as_str()))
        .map_err(|error| {
            warn!(%error, "fetch failed");
            anyhow!(error.user_message())
        })?;

    let mut view = ViewState::new(&layout, Page::DEFAULT_SIZE);
    view.set_scope(scope);
    if let Some(query) = &args.query {
        debug!(query = redact_value(query), "search");
        view.set_query(query);
    }
    if let Some(field) = &args.sort {
        let Some(path) = layout.sort_field(field) else {
            let known: Vec<&str> = layout.columns.iter().map(|c| c.header.as_str()).collect();
            bail!(
                "cannot sort {} by '{field}' (columns: {})",
                layout.key,
                known.join(", ")
            );
        };
        view.set_sort(Some(if args.desc {
            SortSpec::desc(path)
        } else {
            SortSpec::asc(path)
        }));
    }
    Ok(Selection {
        layout,
        records,
        view,
    })
}

pub fn run_view(args: &ViewArgs, settings: &Settings) -> Result<PageReport> {
    let span = info_span!("view", report = %args.selection.report);
    let _guard = span.enter();

    let page_size = args.page_size.unwrap_or(settings.display.page_size);
    let page = Page::new(args.page, page_size).context("page")?;
    let Selection {
        layout,
        records,
        mut view,
    } = select(&args.selection)?;
    view.set_page_size(page.size());
    view.go_to(page.index());

    let formatter = settings.formatter();
    let mut output = view.run(&records, &layout, &formatter);
    if output.window.is_out_of_range() {
        let clamped = PageWindow::clamp(output.window.total, view.page());
        warn!(
            requested = view.page().index(),
            shown = clamped.index(),
            "page out of range, showing last page"
        );
        view.go_to(clamped.index());
        output = view.run(&records, &layout, &formatter);
    }

    let rows = project_rows(&output.rows, &layout.columns, &formatter);
    for row in &rows {
        trace!(row = redact_value(&row.join(" | ")), "row");
    }
    Ok(PageReport {
        title: layout.title.clone(),
        scope_lines: view.scope().describe(),
        headers: headers(&layout.columns),
        numeric: layout
            .columns
            .iter()
            .map(|column| column.field.kind.is_numeric())
            .collect(),
        rows,
        window: output.window,
    })
}

#[derive(Debug)]
pub enum ExportSummary {
    Written { path: PathBuf, records: usize },
    Declined { notice: &'static str },
}

pub fn run_export(args: &ExportArgs, settings: &Settings) -> Result<ExportSummary> {
    let span = info_span!("export", report = %args.selection.report);
    let _guard = span.enter();

    let Selection {
        layout,
        records,
        view,
    } = select(&args.selection)?;
    let formatter = settings.formatter();
    let shaped = view.shaped(&records, &layout, &formatter);

    let format = ExportFormat::from(args.format);
    let exporter = exporter_for(format, settings.document_options());
    let metadata = export_metadata(view.scope(), shaped.len());
    let request = ExportRequest {
        title: &layout.title,
        metadata: &metadata,
        columns: &layout.columns,
        records: &shaped,
        formatter: &formatter,
    };

    match export_guarded(exporter.as_ref(), &request).context("encode export")? {
        ExportOutcome::Declined { notice } => Ok(ExportSummary::Declined { notice }),
        ExportOutcome::Written(bytes) => {
            let path = args.output.clone().unwrap_or_else(|| {
                default_output_path(
                    settings.export.default_output_dir.as_deref(),
                    &layout.key,
                    exporter.as_ref(),
                )
            });
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
            fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), records = shaped.len(), "export written");
            Ok(ExportSummary::Written {
                path,
                records: shaped.len(),
            })
        }
    }
}

fn export_metadata(scope: &RecordScope, count: usize) -> Vec<String> {
    let mut lines = scope.describe();
    lines.push(format!("Records: {count}"));
    lines.push(format!(
        "Generated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    ));
    lines
}
