use crate::config::Config;
use crate::core::binder::{BindIssue, FieldBinder, SheetHeader};
use crate::core::layout::pages_needed;
use crate::core::pages::PageReplicator;
use crate::document::Document;
use crate::errors::AppResult;
use crate::models::{Record, Summary};
use crate::source::open_source;
use crate::ui::messages::{error, header, info, success, warning};
use crate::utils::format_hours;
use crate::utils::formatting::pad_right;

/// What a render produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    pub records: usize,
    /// Pages holding at least one record.
    pub pages: usize,
    pub pages_added: usize,
    pub issues: Vec<BindIssue>,
}

/// High-level logic: records + template → filled visit sheet.
pub struct RenderLogic;

impl RenderLogic {
    /// Replicate pages and bind every record, in memory.
    ///
    /// With no records the document is left exactly as it was.
    pub fn render(
        doc: &mut Document,
        records: &[Record],
        sheet_header: &SheetHeader,
    ) -> AppResult<RenderOutcome> {
        let pages_added = PageReplicator::ensure_pages(doc, records.len())?;

        let issues = if records.is_empty() {
            Vec::new()
        } else {
            let summary = Summary::from_records(records);
            FieldBinder::new(doc, sheet_header, &summary).bind_all(records)?
        };

        Ok(RenderOutcome {
            records: records.len(),
            pages: pages_needed(records.len()),
            pages_added,
            issues,
        })
    }

    /// Full run: load records and template, render, write the output file.
    pub fn run(cfg: &Config, sheet_header: &SheetHeader) -> AppResult<RenderOutcome> {
        let source_path = cfg.source_path();
        info(format!("Loading the records from {}...", source_path.display()));
        let records = open_source(&source_path, &cfg.sheet)?.fetch_records()?;
        print_preview(&records);

        let template_path = cfg.template_path();
        info(format!("Loading the template {}...", template_path.display()));
        let mut doc = Document::load(&template_path)?;

        if records.is_empty() {
            warning("No records found: the template is written back unchanged.");
        }

        let outcome = Self::render(&mut doc, &records, sheet_header)?;
        info(format!("{} pages are added.", outcome.pages_added));

        for issue in &outcome.issues {
            match issue {
                BindIssue::UnknownLocation { .. } => warning(issue),
                BindIssue::MissingDetail { .. } => error(issue),
            }
        }

        let output_path = cfg.output_path();
        doc.save(&output_path)?;
        success(format!(
            "Visit sheet written: {} ({} records, {} pages)",
            output_path.display(),
            outcome.records,
            outcome.pages
        ));

        Ok(outcome)
    }
}

/// Show the first rows so the user can eyeball what was read.
fn print_preview(records: &[Record]) {
    header(format!("{} records", records.len()));
    for r in records.iter().take(5) {
        println!(
            "{} {} {} {} {}",
            pad_right(&r.date.format("%Y-%m-%d").to_string(), 11),
            pad_right(&format_hours(r.start_hour), 6),
            pad_right(&format_hours(r.end_hour), 6),
            pad_right(&r.location_code, 12),
            r.detail
        );
    }
    if records.len() > 5 {
        println!("...");
    }
}
