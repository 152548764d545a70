//! Headless rendering of page ranges
//!
//! Renders each requested page into an offscreen frame the size of the
//! viewport, through the same pipeline the window uses, and reports what
//! happened. Nothing is written to disk.

use std::path::PathBuf;

use serde::Serialize;

use crate::model::{DocumentSession, ViewportGeometry};
use crate::page_range::parse_ranges;
use crate::raster::{render_fitted, Placement};
use crate::transform::ViewParams;
use crate::view::Frame;

/// One document and the pages wanted from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentJob {
    pub path: PathBuf,
    /// Range list, e.g. `"1-3,7"`
    pub ranges: String,
}

impl DocumentJob {
    pub fn new(path: impl Into<PathBuf>, ranges: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ranges: ranges.into(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub params: ViewParams,
    pub viewport: ViewportGeometry,
    /// Skip failing documents instead of stopping
    pub ignore_errors: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResult {
    pub page: usize,
    pub width: i32,
    pub height: i32,
    pub warnings: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    pub path: PathBuf,
    pub display_name: String,
    pub page_count: usize,
    pub pages: Vec<PageResult>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub documents: Vec<DocumentReport>,
    pub had_errors: bool,
}

impl BatchReport {
    /// One line per page, one per failure
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for doc in &self.documents {
            for page in &doc.pages {
                out.push_str(&format!(
                    "{}: page {} of {} rendered at {}x{}",
                    doc.display_name, page.page, doc.page_count, page.width, page.height
                ));
                if page.warnings > 0 {
                    out.push_str(&format!(" ({} warnings)", page.warnings));
                }
                out.push('\n');
            }
            if let Some(error) = &doc.error {
                out.push_str(&format!("{}: error: {}\n", doc.display_name, error));
            }
        }
        out
    }
}

/// Render every job. Stops at the first failing document unless
/// `ignore_errors` is set, in which case only that document is abandoned.
pub fn run_batch(
    session: &mut DocumentSession,
    jobs: &[DocumentJob],
    options: &BatchOptions,
) -> BatchReport {
    let ViewportGeometry { width, height } = options.viewport;
    let mut buffer = vec![0u32; width as usize * height as usize];
    let placement = Placement::new(width, height, 0, 0);
    let mut report = BatchReport::default();

    for job in jobs {
        let display_name = crate::model::display_name_for(&job.path);
        let mut doc_report = DocumentReport {
            path: job.path.clone(),
            display_name,
            page_count: 0,
            pages: Vec::new(),
            error: None,
        };

        let failed = match render_job(session, job, options, &mut buffer, placement, &mut doc_report)
        {
            Ok(warned) => {
                report.had_errors |= warned;
                false
            }
            Err(e) => {
                tracing::error!("{}: {}", job.path.display(), e);
                doc_report.error = Some(e);
                report.had_errors = true;
                true
            }
        };

        session.close();
        report.documents.push(doc_report);

        if failed && !options.ignore_errors {
            tracing::warn!("Stopping after error; pass --ignore-errors to continue");
            break;
        }
    }

    report
}

/// Returns whether any page produced engine warnings
fn render_job(
    session: &mut DocumentSession,
    job: &DocumentJob,
    options: &BatchOptions,
    buffer: &mut [u32],
    placement: Placement,
    doc_report: &mut DocumentReport,
) -> Result<bool, String> {
    let doc = session.open(&job.path).map_err(|e| e.to_string())?;
    doc_report.page_count = doc.page_count;

    let ranges = parse_ranges(&job.ranges, doc.page_count).map_err(|e| e.to_string())?;
    let mut warned = false;

    for page in ranges.iter().flat_map(|r| r.pages()) {
        let mut frame = Frame::new(
            buffer,
            placement.viewport_width as usize,
            placement.viewport_height as usize,
        );
        frame.clear(0xFF000000);

        let result = render_fitted(doc.handle.as_ref(), page, &options.params, &mut frame, placement)
            .map_err(|e| e.to_string())?;

        warned |= result.warnings > 0;
        doc_report.pages.push(PageResult {
            page,
            width: result.bbox.width(),
            height: result.bbox.height(),
            warnings: result.warnings,
        });
    }

    Ok(warned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_pages_and_errors() {
        let report = BatchReport {
            documents: vec![DocumentReport {
                path: PathBuf::from("/x/a.pdf"),
                display_name: "a.pdf".into(),
                page_count: 3,
                pages: vec![PageResult {
                    page: 2,
                    width: 396,
                    height: 512,
                    warnings: 1,
                }],
                error: Some("cannot load page 3".into()),
            }],
            had_errors: true,
        };
        let text = report.summary();
        assert!(text.contains("a.pdf: page 2 of 3 rendered at 396x512 (1 warnings)"));
        assert!(text.contains("a.pdf: error: cannot load page 3"));
    }
}
