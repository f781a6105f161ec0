//! Report Renderer Port (Driven Port)
//!
//! Turns a suitability report into a downloadable document.

use crate::domain::shared::Timestamp;
use crate::domain::suitability::SuitabilityReport;

/// A rendered, downloadable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    /// Suggested file name.
    pub filename: String,
    /// MIME type of `content`.
    pub content_type: &'static str,
    /// Document body.
    pub content: String,
}

/// Port for rendering reports.
pub trait ReportRendererPort: Send + Sync {
    /// Render `report`, stamping the document with `generated_at`.
    fn render(&self, report: &SuitabilityReport, generated_at: Timestamp) -> RenderedReport;
}
