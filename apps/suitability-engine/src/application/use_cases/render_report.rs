//! Render Report Use Case

use std::sync::Arc;

use crate::application::ports::{RenderedReport, ReportRendererPort};
use crate::domain::shared::Timestamp;
use crate::domain::suitability::SuitabilityReport;

/// Use case for producing the downloadable suitability document.
pub struct RenderReportUseCase<R>
where
    R: ReportRendererPort,
{
    renderer: Arc<R>,
}

impl<R> RenderReportUseCase<R>
where
    R: ReportRendererPort,
{
    /// Create a new RenderReportUseCase.
    pub const fn new(renderer: Arc<R>) -> Self {
        Self { renderer }
    }

    /// Render `report`, stamped with the current time.
    pub fn execute(&self, report: &SuitabilityReport) -> RenderedReport {
        let rendered = self.renderer.render(report, Timestamp::now());
        tracing::debug!(
            report_id = %report.id,
            filename = %rendered.filename,
            bytes = rendered.content.len(),
            "Suitability report rendered"
        );
        rendered
    }
}
