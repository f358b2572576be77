mod format;
mod model;
pub mod formats;

use chrono::{DateTime, Utc};

pub use format::{ReportFormat, ReportRenderer};
pub use model::{TargetReport, BreachEntry};

/// Get the renderer for a report format. `generated_at` stamps every JSON report of the run.
pub fn renderer_for(format: ReportFormat, generated_at: DateTime<Utc>) -> Box<dyn ReportRenderer> {
    match format {
        ReportFormat::Text => Box::new(formats::TextRenderer::new()),
        ReportFormat::Json => Box::new(formats::JsonRenderer::new(generated_at)),
    }
}
