use clap::ValueEnum;
use serde::{Serialize, Deserialize};

use crate::core::target::Target;
use crate::error::PwnFinderResult;

/// Report format enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Turns a finished target into printable text. Implementations do no I/O.
pub trait ReportRenderer: Send + Sync {
    /// Render the report for one target
    fn render(&self, target: &Target) -> PwnFinderResult<String>;

    /// Get the supported format
    fn supported_format(&self) -> ReportFormat;
}
