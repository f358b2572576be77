pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod osint;
pub mod reporting;
pub mod utils;

// Re-export main types for easier access
pub use config::Config;
pub use core::{BreachRecord, Target};
pub use engine::{LookupWorkflow, RunSummary};
pub use error::{PwnFinderError, PwnFinderResult};
pub use osint::{BreachLookupClient, DumpLocator, BreachSource, DumpSource};
pub use reporting::{ReportFormat, ReportRenderer, renderer_for};
