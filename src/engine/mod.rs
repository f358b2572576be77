mod workflow;

pub use workflow::{LookupWorkflow, RunSummary};
