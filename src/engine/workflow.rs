use std::io::Write;
use serde::{Serialize, Deserialize};
use tracing::{info, debug, warn};

use crate::core::target::Target;
use crate::error::{PwnFinderError, PwnFinderResult};
use crate::osint::sources::{BreachSource, DumpSource};
use crate::reporting::ReportRenderer;

/// Totals for a finished run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunSummary {
    pub targets: usize,
    pub breached_targets: usize,
    pub breaches: usize,
    pub dumps_located: usize,
}

/// Sequential lookup pipeline: breaches, optional dump search, render, print.
///
/// Each target completes fully before the next one starts, so reports come out
/// in input order.
pub struct LookupWorkflow {
    breaches: Box<dyn BreachSource>,
    /// Only set when dump searching is enabled
    dumps: Option<Box<dyn DumpSource>>,
    renderer: Box<dyn ReportRenderer>,
}

impl LookupWorkflow {
    /// Create a new workflow
    pub fn new(
        breaches: Box<dyn BreachSource>,
        dumps: Option<Box<dyn DumpSource>>,
        renderer: Box<dyn ReportRenderer>,
    ) -> Self {
        Self {
            breaches,
            dumps,
            renderer,
        }
    }

    /// Look up one identifier and, when enabled, search dumps for its breaches
    pub async fn investigate(&self, identifier: &str) -> Target {
        let mut target = Target::new(identifier);

        match self.breaches.fetch_breaches(identifier).await {
            Ok(breaches) => target.breaches = breaches,
            Err(e) => warn!("Breach lookup failed for {}: {}", identifier, e),
        }

        if let Some(dumps) = &self.dumps {
            // In breach order so lookups line up with the report numbering
            for breach in target.breaches.iter_mut() {
                match dumps.locate_dump(&breach.short_name).await {
                    Ok(Some(url)) => breach.set_dump_url(url),
                    Ok(None) => {}
                    Err(e) => warn!("Dump search failed for {}: {}", breach.short_name, e),
                }
            }
        }

        target
    }

    /// Process every identifier in order, writing each report as soon as it is ready
    pub async fn run<W: Write>(&self, identifiers: &[String], out: &mut W) -> PwnFinderResult<RunSummary> {
        info!("Starting lookup of {} targets", identifiers.len());
        let mut summary = RunSummary::default();

        for identifier in identifiers {
            debug!("Investigating target: {}", identifier);
            let target = self.investigate(identifier).await;

            let report = self.renderer.render(&target)?;
            writeln!(out, "{}", report)
                .and_then(|_| out.flush())
                .map_err(|e| PwnFinderError::UnexpectedError(format!("Failed to write report: {}", e)))?;

            summary.targets += 1;
            summary.breaches += target.breaches.len();
            summary.dumps_located += target.downloadable_count();
            if target.is_breached() {
                summary.breached_targets += 1;
            }
        }

        info!(
            "Finished: {} targets, {} breached, {} breaches, {} dumps located",
            summary.targets, summary.breached_targets, summary.breaches, summary.dumps_located
        );
        Ok(summary)
    }
}
