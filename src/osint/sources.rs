// src/osint/sources.rs
use async_trait::async_trait;

use crate::core::target::BreachRecord;
use crate::error::PwnFinderResult;

/// Source of breach records for a credential identifier
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BreachSource: Send + Sync {
    /// Fetch the breaches an identifier appears in, in the order the source reports them
    async fn fetch_breaches(&self, identifier: &str) -> PwnFinderResult<Vec<BreachRecord>>;
}

/// Source of downloadable dumps for a breach
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DumpSource: Send + Sync {
    /// Search for a dump by breach short name. `Ok(None)` means nothing was listed.
    async fn locate_dump(&self, short_name: &str) -> PwnFinderResult<Option<String>>;
}
