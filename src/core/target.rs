// src/core/target.rs
use std::path::Path;
use serde::{Serialize, Deserialize};
use tokio::fs;
use tracing::{info, debug};

use crate::error::{PwnFinderError, PwnFinderResult};

/// One breach a credential identifier appeared in
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreachRecord {
    /// Machine-friendly breach name, also the dump search key
    pub short_name: String,
    /// Human-friendly breach name
    pub title: String,
    /// Empty until a dump has been located
    pub dump_url: String,
    pub is_verified: bool,
}

impl BreachRecord {
    pub fn new(short_name: &str, title: &str, is_verified: bool) -> Self {
        Self {
            short_name: short_name.to_string(),
            title: title.to_string(),
            dump_url: String::new(),
            is_verified,
        }
    }

    pub fn is_downloadable(&self) -> bool {
        !self.dump_url.is_empty()
    }

    pub fn set_dump_url(&mut self, dump_url: String) {
        self.dump_url = dump_url;
    }
}

/// A credential identifier under investigation and the breaches found for it
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Target {
    pub identifier: String,
    /// API order, kept through enrichment and rendering
    pub breaches: Vec<BreachRecord>,
}

impl Target {
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            breaches: Vec::new(),
        }
    }

    pub fn is_breached(&self) -> bool {
        !self.breaches.is_empty()
    }

    pub fn downloadable_count(&self) -> usize {
        self.breaches.iter().filter(|b| b.is_downloadable()).count()
    }
}

/// Load targets from a newline-delimited file, one identifier per line
pub async fn load_targets_from_file(path: &Path) -> PwnFinderResult<Vec<String>> {
    let content = fs::read_to_string(path).await
        .map_err(|e| PwnFinderError::FileError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // `lines` strips both "\n" and "\r\n"; blank lines are kept as targets
    let targets: Vec<String> = content.lines().map(|line| line.to_string()).collect();

    info!("Loaded {} targets from {}", targets.len(), path.display());
    Ok(targets)
}

/// Pick the run's targets. A target file takes precedence over direct targets.
pub async fn resolve_targets(direct: &[String], target_file: Option<&Path>) -> PwnFinderResult<Vec<String>> {
    let targets = match target_file {
        Some(path) => load_targets_from_file(path).await?,
        None => {
            debug!("Using {} targets from the command line", direct.len());
            direct.to_vec()
        }
    };

    if targets.is_empty() {
        info!("No targets to look up");
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_breach_record_downloadable() {
        let mut record = BreachRecord::new("Adobe", "Adobe", true);
        assert!(!record.is_downloadable());

        record.set_dump_url("http://example.com/adobe.zip".to_string());
        assert!(record.is_downloadable());
    }

    #[test]
    fn test_target_breached() {
        let mut target = Target::new("alice@example.com");
        assert!(!target.is_breached());
        assert_eq!(target.downloadable_count(), 0);

        target.breaches.push(BreachRecord::new("LinkedIn", "LinkedIn", true));
        assert!(target.is_breached());
    }

    #[tokio::test]
    async fn test_load_targets_preserves_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "bob\r\nalice@example.com\n\ncarol").unwrap();
        file.flush().unwrap();

        let targets = load_targets_from_file(file.path()).await.unwrap();
        assert_eq!(targets, vec!["bob", "alice@example.com", "", "carol"]);
    }

    #[tokio::test]
    async fn test_load_targets_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("targets.txt");

        let err = load_targets_from_file(&missing).await.unwrap_err();
        assert!(matches!(err, PwnFinderError::FileError { .. }));
    }

    #[tokio::test]
    async fn test_target_file_takes_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "from-file").unwrap();
        file.flush().unwrap();

        let direct = vec!["from-args".to_string()];
        let targets = resolve_targets(&direct, Some(file.path())).await.unwrap();
        assert_eq!(targets, vec!["from-file"]);

        let targets = resolve_targets(&direct, None).await.unwrap();
        assert_eq!(targets, vec!["from-args"]);
    }

    #[tokio::test]
    async fn test_empty_target_file_yields_no_targets() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let targets = resolve_targets(&[], Some(file.path())).await.unwrap();
        assert!(targets.is_empty());
    }
}
