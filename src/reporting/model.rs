use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::core::target::Target;

/// Serializable report for one target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetReport {
    pub identifier: String,
    pub breached: bool,
    pub breach_count: usize,
    pub breaches: Vec<BreachEntry>,
    pub generated_at: DateTime<Utc>,
}

/// One numbered breach in a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachEntry {
    pub index: usize,
    pub short_name: String,
    pub title: String,
    pub verified: bool,
    pub downloadable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dump_url: Option<String>,
}

impl TargetReport {
    pub fn from_target(target: &Target, generated_at: DateTime<Utc>) -> Self {
        let breaches = target.breaches.iter()
            .enumerate()
            .map(|(index, breach)| BreachEntry {
                index,
                short_name: breach.short_name.clone(),
                title: breach.title.clone(),
                verified: breach.is_verified,
                downloadable: breach.is_downloadable(),
                dump_url: breach.is_downloadable().then(|| breach.dump_url.clone()),
            })
            .collect();

        Self {
            identifier: target.identifier.clone(),
            breached: target.is_breached(),
            breach_count: target.breaches.len(),
            breaches,
            generated_at,
        }
    }
}
