use chrono::{DateTime, Utc};

use crate::core::target::Target;
use crate::error::{PwnFinderError, PwnFinderResult};
use crate::reporting::format::{ReportFormat, ReportRenderer};
use crate::reporting::model::TargetReport;

/// JSON report renderer
pub struct JsonRenderer {
    generated_at: DateTime<Utc>,
}

impl JsonRenderer {
    /// Create a JSON renderer whose reports carry the given timestamp
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self { generated_at }
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, target: &Target) -> PwnFinderResult<String> {
        let report = TargetReport::from_target(target, self.generated_at);
        serde_json::to_string_pretty(&report)
            .map_err(|e| PwnFinderError::SerializationError(e.to_string()))
    }

    fn supported_format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::core::target::BreachRecord;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_json_report() {
        let mut target = Target::new("alice@example.com");
        let mut adobe = BreachRecord::new("Adobe", "Adobe", true);
        adobe.set_dump_url("http://example.com/d.zip".to_string());
        target.breaches.push(adobe);
        target.breaches.push(BreachRecord::new("Lastfm", "Last.fm", false));

        let rendered = JsonRenderer::new(fixed_time()).render(&target).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["identifier"], "alice@example.com");
        assert_eq!(value["breached"], true);
        assert_eq!(value["breach_count"], 2);
        assert_eq!(value["breaches"][0]["index"], 0);
        assert_eq!(value["breaches"][0]["downloadable"], true);
        assert_eq!(value["breaches"][0]["dump_url"], "http://example.com/d.zip");
        assert_eq!(value["breaches"][1]["title"], "Last.fm");
        assert_eq!(value["breaches"][1]["verified"], false);
        assert!(value["breaches"][1].get("dump_url").is_none());
        assert_eq!(value["generated_at"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_json_not_breached() {
        let rendered = JsonRenderer::new(fixed_time()).render(&Target::new("carol")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["breached"], false);
        assert_eq!(value["breach_count"], 0);
        assert_eq!(value["breaches"].as_array().map(|b| b.len()), Some(0));
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let mut target = Target::new("dave");
        target.breaches.push(BreachRecord::new("Adobe", "Adobe", true));

        let renderer = JsonRenderer::new(fixed_time());
        assert_eq!(renderer.render(&target).unwrap(), renderer.render(&target).unwrap());
    }
}
