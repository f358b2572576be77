use crate::core::target::{BreachRecord, Target};
use crate::error::PwnFinderResult;
use crate::reporting::format::{ReportFormat, ReportRenderer};

/// Plain text report, one line per fact
pub struct TextRenderer;

impl TextRenderer {
    /// Create a new text renderer
    pub fn new() -> Self {
        Self
    }

    /// Build the report lines in display order
    pub fn lines(target: &Target) -> Vec<String> {
        if !target.is_breached() {
            return vec![format!("Report for {}: Not breached.", target.identifier)];
        }

        let mut lines = vec![format!(
            "Report for {}: Breached. Found {} dumps.",
            target.identifier,
            target.breaches.len()
        )];

        for (index, breach) in target.breaches.iter().enumerate() {
            lines.push(format!("\tDump report #{}", index));
            lines.extend(breach_lines(breach));
        }

        lines
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn breach_lines(breach: &BreachRecord) -> Vec<String> {
    let mut lines = vec![
        format!("\t\tShort name: {}", breach.short_name),
        format!("\t\tLong name: {}", breach.title),
        format!("\t\tVerified: {}", yes_no(breach.is_verified)),
        format!("\t\tDownloadable: {}", yes_no(breach.is_downloadable())),
    ];

    if breach.is_downloadable() {
        lines.push(format!("\t\tURL: {}", breach.dump_url));
    }

    lines
}

impl ReportRenderer for TextRenderer {
    fn render(&self, target: &Target) -> PwnFinderResult<String> {
        Ok(Self::lines(target).join("\n"))
    }

    fn supported_format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breach(name: &str, verified: bool, dump_url: &str) -> BreachRecord {
        let mut record = BreachRecord::new(name, &format!("{} Inc.", name), verified);
        record.set_dump_url(dump_url.to_string());
        record
    }

    #[test]
    fn test_not_breached_is_single_line() {
        let report = TextRenderer::new().render(&Target::new("carol")).unwrap();
        assert_eq!(report, "Report for carol: Not breached.");
    }

    #[test]
    fn test_breached_report_layout() {
        let mut target = Target::new("alice@example.com");
        target.breaches.push(breach("Adobe", true, "http://example.com/d.zip"));
        target.breaches.push(breach("Lastfm", false, ""));

        let report = TextRenderer::new().render(&target).unwrap();
        let expected = [
            "Report for alice@example.com: Breached. Found 2 dumps.",
            "\tDump report #0",
            "\t\tShort name: Adobe",
            "\t\tLong name: Adobe Inc.",
            "\t\tVerified: yes",
            "\t\tDownloadable: yes",
            "\t\tURL: http://example.com/d.zip",
            "\tDump report #1",
            "\t\tShort name: Lastfm",
            "\t\tLong name: Lastfm Inc.",
            "\t\tVerified: no",
            "\t\tDownloadable: no",
        ].join("\n");

        assert_eq!(report, expected);
    }

    #[test]
    fn test_block_and_url_counts() {
        let mut target = Target::new("bob");
        for (i, url) in ["", "http://a.test/1.zip", "", "http://a.test/3.zip", ""].iter().enumerate() {
            target.breaches.push(breach(&format!("Breach{}", i), i % 2 == 0, url));
        }

        let report = TextRenderer::new().render(&target).unwrap();
        let count = |needle: &str| report.lines().filter(|l| l.contains(needle)).count();

        assert_eq!(count("Dump report #"), 5);
        assert_eq!(count("URL: "), 2);
        assert_eq!(count("Downloadable: yes"), 2);
        assert_eq!(count("Downloadable: no"), 3);
        assert!(report.contains("\tDump report #4"));
    }
}
