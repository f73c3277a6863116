// Path: crates/services/src/report.rs
//! Plain-text formatting shared by the rendered reports.

use std::fmt::Write;
use time::macros::format_description;
use time::OffsetDateTime;

/// Width of the label column in sectioned reports.
pub const LABEL_WIDTH: usize = 18;
/// Width of the rules that frame a report.
pub const RULE_WIDTH: usize = 61;

/// A unix timestamp as `YYYY-MM-DD HH:MM:SS UTC`; zero renders as `never`.
pub fn format_unix_utc(ts: u64) -> String {
    if ts == 0 {
        return "never".to_string();
    }
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    i64::try_from(ts)
        .ok()
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .and_then(|at| at.format(&format).ok())
        .unwrap_or_else(|| format!("{ts} (out of range)"))
}

/// An expiration timestamp; zero means the attestation never expires.
pub fn format_expiration(ts: u64) -> String {
    if ts == 0 {
        "none (permanent)".to_string()
    } else {
        format!("{ts} ({})", format_unix_utc(ts))
    }
}

/// A revocation timestamp; zero means not revoked.
pub fn format_revocation(ts: u64) -> String {
    if ts == 0 {
        "not revoked".to_string()
    } else {
        format!("{ts} ({})", format_unix_utc(ts))
    }
}

/// An instant as an RFC 3339 UTC timestamp with whole seconds.
pub fn format_rfc3339_utc(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");
    at.to_offset(time::UtcOffset::UTC)
        .format(&format)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

/// `(none)` for empty strings.
pub fn display_or_none(s: &str) -> &str {
    if s.is_empty() {
        "(none)"
    } else {
        s
    }
}

/// Shortens `s` to at most `max` characters, marking the cut with `..`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(2);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("..");
    out
}

/// Accumulates a sectioned plain-text report.
#[derive(Debug, Default)]
pub struct TextReport {
    out: String,
}

impl TextReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A full-width `=` rule.
    pub fn banner(&mut self) -> &mut Self {
        self.line(&"=".repeat(RULE_WIDTH))
    }

    /// A section title followed by a thin rule.
    pub fn section(&mut self, title: &str) -> &mut Self {
        self.line(title);
        self.line(&"─".repeat(RULE_WIDTH))
    }

    /// One `label: value` row, label padded to [`LABEL_WIDTH`].
    pub fn field(&mut self, label: &str, value: impl std::fmt::Display) -> &mut Self {
        let label = format!("{label}:");
        let _ = writeln!(self.out, "  {label:<LABEL_WIDTH$}{value}");
        self
    }

    pub fn line(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_formatting() {
        assert_eq!(format_unix_utc(0), "never");
        assert_eq!(format_unix_utc(1), "1970-01-01 00:00:01 UTC");
        assert_eq!(format_unix_utc(1_705_598_848), "2024-01-18 17:27:28 UTC");
        assert_eq!(format_unix_utc(946_684_800), "2000-01-01 00:00:00 UTC");
        assert_eq!(format_unix_utc(2_145_916_800), "2038-01-01 00:00:00 UTC");
        assert!(format_unix_utc(u64::MAX).ends_with("(out of range)"));
    }

    #[test]
    fn expiration_and_revocation() {
        assert_eq!(format_expiration(0), "none (permanent)");
        assert_eq!(
            format_expiration(1_705_598_848),
            "1705598848 (2024-01-18 17:27:28 UTC)"
        );
        assert_eq!(format_revocation(0), "not revoked");
        assert_eq!(format_revocation(1), "1 (1970-01-01 00:00:01 UTC)");
    }

    #[test]
    fn rfc3339() {
        let at = OffsetDateTime::from_unix_timestamp(1_770_508_800).unwrap();
        assert_eq!(format_rfc3339_utc(at), "2026-02-08T00:00:00Z");
    }

    #[test]
    fn none_and_truncate() {
        assert_eq!(display_or_none(""), "(none)");
        assert_eq!(display_or_none("x"), "x");
        assert_eq!(truncate("short", 14), "short");
        assert_eq!(truncate("a-very-long-agent-id", 14), "a-very-long-..");
        assert_eq!(truncate("ééééé", 4), "éé..");
    }

    #[test]
    fn fields_align() {
        let mut report = TextReport::new();
        report.section("Query").field("Attestation UID", "0x01");
        let text = report.finish();
        assert!(text.contains("  Attestation UID:  0x01\n"));
        assert!(text.starts_with("Query\n─"));
    }
}
