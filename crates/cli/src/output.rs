//! Output formatting functions.

use crate::cli::OutputFormat;
use crate::doctor::Report;

/// Format a doctor report for output.
pub fn format_report(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(report),
        OutputFormat::Pretty => format_pretty(report),
    }
}

pub fn format_json(report: &Report) -> String {
    serde_json::to_string_pretty(&serde_json::json!({
        "ok": report.is_ok(),
        "issues": report.issues,
    }))
    .unwrap_or_default()
}

pub fn format_pretty(report: &Report) -> String {
    if report.is_ok() {
        return "bootwire doctor: OK".to_string();
    }

    let mut output = "bootwire doctor: issues found".to_string();
    for issue in &report.issues {
        output.push_str(&format!(
            "\n[{}] {}: {}",
            issue.level, issue.code, issue.message
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctor::{Issue, Level};

    fn report() -> Report {
        Report {
            issues: vec![Issue {
                level: Level::Warn,
                code: "preset-target",
                message: "ActiveSearch may be missing a target in src/a.rs".to_string(),
            }],
        }
    }

    #[test]
    fn test_pretty_ok() {
        assert_eq!(format_pretty(&Report::default()), "bootwire doctor: OK");
    }

    #[test]
    fn test_pretty_issues() {
        assert_eq!(
            format_report(&report(), OutputFormat::Pretty),
            "bootwire doctor: issues found\n[warn] preset-target: ActiveSearch may be missing a target in src/a.rs"
        );
    }

    #[test]
    fn test_json_issues() {
        let value: serde_json::Value =
            serde_json::from_str(&format_report(&report(), OutputFormat::Json)).unwrap();

        assert_eq!(value["ok"], false);
        assert_eq!(value["issues"][0]["level"], "warn");
        assert_eq!(value["issues"][0]["code"], "preset-target");
    }
}
