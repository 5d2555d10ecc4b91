// src/report.rs
// =============================================================================
// Turns a CheckReport into what the user sees on stdout.
//
// Text output is deliberately small so it can be diffed in CI logs:
//
//   All files indexed!
//
// or
//
//   Missing files in App.jsx:
//     docs/new-page.md
//     docs/other.md
// =============================================================================

use crate::checker::CheckReport;
use crate::error::Result;

pub const SUCCESS_LINE: &str = "All files indexed!";

// Renders the human-readable report, one trailing newline per line
pub fn render_text(report: &CheckReport) -> String {
    if report.is_complete() {
        return format!("{}\n", SUCCESS_LINE);
    }

    let mut out = format!("Missing files in {}:\n", report.reference);
    for path in &report.missing {
        out.push_str("  ");
        out.push_str(path);
        out.push('\n');
    }
    out
}

// Renders the report as pretty-printed JSON (no trailing newline)
pub fn render_json(report: &CheckReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(missing: &[&str]) -> CheckReport {
        CheckReport {
            reference: "App.jsx".to_string(),
            checked: 2,
            excluded: 0,
            missing: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_success_is_a_single_line() {
        assert_eq!(render_text(&report(&[])), "All files indexed!\n");
    }

    #[test]
    fn test_missing_files_are_indented_under_header() {
        let text = render_text(&report(&["src/missing.js", "docs/a.md"]));
        assert_eq!(
            text,
            "Missing files in App.jsx:\n  src/missing.js\n  docs/a.md\n"
        );
    }

    #[test]
    fn test_json_lists_missing_paths() {
        let json = render_json(&report(&["src/missing.js"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["missing"], serde_json::json!(["src/missing.js"]));
        assert_eq!(value["excluded"], 0);
    }
}
