//! Report formatting for audit results.
//!
//! Violations are formatted as `<file> - <questionId>: <message>` so a
//! content author can jump straight to the offending question. The rest of
//! the text report (summary, pass/fail banner) is for humans reading CI
//! logs; the JSON rendering is for scripts.

use crate::audit::{AuditReport, Violation};
use colored::Colorize;
use serde_json::json;

/// Format one violation for human consumption.
pub fn format_violation(violation: &Violation) -> String {
    format!(
        "{} - {}: {}",
        violation.file.display(),
        violation.question_id,
        violation.message
    )
}

/// Render the full text report.
///
/// With `quiet`, only the violation lines are emitted (one per line, empty
/// output for a passing audit).
pub fn render_text(report: &AuditReport, quiet: bool) -> String {
    let mut out = String::new();

    for violation in &report.violations {
        out.push_str(&format_violation(violation));
        out.push('\n');
    }

    if quiet {
        return out;
    }

    if !report.violations.is_empty() {
        out.push('\n');
    }

    out.push_str(&format!(
        "Files audited: {} ({} skipped)\n",
        report.files_scanned,
        report.files_skipped.len()
    ));
    out.push_str(&format!(
        "Questions evaluated: {}\n",
        report.questions_evaluated
    ));
    out.push_str(&format!("Duration: {}ms\n", report.duration_ms));

    for skipped in &report.files_skipped {
        out.push_str(&format!(
            "Skipped {}: {}\n",
            skipped.path.display(),
            skipped.reason
        ));
    }

    if report.passed() {
        out.push_str(&format!("{}\n", "Audit passed: no violations".green().bold()));
    } else {
        let by_topic = report.by_topic();
        for (topic, count) in &by_topic {
            out.push_str(&format!("  {}: {}\n", topic, count));
        }
        out.push_str(&format!(
            "{}\n",
            format!("Audit failed: {} violation(s)", report.violations.len())
                .red()
                .bold()
        ));
    }

    out
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &AuditReport) -> serde_json::Result<String> {
    let by_topic: serde_json::Map<String, serde_json::Value> = report
        .by_topic()
        .into_iter()
        .map(|(topic, count)| (topic.as_str().to_string(), json!(count)))
        .collect();

    serde_json::to_string_pretty(&json!({
        "passed": report.passed(),
        "violations": &report.violations,
        "violations_by_topic": by_topic,
        "files_scanned": report.files_scanned,
        "files_skipped": &report.files_skipped,
        "questions_evaluated": report.questions_evaluated,
        "duration_ms": report.duration_ms,
    }))
}
