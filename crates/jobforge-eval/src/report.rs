use crate::model::Violation;

/// Render a deterministic text report from the validation outcome.
pub fn render_report(records_checked: u64, violations: &[Violation], max_examples: usize) -> String {
    let mut lines = Vec::new();

    lines.push("# Jobforge validation report".to_string());
    lines.push(String::new());
    lines.push(format!("- records_checked: {records_checked}"));
    lines.push(format!("- violations: {}", violations.len()));
    lines.push(format!(
        "- status: {}",
        if violations.is_empty() { "pass" } else { "fail" }
    ));

    if !violations.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "## Violations (first {})",
            max_examples.min(violations.len())
        ));
        for violation in violations.iter().take(max_examples) {
            lines.push(format!("- {}: {}", violation.record_id, violation.message));
        }
        if violations.len() > max_examples {
            lines.push(format!(
                "- ... {} more violation(s)",
                violations.len() - max_examples
            ));
        }
    }

    lines.join("\n")
}
