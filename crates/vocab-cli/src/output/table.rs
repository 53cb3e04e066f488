//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use vocab::ValidationResult;

/// Format per-vocabulary term differences as an ASCII table.
pub fn format_validation_table(result: &ValidationResult<'_>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Vocabulary", "Missing", "Additional", "Status"]);

    for (identifier, report) in &result.vocabularies {
        let status = if report.is_complete() {
            "complete"
        } else {
            "incomplete"
        };
        table.add_row(vec![
            identifier.clone(),
            report.missing_terms.len().to_string(),
            report.additional_terms.len().to_string(),
            status.to_string(),
        ]);
    }

    table
}
