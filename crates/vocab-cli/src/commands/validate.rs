//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use vocab::{compute_suggestions, VocabularyReport, VocabularyStore};

use crate::commands::load::{load_models, load_vocabularies};
use crate::output::table::format_validation_table;

/// Arguments for the validate command.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Model definition files (YAML or JSON), repeatable.
    #[arg(long = "model", required = true)]
    pub models: Vec<PathBuf>,

    /// Vocabulary files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Exit with non-zero code if anything is missing or additional.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the validate command.
pub fn run_validate(args: ValidateArgs) -> Result<i32> {
    let models = load_models(&args.models)?;
    let mut store = VocabularyStore::new();
    load_vocabularies(&mut store, &args.files)?;

    let result = store.validate(&models);

    if args.json {
        let json_output = serde_json::to_string_pretty(&result).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        if !result.vocabularies.is_empty() {
            println!("{}", format_validation_table(&result));
        }

        if !result.missing_vocabularies.is_empty() {
            println!("\nNamespaces without a vocabulary:");
            for namespace in &result.missing_vocabularies {
                println!("  - {}", namespace);
            }
        }

        if !result.additional_vocabularies.is_empty() {
            println!("\nVocabularies without a model:");
            for vocabulary in &result.additional_vocabularies {
                println!("  + {}", vocabulary.identifier());
            }
        }

        for (identifier, report) in &result.vocabularies {
            if report.is_complete() {
                continue;
            }
            println!("\nIn {}:", identifier);
            for line in describe_report(report) {
                println!("  {}", line);
            }
        }

        if result.is_valid() {
            let message = "All vocabularies match their models";
            println!(
                "{}",
                message.if_supports_color(Stream::Stdout, |t| t.green())
            );
        }
    }

    if args.strict && !result.is_valid() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// One line per missing or additional term.
///
/// Additional terms that look like a misspelling of a missing term carry a
/// hint naming the likely intended term.
fn describe_report(report: &VocabularyReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .missing_terms
        .iter()
        .map(|term| format!("- missing {}", term))
        .collect();

    for term in &report.additional_terms {
        let suggestions = compute_suggestions(term, &report.missing_terms);
        match suggestions.first() {
            Some(suggestion) => lines.push(format!(
                "+ additional {} (did you mean '{}'?)",
                term, suggestion
            )),
            None => lines.push(format!("+ additional {}", term)),
        }
    }

    lines
}
