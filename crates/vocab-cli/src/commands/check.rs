//! Implementation of the `vocab check` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Report};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use vocab::{VocabularyError, VocabularyStore};

use crate::commands::load::read_file;
use crate::output::VocabDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Vocabulary files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a single checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    terms: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the check command.
///
/// Every file is parsed and registered in a scratch store so that two files
/// declaring the same namespace and locale are reported as well.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut store = VocabularyStore::new();
    let mut results = Vec::with_capacity(args.files.len());
    let mut failures = 0;

    for path in &args.files {
        let content = read_file(path)?;
        let file = path.display().to_string();

        let outcome = match store.add_vocabulary(&content) {
            Ok(vocabulary) => Ok((vocabulary.identifier(), vocabulary.len())),
            Err(VocabularyError::Parse(e)) => {
                Err(Report::new(VocabDiagnostic::from_parse_error(path, &content, &e)))
            }
            Err(e) => Err(miette::miette!("{}: {}", file, e)),
        };

        match outcome {
            Ok((identifier, terms)) => {
                if !args.json {
                    println!(
                        "{} {} ({}, {} terms)",
                        "ok".if_supports_color(Stream::Stdout, |t| t.green()),
                        file,
                        identifier,
                        terms
                    );
                }
                results.push(CheckJson {
                    file,
                    identifier: Some(identifier),
                    terms: Some(terms),
                    error: None,
                });
            }
            Err(report) => {
                failures += 1;
                if !args.json {
                    eprintln!("{:?}", report);
                }
                results.push(CheckJson {
                    file,
                    identifier: None,
                    terms: None,
                    error: Some(report.to_string()),
                });
            }
        }
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&results).into_diagnostic()?;
        println!("{}", json_output);
    } else if failures > 0 {
        println!(
            "\n{} of {} file(s) failed",
            failures.if_supports_color(Stream::Stdout, |t| t.red()),
            args.files.len()
        );
    }

    if failures > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn vocabulary_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn well_formed_files_pass() {
        let file = vocabulary_file("locale: en\nnamespace: org.acme\n");
        let code = run_check(CheckArgs {
            files: vec![file.path().to_path_buf()],
            json: true,
        })
        .unwrap();
        assert_eq!(code, exitcode::OK);
    }

    #[test]
    fn duplicate_vocabularies_fail() {
        let first = vocabulary_file("locale: en\nnamespace: org.acme\n");
        let second = vocabulary_file("locale: EN\nnamespace: org.acme\n");
        let code = run_check(CheckArgs {
            files: vec![first.path().to_path_buf(), second.path().to_path_buf()],
            json: true,
        })
        .unwrap();
        assert_eq!(code, exitcode::DATAERR);
    }

    #[test]
    fn malformed_files_fail_without_stopping_the_run() {
        let broken = vocabulary_file("locale: en\n");
        let fine = vocabulary_file("locale: fr\nnamespace: org.acme\n");
        let code = run_check(CheckArgs {
            files: vec![broken.path().to_path_buf(), fine.path().to_path_buf()],
            json: true,
        })
        .unwrap();
        assert_eq!(code, exitcode::DATAERR);
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let result = run_check(CheckArgs {
            files: vec![PathBuf::from("/nonexistent/acme.voc")],
            json: true,
        });
        assert!(result.is_err());
    }
}
