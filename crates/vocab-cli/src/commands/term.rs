//! Implementation of the `vocab term` command.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use serde::Serialize;
use vocab::{english_missing_term_generator, MissingTermGenerator, VocabularyStore};

use crate::commands::load::{load_models, load_vocabularies};

/// Arguments for the term command.
#[derive(Debug, clap::Args)]
pub struct TermArgs {
    /// Namespace of the declaration
    #[arg(long, required = true)]
    pub namespace: String,

    /// Requested locale (e.g., en-GB); generalized until a term is found
    #[arg(long, required = true)]
    pub locale: String,

    /// Declaration name
    #[arg(long, required = true)]
    pub declaration: String,

    /// Property name
    #[arg(long)]
    pub property: Option<String>,

    /// Model definition files; when given, property terms follow inheritance
    #[arg(long = "model")]
    pub models: Vec<PathBuf>,

    /// Derive an English term from the names when no vocabulary has one
    #[arg(long)]
    pub generate_missing: bool,

    /// Vocabulary files to search
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for term lookups.
#[derive(Serialize)]
pub struct TermResult {
    pub term: Option<String>,
}

/// Run the term command.
pub fn run_term(args: TermArgs) -> miette::Result<i32> {
    let generator: Option<MissingTermGenerator> = args
        .generate_missing
        .then_some(english_missing_term_generator as MissingTermGenerator);
    let mut store = VocabularyStore::builder()
        .maybe_missing_term_generator(generator)
        .build();
    load_vocabularies(&mut store, &args.files)?;

    let property = args.property.as_deref();
    let term = if args.models.is_empty() {
        store.get_term(&args.namespace, &args.locale, &args.declaration, property)
    } else {
        let models = load_models(&args.models)?;
        store
            .resolve_term(
                &models,
                &args.namespace,
                &args.locale,
                &args.declaration,
                property,
            )
            .map_err(|e| miette::miette!("{}", e))?
    };

    if args.json {
        let output = TermResult {
            term: term.as_ref().map(ToString::to_string),
        };
        let json_output = serde_json::to_string_pretty(&output).into_diagnostic()?;
        println!("{}", json_output);
    }

    match term {
        Some(term) => {
            if !args.json {
                println!("{}", term);
            }
            Ok(exitcode::OK)
        }
        None => {
            if !args.json {
                eprintln!("No term found for {}", args.declaration);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
