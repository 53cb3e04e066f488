//! Loading vocabulary and model files for the commands.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use miette::{miette, IntoDiagnostic, Report, Result};
use vocab::{ModelDefinition, ModelSet, VocabularyError, VocabularyStore};

use crate::output::VocabDiagnostic;

/// Read a file, attaching the path to the error.
pub fn read_file(path: &Path) -> Result<String> {
    read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read {}: {}", path.display(), e))
}

/// Add one vocabulary file's contents to a store.
///
/// Parse errors become source-annotated diagnostics.
pub fn add_to_store(store: &mut VocabularyStore, path: &Path, content: &str) -> Result<()> {
    match store.add_vocabulary(content) {
        Ok(vocabulary) => {
            tracing::debug!(
                path = %path.display(),
                identifier = %vocabulary.identifier(),
                "loaded vocabulary"
            );
            Ok(())
        }
        Err(VocabularyError::Parse(e)) => {
            Err(Report::new(VocabDiagnostic::from_parse_error(path, content, &e)))
        }
        Err(e) => Err(miette!("{}: {}", path.display(), e)),
    }
}

/// Load every vocabulary file into `store`.
pub fn load_vocabularies(store: &mut VocabularyStore, files: &[PathBuf]) -> Result<()> {
    for path in files {
        let content = read_file(path)?;
        add_to_store(store, path, &content)?;
    }
    Ok(())
}

/// Load model definition files (YAML or JSON).
pub fn load_models(files: &[PathBuf]) -> Result<ModelSet> {
    let mut models = ModelSet::new();
    for path in files {
        let content = read_file(path)?;
        let model = ModelDefinition::from_yaml(&content)
            .map_err(|e| miette!("Invalid model definition {}: {}", path.display(), e))?;
        tracing::debug!(
            path = %path.display(),
            namespace = %model.namespace,
            declarations = model.declarations.len(),
            "loaded model definition"
        );
        models.insert(model);
    }
    Ok(models)
}
