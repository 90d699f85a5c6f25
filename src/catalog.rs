//! String catalog (`.xcstrings`) loading and validation.
//!
//! An Xcode string catalog is a JSON document whose top-level `strings`
//! object maps each localization key to its translations. Only the
//! immediate keys of that object matter here; the nested per-locale
//! structure is never examined.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;

/// Errors that make the string catalog unusable. All of them abort the run.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read string catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse string catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("string catalog {} has no top-level \"strings\" object", path.display())]
    MissingStringsField { path: PathBuf },
}

/// Load the declared key set from a string catalog file.
///
/// The document is parsed in full, then the presence and type of the
/// top-level `strings` field are validated before its keys are extracted.
pub fn load_catalog_keys(path: &Path) -> Result<HashSet<String>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value = serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let strings = document
        .get("strings")
        .and_then(Value::as_object)
        .ok_or_else(|| CatalogError::MissingStringsField {
            path: path.to_path_buf(),
        })?;

    Ok(strings.keys().cloned().collect())
}
