//! Swift source traversal and key extraction.
//!
//! Walks a directory tree, reads every `.swift` file as UTF-8 text, and
//! collects the first string argument of each `NSLocalizedString` call.

use std::{collections::HashSet, fs, path::Path, sync::LazyLock};

use colored::Colorize;
use regex::Regex;
use walkdir::WalkDir;

// Matches the first string argument of an NSLocalizedString call:
//   NSLocalizedString("Some.key", comment: "...")
// Literals containing quotes and call forms without a trailing comma are
// not matched.
static NSLOCALIZED_STRING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"NSLocalizedString\s*\(\s*"([^"]+)"\s*,"#).unwrap());

/// Collect all `NSLocalizedString` keys from `.swift` files under `root`.
///
/// Files that cannot be opened or are not valid UTF-8 are skipped with a
/// warning printed to stdout; the walk continues. Duplicate keys collapse,
/// and the traversal order has no effect on the result.
pub fn scan_swift_keys(root: &Path) -> HashSet<String> {
    let mut keys = HashSet::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                println!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || !is_swift_file(path) {
            continue;
        }

        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                println!(
                    "{} Could not read {}: {}",
                    "warning:".bold().yellow(),
                    path.display(),
                    e
                );
                continue;
            }
        };

        for captures in NSLOCALIZED_STRING_REGEX.captures_iter(&content) {
            if let Some(key) = captures.get(1) {
                keys.insert(key.as_str().to_owned());
            }
        }
    }

    keys
}

fn is_swift_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("swift"))
}
