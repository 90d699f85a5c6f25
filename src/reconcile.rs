//! Key set comparison.
//!
//! Pure set arithmetic between the keys referenced in Swift sources and
//! the keys declared in the string catalog.

use std::collections::HashSet;

/// Drift between the two key sets, with both lists sorted for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drift {
    /// Keys used in Swift but not declared in the catalog.
    pub missing_from_catalog: Vec<String>,
    /// Keys declared in the catalog but never used in Swift.
    pub unused_in_source: Vec<String>,
}

/// Compare source keys against catalog keys.
///
/// Deterministic regardless of set iteration order: both output lists are
/// sorted ascending by code point.
pub fn reconcile(source_keys: &HashSet<String>, catalog_keys: &HashSet<String>) -> Drift {
    let mut missing_from_catalog: Vec<String> =
        source_keys.difference(catalog_keys).cloned().collect();
    missing_from_catalog.sort();

    let mut unused_in_source: Vec<String> =
        catalog_keys.difference(source_keys).cloned().collect();
    unused_in_source.sort();

    Drift {
        missing_from_catalog,
        unused_in_source,
    }
}
