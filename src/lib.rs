//! xcdrift - Xcode string catalog drift checker
//!
//! xcdrift cross-checks the `NSLocalizedString` keys referenced in a Swift
//! codebase against the keys declared in an Xcode string catalog
//! (`.xcstrings`). It reports keys used in Swift but missing from the
//! catalog, and keys declared in the catalog but never used in Swift.
//!
//! ## Module Structure
//!
//! - `catalog`: string catalog (`.xcstrings`) loading and validation
//! - `cli`: command-line interface layer (arguments, report output)
//! - `reconcile`: key set comparison
//! - `scanner`: Swift source traversal and key extraction

pub mod catalog;
pub mod cli;
pub mod reconcile;
pub mod scanner;
