//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// Cross-check NSLocalizedString keys in Swift sources against an Xcode
/// string catalog (.xcstrings), reporting keys missing from the catalog
/// and catalog keys unused in Swift.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Arguments {
    /// Root directory of the Swift sources to scan
    pub swift_root: PathBuf,

    /// Path to the .xcstrings string catalog file
    pub xcstrings_path: PathBuf,
}
