//! Report formatting and printing utilities.
//!
//! Progress lines and the two drift sections, in scan order. Every print
//! function has a writer-parameterized variant so tests can capture output.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::reconcile::Drift;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the scan progress line for the Swift source root.
pub fn print_scan_start(root: &Path) {
    print_scan_start_to(root, &mut io::stdout().lock());
}

pub fn print_scan_start_to<W: Write>(root: &Path, writer: &mut W) {
    let _ = writeln!(writer, "Scanning Swift sources under: {}", root.display());
}

/// Print the number of keys found in Swift sources.
pub fn print_scan_count(count: usize) {
    print_scan_count_to(count, &mut io::stdout().lock());
}

pub fn print_scan_count_to<W: Write>(count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Found {} NSLocalizedString key(s) in Swift sources.",
        count
    );
}

/// Print the progress line for the string catalog.
pub fn print_catalog_start(path: &Path) {
    print_catalog_start_to(path, &mut io::stdout().lock());
}

pub fn print_catalog_start_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(writer);
    let _ = writeln!(writer, "Reading string catalog: {}", path.display());
}

/// Print the number of keys declared in the string catalog.
pub fn print_catalog_count(count: usize) {
    print_catalog_count_to(count, &mut io::stdout().lock());
}

pub fn print_catalog_count_to<W: Write>(count: usize, writer: &mut W) {
    let _ = writeln!(writer, "Found {} key(s) in the string catalog.", count);
}

/// Print both drift sections.
///
/// Each section prints its header, then either a green success line or the
/// sorted keys followed by a total count. Drift is advisory and never
/// changes the exit code.
pub fn print_drift(drift: &Drift) {
    print_drift_to(drift, &mut io::stdout().lock());
}

pub fn print_drift_to<W: Write>(drift: &Drift, writer: &mut W) {
    print_section(
        "Keys used in Swift but missing from the string catalog:",
        &drift.missing_from_catalog,
        "All NSLocalizedString keys in Swift are declared in the string catalog.",
        "Total missing:",
        writer,
    );
    print_section(
        "Keys declared in the string catalog but unused in Swift:",
        &drift.unused_in_source,
        "No unused string catalog keys found.",
        "Total unused:",
        writer,
    );
}

fn print_section<W: Write>(
    header: &str,
    keys: &[String],
    success_line: &str,
    total_label: &str,
    writer: &mut W,
) {
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", header.bold());

    if keys.is_empty() {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), success_line.green());
    } else {
        for key in keys {
            let _ = writeln!(writer, "  {}", key);
        }
        let _ = writeln!(writer, "{} {} {}", FAILURE_MARK.red(), total_label, keys.len());
    }
}
