use anyhow::Result;

use crate::{catalog, reconcile::reconcile, scanner};

pub mod args;
mod exit_status;
mod report;

pub use args::Arguments;
pub use exit_status::ExitStatus;

/// Run the full pipeline: scan Swift sources, load the string catalog,
/// reconcile the two key sets, and print the drift report.
///
/// Returns `Err` only for fatal catalog errors; drift is reported on
/// stdout and never fails the run.
pub fn run_cli(args: Arguments) -> Result<()> {
    report::print_scan_start(&args.swift_root);
    let source_keys = scanner::scan_swift_keys(&args.swift_root);
    report::print_scan_count(source_keys.len());

    report::print_catalog_start(&args.xcstrings_path);
    let catalog_keys = catalog::load_catalog_keys(&args.xcstrings_path)?;
    report::print_catalog_count(catalog_keys.len());

    let drift = reconcile(&source_keys, &catalog_keys);
    report::print_drift(&drift);

    Ok(())
}
