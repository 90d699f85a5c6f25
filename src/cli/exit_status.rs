use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): run completed; drift findings are advisory and never
///   affect the exit code
/// - `Error` (2): the string catalog could not be loaded (unreadable file,
///   malformed JSON, or missing `strings` object)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed, with or without drift.
    Success,
    /// The string catalog could not be loaded.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
