use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): Check completed, whether or not unused keys were found
/// - `Error` (2): Check failed (missing directory, bad template, unreadable file)
///
/// Unused keys are reported on stdout, never through the exit status.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Check completed.
    Success,
    /// Check aborted on a fatal error.
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
