use anyhow::{Context, Result};

pub use args::Arguments;
pub use exit_status::ExitStatus;

mod args;
mod exit_status;
mod report;
mod run;

/// Run the checker and print unused keys.
///
/// Unused keys never make the run fail; only fatal errors do.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let result = run::run(&args)?;
    report::print(&result, args.verbose).context("Failed to write unused keys")?;
    Ok(ExitStatus::Success)
}
