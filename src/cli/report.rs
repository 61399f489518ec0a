//! Output formatting for check results.
//!
//! Unused keys go to stdout as a bare list so the output can be piped.
//! Anything decorative goes to stderr and only in verbose mode.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::CheckResult;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the unused keys, then the verbose summary.
///
/// Failing to write the key list is an error. A closed pipe is not: the
/// reader simply stopped listening.
pub fn print(result: &CheckResult, verbose: bool) -> io::Result<()> {
    match print_keys_to(&result.unused_keys, &mut io::stdout().lock()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
        other => other?,
    }
    if verbose {
        print_summary_to(result, &mut io::stderr().lock());
    }
    Ok(())
}

/// Print each unused key on its own line. Nothing is written when every
/// key is used.
pub fn print_keys_to<W: Write>(keys: &[String], writer: &mut W) -> io::Result<()> {
    for key in keys {
        writeln!(writer, "{}", key)?;
    }
    writer.flush()
}

pub fn print_summary_to<W: Write>(result: &CheckResult, writer: &mut W) {
    let checked = format!(
        "Checked {} {} across {} {}",
        result.keys_checked,
        plural(result.keys_checked, "key", "keys"),
        result.files_scanned,
        plural(result.files_scanned, "file", "files"),
    );

    let msg = match result.unused_keys.len() {
        0 => format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} - no unused keys", checked).green()
        ),
        n => format!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} - {} unused {}", checked, n, plural(n, "key", "keys")).red()
        ),
    };
    let _ = writeln!(writer, "{}", msg);
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
