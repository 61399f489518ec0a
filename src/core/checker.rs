//! The unused-key check: load the template, enumerate files, scan them.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use super::{file_scanner::scan_files, seen_keys::SeenKeys, template::Template};
use crate::{config::Config, error::CheckError};

/// Outcome of a completed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Template keys never found in any scanned line, in template order.
    pub unused_keys: Vec<String>,
    pub files_scanned: usize,
    pub keys_checked: usize,
}

/// Run the full check against the source tree at `root`.
///
/// Any error aborts the run; no partial result is returned.
pub fn check(
    root: &Path,
    template_path: &Path,
    config: &Config,
) -> Result<CheckResult, CheckError> {
    let template = Template::load(template_path)?;
    let scanned = scan_files(root, config)?;

    let unused_keys = find_unused_keys(&template, scanned.all_files())?;

    Ok(CheckResult {
        unused_keys,
        files_scanned: scanned.file_count(),
        keys_checked: template.len(),
    })
}

/// Scan `files` in order and return the template keys that never occur.
///
/// Each file is closed before the next is opened. The first file that
/// cannot be opened or decoded fails the whole scan.
pub fn find_unused_keys<'p, I>(template: &Template, files: I) -> Result<Vec<String>, CheckError>
where
    I: IntoIterator<Item = &'p Path>,
{
    let mut seen = SeenKeys::new(template);
    for path in files {
        scan_file(path, &mut seen)?;
    }
    Ok(seen.into_unseen())
}

fn scan_file(path: &Path, seen: &mut SeenKeys<'_>) -> Result<(), CheckError> {
    let io_error = |source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(io_error)?);
    // Keep reading after every key is seen so undecodable files still fail.
    for line in reader.lines() {
        seen.mark_line(&line.map_err(io_error)?);
    }
    Ok(())
}
