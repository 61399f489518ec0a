use std::{
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{config::Config, error::CheckError};

/// Result of enumerating candidate files.
#[derive(Debug)]
pub struct ScanResult {
    /// Files under the root matching a configured extension, sorted by path.
    pub files: Vec<PathBuf>,
    /// The fixed entry-point template outside the root.
    pub entry_template: PathBuf,
}

impl ScanResult {
    /// Every file to scan, entry template last.
    pub fn all_files(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .map(PathBuf::as_path)
            .chain(std::iter::once(self.entry_template.as_path()))
    }

    /// Number of files to scan, entry template included.
    pub fn file_count(&self) -> usize {
        self.files.len() + 1
    }
}

/// Enumerate every scannable file under `root`, plus the configured entry
/// template resolved against `root`.
///
/// The entry template is not checked for existence here; opening it is the
/// scanner's job. Dangling symlinks below the root are skipped unless their
/// name is scannable, in which case they are kept so the scanner fails on
/// them like any other unreadable file.
pub fn scan_files(root: &Path, config: &Config) -> Result<ScanResult, CheckError> {
    if !root.is_dir() {
        let kind = if root.exists() {
            "not a directory"
        } else {
            "no such directory"
        };
        return Err(CheckError::Path {
            path: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, kind),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if let Some(link) = dangling_link(&err) {
                    if config.is_scannable(&link) {
                        files.push(link);
                    }
                    continue;
                }
                return Err(CheckError::Path {
                    path: err.path().unwrap_or(root).to_path_buf(),
                    source: err.into(),
                });
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && config.is_scannable(path) {
            files.push(path.to_path_buf());
        }
    }
    files.sort();

    Ok(ScanResult {
        files,
        entry_template: root.join(&config.entry_template),
    })
}

/// The path behind a walk error if it is a symlink whose target is gone.
fn dangling_link(err: &walkdir::Error) -> Option<PathBuf> {
    if err.depth() == 0 {
        return None;
    }
    let path = err.path()?;
    let is_link = fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink());
    (is_link && fs::metadata(path).is_err()).then(|| path.to_path_buf())
}
