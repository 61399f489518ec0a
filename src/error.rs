//! Error types for the unused-key checker.
//!
//! Every variant is fatal: the run stops at the first one and no partial
//! result is produced.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// The scan root is missing, not a directory, or could not be walked.
    #[error("cannot scan directory {}: {source}", path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The template file is missing or is not valid TOML.
    #[error("failed to load template {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    /// A candidate source file could not be opened or decoded as UTF-8.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error(transparent)]
    Read(#[from] io::Error),

    #[error(transparent)]
    Syntax(#[from] toml::de::Error),
}
