//! check_unused - unused localization key finder
//!
//! Loads a TOML translation template and reports every key that never
//! appears literally in the scanned source tree. Matching is plain
//! substring containment, so a key that is part of a longer string counts
//! as used.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, exit status, output)
//! - `config`: Scan configuration and default template location
//! - `core`: Template loading, file enumeration and scanning
//! - `error`: Fatal error types

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
