//! Core engine: template loading, file enumeration and the substring scan.
//!
//! ## Pipeline
//!
//! 1. `template`: read the ordered key set from the TOML template
//! 2. `file_scanner`: enumerate candidate files under the scan root
//! 3. `checker`: scan each file line by line, marking keys as seen

pub mod checker;
pub mod file_scanner;
pub mod seen_keys;
pub mod template;

pub use checker::{CheckResult, check, find_unused_keys};
pub use file_scanner::{ScanResult, scan_files};
pub use seen_keys::SeenKeys;
pub use template::Template;
