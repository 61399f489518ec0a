use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".checkunusedrc.json";

/// Directory holding the shared translation template, relative to the
/// project root.
pub const TEMPLATE_DIR: &str = "common";

pub const TEMPLATE_FILE_NAME: &str = "template.toml";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_entry_template")]
    pub entry_template: String,
}

fn default_extensions() -> Vec<String> {
    ["js", "vue"].map(String::from).to_vec()
}

fn default_entry_template() -> String {
    "../index.template.html".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            entry_template: default_entry_template(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if there is nothing to scan or the entry template is blank.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }
        if let Some(empty) = self.extensions.iter().find(|ext| normalize(ext).is_empty()) {
            bail!("Invalid extension in 'extensions': \"{}\"", empty);
        }
        if self.entry_template.trim().is_empty() {
            bail!("'entryTemplate' must not be empty");
        }
        Ok(())
    }

    /// Whether `path` ends in one of the configured extensions.
    pub fn is_scannable(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|allowed| normalize(allowed) == ext)
    }
}

fn normalize(ext: &str) -> &str {
    ext.trim().trim_start_matches('.')
}

/// Compute where the translation template lives by default.
///
/// The template sits two directories above the invoking executable, inside
/// `common/`. The result is built lexically, the filesystem is not touched.
pub fn default_template_path(invoking_path: &Path) -> PathBuf {
    let invoking_dir = invoking_path.parent().unwrap_or_else(|| Path::new("."));
    invoking_dir
        .join("..")
        .join("..")
        .join(TEMPLATE_DIR)
        .join(TEMPLATE_FILE_NAME)
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` if using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
