use std::{fs, path::Path};

use crate::error::{CheckError, TemplateError};

/// The translation template: every known key, in the order the file
/// declares them. Values are never needed and are not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    keys: Vec<String>,
}

impl Template {
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Load the top-level keys of a TOML template file.
    pub fn load(path: &Path) -> Result<Self, CheckError> {
        Self::read(path).map_err(|source| CheckError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read(path: &Path) -> Result<Self, TemplateError> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content)?)
    }

    /// Parse template content. Nested tables contribute only their own
    /// top-level name.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = toml::from_str(content)?;
        Ok(Self {
            keys: table.into_iter().map(|(key, _)| key).collect(),
        })
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
