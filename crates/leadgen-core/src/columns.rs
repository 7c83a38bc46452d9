//! Column alias vocabulary and the optional YAML file that extends it.
//!
//! ```yaml
//! aliases:
//!   name: ["Dénomination"]
//!   phone: ["Portable", { exact: "GSM" }]
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::{ConfigError, LeadField};

/// How an alias is compared against a (lower-cased, de-bracketed) header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Header contains the alias.
    Contains,
    /// Header equals the alias.
    Exact,
}

/// One acceptable header spelling for a canonical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub mode: MatchMode,
}

impl Alias {
    #[must_use]
    pub fn contains(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mode: MatchMode::Contains,
        }
    }

    #[must_use]
    pub fn exact(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mode: MatchMode::Exact,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AliasEntry {
    Contains(String),
    Exact { exact: String },
}

#[derive(Debug, Deserialize)]
struct ColumnsFile {
    #[serde(default)]
    aliases: BTreeMap<String, Vec<AliasEntry>>,
}

/// Extra aliases per canonical field, tried after the built-in ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOverrides {
    pub aliases: BTreeMap<LeadField, Vec<Alias>>,
}

impl ColumnOverrides {
    #[must_use]
    pub fn for_field(&self, field: LeadField) -> &[Alias] {
        self.aliases.get(&field).map_or(&[], Vec::as_slice)
    }
}

/// Load and validate column alias overrides from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_column_overrides(path: &Path) -> Result<ColumnOverrides, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ColumnsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_column_overrides(&content)
}

/// Parse and validate column alias overrides from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed, names an unknown or
/// non-resolvable field, or contains an empty or duplicate alias.
pub fn parse_column_overrides(content: &str) -> Result<ColumnOverrides, ConfigError> {
    let file: ColumnsFile = serde_yaml::from_str(content)?;

    let mut aliases = BTreeMap::new();
    for (key, entries) in file.aliases {
        let field: LeadField = key.parse().map_err(ConfigError::Validation)?;
        if !LeadField::RESOLVABLE.contains(&field) {
            return Err(ConfigError::Validation(format!(
                "field '{field}' is assigned at load time and cannot be mapped from a column"
            )));
        }

        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(entries.len());
        for entry in entries {
            let alias = match entry {
                AliasEntry::Contains(name) => Alias::contains(name.trim()),
                AliasEntry::Exact { exact } => Alias::exact(exact.trim()),
            };
            if alias.name.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "empty alias for field '{field}'"
                )));
            }
            if !seen.insert(alias.name.to_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate alias '{}' for field '{field}'",
                    alias.name
                )));
            }
            resolved.push(alias);
        }
        aliases.insert(field, resolved);
    }

    Ok(ColumnOverrides { aliases })
}
