//! Configuration management for the skill frequency counter

use crate::error::{Result, SkillFrequencyError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub skills: SkillsConfig,
    pub matching: MatchingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Keyword file to use instead of the bundled `skills.txt`
    pub path: Option<PathBuf>,
    pub blank_keywords: BlankKeywords,
    pub load_policy: LoadPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub backend: MatcherBackend,
    pub counting: CountingMode,
}

/// What to do with empty or whitespace-only lines in a keyword list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlankKeywords {
    #[default]
    Skip,
    /// Keep every line of the raw split, including the empty keyword left
    /// behind by a trailing line terminator.
    Keep,
}

/// Behaviour when the keyword resource cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadPolicy {
    /// Log the failure and continue with an empty keyword list.
    #[default]
    Lenient,
    /// Return the load error to the caller.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatcherBackend {
    /// Escaped keyword wrapped in spaces, compiled as a regular expression.
    #[default]
    Regex,
    /// Literal space-bounded substring scan.
    Scan,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountingMode {
    /// The first matching document contributes its match count, every
    /// later matching document contributes 1.
    #[default]
    FirstDocumentOccurrences,
    /// Sum of match counts across all documents.
    TotalOccurrences,
    /// Number of documents with at least one match.
    DocumentFrequency,
}

impl Config {
    /// Load the user configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Read `path` if it exists, otherwise return defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| SkillFrequencyError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillFrequencyError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skill-frequency")
            .join("config.toml")
    }
}
