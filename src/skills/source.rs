//! Keyword resource locations

use crate::error::{Result, SkillFrequencyError};
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the keyword resource, bundled and on disk.
pub const SKILLS_RESOURCE: &str = "skills.txt";

const BUNDLED_SKILLS: &str = include_str!("../../resources/skills.txt");

#[derive(Debug, Clone, PartialEq)]
pub enum SkillSource {
    /// The `skills.txt` list compiled into the crate
    Bundled,
    /// A keyword file on disk, one keyword per line
    File(PathBuf),
}

impl SkillSource {
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => SkillSource::File(path.to_path_buf()),
            None => SkillSource::Bundled,
        }
    }

    /// Read the raw resource text.
    pub fn read(&self) -> Result<String> {
        match self {
            SkillSource::Bundled => Ok(BUNDLED_SKILLS.to_string()),
            SkillSource::File(path) => std::fs::read_to_string(path)
                .map_err(|e| SkillFrequencyError::resource_load(path.display().to_string(), e)),
        }
    }
}

impl fmt::Display for SkillSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillSource::Bundled => write!(f, "bundled {}", SKILLS_RESOURCE),
            SkillSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
