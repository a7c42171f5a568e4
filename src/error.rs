//! Error handling for the skill frequency counter

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillFrequencyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load skill resource '{resource}': {source}")]
    ResourceLoad {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid keyword pattern: {0}")]
    Pattern(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkillFrequencyError>;

/// Convert regex compilation errors to our custom error type
impl From<regex::Error> for SkillFrequencyError {
    fn from(err: regex::Error) -> Self {
        SkillFrequencyError::Pattern(err.to_string())
    }
}

impl SkillFrequencyError {
    pub fn resource_load(resource: impl Into<String>, source: std::io::Error) -> Self {
        SkillFrequencyError::ResourceLoad {
            resource: resource.into(),
            source,
        }
    }
}
