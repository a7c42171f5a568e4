//! Ordered, immutable keyword lists

use crate::config::{BlankKeywords, LoadPolicy, SkillsConfig};
use crate::error::Result;
use crate::skills::source::SkillSource;
use log::{debug, error};

/// Keywords in resource order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillList {
    skills: Vec<String>,
}

impl SkillList {
    pub fn new(skills: Vec<String>) -> Self {
        Self { skills }
    }

    /// Split resource text on `\n` or `\r\n`.
    ///
    /// With [`BlankKeywords::Keep`] the split is kept as is, so text ending in
    /// a line terminator yields a final empty keyword.
    pub fn parse(text: &str, blank_keywords: BlankKeywords) -> Self {
        let skills = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| match blank_keywords {
                BlankKeywords::Skip => !line.trim().is_empty(),
                BlankKeywords::Keep => true,
            })
            .map(str::to_string)
            .collect();

        Self { skills }
    }

    pub fn bundled() -> Self {
        Self::load_or_empty(&SkillSource::Bundled, BlankKeywords::Skip)
    }

    /// Load a keyword list, returning any resource error.
    pub fn load(source: &SkillSource, blank_keywords: BlankKeywords) -> Result<Self> {
        let text = source.read()?;
        let list = Self::parse(&text, blank_keywords);
        debug!("Loaded {} skill keywords from {}", list.len(), source);
        Ok(list)
    }

    /// Load a keyword list; on failure log the error and return an empty list.
    pub fn load_or_empty(source: &SkillSource, blank_keywords: BlankKeywords) -> Self {
        match Self::load(source, blank_keywords) {
            Ok(list) => list,
            Err(e) => {
                error!("{}; continuing with an empty skill list", e);
                Self::default()
            }
        }
    }

    pub fn from_config(config: &SkillsConfig) -> Result<Self> {
        let source = SkillSource::from_path(config.path.as_deref());

        match config.load_policy {
            LoadPolicy::Strict => Self::load(&source, config.blank_keywords),
            LoadPolicy::Lenient => Ok(Self::load_or_empty(&source, config.blank_keywords)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl From<Vec<String>> for SkillList {
    fn from(skills: Vec<String>) -> Self {
        Self::new(skills)
    }
}

impl<'a> FromIterator<&'a str> for SkillList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(str::to_string).collect())
    }
}
