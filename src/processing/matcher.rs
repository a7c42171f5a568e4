//! Space-bounded literal keyword matchers

use crate::config::MatcherBackend;
use crate::error::{Result, SkillFrequencyError};
use aho_corasick::{AhoCorasick, MatchKind};
use regex::Regex;

/// Counts non-overlapping, leftmost occurrences of one keyword in
/// normalized text.
pub trait KeywordMatcher: Send + Sync {
    fn count_matches(&self, text: &str) -> usize;
}

/// Keyword wrapped in exactly one space on each side.
pub fn bounded_pattern(keyword: &str) -> String {
    format!(" {} ", keyword)
}

/// Regular expression built from the escaped keyword
pub struct RegexMatcher {
    pattern: Regex,
}

impl RegexMatcher {
    pub fn new(keyword: &str) -> Result<Self> {
        let pattern = Regex::new(&bounded_pattern(&regex::escape(keyword)))?;
        Ok(Self { pattern })
    }
}

impl KeywordMatcher for RegexMatcher {
    fn count_matches(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

/// Literal substring scan over a single-pattern automaton
pub struct ScanMatcher {
    automaton: AhoCorasick,
}

impl ScanMatcher {
    pub fn new(keyword: &str) -> Result<Self> {
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build([bounded_pattern(keyword)])
            .map_err(|e| SkillFrequencyError::Pattern(format!("Failed to build scan matcher for '{}': {}", keyword, e)))?;

        Ok(Self { automaton })
    }
}

impl KeywordMatcher for ScanMatcher {
    fn count_matches(&self, text: &str) -> usize {
        self.automaton.find_iter(text).count()
    }
}

pub fn compile(keyword: &str, backend: MatcherBackend) -> Result<Box<dyn KeywordMatcher>> {
    Ok(match backend {
        MatcherBackend::Regex => Box::new(RegexMatcher::new(keyword)?),
        MatcherBackend::Scan => Box::new(ScanMatcher::new(keyword)?),
    })
}
