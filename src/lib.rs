//! Skill frequency counter library
//!
//! Counts skill and framework keywords (one per line in `skills.txt`) in
//! free-text job postings.

pub mod config;
pub mod error;
pub mod processing;
pub mod skills;

pub use config::{BlankKeywords, Config, CountingMode, LoadPolicy, MatcherBackend};
pub use error::{Result, SkillFrequencyError};
pub use processing::counter::SkillFrequencyCounter;
pub use processing::frequency::FrequencyTable;
pub use skills::{SkillList, SkillSource};

use log::error;
use std::sync::OnceLock;

static BUNDLED: OnceLock<Option<SkillFrequencyCounter>> = OnceLock::new();

/// Counter over the bundled keywords, built on first use and shared after.
fn bundled_counter() -> Option<&'static SkillFrequencyCounter> {
    BUNDLED
        .get_or_init(|| match SkillFrequencyCounter::bundled() {
            Ok(counter) => Some(counter),
            Err(e) => {
                error!("Failed to build bundled skill counter: {}", e);
                None
            }
        })
        .as_ref()
}

/// Count bundled skill keywords in `documents` with default options.
///
/// Failures are logged and yield an empty table.
pub fn count<S: AsRef<str>>(documents: &[S]) -> FrequencyTable {
    match bundled_counter() {
        Some(counter) => counter.count(documents),
        None => FrequencyTable::default(),
    }
}

/// Count skill keywords using `config`, propagating load and pattern errors
/// allowed through by its load policy.
pub fn try_count<S: AsRef<str>>(documents: &[S], config: &Config) -> Result<FrequencyTable> {
    let counter = SkillFrequencyCounter::from_config(config)?;
    Ok(counter.count(documents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_counter_built_once() {
        let first = bundled_counter().unwrap();
        let second = bundled_counter().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_repeated_count_calls_agree() {
        let docs = ["I use Java daily", "Python and Go (and Rust) here"];
        let first = count(&docs);
        let second = count(&docs);
        assert_eq!(first, second);
        assert_eq!(first.get("Java"), Some(1));
        assert_eq!(first.get("Rust"), Some(1));
    }
}
