//! Skill frequency counting over job posting texts

use crate::config::{Config, CountingMode, MatcherBackend};
use crate::error::Result;
use crate::processing::frequency::FrequencyTable;
use crate::processing::matcher::{self, KeywordMatcher};
use crate::processing::normalizer;
use crate::skills::SkillList;
use log::{debug, info};

struct CompiledSkill {
    keyword: String,
    matcher: Box<dyn KeywordMatcher>,
}

/// Counts skill keywords across documents. Patterns are compiled once at
/// construction; the counter holds no mutable state and can be shared.
pub struct SkillFrequencyCounter {
    skills: Vec<CompiledSkill>,
    counting: CountingMode,
}

impl SkillFrequencyCounter {
    pub fn new(skills: &SkillList) -> Result<Self> {
        Self::with_options(skills, MatcherBackend::default(), CountingMode::default())
    }

    pub fn with_options(skills: &SkillList, backend: MatcherBackend, counting: CountingMode) -> Result<Self> {
        let skills = skills
            .iter()
            .map(|keyword| -> Result<CompiledSkill> {
                Ok(CompiledSkill {
                    keyword: keyword.to_string(),
                    matcher: matcher::compile(keyword, backend)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Compiled {} skill patterns ({:?} backend, {:?} counting)",
            skills.len(),
            backend,
            counting
        );

        Ok(Self { skills, counting })
    }

    /// Counter over the bundled `skills.txt` with default options
    pub fn bundled() -> Result<Self> {
        Self::new(&SkillList::bundled())
    }

    /// Build a counter from configuration, honouring its load policy.
    pub fn from_config(config: &Config) -> Result<Self> {
        let skills = SkillList::from_config(&config.skills)?;
        Self::with_options(&skills, config.matching.backend, config.matching.counting)
    }

    pub fn counting_mode(&self) -> CountingMode {
        self.counting
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn count<S: AsRef<str>>(&self, documents: &[S]) -> FrequencyTable {
        let normalized: Vec<String> = documents
            .iter()
            .map(|doc| normalizer::normalize(doc.as_ref()))
            .collect();

        let mut table = FrequencyTable::new();

        for skill in &self.skills {
            for text in &normalized {
                let matches = skill.matcher.count_matches(text);
                table.record(&skill.keyword, matches, self.counting);
            }
        }

        info!(
            "Found {} of {} skills across {} documents",
            table.len(),
            self.skills.len(),
            normalized.len()
        );

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(skills: &[&str], counting: CountingMode) -> SkillFrequencyCounter {
        let list: SkillList = skills.iter().copied().collect();
        SkillFrequencyCounter::with_options(&list, MatcherBackend::Regex, counting).unwrap()
    }

    #[test]
    fn test_sole_document_contributes_true_count() {
        let counter = counter(&["Java"], CountingMode::FirstDocumentOccurrences);
        let table = counter.count(&["We want Java and more Java and even Java ok"]);
        assert_eq!(table.get("Java"), Some(3));
    }

    #[test]
    fn test_later_documents_add_one() {
        let counter = counter(&["Java"], CountingMode::FirstDocumentOccurrences);
        let docs = [
            "no match here",
            "a Java b Java c",
            "x Java y Java z Java w",
            "nothing",
            "x Java y",
        ];
        // 2 from the first matching document, then +1 for each of the other two
        assert_eq!(counter.count(&docs).get("Java"), Some(4));
    }

    #[test]
    fn test_counting_modes_diverge() {
        let docs = ["a Rust b Rust c", "x Rust y Rust z Rust w"];

        let legacy = counter(&["Rust"], CountingMode::FirstDocumentOccurrences);
        let total = counter(&["Rust"], CountingMode::TotalOccurrences);
        let per_doc = counter(&["Rust"], CountingMode::DocumentFrequency);

        assert_eq!(legacy.count(&docs).get("Rust"), Some(3));
        assert_eq!(total.count(&docs).get("Rust"), Some(5));
        assert_eq!(per_doc.count(&docs).get("Rust"), Some(2));
    }

    #[test]
    fn test_duplicate_keywords_share_entry() {
        let counter = counter(&["Java", "Java"], CountingMode::FirstDocumentOccurrences);
        let table = counter.count(&["a Java b Java c"]);
        // First pass inserts 2, the duplicate pass finds the entry and adds 1
        assert_eq!(table.get("Java"), Some(3));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_dotted_keyword_never_matches() {
        let counter = counter(&["Node.js"], CountingMode::FirstDocumentOccurrences);
        assert!(counter.count(&["We use Node.js daily"]).is_empty());
    }

    #[test]
    fn test_no_documents() {
        let counter = counter(&["Java", "Go"], CountingMode::FirstDocumentOccurrences);
        let docs: [&str; 0] = [];
        assert!(counter.count(&docs).is_empty());
    }

    #[test]
    fn test_no_skills() {
        let counter = counter(&[], CountingMode::FirstDocumentOccurrences);
        assert_eq!(counter.skill_count(), 0);
        assert!(counter.count(&["I use Java daily"]).is_empty());
    }

    #[test]
    fn test_counter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SkillFrequencyCounter>();
    }
}
