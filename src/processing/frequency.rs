//! Keyword frequency tables

use crate::config::CountingMode;
use crate::error::Result;
use serde::Serialize;
use std::collections::HashMap;

/// Keyword to count mapping. Every stored count is at least 1; a missing
/// keyword means it was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the match count of one document into the running total for
    /// `keyword`. Documents without matches leave the table untouched.
    pub fn record(&mut self, keyword: &str, matches: usize, mode: CountingMode) {
        if matches == 0 {
            return;
        }

        match self.counts.get_mut(keyword) {
            Some(total) => {
                *total += match mode {
                    CountingMode::FirstDocumentOccurrences | CountingMode::DocumentFrequency => 1,
                    CountingMode::TotalOccurrences => matches,
                };
            }
            None => {
                let initial = match mode {
                    CountingMode::FirstDocumentOccurrences | CountingMode::TotalOccurrences => matches,
                    CountingMode::DocumentFrequency => 1,
                };
                self.counts.insert(keyword.to_string(), initial);
            }
        }
    }

    pub fn get(&self, keyword: &str) -> Option<usize> {
        self.counts.get(keyword).copied()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.counts.contains_key(keyword)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(keyword, count)| (keyword.as_str(), *count))
    }

    /// Entries sorted by count (highest first), ties broken by keyword.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.counts)?)
    }

    pub fn into_inner(self) -> HashMap<String, usize> {
        self.counts
    }
}

impl From<FrequencyTable> for HashMap<String, usize> {
    fn from(table: FrequencyTable) -> Self {
        table.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_document_occurrences() {
        let mut table = FrequencyTable::new();
        table.record("Java", 3, CountingMode::FirstDocumentOccurrences);
        table.record("Java", 0, CountingMode::FirstDocumentOccurrences);
        table.record("Java", 5, CountingMode::FirstDocumentOccurrences);
        table.record("Java", 1, CountingMode::FirstDocumentOccurrences);
        assert_eq!(table.get("Java"), Some(5));
    }

    #[test]
    fn test_total_occurrences() {
        let mut table = FrequencyTable::new();
        table.record("Java", 3, CountingMode::TotalOccurrences);
        table.record("Java", 0, CountingMode::TotalOccurrences);
        table.record("Java", 5, CountingMode::TotalOccurrences);
        assert_eq!(table.get("Java"), Some(8));
    }

    #[test]
    fn test_document_frequency() {
        let mut table = FrequencyTable::new();
        table.record("Java", 3, CountingMode::DocumentFrequency);
        table.record("Java", 0, CountingMode::DocumentFrequency);
        table.record("Java", 5, CountingMode::DocumentFrequency);
        assert_eq!(table.get("Java"), Some(2));
    }

    #[test]
    fn test_zero_matches_never_inserted() {
        let mut table = FrequencyTable::new();
        table.record("Rust", 0, CountingMode::FirstDocumentOccurrences);
        assert!(table.is_empty());
        assert!(!table.contains("Rust"));
        assert_eq!(table.get("Rust"), None);
    }

    #[test]
    fn test_ranking_and_top() {
        let mut table = FrequencyTable::new();
        table.record("Go", 2, CountingMode::TotalOccurrences);
        table.record("Rust", 4, CountingMode::TotalOccurrences);
        table.record("C", 2, CountingMode::TotalOccurrences);
        table.record("Java", 1, CountingMode::TotalOccurrences);

        assert_eq!(table.ranked(), vec![("Rust", 4), ("C", 2), ("Go", 2), ("Java", 1)]);
        assert_eq!(table.top(2), vec![("Rust", 4), ("C", 2)]);
        assert_eq!(table.top(10).len(), 4);
    }

    #[test]
    fn test_json_export() {
        let mut table = FrequencyTable::new();
        table.record("C++", 2, CountingMode::FirstDocumentOccurrences);

        let json = table.to_json().unwrap();
        let parsed: HashMap<String, usize> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.get("C++"), Some(&2));
        assert_eq!(HashMap::from(table), parsed);
    }
}
