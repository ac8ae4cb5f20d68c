use super::PackageRecord;
use crate::shared::error::SkeletonError;
use crate::shared::Result;
use std::collections::{BTreeSet, HashMap};

/// Read-only view of a parsed CRAN index
///
/// Built once per run from the fetched `PACKAGES` text and passed explicitly
/// to every package conversion. When a package name appears more than once
/// the later record wins.
#[derive(Debug, Clone, Default)]
pub struct IndexSnapshot {
    records: Vec<PackageRecord>,
    by_name: HashMap<String, usize>,
    by_lowercase_name: HashMap<String, usize>,
}

impl IndexSnapshot {
    /// Indexes records by their `Package` field
    ///
    /// # Errors
    /// Returns `MalformedRecord` if a record has no `Package` field
    pub fn new(records: Vec<PackageRecord>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(records.len());
        let mut by_lowercase_name = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            let name = record.name().ok_or_else(|| SkeletonError::MalformedRecord {
                line: record
                    .original_lines()
                    .iter()
                    .find(|line| !line.is_empty())
                    .cloned()
                    .unwrap_or_default(),
                details: format!("record #{} has no Package field", position + 1),
            })?;
            by_name.insert(name.to_string(), position);
            by_lowercase_name.insert(name.to_lowercase(), position);
        }

        Ok(Self {
            records,
            by_name,
            by_lowercase_name,
        })
    }

    /// Finds a package by exact name, then case-insensitively
    pub fn lookup(&self, name: &str) -> Option<&PackageRecord> {
        self.by_name
            .get(name)
            .or_else(|| self.by_lowercase_name.get(&name.to_lowercase()))
            .map(|&position| &self.records[position])
    }

    /// Number of distinct package names in the index
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Every field name outside the known vocabulary, across all records
    pub fn unknown_fields(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .flat_map(|record| record.unknown_fields())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_generation::domain::CranField;

    fn record(pairs: &[(&str, &str)]) -> PackageRecord {
        let fields = pairs
            .iter()
            .map(|(k, v)| (CranField::from_key(k), v.to_string()))
            .collect();
        let lines = pairs.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        PackageRecord::new(fields, lines)
    }

    #[test]
    fn test_lookup_exact_and_case_insensitive() {
        let snapshot = IndexSnapshot::new(vec![
            record(&[("Package", "Rcpp"), ("Version", "1.0.0")]),
            record(&[("Package", "xtable"), ("Version", "1.7-1")]),
        ])
        .unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.lookup("Rcpp").unwrap().version(), Some("1.0.0"));
        assert_eq!(snapshot.lookup("rcpp").unwrap().name(), Some("Rcpp"));
        assert_eq!(snapshot.lookup("XTABLE").unwrap().name(), Some("xtable"));
        assert!(snapshot.lookup("doesnotexist").is_none());
    }

    #[test]
    fn test_later_record_wins() {
        let snapshot = IndexSnapshot::new(vec![
            record(&[("Package", "foo"), ("Version", "1.0")]),
            record(&[("Package", "foo"), ("Version", "2.0")]),
        ])
        .unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.lookup("foo").unwrap().version(), Some("2.0"));
    }

    #[test]
    fn test_record_without_package_is_rejected() {
        let result = IndexSnapshot::new(vec![record(&[("Version", "1.0")])]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("no Package field"));
        assert!(err.contains("Version: 1.0"));
    }

    #[test]
    fn test_unknown_fields_are_deduplicated() {
        let snapshot = IndexSnapshot::new(vec![
            record(&[("Package", "a"), ("Repository", "CRAN")]),
            record(&[("Package", "b"), ("Repository", "CRAN"), ("Built", "R 4.3")]),
        ])
        .unwrap();

        let unknown: Vec<String> = snapshot.unknown_fields().into_iter().collect();
        assert_eq!(unknown, vec!["Built".to_string(), "Repository".to_string()]);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = IndexSnapshot::new(vec![]).unwrap();
        assert!(snapshot.is_empty());
    }
}
