use crate::recipe_generation::domain::{CranField, IndexSnapshot, PackageRecord};
use crate::recipe_generation::services::RecordSplitter;
use crate::shared::error::SkeletonError;
use crate::shared::Result;
use std::collections::HashMap;

/// Separator between a field name and its value
const FIELD_DELIMITER: &str = ": ";

/// RecordParser service for turning normalized blocks into package records
pub struct RecordParser;

impl RecordParser {
    /// Parses one normalized block into a `PackageRecord`
    ///
    /// Every non-empty line is split on the first `": "`; values may contain
    /// further colons. Keys outside the known vocabulary are stored as
    /// `CranField::Other`. A repeated key keeps its last value.
    ///
    /// # Errors
    /// Returns `MalformedRecord` for a non-empty line without the delimiter
    pub fn parse(lines: Vec<String>) -> Result<PackageRecord> {
        let mut fields = HashMap::new();

        for line in lines.iter().filter(|line| !line.is_empty()) {
            let (key, value) =
                line.split_once(FIELD_DELIMITER)
                    .ok_or_else(|| SkeletonError::MalformedRecord {
                        line: line.clone(),
                        details: "expected a 'Key: Value' line".to_string(),
                    })?;
            fields.insert(CranField::from_key(key), value.to_string());
        }

        Ok(PackageRecord::new(fields, lines))
    }

    /// Splits, normalizes and parses a whole `PACKAGES` index
    ///
    /// # Errors
    /// Fails on the first malformed line, or on a record without `Package`
    pub fn parse_index(index: &str) -> Result<IndexSnapshot> {
        let records = RecordSplitter::split(index)
            .into_iter()
            .map(RecordSplitter::normalize_continuations)
            .map(Self::parse)
            .collect::<Result<Vec<_>>>()?;

        IndexSnapshot::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_record_fields() {
        let record = RecordParser::parse(lines(&[
            "Package: A3",
            "Version: 0.9.2",
            "Depends: R (>= 2.15.0), xtable, pbapply",
            "License: GPL (>= 2)",
            "",
        ]))
        .unwrap();

        assert_eq!(record.name(), Some("A3"));
        assert_eq!(record.version(), Some("0.9.2"));
        assert_eq!(
            record.get(&CranField::Depends),
            Some("R (>= 2.15.0), xtable, pbapply")
        );
        assert_eq!(record.get(&CranField::License), Some("GPL (>= 2)"));
        assert_eq!(record.original_lines().len(), 5);
    }

    #[test]
    fn test_value_may_contain_colons() {
        let record =
            RecordParser::parse(lines(&["Package: a", "Maintainer: Jane <j@x.org>: lead"]))
                .unwrap();
        assert_eq!(
            record.get(&CranField::Maintainer),
            Some("Jane <j@x.org>: lead")
        );
    }

    #[test]
    fn test_line_without_delimiter_is_fatal() {
        let result = RecordParser::parse(lines(&["Package: a", "NotAField"]));
        let err = result.unwrap_err();
        let skeleton_err = err.downcast_ref::<SkeletonError>().unwrap();
        assert!(matches!(
            skeleton_err,
            SkeletonError::MalformedRecord { line, .. } if line == "NotAField"
        ));
    }

    #[test]
    fn test_colon_without_space_is_malformed() {
        assert!(RecordParser::parse(lines(&["Package:a"])).is_err());
    }

    #[test]
    fn test_unknown_field_is_kept() {
        let record = RecordParser::parse(lines(&["Package: a", "Repository: CRAN"])).unwrap();
        assert_eq!(
            record.get(&CranField::Other("Repository".to_string())),
            Some("CRAN")
        );
        assert_eq!(record.unknown_fields(), vec!["Repository"]);
    }

    #[test]
    fn test_original_lines_reproduce_field_mapping() {
        let normalized = RecordSplitter::normalize_continuations(lines(&[
            "Package: A3",
            "Version: 0.9.2",
            "Imports: MASS, R.utils (>=",
            "        1.27.1), systemfit",
            "Date/Publication: 2015-08-16 23:05:52",
        ]));
        let record = RecordParser::parse(normalized).unwrap();

        let rebuilt: HashMap<CranField, String> = record
            .original_lines()
            .iter()
            .filter(|line| !line.is_empty())
            .filter_map(|line| line.split_once(": "))
            .map(|(k, v)| (CranField::from_key(k), v.to_string()))
            .collect();

        assert_eq!(&rebuilt, record.fields());
    }

    #[test]
    fn test_parse_index() {
        let index = "Package: A3\nVersion: 0.9.2\nDepends: R (>= 2.15.0),\n        xtable\n\n\
                     Package: abc\nVersion: 1.0-1\n\n";
        let snapshot = RecordParser::parse_index(index).unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(
            snapshot.lookup("a3").unwrap().get(&CranField::Depends),
            Some("R (>= 2.15.0), xtable")
        );
        assert_eq!(snapshot.lookup("abc").unwrap().version(), Some("1.0-1"));
    }

    #[test]
    fn test_parse_index_malformed_line() {
        let err = RecordParser::parse_index("Package: a\ngarbage\n").unwrap_err();
        assert!(err.to_string().contains("garbage"));
    }
}
