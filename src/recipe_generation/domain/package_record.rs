use super::CranField;
use std::collections::HashMap;

/// One package's metadata block from the CRAN index
///
/// Holds the parsed field mapping together with the normalized lines it was
/// parsed from. The lines are kept for embedding in the generated recipe and
/// are never re-parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    fields: HashMap<CranField, String>,
    lines: Vec<String>,
}

impl PackageRecord {
    pub fn new(fields: HashMap<CranField, String>, lines: Vec<String>) -> Self {
        Self { fields, lines }
    }

    pub fn get(&self, field: &CranField) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &CranField) -> bool {
        self.fields.contains_key(field)
    }

    /// The `Package` field, if the record has one
    pub fn name(&self) -> Option<&str> {
        self.get(&CranField::Package)
    }

    /// The `Version` field, if the record has one
    pub fn version(&self) -> Option<&str> {
        self.get(&CranField::Version)
    }

    pub fn fields(&self) -> &HashMap<CranField, String> {
        &self.fields
    }

    /// Normalized lines of the block, including the trailing empty sentinel
    pub fn original_lines(&self) -> &[String] {
        &self.lines
    }

    /// Field names outside the known vocabulary, sorted
    pub fn unknown_fields(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .fields
            .keys()
            .filter(|field| !field.is_known())
            .map(CranField::as_str)
            .collect();
        unknown.sort_unstable();
        unknown
    }
}
