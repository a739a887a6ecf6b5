//! # Classification Tables
//!
//! Static lookup tables mapping descriptive geological categories to rating
//! points for the RMR89 and Q-System classifications.
//!
//! The engine never reads these tables; it takes already-resolved numeric
//! values. Tables exist for collaborators that offer the user a choice and
//! then pass the chosen row's `value` to a state-holder setter.
//!
//! ## Example
//!
//! ```rust
//! use rock_core::tables::{RMR_WATER, Q_JN};
//!
//! let damp = RMR_WATER.find("damp").unwrap();
//! assert_eq!(damp.value, 10.0);
//!
//! // Q-tables show the rating next to the description
//! assert_eq!(Q_JN.display_label(&Q_JN.entries[0]), "Massive, no or few joints (0.5)");
//! ```

pub mod q_system;
pub mod rmr;

pub use q_system::{Q_JA, Q_JN, Q_JR, Q_JW, Q_SRF};
pub use rmr::{
    RqdBand, RMR_CONDITION, RMR_ORIENTATION, RMR_SPACING, RMR_STRENGTH, RMR_WATER,
    RQD_FALLBACK_POINTS, RQD_RANGES,
};

use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// One selectable row of a classification table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableEntry {
    /// Category label shown to the user
    pub label: &'static str,
    /// Rating value handed to the engine
    pub value: f64,
    /// Optional longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl TableEntry {
    /// Create an entry without description
    pub const fn new(label: &'static str, value: f64) -> Self {
        TableEntry {
            label,
            value,
            description: None,
        }
    }

    /// Create an entry with a description
    pub const fn described(label: &'static str, value: f64, description: &'static str) -> Self {
        TableEntry {
            label,
            value,
            description: Some(description),
        }
    }
}

/// An ordered classification table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationTable {
    /// Short parameter code (e.g., "A1", "Jn")
    pub code: &'static str,
    /// Parameter name
    pub name: &'static str,
    /// Rows in presentation order
    pub entries: &'static [TableEntry],
    /// Whether the rating is appended to the label for display
    pub value_in_label: bool,
}

impl ClassificationTable {
    /// Label as it should be displayed in a picker
    pub fn display_label(&self, entry: &TableEntry) -> String {
        if self.value_in_label {
            format!("{} ({})", entry.label, entry.value)
        } else {
            entry.label.to_string()
        }
    }

    /// Index of the first row carrying `value`
    pub fn position_of(&self, value: f64) -> Option<usize> {
        self.entries.iter().position(|e| e.value == value)
    }

    /// True if some row carries exactly `value`
    pub fn contains_value(&self, value: f64) -> bool {
        self.position_of(value).is_some()
    }

    /// Rating values in table order with repeats removed
    pub fn distinct_values(&self) -> Vec<f64> {
        let mut values: Vec<f64> = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            if !values.contains(&entry.value) {
                values.push(entry.value);
            }
        }
        values
    }

    /// Resolve a user-supplied choice to a table row.
    ///
    /// Matches the label case-insensitively first, then falls back to the
    /// numeric rating (first row wins when a rating is listed twice).
    pub fn find(&self, query: &str) -> CalcResult<&'static TableEntry> {
        let needle = query.trim();
        let entries: &'static [TableEntry] = self.entries;

        if let Some(entry) = entries.iter().find(|e| e.label.eq_ignore_ascii_case(needle)) {
            return Ok(entry);
        }

        needle
            .parse::<f64>()
            .ok()
            .and_then(|value| entries.iter().find(|e| e.value == value))
            .ok_or_else(|| CalcError::unknown_option(self.code, needle))
    }
}

/// Every classification table, RMR parameters first
pub static ALL_TABLES: [&ClassificationTable; 10] = [
    &RMR_STRENGTH,
    &RMR_SPACING,
    &RMR_CONDITION,
    &RMR_WATER,
    &RMR_ORIENTATION,
    &Q_JN,
    &Q_JR,
    &Q_JA,
    &Q_JW,
    &Q_SRF,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_label() {
        let entry = RMR_STRENGTH.find("  50 - 100 mpa ").unwrap();
        assert_eq!(entry.value, 7.0);
        assert_eq!(entry.description, Some("Strong"));
    }

    #[test]
    fn test_find_by_value() {
        let entry = Q_JR.find("1.5").unwrap();
        assert_eq!(entry.label, "Slickensided, undulating");
        let entry = RMR_ORIENTATION.find("-10").unwrap();
        assert_eq!(entry.label, "Unfavorable");
    }

    #[test]
    fn test_find_unknown() {
        let err = Q_JA.find("granite").unwrap_err();
        assert_eq!(err, CalcError::unknown_option("Ja", "granite"));
        assert!(Q_JA.find("2.0").is_err());
    }

    #[test]
    fn test_position_of() {
        assert_eq!(RMR_SPACING.position_of(20.0), Some(0));
        assert_eq!(RMR_SPACING.position_of(5.0), Some(4));
        assert_eq!(RMR_SPACING.position_of(6.0), None);
        assert!(Q_SRF.contains_value(2.5));
    }

    #[test]
    fn test_rmr_labels_without_value() {
        assert_eq!(RMR_WATER.display_label(&RMR_WATER.entries[0]), "Completely Dry");
    }

    #[test]
    fn test_all_tables_have_unique_codes() {
        let mut codes: Vec<&str> = ALL_TABLES.iter().map(|t| t.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL_TABLES.len());
    }

    #[test]
    fn test_table_serialization() {
        let json = serde_json::to_value(&RMR_WATER).unwrap();
        assert_eq!(json["code"], "A5");
        assert_eq!(json["entries"][1]["label"], "Damp");
        assert!(json["entries"][1].get("description").is_none());
    }
}
