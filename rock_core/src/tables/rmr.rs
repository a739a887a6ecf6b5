//! RMR89 Rating Tables (Bieniawski, 1989)
//!
//! Parameters A1-A5 and adjustment B of the Rock Mass Rating system, in the
//! order they are offered to the user. Values are rating points, not
//! measurements: a collaborator picks a row and hands its `value` to the
//! engine.

use serde::Serialize;

use super::{ClassificationTable, TableEntry};

const STRENGTH_ENTRIES: [TableEntry; 6] = [
    TableEntry::described("> 250 MPa", 15.0, "Extremely Strong"),
    TableEntry::described("100 - 250 MPa", 12.0, "Very Strong"),
    TableEntry::described("50 - 100 MPa", 7.0, "Strong"),
    TableEntry::described("25 - 50 MPa", 4.0, "Average"),
    TableEntry::described("5 - 25 MPa", 2.0, "Weak"),
    TableEntry::described("< 5 MPa", 0.0, "Very Weak"),
];

const SPACING_ENTRIES: [TableEntry; 5] = [
    TableEntry::described("> 2 m", 20.0, "Very Wide"),
    TableEntry::described("0.6 - 2 m", 15.0, "Wide"),
    TableEntry::described("200 - 600 mm", 10.0, "Moderate"),
    TableEntry::described("60 - 200 mm", 8.0, "Close"),
    TableEntry::described("< 60 mm", 5.0, "Very Close"),
];

const CONDITION_ENTRIES: [TableEntry; 5] = [
    TableEntry::described("Very Rough, Not Continuous", 30.0, "No separation, unweathered wall"),
    TableEntry::described("Slightly Rough", 25.0, "Separation < 1mm, slightly weathered"),
    TableEntry::described("Slightly Rough (Soft)", 20.0, "Separation < 1mm, highly weathered"),
    TableEntry::described("Slickensided / Gouge < 5mm", 10.0, "Separation 1-5mm, continuous"),
    TableEntry::described("Soft Gouge > 5mm", 0.0, "Separation > 5mm, continuous"),
];

const WATER_ENTRIES: [TableEntry; 5] = [
    TableEntry::new("Completely Dry", 15.0),
    TableEntry::new("Damp", 10.0),
    TableEntry::new("Wet", 7.0),
    TableEntry::new("Dripping", 4.0),
    TableEntry::new("Flowing", 0.0),
];

// Tunnelling adjustments
const ORIENTATION_ENTRIES: [TableEntry; 5] = [
    TableEntry::new("Very Favorable", 0.0),
    TableEntry::new("Favorable", -2.0),
    TableEntry::new("Fair", -5.0),
    TableEntry::new("Unfavorable", -10.0),
    TableEntry::new("Very Unfavorable", -12.0),
];

/// A1: Strength of intact rock material (UCS)
pub static RMR_STRENGTH: ClassificationTable = ClassificationTable {
    code: "A1",
    name: "Strength (UCS)",
    entries: &STRENGTH_ENTRIES,
    value_in_label: false,
};

/// A3: Spacing of discontinuities
pub static RMR_SPACING: ClassificationTable = ClassificationTable {
    code: "A3",
    name: "Spacing",
    entries: &SPACING_ENTRIES,
    value_in_label: false,
};

/// A4: Condition of discontinuities
pub static RMR_CONDITION: ClassificationTable = ClassificationTable {
    code: "A4",
    name: "Condition",
    entries: &CONDITION_ENTRIES,
    value_in_label: false,
};

/// A5: Groundwater
pub static RMR_WATER: ClassificationTable = ClassificationTable {
    code: "A5",
    name: "Groundwater",
    entries: &WATER_ENTRIES,
    value_in_label: false,
};

/// B: Adjustment for joint orientation
pub static RMR_ORIENTATION: ClassificationTable = ClassificationTable {
    code: "B",
    name: "Orientation Adj.",
    entries: &ORIENTATION_ENTRIES,
    value_in_label: false,
};

/// One band of the A2 RQD rating table.
///
/// Both ends are inclusive, so neighbouring bands share their boundary
/// value. Lookups scan [`RQD_RANGES`] in order and the first band wins,
/// which hands every shared boundary to the higher-rated band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RqdBand {
    /// Lower bound, percent
    pub min: f64,
    /// Upper bound, percent
    pub max: f64,
    /// RMR rating points for this band
    pub points: u8,
}

impl RqdBand {
    /// True if `rqd` lies within `[min, max]`
    pub fn contains(&self, rqd: f64) -> bool {
        rqd >= self.min && rqd <= self.max
    }
}

/// A2: RQD percentage to rating points, best band first
pub const RQD_RANGES: [RqdBand; 5] = [
    RqdBand { min: 90.0, max: 100.0, points: 20 },
    RqdBand { min: 75.0, max: 90.0, points: 17 },
    RqdBand { min: 50.0, max: 75.0, points: 13 },
    RqdBand { min: 25.0, max: 50.0, points: 8 },
    RqdBand { min: 0.0, max: 25.0, points: 3 },
];

/// Points awarded when an RQD value falls outside every band
pub const RQD_FALLBACK_POINTS: u8 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rqd_bands_cover_full_range() {
        assert_eq!(RQD_RANGES.first().map(|b| b.max), Some(100.0));
        assert_eq!(RQD_RANGES.last().map(|b| b.min), Some(0.0));
        for pair in RQD_RANGES.windows(2) {
            // Descending and touching
            assert_eq!(pair[0].min, pair[1].max);
            assert!(pair[0].points > pair[1].points);
        }
    }

    #[test]
    fn test_rmr_maxima_sum_to_100() {
        let best = |t: &ClassificationTable| {
            t.entries.iter().map(|e| e.value).fold(f64::MIN, f64::max)
        };
        let total = best(&RMR_STRENGTH)
            + f64::from(RQD_RANGES[0].points)
            + best(&RMR_SPACING)
            + best(&RMR_CONDITION)
            + best(&RMR_WATER)
            + best(&RMR_ORIENTATION);
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_orientation_is_never_positive() {
        assert!(RMR_ORIENTATION.entries.iter().all(|e| e.value <= 0.0));
    }

    #[test]
    fn test_condition_descriptions_present() {
        assert!(RMR_CONDITION.entries.iter().all(|e| e.description.is_some()));
        assert!(RMR_WATER.entries.iter().all(|e| e.description.is_none()));
    }
}
