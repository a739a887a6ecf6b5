//! Q-System Parameter Tables (Barton et al.)
//!
//! Ratings for the five joint parameters of the Q-System. Some ratings appear
//! twice under different descriptions (Jr 1.5, SRF 5.0); rows are kept as
//! published so the user can pick the description that matches the face.

use super::{ClassificationTable, TableEntry};

const JN_ENTRIES: [TableEntry; 9] = [
    TableEntry::new("Massive, no or few joints", 0.5),
    TableEntry::new("One joint set", 2.0),
    TableEntry::new("One joint set + random", 3.0),
    TableEntry::new("Two joint sets", 4.0),
    TableEntry::new("Two joint sets + random", 6.0),
    TableEntry::new("Three joint sets", 9.0),
    TableEntry::new("Three joint sets + random", 12.0),
    TableEntry::new("Four or more joint sets", 15.0),
    TableEntry::new("Crushed rock, earthlike", 20.0),
];

const JR_ENTRIES: [TableEntry; 7] = [
    TableEntry::new("Discontinuous joints", 4.0),
    TableEntry::new("Rough or irregular, undulating", 3.0),
    TableEntry::new("Smooth, undulating", 2.0),
    TableEntry::new("Slickensided, undulating", 1.5),
    TableEntry::new("Rough or irregular, planar", 1.5),
    TableEntry::new("Smooth, planar", 1.0),
    TableEntry::new("Slickensided, planar", 0.5),
];

const JA_ENTRIES: [TableEntry; 4] = [
    TableEntry::new("Unaltered joint walls", 0.75),
    TableEntry::new("Slightly altered walls", 1.0),
    TableEntry::new("Silty or sandy coatings", 3.0),
    TableEntry::new("Clay coatings", 4.0),
];

const JW_ENTRIES: [TableEntry; 4] = [
    TableEntry::new("Dry excavation", 1.0),
    TableEntry::new("Medium inflow", 0.66),
    TableEntry::new("Large inflow", 0.5),
    TableEntry::new("High pressure inflow", 0.33),
];

const SRF_ENTRIES: [TableEntry; 6] = [
    TableEntry::new("Moderate stress", 1.0),
    TableEntry::new("Low stress (near surface)", 2.5),
    TableEntry::new("High stress (mild squeezing)", 5.0),
    TableEntry::new("Heavy squeezing", 10.0),
    TableEntry::new("Mild rock burst", 5.0),
    TableEntry::new("Heavy rock burst", 20.0),
];

/// Jn: Joint set number
pub static Q_JN: ClassificationTable = ClassificationTable {
    code: "Jn",
    name: "Joint Set Number",
    entries: &JN_ENTRIES,
    value_in_label: true,
};

/// Jr: Joint roughness number
pub static Q_JR: ClassificationTable = ClassificationTable {
    code: "Jr",
    name: "Joint Roughness",
    entries: &JR_ENTRIES,
    value_in_label: true,
};

/// Ja: Joint alteration number
pub static Q_JA: ClassificationTable = ClassificationTable {
    code: "Ja",
    name: "Joint Alteration",
    entries: &JA_ENTRIES,
    value_in_label: true,
};

/// Jw: Joint water reduction factor
pub static Q_JW: ClassificationTable = ClassificationTable {
    code: "Jw",
    name: "Joint Water Reduction",
    entries: &JW_ENTRIES,
    value_in_label: true,
};

/// SRF: Stress reduction factor
pub static Q_SRF: ClassificationTable = ClassificationTable {
    code: "SRF",
    name: "Stress Reduction Factor",
    entries: &SRF_ENTRIES,
    value_in_label: true,
};
