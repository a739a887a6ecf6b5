//! # RMR89 Formulas
//!
//! Rock Mass Rating (Bieniawski, 1989) and the outputs derived from the
//! score: rock class, stand-up time and the approximate GSI.
//!
//! ## Notation
//!
//! - `A1` = Strength of intact rock (0-15)
//! - `A2` = RQD rating (3-20)
//! - `A3` = Spacing of discontinuities (5-20)
//! - `A4` = Condition of discontinuities (0-30)
//! - `A5` = Groundwater (0-15)
//! - `B`  = Orientation adjustment (-12-0)
//!
//! ## References
//!
//! - Bieniawski, Z.T. (1989). Engineering Rock Mass Classifications.
//! - Hoek, E., Kaiser, P.K., Bawden, W.F. (1995). Support of Underground
//!   Excavations in Hard Rock.

use serde::{Deserialize, Serialize};

use crate::tables::{RQD_FALLBACK_POINTS, RQD_RANGES};

/// Lower score bound for the RMR clamp
pub const RMR_MIN: f64 = 0.0;

/// Upper score bound for the RMR clamp
pub const RMR_MAX: f64 = 100.0;

// =============================================================================
// RQD RATING (A2)
// =============================================================================

/// Convert an RQD percentage to RMR rating points.
///
/// Bands are scanned best-first with inclusive ends, so boundary values go
/// to the higher band: 90 → 20, 75 → 17, 50 → 13, 25 → 8.
///
/// Values outside every band (negative, above 100, NaN) fall back to the
/// lowest rating, 3.
#[inline]
pub fn rqd_points(rqd: f64) -> u8 {
    RQD_RANGES
        .iter()
        .find(|band| band.contains(rqd))
        .map_or(RQD_FALLBACK_POINTS, |band| band.points)
}

// =============================================================================
// TOTAL SCORE
// =============================================================================

/// Total RMR89 score.
///
/// # Formula
/// RMR = A1 + A2 + A3 + A4 + A5 + B, clamped to [0, 100]
///
/// The orientation adjustment is negative or zero and can pull a weak rock
/// mass below zero before the clamp. No rounding is applied.
#[inline]
pub fn rmr_score(
    strength: f64,
    rqd_points: f64,
    spacing: f64,
    condition: f64,
    water: f64,
    orientation: f64,
) -> f64 {
    let sum = strength + rqd_points + spacing + condition + water + orientation;
    sum.clamp(RMR_MIN, RMR_MAX)
}

// =============================================================================
// ROCK CLASS
// =============================================================================

/// RMR rock mass class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RockClass {
    I,
    II,
    III,
    IV,
    V,
}

impl RockClass {
    /// All classes, best first
    pub const ALL: [RockClass; 5] = [
        RockClass::I,
        RockClass::II,
        RockClass::III,
        RockClass::IV,
        RockClass::V,
    ];

    /// Roman numeral
    pub fn numeral(&self) -> &'static str {
        match self {
            RockClass::I => "I",
            RockClass::II => "II",
            RockClass::III => "III",
            RockClass::IV => "IV",
            RockClass::V => "V",
        }
    }

    /// Lowest score belonging to this class
    pub fn min_score(&self) -> f64 {
        match self {
            RockClass::I => 81.0,
            RockClass::II => 61.0,
            RockClass::III => 41.0,
            RockClass::IV => 21.0,
            RockClass::V => RMR_MIN,
        }
    }

    /// Verbal description
    pub fn description(&self) -> &'static str {
        match self {
            RockClass::I => "Very Good Rock",
            RockClass::II => "Good Rock",
            RockClass::III => "Fair Rock",
            RockClass::IV => "Poor Rock",
            RockClass::V => "Very Poor Rock",
        }
    }

    /// Display color token
    pub fn color(&self) -> ClassColor {
        match self {
            RockClass::I => ClassColor::Green,
            RockClass::II => ClassColor::Blue,
            RockClass::III => ClassColor::Yellow,
            RockClass::IV => ClassColor::Orange,
            RockClass::V => ClassColor::Red,
        }
    }
}

impl std::fmt::Display for RockClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.numeral())
    }
}

/// Presentation-neutral color token for a rock class.
///
/// Collaborators map the token onto whatever palette they render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassColor {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
}

/// Rock class record: `{class, description, color}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RockClassInfo {
    pub class: RockClass,
    pub description: &'static str,
    pub color: ClassColor,
}

impl From<RockClass> for RockClassInfo {
    fn from(class: RockClass) -> Self {
        RockClassInfo {
            class,
            description: class.description(),
            color: class.color(),
        }
    }
}

/// Classify a (clamped) RMR score.
///
/// | RMR    | Class | Description    |
/// |--------|-------|----------------|
/// | ≥ 81   | I     | Very Good Rock |
/// | ≥ 61   | II    | Good Rock      |
/// | ≥ 41   | III   | Fair Rock      |
/// | ≥ 21   | IV    | Poor Rock      |
/// | < 21   | V     | Very Poor Rock |
pub fn rock_class_of(score: f64) -> RockClassInfo {
    let class = RockClass::ALL
        .into_iter()
        .find(|class| score >= class.min_score())
        .unwrap_or(RockClass::V);
    class.into()
}

// =============================================================================
// STAND-UP TIME
// =============================================================================

/// Unsupported stand-up time in hours.
///
/// # Formula
/// log10(T) = (RMR - 25) / 5
///
/// Illustrative only, not a basis for support sizing. Feed it the clamped
/// score.
#[inline]
pub fn stand_up_hours(score: f64) -> f64 {
    10f64.powf((score - 25.0) / 5.0)
}

// =============================================================================
// GSI (APPROXIMATE)
// =============================================================================

/// Score above which the GSI offset applies
pub const GSI_OFFSET_THRESHOLD: f64 = 23.0;

/// Approximate Geological Strength Index from the RMR score.
///
/// # Formula
/// - GSI = RMR - 5   for RMR > 23
/// - GSI = RMR       otherwise
#[inline]
pub fn gsi_of(score: f64) -> f64 {
    if score > GSI_OFFSET_THRESHOLD {
        score - 5.0
    } else {
        score
    }
}
