//! # Rock Mass Classification
//!
//! The input vector, the result vector and `recalc`, the full recomputation
//! that maps one onto the other.
//!
//! `recalc` always runs every derivation, in dependency order:
//!
//! 1. RQD percentage → A2 rating points
//! 2. RMR score (uses the points from step 1)
//! 3. Q-value (uses the raw RQD percentage, independent of RMR)
//! 4. GSI (uses the RMR score)
//!
//! There is no incremental path and nothing is cached; all formulas are O(1).
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use rock_core::calculations::{recalc, ClassificationInput};
//!
//! let input = ClassificationInput {
//!     strength: 7.0,
//!     rqd: 68.0,
//!     spacing: 10.0,
//!     condition: 20.0,
//!     water: 10.0,
//!     orientation: -5.0,
//!     jn: 9.0,
//!     jr: 1.5,
//!     ja: 1.0,
//!     jw: 1.0,
//!     srf: 1.0,
//! };
//!
//! let result = recalc(&input);
//! assert_eq!(result.rqd_points, 13);
//! assert_eq!(result.rmr_score, 55.0);
//! assert_eq!(result.q_value, 11.333);
//! assert_eq!(result.gsi, 50.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::{gsi_of, q_value_with, rmr_score, rqd_points};
use crate::errors::{CalcError, CalcResult};

/// Lowest RQD percentage a collaborator may submit
pub const RQD_PERCENT_MIN: f64 = 0.0;

/// Highest RQD percentage a collaborator may submit
pub const RQD_PERCENT_MAX: f64 = 100.0;
use crate::settings::RoundingMode;
use crate::tables::{
    ClassificationTable, Q_JA, Q_JN, Q_JR, Q_JW, Q_SRF, RMR_CONDITION, RMR_ORIENTATION,
    RMR_SPACING, RMR_STRENGTH, RMR_WATER,
};

/// The input vector: eleven independently settable observations.
///
/// All fields except `rqd` hold a rating value taken from the matching
/// classification table. `rqd` is the raw percentage (0-100). The engine
/// does not check either rule.
///
/// Missing fields take their default value when deserializing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "strength": 15.0,
///   "rqd": 95.0,
///   "spacing": 20.0,
///   "condition": 30.0,
///   "water": 15.0,
///   "orientation": 0.0,
///   "jn": 2.0,
///   "jr": 3.0,
///   "ja": 1.0,
///   "jw": 1.0,
///   "srf": 1.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationInput {
    /// A1: strength of intact rock (points)
    pub strength: f64,
    /// A2 input: Rock Quality Designation (%)
    pub rqd: f64,
    /// A3: spacing of discontinuities (points)
    pub spacing: f64,
    /// A4: condition of discontinuities (points)
    pub condition: f64,
    /// A5: groundwater (points)
    pub water: f64,
    /// B: orientation adjustment (points, ≤ 0)
    pub orientation: f64,
    /// Joint set number
    pub jn: f64,
    /// Joint roughness number
    pub jr: f64,
    /// Joint alteration number
    pub ja: f64,
    /// Joint water reduction factor
    pub jw: f64,
    /// Stress reduction factor
    pub srf: f64,
}

impl Default for ClassificationInput {
    fn default() -> Self {
        ClassificationInput {
            strength: 15.0,
            rqd: 95.0,
            spacing: 20.0,
            condition: 30.0,
            water: 15.0,
            orientation: 0.0,
            jn: 2.0,
            jr: 3.0,
            ja: 1.0,
            jw: 1.0,
            srf: 1.0,
        }
    }
}

impl ClassificationInput {
    /// Read one field
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::Strength => self.strength,
            InputField::Rqd => self.rqd,
            InputField::Spacing => self.spacing,
            InputField::Condition => self.condition,
            InputField::Water => self.water,
            InputField::Orientation => self.orientation,
            InputField::Jn => self.jn,
            InputField::Jr => self.jr,
            InputField::Ja => self.ja,
            InputField::Jw => self.jw,
            InputField::Srf => self.srf,
        }
    }

    /// Build a replacement vector with one field changed and all others kept
    #[must_use]
    pub fn with(self, field: InputField, value: f64) -> Self {
        let mut next = self;
        match field {
            InputField::Strength => next.strength = value,
            InputField::Rqd => next.rqd = value,
            InputField::Spacing => next.spacing = value,
            InputField::Condition => next.condition = value,
            InputField::Water => next.water = value,
            InputField::Orientation => next.orientation = value,
            InputField::Jn => next.jn = value,
            InputField::Jr => next.jr = value,
            InputField::Ja => next.ja = value,
            InputField::Jw => next.jw = value,
            InputField::Srf => next.srf = value,
        }
        next
    }

    /// Parse an input vector from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fields holding a value the collaborator should never have produced:
    /// a rating missing from its table, or an RQD outside 0-100.
    ///
    /// The engine computes with such values anyway; this is for callers
    /// that want to warn about them.
    pub fn unlisted_fields(&self) -> Vec<InputField> {
        InputField::ALL
            .into_iter()
            .filter(|field| {
                let value = self.get(*field);
                match field.table() {
                    Some(table) => !table.contains_value(value),
                    None => !(RQD_PERCENT_MIN..=RQD_PERCENT_MAX).contains(&value),
                }
            })
            .collect()
    }
}

/// The result vector, entirely recomputed from the input vector.
///
/// Serialized with the camelCase keys of the dashboard state.
///
/// ## JSON Example
///
/// ```json
/// { "rmrScore": 100.0, "rqdPoints": 20, "qValue": 142.5, "gsi": 95.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// RMR89 score, clamped to [0, 100]
    pub rmr_score: f64,
    /// A2 rating derived from the RQD percentage
    pub rqd_points: u8,
    /// Q-value rounded to 3 decimals
    pub q_value: f64,
    /// Approximate GSI
    pub gsi: f64,
}

impl ClassificationResult {
    /// The static result vector the original dashboard started with.
    ///
    /// It does not match `recalc(&ClassificationInput::default())`, which
    /// gives `{100, 20, 142.5, 95}`.
    pub const LITERAL_DEFAULTS: ClassificationResult = ClassificationResult {
        rmr_score: 80.0,
        rqd_points: 20,
        q_value: 10.0,
        gsi: 75.0,
    };
}

/// Recompute the full result vector (Q-value rounded half away from zero).
pub fn recalc(input: &ClassificationInput) -> ClassificationResult {
    recalc_with(input, RoundingMode::default())
}

/// Recompute the full result vector with an explicit Q-value rounding mode.
pub fn recalc_with(input: &ClassificationInput, rounding: RoundingMode) -> ClassificationResult {
    let rqd_points = rqd_points(input.rqd);

    let rmr_score = rmr_score(
        input.strength,
        f64::from(rqd_points),
        input.spacing,
        input.condition,
        input.water,
        input.orientation,
    );

    let q_value = q_value_with(
        rounding,
        input.rqd,
        input.jn,
        input.jr,
        input.ja,
        input.jw,
        input.srf,
    );

    let gsi = gsi_of(rmr_score);

    debug!(rmr_score, rqd_points, q_value, gsi, "recalculated classification");

    ClassificationResult {
        rmr_score,
        rqd_points,
        q_value,
        gsi,
    }
}

// ============================================================================
// Input Fields
// ============================================================================

/// Which classification an input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldGroup {
    /// RMR89 parameters (A1-A5, B)
    Rmr,
    /// Q-System parameters
    QSystem,
}

/// Names of the eleven input vector fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputField {
    Strength,
    Rqd,
    Spacing,
    Condition,
    Water,
    Orientation,
    Jn,
    Jr,
    Ja,
    Jw,
    Srf,
}

impl InputField {
    /// All fields in input-vector order
    pub const ALL: [InputField; 11] = [
        InputField::Strength,
        InputField::Rqd,
        InputField::Spacing,
        InputField::Condition,
        InputField::Water,
        InputField::Orientation,
        InputField::Jn,
        InputField::Jr,
        InputField::Ja,
        InputField::Jw,
        InputField::Srf,
    ];

    /// Field key as used in JSON and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            InputField::Strength => "strength",
            InputField::Rqd => "rqd",
            InputField::Spacing => "spacing",
            InputField::Condition => "condition",
            InputField::Water => "water",
            InputField::Orientation => "orientation",
            InputField::Jn => "jn",
            InputField::Jr => "jr",
            InputField::Ja => "ja",
            InputField::Jw => "jw",
            InputField::Srf => "srf",
        }
    }

    /// Label for input forms
    pub fn label(&self) -> &'static str {
        match self {
            InputField::Strength => "A1. Strength (UCS)",
            InputField::Rqd => "A2. RQD (%)",
            InputField::Spacing => "A3. Spacing",
            InputField::Condition => "A4. Condition",
            InputField::Water => "A5. Groundwater",
            InputField::Orientation => "B. Orientation Adj.",
            InputField::Jn => "Jn (Joint Set Number)",
            InputField::Jr => "Jr (Joint Roughness)",
            InputField::Ja => "Ja (Joint Alteration)",
            InputField::Jw => "Jw (Joint Water Reduction)",
            InputField::Srf => "SRF (Stress Reduction Factor)",
        }
    }

    /// Classification the field feeds
    pub fn group(&self) -> FieldGroup {
        match self {
            InputField::Strength
            | InputField::Rqd
            | InputField::Spacing
            | InputField::Condition
            | InputField::Water
            | InputField::Orientation => FieldGroup::Rmr,
            InputField::Jn | InputField::Jr | InputField::Ja | InputField::Jw | InputField::Srf => {
                FieldGroup::QSystem
            }
        }
    }

    /// Table the field's values are chosen from (`None` for the continuous RQD)
    pub fn table(&self) -> Option<&'static ClassificationTable> {
        match self {
            InputField::Strength => Some(&RMR_STRENGTH),
            InputField::Rqd => None,
            InputField::Spacing => Some(&RMR_SPACING),
            InputField::Condition => Some(&RMR_CONDITION),
            InputField::Water => Some(&RMR_WATER),
            InputField::Orientation => Some(&RMR_ORIENTATION),
            InputField::Jn => Some(&Q_JN),
            InputField::Jr => Some(&Q_JR),
            InputField::Ja => Some(&Q_JA),
            InputField::Jw => Some(&Q_JW),
            InputField::Srf => Some(&Q_SRF),
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "strength" | "a1" | "ucs" => Ok(InputField::Strength),
            "rqd" | "a2" => Ok(InputField::Rqd),
            "spacing" | "a3" => Ok(InputField::Spacing),
            "condition" | "a4" => Ok(InputField::Condition),
            "water" | "groundwater" | "a5" => Ok(InputField::Water),
            "orientation" | "b" => Ok(InputField::Orientation),
            "jn" => Ok(InputField::Jn),
            "jr" => Ok(InputField::Jr),
            "ja" => Ok(InputField::Ja),
            "jw" => Ok(InputField::Jw),
            "srf" => Ok(InputField::Srf),
            _ => Err(CalcError::unknown_field(s)),
        }
    }

    /// Resolve a user choice (table label or numeric value) for this field.
    ///
    /// RQD accepts a percentage in 0-100; table fields accept a row label or
    /// a rating listed in their table.
    pub fn resolve(&self, choice: &str) -> CalcResult<f64> {
        match self.table() {
            Some(table) => table.find(choice).map(|entry| entry.value),
            None => {
                let value = choice
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| CalcError::invalid_input(self.key(), choice, e.to_string()))?;
                self.validate(value)
            }
        }
    }

    /// Check a free-form value before it reaches the state holder.
    ///
    /// Non-finite numbers are rejected for every field and RQD must lie in
    /// 0-100. Ratings missing from their table pass; `unlisted_fields`
    /// reports those.
    pub fn validate(&self, value: f64) -> CalcResult<f64> {
        if !value.is_finite() {
            return Err(CalcError::invalid_input(self.key(), value.to_string(), "not a finite number"));
        }
        if matches!(self, InputField::Rqd) && !(RQD_PERCENT_MIN..=RQD_PERCENT_MAX).contains(&value) {
            return Err(CalcError::invalid_input(
                self.key(),
                value.to_string(),
                format!("RQD is a percentage between {RQD_PERCENT_MIN} and {RQD_PERCENT_MAX}"),
            ));
        }
        Ok(value)
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
