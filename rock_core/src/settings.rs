//! # Engine Settings
//!
//! The two behaviours the classification formulas leave open are settled
//! here rather than hard-coded, so a collaborator can echo its configuration
//! alongside its results:
//!
//! - how the Q-value is rounded at an exact half-thousandth
//! - whether the state holder starts from recomputed results or from the
//!   literal result vector the original dashboard shipped with
//!
//! ```rust
//! use rock_core::settings::{EngineSettings, InitPolicy, RoundingMode};
//!
//! let settings = EngineSettings::default();
//! assert_eq!(settings.rounding, RoundingMode::HalfAwayFromZero);
//! assert_eq!(settings.init, InitPolicy::Recompute);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Tie-breaking rule for rounding the Q-value to 3 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// 0.0005 → 0.001 (engineering convention)
    #[default]
    HalfAwayFromZero,
    /// 0.0005 → 0.000, 0.0015 → 0.002 (banker's rounding)
    HalfToEven,
}

impl RoundingMode {
    /// Round `value` to `places` fractional digits using this mode
    pub fn round(self, value: f64, places: i32) -> f64 {
        let scale = 10f64.powi(places);
        let scaled = value * scale;
        let rounded = match self {
            RoundingMode::HalfAwayFromZero => scaled.round(),
            RoundingMode::HalfToEven => scaled.round_ties_even(),
        };
        rounded / scale
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "half-away-from-zero" | "half-away" | "away" | "half-up" => Ok(RoundingMode::HalfAwayFromZero),
            "half-to-even" | "half-even" | "even" | "bankers" => Ok(RoundingMode::HalfToEven),
            _ => Err(CalcError::invalid_input(
                "rounding",
                s,
                "Expected 'half-away' or 'half-even'",
            )),
        }
    }
}

/// How [`RockState`](crate::state::RockState) builds its first result vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitPolicy {
    /// Derive the initial results from the default inputs via `recalc`
    #[default]
    Recompute,
    /// Start from the literal `{80, 20, 10, 75}` result vector. It does not
    /// match the default inputs and is replaced on the first setter call.
    LiteralDefaults,
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Q-value tie-breaking rule
    #[serde(default)]
    pub rounding: RoundingMode,
    /// Initial result vector policy
    #[serde(default)]
    pub init: InitPolicy,
}

impl EngineSettings {
    /// Builder: set the rounding mode
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Builder: set the initialization policy
    pub fn with_init(mut self, init: InitPolicy) -> Self {
        self.init = init;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_away_from_zero() {
        let mode = RoundingMode::HalfAwayFromZero;
        assert_eq!(mode.round(142.5, 3), 142.5);
        assert_eq!(mode.round(0.0625, 3), 0.063);
        assert_eq!(mode.round(2.0 / 3.0, 3), 0.667);
    }

    #[test]
    fn test_half_to_even() {
        let mode = RoundingMode::HalfToEven;
        // 0.0625 * 1000 = 62.5 exactly in binary
        assert_eq!(mode.round(0.0625, 3), 0.062);
        assert_eq!(mode.round(0.1875, 3), 0.188);
        assert_eq!(mode.round(2.0 / 3.0, 3), 0.667);
    }

    #[test]
    fn test_parse_rounding_mode() {
        assert_eq!(RoundingMode::from_str_flexible("Half_Even").unwrap(), RoundingMode::HalfToEven);
        assert_eq!(RoundingMode::from_str_flexible("half-away").unwrap(), RoundingMode::HalfAwayFromZero);
        assert!(RoundingMode::from_str_flexible("ceiling").is_err());
    }

    #[test]
    fn test_settings_json() {
        let settings: EngineSettings = serde_json::from_str(r#"{"rounding":"half-to-even"}"#).unwrap();
        assert_eq!(settings.rounding, RoundingMode::HalfToEven);
        assert_eq!(settings.init, InitPolicy::Recompute);

        let json = serde_json::to_string(&EngineSettings::default().with_init(InitPolicy::LiteralDefaults)).unwrap();
        assert_eq!(json, r#"{"rounding":"half-away-from-zero","init":"literal-defaults"}"#);
    }
}
