//! # Support Design Guidance
//!
//! Display-oriented outputs derived from an already computed result vector
//! and an excavation span the collaborator holds locally. The span is not
//! part of the input vector and never triggers a recalculation.
//!
//! Nothing here is a design check. Bolt length is a span-only rule of thumb
//! and the support strategy is a simplified reading of the NGI Q-chart.
//!
//! ## Example
//!
//! ```rust
//! use rock_core::calculations::{recalc, ClassificationInput, SupportAdvice};
//! use rock_core::units::Meters;
//!
//! let results = recalc(&ClassificationInput::default());
//! let advice = SupportAdvice::from_results(&results, Meters(10.0));
//! assert_eq!(advice.bolt_length.0, 3.5);
//! assert_eq!(advice.support.description(), "Unsupported / Minimal Scaling");
//! ```

use serde::{Deserialize, Serialize};

use super::classification::{ClassificationInput, ClassificationResult};
use crate::equations::{rock_class_of, stand_up_hours, RockClassInfo};
use crate::units::{Hours, Meters};

/// Span shown before the user picks one
pub const DEFAULT_SPAN: Meters = Meters(5.0);

/// Largest span offered by the span control
pub const MAX_SPAN: Meters = Meters(20.0);

/// Span control increment
pub const SPAN_STEP: Meters = Meters(0.5);

/// Recommended rock bolt length.
///
/// # Formula
/// L = 2 + 0.15 × B   (B = span, m)
#[inline]
pub fn bolt_length(span: Meters) -> Meters {
    Meters(2.0 + 0.15 * span.0)
}

/// Support category from the Q-value, heaviest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportStrategy {
    /// Q < 0.1
    CastConcreteLiner,
    /// 0.1 ≤ Q < 1
    SystematicBoltingFibercrete,
    /// 1 ≤ Q < 4
    PatternBoltingShotcrete,
    /// 4 ≤ Q < 10
    SpotBoltingShotcrete,
    /// 10 ≤ Q < 40
    SpotBolting,
    /// Q ≥ 40
    Unsupported,
}

impl SupportStrategy {
    /// Recommendation text
    pub fn description(&self) -> &'static str {
        match self {
            SupportStrategy::CastConcreteLiner => "Cast Concrete Liner (Severe Squeezing)",
            SupportStrategy::SystematicBoltingFibercrete => "Systematic Bolting + 100mm Fibercrete",
            SupportStrategy::PatternBoltingShotcrete => "Pattern Bolting + 50mm Shotcrete",
            SupportStrategy::SpotBoltingShotcrete => "Spot Bolting + 50mm Shotcrete (if needed)",
            SupportStrategy::SpotBolting => "Spot Bolting",
            SupportStrategy::Unsupported => "Unsupported / Minimal Scaling",
        }
    }
}

impl std::fmt::Display for SupportStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Pick the support category for a Q-value.
pub fn support_strategy_for(q: f64) -> SupportStrategy {
    if q < 0.1 {
        SupportStrategy::CastConcreteLiner
    } else if q < 1.0 {
        SupportStrategy::SystematicBoltingFibercrete
    } else if q < 4.0 {
        SupportStrategy::PatternBoltingShotcrete
    } else if q < 10.0 {
        SupportStrategy::SpotBoltingShotcrete
    } else if q < 40.0 {
        SupportStrategy::SpotBolting
    } else {
        SupportStrategy::Unsupported
    }
}

/// Coarse verbal rating shown under the Q-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QQuality {
    VeryPoor,
    Fair,
    Good,
}

impl QQuality {
    pub fn label(&self) -> &'static str {
        match self {
            QQuality::VeryPoor => "Very Poor",
            QQuality::Fair => "Fair",
            QQuality::Good => "Good",
        }
    }
}

/// Q < 1 is very poor, Q > 10 is good, anything between (inclusive) is fair.
pub fn q_quality_for(q: f64) -> QQuality {
    if q < 1.0 {
        QQuality::VeryPoor
    } else if q > 10.0 {
        QQuality::Good
    } else {
        QQuality::Fair
    }
}

/// Verbal Q rating as display text
pub fn q_quality_label(q: f64) -> &'static str {
    q_quality_for(q).label()
}

/// One bar of the RMR parameter-contribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RmrContribution {
    /// Parameter name
    pub name: &'static str,
    /// Rating awarded
    pub value: f64,
    /// Best possible rating
    pub full: f64,
}

impl RmrContribution {
    /// Below half of the best possible rating
    pub fn is_weak(&self) -> bool {
        self.value < self.full * 0.5
    }
}

/// Contributions of the five positive RMR parameters.
///
/// The orientation adjustment is left out because it can only subtract.
pub fn rmr_contributions(inputs: &ClassificationInput, results: &ClassificationResult) -> [RmrContribution; 5] {
    [
        RmrContribution { name: "Strength", value: inputs.strength, full: 15.0 },
        RmrContribution { name: "RQD", value: f64::from(results.rqd_points), full: 20.0 },
        RmrContribution { name: "Spacing", value: inputs.spacing, full: 20.0 },
        RmrContribution { name: "Condition", value: inputs.condition, full: 30.0 },
        RmrContribution { name: "Water", value: inputs.water, full: 15.0 },
    ]
}

/// Everything the results panel shows beyond the raw result vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupportAdvice {
    /// Rock class from the RMR score
    pub rock_class: RockClassInfo,
    /// Unsupported stand-up time
    pub stand_up_time: Hours,
    /// Excavation span the advice was computed for
    pub span: Meters,
    /// Recommended bolt length
    pub bolt_length: Meters,
    /// Support category from the Q-value
    pub support: SupportStrategy,
    /// Verbal Q rating
    pub q_quality: QQuality,
}

impl SupportAdvice {
    /// Derive the advice from a result vector and a span.
    pub fn from_results(results: &ClassificationResult, span: Meters) -> Self {
        SupportAdvice {
            rock_class: rock_class_of(results.rmr_score),
            stand_up_time: Hours(stand_up_hours(results.rmr_score)),
            span,
            bolt_length: bolt_length(span),
            support: support_strategy_for(results.q_value),
            q_quality: q_quality_for(results.q_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{recalc, InputField};
    use crate::equations::RockClass;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_bolt_length() {
        assert!(approx_eq(bolt_length(DEFAULT_SPAN).0, 2.75));
        assert!(approx_eq(bolt_length(Meters(0.0)).0, 2.0));
        assert!(approx_eq(bolt_length(MAX_SPAN).0, 5.0));
    }

    #[test]
    fn test_support_thresholds() {
        assert_eq!(support_strategy_for(0.05), SupportStrategy::CastConcreteLiner);
        assert_eq!(support_strategy_for(0.1), SupportStrategy::SystematicBoltingFibercrete);
        assert_eq!(support_strategy_for(0.999), SupportStrategy::SystematicBoltingFibercrete);
        assert_eq!(support_strategy_for(1.0), SupportStrategy::PatternBoltingShotcrete);
        assert_eq!(support_strategy_for(4.0), SupportStrategy::SpotBoltingShotcrete);
        assert_eq!(support_strategy_for(10.0), SupportStrategy::SpotBolting);
        assert_eq!(support_strategy_for(39.999), SupportStrategy::SpotBolting);
        assert_eq!(support_strategy_for(40.0), SupportStrategy::Unsupported);
    }

    #[test]
    fn test_q_quality() {
        assert_eq!(q_quality_for(0.5), QQuality::VeryPoor);
        assert_eq!(q_quality_for(1.0), QQuality::Fair);
        assert_eq!(q_quality_for(10.0), QQuality::Fair);
        assert_eq!(q_quality_for(10.001), QQuality::Good);
        assert_eq!(q_quality_label(142.5), "Good");
        assert_eq!(q_quality_label(0.367), "Very Poor");
    }

    #[test]
    fn test_contributions_flag_weak_parameters() {
        let inputs = ClassificationInput {
            strength: 4.0,
            rqd: 60.0,
            spacing: 10.0,
            condition: 10.0,
            water: 15.0,
            ..ClassificationInput::default()
        };
        let results = recalc(&inputs);
        let bars = rmr_contributions(&inputs, &results);

        let weak: Vec<&str> = bars.iter().filter(|b| b.is_weak()).map(|b| b.name).collect();
        // Strength 4/15 and condition 10/30 are weak; spacing 10/20 sits exactly at half
        assert_eq!(weak, vec!["Strength", "Condition"]);
        assert_eq!(bars[1].value, 13.0);
    }

    #[test]
    fn test_advice_from_default_results() {
        let results = recalc(&ClassificationInput::default());
        let advice = SupportAdvice::from_results(&results, DEFAULT_SPAN);

        assert_eq!(advice.rock_class.class, RockClass::I);
        assert_eq!(advice.support, SupportStrategy::Unsupported);
        assert_eq!(advice.q_quality, QQuality::Good);
        assert!(approx_eq(advice.bolt_length.0, 2.75));
        // 10^((100 - 25) / 5) = 1e15 h
        assert!((advice.stand_up_time.0 / 1e15 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_advice_json() {
        // 15 + 20 + 20 + 10 + 15 + 0 = 80
        let results = recalc(&ClassificationInput::default().with(InputField::Condition, 10.0));
        let advice = SupportAdvice::from_results(&results, Meters(8.0));
        let json = serde_json::to_value(advice).unwrap();
        assert_eq!(json["rock_class"]["class"], "II");
        assert_eq!(json["support"], "Unsupported");
        assert_eq!(json["span"], 8.0);
    }
}
