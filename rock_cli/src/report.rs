//! Classification report: what `rockrate calc` prints.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use rock_core::calculations::{
    q_quality_label, rmr_contributions, ClassificationInput, ClassificationResult, InputField,
    RmrContribution, SupportAdvice,
};
use rock_core::settings::EngineSettings;
use rock_core::state::RockState;
use rock_core::units::{Days, Hours, Meters};

/// Everything known about one classified rock mass.
#[derive(Debug, Clone, Serialize)]
pub struct CalcReport {
    pub generated: DateTime<Utc>,
    pub settings: EngineSettings,
    pub inputs: ClassificationInput,
    pub results: ClassificationResult,
    pub advice: SupportAdvice,
    pub contributions: [RmrContribution; 5],
    /// Fields whose value is missing from their rating table
    pub unlisted: Vec<InputField>,
}

impl CalcReport {
    /// Snapshot the state holder's live pair and derive the advice.
    pub fn from_state(state: &RockState, span: Meters) -> Self {
        let inputs = *state.inputs();
        let results = *state.results();
        CalcReport {
            generated: Utc::now(),
            settings: *state.settings(),
            inputs,
            results,
            advice: SupportAdvice::from_results(&results, span),
            contributions: rmr_contributions(&inputs, &results),
            unlisted: inputs.unlisted_fields(),
        }
    }

    /// Plain-text rendering.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CalcReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.results;
        let a = &self.advice;

        writeln!(f, "RockRate Classification Report")?;
        writeln!(f, "Generated: {}", self.generated.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(f)?;

        writeln!(f, "Inputs")?;
        for field in InputField::ALL {
            let value = self.inputs.get(field);
            let marker = if self.unlisted.contains(&field) { "  (not in table)" } else { "" };
            writeln!(f, "  {:<32} {:>8}{}", field.label(), value, marker)?;
        }
        writeln!(f)?;

        writeln!(f, "RMR89")?;
        writeln!(f, "  Score:          {} ({} RQD points)", r.rmr_score, r.rqd_points)?;
        writeln!(
            f,
            "  Class:          {} - {}",
            a.rock_class.class, a.rock_class.description
        )?;
        writeln!(f, "  Stand-up time:  {}", format_hours(a.stand_up_time))?;
        writeln!(f)?;

        writeln!(f, "Q-System")?;
        writeln!(f, "  Q-value:        {} ({})", r.q_value, q_quality_label(r.q_value))?;
        writeln!(f)?;

        writeln!(f, "GSI (approx.):    {}", r.gsi)?;
        writeln!(f)?;

        writeln!(f, "Support Design (span {} m)", a.span.0)?;
        writeln!(f, "  Bolt length:    {:.2} m", a.bolt_length.0)?;
        writeln!(f, "  Recommendation: {}", a.support)?;
        writeln!(f)?;

        writeln!(f, "RMR Parameter Contributions")?;
        for bar in &self.contributions {
            let flag = if bar.is_weak() { "  weak" } else { "" };
            writeln!(f, "  {:<10} {:>4} / {:<4}{}", bar.name, bar.value, bar.full, flag)?;
        }
        Ok(())
    }
}

/// Stand-up time in the largest sensible unit
pub fn format_hours(hours: Hours) -> String {
    let days: Days = hours.into();
    if days.0 >= 365.0 {
        format!("{:.1} years", days.0 / 365.0)
    } else if days.0 >= 1.0 {
        format!("{:.1} days", days.0)
    } else {
        format!("{:.1} hours", hours.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rock_core::settings::RoundingMode;

    fn sample_report() -> CalcReport {
        let mut state = RockState::new();
        state.set_rqd(68.0);
        state.set_jn(9.0);
        state.set_jr(1.5);
        state.set_water(12.0);
        CalcReport::from_state(&state, Meters(10.0))
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample_report()).unwrap();

        assert!(json["generated"].is_string());
        assert_eq!(json["settings"]["rounding"], "half-away-from-zero");
        assert_eq!(json["inputs"]["rqd"], 68.0);
        assert_eq!(json["results"]["rqdPoints"], 13);
        // 15 + 13 + 20 + 30 + 12 + 0 = 90
        assert_eq!(json["results"]["rmrScore"], 90.0);
        // (68/9) × 1.5 × 1 = 11.333..
        assert_eq!(json["results"]["qValue"], 11.333);
        assert_eq!(json["advice"]["rock_class"]["class"], "I");
        assert_eq!(json["advice"]["support"], "SpotBolting");
        assert_eq!(json["contributions"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["unlisted"], serde_json::json!(["water"]));
    }

    #[test]
    fn test_settings_echoed() {
        let settings = EngineSettings::default().with_rounding(RoundingMode::HalfToEven);
        let state = RockState::with_settings(settings);
        let report = CalcReport::from_state(&state, Meters(5.0));
        assert_eq!(report.settings.rounding, RoundingMode::HalfToEven);
        assert!(report.unlisted.is_empty());
    }

    #[test]
    fn test_text_report() {
        let text = sample_report().render_text();
        assert!(text.contains("Score:          90 (13 RQD points)"));
        assert!(text.contains("Q-value:        11.333 (Good)"));
        assert!(text.contains("Recommendation: Spot Bolting"));
        assert!(text.contains("Bolt length:    3.50 m"));
        assert!(text.contains("(not in table)"));
    }

    #[test]
    fn test_text_report_sections_in_order() {
        let text = sample_report().to_string();
        let positions: Vec<usize> = [
            "Inputs",
            "RMR89",
            "Q-System",
            "GSI (approx.):    85",
            "Support Design (span 10 m)",
            "RMR Parameter Contributions",
        ]
        .iter()
        .map(|heading| text.find(heading).unwrap_or_else(|| panic!("missing {heading}")))
        .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(text.lines().filter(|line| line.starts_with("  ")).count(), 11 + 3 + 1 + 3 + 5);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_hours(Hours(2.0)), "2.0 hours");
        assert_eq!(format_hours(Hours(48.0)), "2.0 days");
        assert_eq!(format_hours(Hours(24.0 * 730.0)), "2.0 years");
    }
}
