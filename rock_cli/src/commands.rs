use std::fs;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use rock_core::calculations::{ClassificationInput, InputField, MAX_SPAN};
use rock_core::equations::generate_equations_markdown;
use rock_core::settings::EngineSettings;
use rock_core::state::RockState;
use rock_core::tables::{ClassificationTable, RqdBand, ALL_TABLES, RQD_RANGES};
use rock_core::units::Meters;

use crate::cli::{CalcArgs, TablesArgs};
use crate::report::CalcReport;

/// Build the state holder from the calc flags and snapshot a report.
///
/// Values from `--input` are applied first, then individual field flags,
/// each through the state holder's setter.
pub fn run_calc(args: &CalcArgs, settings: EngineSettings) -> Result<CalcReport> {
    let span = span_arg(args.span)?;
    let _guard = info_span!("calc", span = span.0).entered();

    let mut state = RockState::with_settings(settings);

    if let Some(path) = &args.input {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read input file {}", path.display()))?;
        let inputs = ClassificationInput::from_json(&raw)
            .with_context(|| format!("parse input file {}", path.display()))?;
        for field in InputField::ALL {
            let value = field
                .validate(inputs.get(field))
                .with_context(|| format!("input file {}", path.display()))?;
            state.set(field, value);
        }
        info!(path = %path.display(), "loaded input vector");
    }

    for (field, choice) in args.choices() {
        let value = field
            .resolve(choice)
            .with_context(|| format!("--{} {:?}", field.key(), choice))?;
        debug!(field = %field, choice, value, "resolved choice");
        state.set(field, value);
    }

    let report = CalcReport::from_state(&state, span);
    for field in &report.unlisted {
        warn!(field = %field, value = report.inputs.get(*field), "value not listed in its rating table");
    }
    Ok(report)
}

/// Print a report in the requested format.
pub fn print_report(report: &CalcReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report).context("serialize report")?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

#[derive(Serialize)]
struct TablesDocument {
    rqd: &'static [RqdBand],
    tables: Vec<&'static ClassificationTable>,
}

pub fn run_tables(args: &TablesArgs) -> Result<()> {
    if args.json {
        let document = TablesDocument {
            rqd: &RQD_RANGES,
            tables: ALL_TABLES.to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&document).context("serialize tables")?);
        return Ok(());
    }

    print!("{}", render_tables());
    Ok(())
}

pub fn run_equations() -> Result<()> {
    print!("{}", generate_equations_markdown());
    Ok(())
}

/// Validate a `--span` value; shared by `calc` and `tui`.
pub fn span_arg(span: f64) -> Result<Meters> {
    if !span.is_finite() || span < 0.0 {
        bail!("span must be a non-negative number of meters, got {span}");
    }
    if span > MAX_SPAN.0 {
        warn!(span, max = MAX_SPAN.0, "span beyond the dashboard range");
    }
    Ok(Meters(span))
}

fn render_tables() -> String {
    let mut out = String::new();

    out.push_str("A2  RQD (%)\n");
    for band in &RQD_RANGES {
        out.push_str(&format!("  {:>5}  {:.0} - {:.0} %\n", band.points, band.min, band.max));
    }
    out.push('\n');

    for table in ALL_TABLES {
        out.push_str(&format!("{:<3} {}\n", table.code, table.name));
        for entry in table.entries {
            let label = table.display_label(entry);
            match entry.description {
                Some(description) => {
                    out.push_str(&format!("  {:>5}  {}  ({})\n", entry.value, label, description))
                }
                None => out.push_str(&format!("  {:>5}  {}\n", entry.value, label)),
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;

    fn calc_args(argv: &[&str]) -> CalcArgs {
        let mut full = vec!["rockrate", "calc"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Command::Calc(args) => args,
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_calc_applies_labels_and_ratings() {
        let args = calc_args(&["--strength", "50 - 100 MPa", "--rqd", "68", "--jn", "9", "--jr", "Rough or irregular, planar"]);
        let report = run_calc(&args, EngineSettings::default()).unwrap();

        assert_eq!(report.inputs.strength, 7.0);
        assert_eq!(report.inputs.jr, 1.5);
        // 7 + 13 + 20 + 30 + 15 + 0 = 85
        assert_eq!(report.results.rmr_score, 85.0);
        // (68/9) × 1.5 = 11.333..
        assert_eq!(report.results.q_value, 11.333);
        assert_eq!(report.advice.span, Meters(5.0));
    }

    #[test]
    fn test_calc_unknown_choice_fails() {
        let args = calc_args(&["--water", "torrential"]);
        let err = run_calc(&args, EngineSettings::default()).unwrap_err();
        assert!(format!("{err:#}").contains("--water"));
    }

    #[test]
    fn test_calc_rejects_negative_span() {
        let args = calc_args(&["--span=-1"]);
        assert!(run_calc(&args, EngineSettings::default()).is_err());
    }

    #[test]
    fn test_calc_rejects_unusable_rqd() {
        for rqd in ["NaN", "inf", "100.5", "150"] {
            let args = calc_args(&["--rqd", rqd]);
            let err = run_calc(&args, EngineSettings::default()).unwrap_err();
            let message = format!("{err:#}");
            assert!(message.contains("--rqd"), "RQD {rqd}: {message}");
            assert!(message.contains("Invalid input for 'rqd'"), "RQD {rqd}: {message}");
        }
        let report = run_calc(&calc_args(&["--rqd", "100"]), EngineSettings::default()).unwrap();
        assert_eq!(report.inputs.rqd, 100.0);
    }

    #[test]
    fn test_calc_rejects_rqd_out_of_range_in_input_file() {
        let path = std::env::temp_dir().join(format!("rockrate-rqd-{}.json", std::process::id()));
        fs::write(&path, r#"{"rqd": 150, "water": 12}"#).unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let result = run_calc(&calc_args(&["--input", path_arg.as_str()]), EngineSettings::default());
        fs::remove_file(&path).unwrap();

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("rqd"), "{message}");
    }

    #[test]
    fn test_span_arg_rejects_non_finite() {
        assert!(span_arg(f64::NAN).is_err());
        assert!(span_arg(f64::INFINITY).is_err());
        assert_eq!(span_arg(7.5).unwrap(), Meters(7.5));
    }

    #[test]
    fn test_calc_without_fields_uses_defaults() {
        let report = run_calc(&calc_args(&[]), EngineSettings::default()).unwrap();
        assert_eq!(report.results.q_value, 142.5);
        assert!(report.unlisted.is_empty());
    }

    #[test]
    fn test_tables_text_lists_every_table() {
        let text = render_tables();
        for table in ALL_TABLES {
            assert!(text.contains(table.name), "missing {}", table.name);
        }
        assert!(text.contains("One joint set (2)"));
        assert!(text.contains("Extremely Strong"));
    }

    #[test]
    fn test_tables_json_shape() {
        let document = TablesDocument {
            rqd: &RQD_RANGES,
            tables: ALL_TABLES.to_vec(),
        };
        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["rqd"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["tables"].as_array().map(Vec::len), Some(10));
        assert_eq!(json["tables"][0]["code"], "A1");
        assert_eq!(json["tables"][0]["entries"][0]["value"], 15.0);
    }
}
