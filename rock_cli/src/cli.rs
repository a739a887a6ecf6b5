//! CLI argument definitions for RockRate.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use rock_core::calculations::InputField;
use rock_core::settings::{EngineSettings, InitPolicy, RoundingMode};

#[derive(Parser)]
#[command(
    name = "rockrate",
    version,
    about = "RockRate - Rock mass classification (RMR89, Q-System, GSI)",
    long_about = "Classify a rock mass from field observations.\n\n\
                  Computes the RMR89 score, the Barton Q-value and an approximate GSI,\n\
                  with rock class, stand-up time and support guidance."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Tie-breaking rule for the Q-value's third decimal.
    #[arg(long = "rounding", value_enum, default_value = "half-away", global = true)]
    pub rounding: RoundingArg,

    /// Starting result vector.
    ///
    /// `literal-defaults` shows the historical {80, 20, 10, 75} results
    /// until the first input change.
    #[arg(long = "init", value_enum, default_value = "recompute", global = true)]
    pub init: InitArg,
}

impl Cli {
    /// Engine settings selected by the global flags
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings::default()
            .with_rounding(self.rounding.into())
            .with_init(self.init.into())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify one rock mass and print the report.
    Calc(CalcArgs),

    /// List every rating table.
    Tables(TablesArgs),

    /// Print the equations reference as markdown.
    Equations,

    /// Interactive terminal dashboard.
    Tui(TuiArgs),
}

/// Per-field values accept a table row label or a rating, e.g.
/// `--jn "Three joint sets"` or `--jn 9`.
#[derive(Args)]
pub struct CalcArgs {
    /// Read the input vector from a JSON file (absent fields keep defaults).
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// A1: Strength of intact rock.
    #[arg(long)]
    pub strength: Option<String>,

    /// A2: Rock Quality Designation, percent.
    #[arg(long)]
    pub rqd: Option<String>,

    /// A3: Spacing of discontinuities.
    #[arg(long)]
    pub spacing: Option<String>,

    /// A4: Condition of discontinuities.
    #[arg(long)]
    pub condition: Option<String>,

    /// A5: Groundwater.
    #[arg(long)]
    pub water: Option<String>,

    /// B: Orientation adjustment (zero or negative).
    #[arg(long, allow_hyphen_values = true)]
    pub orientation: Option<String>,

    /// Joint set number.
    #[arg(long)]
    pub jn: Option<String>,

    /// Joint roughness number.
    #[arg(long)]
    pub jr: Option<String>,

    /// Joint alteration number.
    #[arg(long)]
    pub ja: Option<String>,

    /// Joint water reduction factor.
    #[arg(long)]
    pub jw: Option<String>,

    /// Stress reduction factor.
    #[arg(long)]
    pub srf: Option<String>,

    /// Excavation span in meters.
    #[arg(long, default_value_t = 5.0)]
    pub span: f64,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl CalcArgs {
    /// Supplied field choices in input-vector order
    pub fn choices(&self) -> Vec<(InputField, &str)> {
        let slots = [
            (InputField::Strength, &self.strength),
            (InputField::Rqd, &self.rqd),
            (InputField::Spacing, &self.spacing),
            (InputField::Condition, &self.condition),
            (InputField::Water, &self.water),
            (InputField::Orientation, &self.orientation),
            (InputField::Jn, &self.jn),
            (InputField::Jr, &self.jr),
            (InputField::Ja, &self.ja),
            (InputField::Jw, &self.jw),
            (InputField::Srf, &self.srf),
        ];
        slots
            .into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
            .collect()
    }
}

#[derive(Args)]
pub struct TablesArgs {
    /// Print the tables as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct TuiArgs {
    /// Initial excavation span in meters.
    #[arg(long, default_value_t = 5.0)]
    pub span: f64,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Q-value rounding choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RoundingArg {
    HalfAway,
    HalfEven,
}

impl From<RoundingArg> for RoundingMode {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::HalfAway => RoundingMode::HalfAwayFromZero,
            RoundingArg::HalfEven => RoundingMode::HalfToEven,
        }
    }
}

/// Initial result vector choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InitArg {
    Recompute,
    LiteralDefaults,
}

impl From<InitArg> for InitPolicy {
    fn from(arg: InitArg) -> Self {
        match arg {
            InitArg::Recompute => InitPolicy::Recompute,
            InitArg::LiteralDefaults => InitPolicy::LiteralDefaults,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calc_with_fields() {
        let cli = Cli::try_parse_from([
            "rockrate",
            "calc",
            "--rqd",
            "68",
            "--jn",
            "Three joint sets",
            "--orientation",
            "-5",
            "--span",
            "8.5",
            "--json",
        ])
        .unwrap();

        let Command::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        assert!(args.json);
        assert_eq!(args.span, 8.5);
        assert_eq!(
            args.choices(),
            vec![
                (InputField::Rqd, "68"),
                (InputField::Orientation, "-5"),
                (InputField::Jn, "Three joint sets"),
            ]
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rockrate",
            "tables",
            "--rounding",
            "half-even",
            "--init",
            "literal-defaults",
            "--log-format",
            "json",
        ])
        .unwrap();

        let settings = cli.engine_settings();
        assert_eq!(settings.rounding, RoundingMode::HalfToEven);
        assert_eq!(settings.init, InitPolicy::LiteralDefaults);
        assert!(matches!(cli.log_format, LogFormatArg::Json));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rockrate", "tui"]).unwrap();
        assert_eq!(cli.engine_settings(), EngineSettings::default());
        let Command::Tui(args) = cli.command else {
            panic!("expected tui");
        };
        assert_eq!(args.span, 5.0);
    }

    #[test]
    fn test_rejects_unknown_rounding() {
        assert!(Cli::try_parse_from(["rockrate", "calc", "--rounding", "ceiling"]).is_err());
        assert!(Cli::try_parse_from(["rockrate"]).is_err());
    }
}
