//! # Equation Registry
//!
//! Central registry of every classification formula the engine and its
//! advisory outputs use. Each equation carries its reference, a plain-text
//! formula, variable definitions and the function that implements it, so a
//! geotechnical engineer can audit the arithmetic from one document.
//!
//! ## Usage
//!
//! ```rust
//! use rock_core::equations::registry::{Equation, EquationCategory};
//!
//! let meta = Equation::QValue.metadata();
//! assert_eq!(meta.category, EquationCategory::QSystem);
//! println!("Formula: {}", meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Published source for a classification formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reference {
    /// Bieniawski, Engineering Rock Mass Classifications
    Bieniawski { year: u16, table: &'static str },
    /// Barton, Lien & Lunde, NGI Q-System
    Barton { year: u16 },
    /// Hoek, Kaiser & Bawden, Support of Underground Excavations in Hard Rock
    Hoek { year: u16 },
    /// Simplified rule of thumb used for display only
    RuleOfThumb,
}

impl Reference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            Reference::Bieniawski { year, table } => format!("Bieniawski ({}), {}", year, table),
            Reference::Barton { year } => format!("Barton et al. ({})", year),
            Reference::Hoek { year } => format!("Hoek et al. ({})", year),
            Reference::RuleOfThumb => "Rule of thumb (display only)".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// RMR89 ratings and score
    RockMassRating,
    /// Barton's Q-System
    QSystem,
    /// Indices derived from another score (class, GSI, stand-up time)
    DerivedIndices,
    /// Advisory support outputs
    SupportDesign,
}

impl EquationCategory {
    /// All categories in document order
    pub const ALL: [EquationCategory; 4] = [
        EquationCategory::RockMassRating,
        EquationCategory::QSystem,
        EquationCategory::DerivedIndices,
        EquationCategory::SupportDesign,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::RockMassRating => "Rock Mass Rating",
            EquationCategory::QSystem => "Q-System",
            EquationCategory::DerivedIndices => "Derived Indices",
            EquationCategory::SupportDesign => "Support Design",
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "RQD", "Jn")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "%", "points", "m")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a classification equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Published source
    pub reference: Reference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by RockRate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// RQD % → A2 rating points
    RqdPoints,
    /// RMR = A1 + A2 + A3 + A4 + A5 + B
    RmrScore,
    /// Q = (RQD/Jn)(Jr/Ja)(Jw/SRF)
    QValue,
    /// Class I-V from RMR
    RockClass,
    /// log10(T) = (RMR - 25)/5
    StandUpTime,
    /// GSI ≈ RMR - 5
    Gsi,
    /// L = 2 + 0.15 B
    BoltLength,
    /// Support category from Q
    SupportStrategy,
}

/// Every registered equation in document order
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::RqdPoints,
    Equation::RmrScore,
    Equation::QValue,
    Equation::RockClass,
    Equation::StandUpTime,
    Equation::Gsi,
    Equation::BoltLength,
    Equation::SupportStrategy,
];

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::RqdPoints => EquationMetadata {
                name: "RQD Rating",
                description: "Rating points for Rock Quality Designation (parameter A2)",
                formula_plain: "A2 = 20 (RQD >= 90), 17 (>= 75), 13 (>= 50), 8 (>= 25), 3 otherwise",
                reference: Reference::Bieniawski { year: 1989, table: "Table 4.1 A2" },
                variables: vec![
                    Variable::new("RQD", "Rock Quality Designation", "%"),
                    Variable::new("A2", "RQD rating", "points"),
                ],
                assumptions: vec![
                    "Band ends are inclusive; boundary values take the higher rating",
                    "Values outside 0-100 receive the lowest rating",
                ],
                category: EquationCategory::RockMassRating,
                source_module: "equations/rmr.rs",
                source_function: "rqd_points",
            },

            Equation::RmrScore => EquationMetadata {
                name: "Rock Mass Rating (RMR89)",
                description: "Sum of the five parameter ratings and the orientation adjustment",
                formula_plain: "RMR = clamp(A1 + A2 + A3 + A4 + A5 + B, 0, 100)",
                reference: Reference::Bieniawski { year: 1989, table: "Table 4.1" },
                variables: vec![
                    Variable::new("A1", "Strength of intact rock", "points"),
                    Variable::new("A2", "RQD rating", "points"),
                    Variable::new("A3", "Spacing of discontinuities", "points"),
                    Variable::new("A4", "Condition of discontinuities", "points"),
                    Variable::new("A5", "Groundwater", "points"),
                    Variable::new("B", "Orientation adjustment (tunnels)", "points"),
                ],
                assumptions: vec!["Ratings are taken from the tables, not interpolated"],
                category: EquationCategory::RockMassRating,
                source_module: "equations/rmr.rs",
                source_function: "rmr_score",
            },

            Equation::QValue => EquationMetadata {
                name: "Rock Mass Quality Q",
                description: "Product of relative block size, inter-block shear strength and active stress",
                formula_plain: "Q = (RQD / Jn) * (Jr / Ja) * (Jw / SRF)",
                reference: Reference::Barton { year: 1974 },
                variables: vec![
                    Variable::new("RQD", "Rock Quality Designation", "%"),
                    Variable::new("Jn", "Joint set number", "-"),
                    Variable::new("Jr", "Joint roughness number", "-"),
                    Variable::new("Ja", "Joint alteration number", "-"),
                    Variable::new("Jw", "Joint water reduction factor", "-"),
                    Variable::new("SRF", "Stress reduction factor", "-"),
                ],
                assumptions: vec![
                    "A zero Jn, Ja or SRF is replaced by 0.1",
                    "Result rounded to 3 decimals (configurable tie-breaking)",
                ],
                category: EquationCategory::QSystem,
                source_module: "equations/q_system.rs",
                source_function: "q_value",
            },

            Equation::RockClass => EquationMetadata {
                name: "Rock Mass Class",
                description: "Class I (very good) to V (very poor) from the RMR score",
                formula_plain: "I: RMR >= 81, II: >= 61, III: >= 41, IV: >= 21, V: < 21",
                reference: Reference::Bieniawski { year: 1989, table: "Table 4.1 C" },
                variables: vec![Variable::new("RMR", "Rock Mass Rating", "points")],
                assumptions: vec![],
                category: EquationCategory::DerivedIndices,
                source_module: "equations/rmr.rs",
                source_function: "rock_class_of",
            },

            Equation::StandUpTime => EquationMetadata {
                name: "Stand-Up Time",
                description: "Approximate unsupported stand-up time of an excavation",
                formula_plain: "T = 10^((RMR - 25) / 5)",
                reference: Reference::RuleOfThumb,
                variables: vec![
                    Variable::new("RMR", "Rock Mass Rating", "points"),
                    Variable::new("T", "Stand-up time", "h"),
                ],
                assumptions: vec!["Illustrative exponential fit, not for support sizing"],
                category: EquationCategory::DerivedIndices,
                source_module: "equations/rmr.rs",
                source_function: "stand_up_hours",
            },

            Equation::Gsi => EquationMetadata {
                name: "Geological Strength Index (approx.)",
                description: "GSI estimated from the RMR score",
                formula_plain: "GSI = RMR - 5 for RMR > 23, GSI = RMR otherwise",
                reference: Reference::Hoek { year: 1995 },
                variables: vec![
                    Variable::new("RMR", "Rock Mass Rating", "points"),
                    Variable::new("GSI", "Geological Strength Index", "-"),
                ],
                assumptions: vec!["Crude offset, no Hoek-Brown parameters are derived"],
                category: EquationCategory::DerivedIndices,
                source_module: "equations/rmr.rs",
                source_function: "gsi_of",
            },

            Equation::BoltLength => EquationMetadata {
                name: "Rock Bolt Length",
                description: "Recommended roof bolt length from the excavation span",
                formula_plain: "L = 2 + 0.15 * B",
                reference: Reference::RuleOfThumb,
                variables: vec![
                    Variable::new("B", "Excavation span", "m"),
                    Variable::new("L", "Bolt length", "m"),
                ],
                assumptions: vec!["Span-only rule; ESR is taken as 1.0"],
                category: EquationCategory::SupportDesign,
                source_module: "calculations/support.rs",
                source_function: "bolt_length",
            },

            Equation::SupportStrategy => EquationMetadata {
                name: "Support Strategy",
                description: "Support category from a simplified reading of the NGI Q-chart",
                formula_plain: "Q < 0.1 liner, < 1 systematic bolts + 100mm, < 4 pattern bolts + 50mm, < 10 spot bolts + 50mm, < 40 spot bolts, else none",
                reference: Reference::Barton { year: 1974 },
                variables: vec![Variable::new("Q", "Rock mass quality", "-")],
                assumptions: vec!["Span-independent simplification of the Q support chart"],
                category: EquationCategory::SupportDesign,
                source_module: "calculations/support.rs",
                source_function: "support_strategy_for",
            },
        }
    }

    /// Equations belonging to a category, in registry order
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .copied()
            .filter(|eq| eq.metadata().category == category)
            .collect()
    }
}

// ============================================================================
// Markdown Reference
// ============================================================================

/// Generate the equations reference document as markdown.
///
/// ```rust
/// let markdown = rock_core::equations::generate_equations_markdown();
/// assert!(markdown.contains("## Q-System"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# RockRate Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used by the RockRate classification engine
and its advisory outputs, with references, source locations and assumptions.

---

"#,
    );

    for category in EquationCategory::ALL {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        EquationCategory::ALL.len()
    ));

    output
}
