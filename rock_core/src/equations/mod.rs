//! # Rock Mass Classification Equations
//!
//! Every formula of the classification engine lives here as a pure, total
//! function over `f64`. None of them validate or fail: out-of-table inputs
//! simply flow through the arithmetic, and the few guards that exist (the
//! RMR clamp, the RQD fallback rating, the Q-value zero-denominator floor)
//! replace values instead of signalling errors.
//!
//! ## Modules
//!
//! - [`rmr`] - RQD rating, RMR89 score, rock class, stand-up time, GSI
//! - [`q_system`] - Barton's Q-value
//! - [`registry`] - Equation metadata for the audit reference document
//!
//! ## References
//!
//! - Bieniawski (1989): Engineering Rock Mass Classifications
//! - Barton, Lien & Lunde (1974): NGI Q-System
//! - Hoek, Kaiser & Bawden (1995): Support of Underground Excavations in Hard Rock

pub mod q_system;
pub mod registry;
pub mod rmr;

pub use rmr::{
    gsi_of,
    rmr_score,
    rock_class_of,
    rqd_points,
    stand_up_hours,
    ClassColor,
    RockClass,
    RockClassInfo,
};

pub use q_system::{
    active_stress,
    block_size,
    q_value,
    q_value_raw,
    q_value_with,
    safe_denominator,
    shear_strength,
};

pub use registry::{
    generate_equations_markdown,
    Equation,
    EquationCategory,
    EquationMetadata,
    Reference,
    Variable,
    ALL_EQUATIONS,
};
