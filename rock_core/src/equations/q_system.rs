//! # Q-System Formula
//!
//! Barton's rock mass quality index.
//!
//! ## Formula
//!
//! ```text
//! Q = (RQD / Jn) × (Jr / Ja) × (Jw / SRF)
//!     └─ block ─┘  └ shear ┘  └ stress ┘
//! ```
//!
//! ## Zero denominators
//!
//! A denominator (`Jn`, `Ja` or `SRF`) that is exactly zero is replaced by
//! 0.1 before dividing. This is a numeric floor, not an error: the result
//! changes (e.g. RQD 50 with Jn = 0 gives 500) and no failure is signalled.
//!
//! ## References
//!
//! - Barton, N., Lien, R., Lunde, J. (1974). Engineering classification of
//!   rock masses for the design of tunnel support.

use crate::settings::RoundingMode;

/// Value substituted for a zero `Jn`, `Ja` or `SRF`
pub const ZERO_DENOMINATOR_FLOOR: f64 = 0.1;

/// Fractional digits kept in the Q-value
pub const Q_DECIMALS: i32 = 3;

/// Replace an exact zero with [`ZERO_DENOMINATOR_FLOOR`]
#[inline]
pub fn safe_denominator(value: f64) -> f64 {
    if value == 0.0 {
        ZERO_DENOMINATOR_FLOOR
    } else {
        value
    }
}

/// Relative block size RQD / Jn
#[inline]
pub fn block_size(rqd: f64, jn: f64) -> f64 {
    rqd / safe_denominator(jn)
}

/// Inter-block shear strength Jr / Ja
#[inline]
pub fn shear_strength(jr: f64, ja: f64) -> f64 {
    jr / safe_denominator(ja)
}

/// Active stress Jw / SRF
#[inline]
pub fn active_stress(jw: f64, srf: f64) -> f64 {
    jw / safe_denominator(srf)
}

/// Unrounded Q-value
#[inline]
pub fn q_value_raw(rqd: f64, jn: f64, jr: f64, ja: f64, jw: f64, srf: f64) -> f64 {
    block_size(rqd, jn) * shear_strength(jr, ja) * active_stress(jw, srf)
}

/// Q-value rounded to 3 decimals, half away from zero.
///
/// `rqd` is the raw percentage, not RMR points.
pub fn q_value(rqd: f64, jn: f64, jr: f64, ja: f64, jw: f64, srf: f64) -> f64 {
    q_value_with(RoundingMode::HalfAwayFromZero, rqd, jn, jr, ja, jw, srf)
}

/// Q-value rounded to 3 decimals with an explicit tie-breaking rule.
#[allow(clippy::too_many_arguments)]
pub fn q_value_with(
    rounding: RoundingMode,
    rqd: f64,
    jn: f64,
    jr: f64,
    ja: f64,
    jw: f64,
    srf: f64,
) -> f64 {
    rounding.round(q_value_raw(rqd, jn, jr, ja, jw, srf), Q_DECIMALS)
}
