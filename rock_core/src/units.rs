//! # Unit Types
//!
//! Type-safe wrappers for the few physical quantities the advisory outputs
//! carry. Rating points and the Q-value are dimensionless and stay plain
//! `f64`; only lengths (excavation span, bolt length) and durations
//! (stand-up time) get newtypes.
//!
//! ## SI Units
//!
//! - Length: metres (m)
//! - Duration: hours (h), days (d)
//!
//! ## Example
//!
//! ```rust
//! use rock_core::units::{Days, Hours, Meters};
//!
//! let span = Meters(5.0) + Meters(0.5);
//! assert_eq!(span.value(), 5.5);
//!
//! let stand_up = Hours(48.0);
//! let days: Days = stand_up.into();
//! assert_eq!(days.0, 2.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

// ============================================================================
// Duration Units
// ============================================================================

/// Duration in hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(pub f64);

/// Duration in days
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Days(pub f64);

impl From<Hours> for Days {
    fn from(h: Hours) -> Self {
        Days(h.0 / 24.0)
    }
}

impl From<Days> for Hours {
    fn from(d: Days) -> Self {
        Hours(d.0 * 24.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Hours);
impl_arithmetic!(Days);
