//! # rock_core - Rock Mass Classification Engine
//!
//! `rock_core` is the computational heart of RockRate. It turns eleven field
//! observations of a rock mass into an RMR89 score, a Q-value and a GSI
//! estimate, plus the support guidance derived from them. All inputs and
//! outputs are JSON-serializable, so a collaborator (dashboard, CLI, LLM tool)
//! can drive it without sharing any Rust types.
//!
//! ## Design Philosophy
//!
//! - **Full recompute**: every change runs the whole derivation chain
//! - **JSON-First**: inputs, results and advice implement Serialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Tables are data**: the option lists a UI shows are static slices
//!
//! ## Quick Start
//!
//! ```rust
//! use rock_core::state::RockState;
//! use rock_core::calculations::SupportAdvice;
//! use rock_core::units::Meters;
//!
//! let mut state = RockState::new();
//! state.set_jn(9.0);
//!
//! let results = *state.results();
//! assert_eq!(results.q_value, 31.667);
//!
//! let advice = SupportAdvice::from_results(&results, Meters(5.0));
//! assert_eq!(advice.support.description(), "Spot Bolting");
//! ```
//!
//! ## Modules
//!
//! - [`state`] - The live input/result pair and change notification
//! - [`calculations`] - Input and result vectors, `recalc`, support guidance
//! - [`equations`] - The individual formulas and the equation registry
//! - [`tables`] - RMR89 and Q-System rating tables
//! - [`settings`] - Rounding mode and initialization policy
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod settings;
pub mod state;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{recalc, ClassificationInput, ClassificationResult, InputField, SupportAdvice};
pub use errors::{CalcError, CalcResult};
pub use settings::{EngineSettings, InitPolicy, RoundingMode};
pub use state::{RockState, Snapshot, SubscriptionId};
