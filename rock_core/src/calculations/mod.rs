//! # Classification Calculations
//!
//! This module ties the equations together. It follows the pattern:
//!
//! - `ClassificationInput` - Input vector (JSON-serializable)
//! - `ClassificationResult` - Result vector (JSON-serializable)
//! - `recalc(input) -> ClassificationResult` - Pure, total recomputation
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Clean JSON serialization
//! - Field names match the rating parameters (`jn`, `srf`, ...)
//! - Structured error responses at the parsing edges
//!
//! ## Available Calculations
//!
//! - [`classification`] - RMR89, Q-System and GSI from the input vector
//! - [`support`] - Advisory outputs (bolt length, support strategy)

pub mod classification;
pub mod support;

pub use classification::{
    recalc, recalc_with, ClassificationInput, ClassificationResult, FieldGroup, InputField,
    RQD_PERCENT_MAX, RQD_PERCENT_MIN,
};
pub use support::{
    bolt_length, q_quality_for, q_quality_label, rmr_contributions, support_strategy_for, QQuality,
    RmrContribution, SupportAdvice, SupportStrategy, DEFAULT_SPAN, MAX_SPAN, SPAN_STEP,
};
