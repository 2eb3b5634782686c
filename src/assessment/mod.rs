//! One-call evaluation of a candidate front.
//!
//! Bundles the usual evaluation routine: clean up the candidate front,
//! then report GD, IGD, spread, generalized spread and epsilon against the
//! true front.
//!
//! # Key Types
//!
//! - [`AssessmentConfig`]: what to clean up and which indicator variants to use
//! - [`QualityReport`]: the computed values
//! - [`assess`]: runs the pipeline

mod config;
mod report;
mod runner;

pub use config::AssessmentConfig;
pub use report::QualityReport;
pub use runner::assess;
