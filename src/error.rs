//! Error type shared by every indicator.

use std::fmt;

/// Which input set an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontRole {
    /// The candidate front under evaluation.
    Candidate,
    /// The true (reference) Pareto front.
    TrueFront,
    /// Set `A` of a binary epsilon comparison.
    SetA,
    /// Set `B` of a binary epsilon comparison.
    SetB,
}

impl fmt::Display for FrontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FrontRole::Candidate => "candidate front",
            FrontRole::TrueFront => "true front",
            FrontRole::SetA => "set A",
            FrontRole::SetB => "set B",
        };
        f.write_str(name)
    }
}

/// Errors raised by indicator computations.
///
/// Precondition failures (empty fronts, mismatched widths, Spread on
/// non-bi-objective data) and unrecoverable data errors (invalid
/// multiplicative epsilon operands) are both reported here. A computation
/// that fails never yields a partial value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IndicatorError {
    #[error("{role} is empty")]
    EmptyFront { role: FrontRole },

    #[error("vectors must have at least one objective")]
    NoObjectives,

    #[error("objective count mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{indicator} requires exactly {expected} objectives, found {found}")]
    UnsupportedObjectiveCount {
        indicator: &'static str,
        expected: usize,
        found: usize,
    },

    #[error(
        "multiplicative epsilon needs same-sign non-zero operands: \
         A[{a_index}][{objective}] = {a}, B[{b_index}][{objective}] = {b}"
    )]
    InvalidMultiplicativeOperand {
        a_index: usize,
        b_index: usize,
        objective: usize,
        a: f64,
        b: f64,
    },

    #[error("unknown epsilon method: {0:?}")]
    UnknownEpsilonMethod(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IndicatorError>;
