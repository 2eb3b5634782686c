//! Quality indicators for approximation fronts.
//!
//! Each indicator is an independent pure function: it validates its inputs,
//! derives whatever normalized copies it needs, and returns one scalar.
//! Lower is better for all of them.
//!
//! | Indicator | Function | Measures |
//! |-----------|----------|----------|
//! | GD | [`generational_distance`] | convergence |
//! | IGD | [`inverted_generational_distance`] | convergence and coverage |
//! | Δ | [`spread`] | diversity (bi-objective only) |
//! | I_GS | [`generalized_spread`], [`generalized_spread_original`] | diversity |
//! | I_ε | [`epsilon`] | dominance gap (unnormalized) |
//!
//! GD, IGD, Δ and I_GS normalize both fronts with the true front's bounds
//! (see [`crate::front::normalize`]); epsilon works on raw values.

mod epsilon;
mod gd;
mod generalized_spread;
mod spread;

pub use epsilon::{additive_epsilon, epsilon, multiplicative_epsilon, EpsilonMethod};
pub use gd::{generational_distance, inverted_generational_distance};
pub use generalized_spread::{
    generalized_spread, generalized_spread_original, GeneralizedSpreadVariant,
};
pub use spread::{spread, SPREAD_OBJECTIVES};

pub(crate) use epsilon::epsilon_with;
pub(crate) use gd::{generational_distance_with, inverted_generational_distance_with};
