//! Quality indicators for multi-objective optimization.
//!
//! Measures how well a computed set of non-dominated objective vectors
//! (a *front*) approximates a reference Pareto front:
//!
//! - **Generational Distance (GD)** and **Inverted GD (IGD)**: convergence
//! - **Spread (Δ)**: diversity of bi-objective fronts
//! - **Generalized Spread (I_GS)**: diversity for any number of objectives,
//!   in two variants that follow different lineages of the literature
//! - **Epsilon (I_ε)**: additive or multiplicative dominance gap
//!
//! Underneath sit Pareto dominance utilities ([`dominance`]) and front
//! primitives ([`front`]): distances, normalization into the true front's
//! frame, extreme solutions and lexicographic ordering.
//!
//! All objectives are **minimized**. Fronts are [`ndarray::Array2<f64>`]
//! with one vector per row.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use u_indicators::indicators::{generational_distance, spread};
//!
//! let true_front = array![[0.0, 1.0], [0.5, 0.5], [1.0, 0.0]];
//! let front = array![[0.0, 0.0]];
//!
//! assert!(generational_distance(front.view(), true_front.view()).unwrap() > 0.0);
//! assert_eq!(spread(front.view(), true_front.view()).unwrap(), 1.0);
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate per-point loops on the rayon pool (bit-identical results)
//! - `serde`: `Serialize`/`Deserialize` for configuration and report types

pub mod assessment;
pub mod dominance;
pub mod error;
pub mod front;
pub mod indicators;
mod parallel;

pub use error::{FrontRole, IndicatorError, Result};
pub use front::{Front, FrontView, Point};
