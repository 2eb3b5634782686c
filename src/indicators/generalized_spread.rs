//! Generalized spread (I_GS).
//!
//! Two distinct algorithms share the name and both are kept:
//!
//! - [`generalized_spread`] follows the formulation used by the jMetal
//!   framework and the `mco` R package. Distances are Euclidean and are
//!   measured within the candidate front.
//! - [`generalized_spread_original`] follows the definition in Zhou et al.
//!   (2006) literally. Distances are squared and are measured from the true
//!   front's points to the candidate front.
//!
//! The two disagree numerically and neither replaces the other.
//!
//! Both start by normalizing with the true front's bounds and taking one
//! extreme solution per objective from the normalized true front.
//!
//! # References
//!
//! - Zhou et al. (2006), "Combining Model-based and Genetics-based Offspring
//!   Generation for Multi-objective Optimization Using a Convergence Criterion"

use crate::error::Result;
use crate::front::geometry::{closest_squared_distance, nearest_squared_distance};
use crate::front::normalize::{extreme_solutions, normalize_pair};
use crate::front::{check_pair, FrontView};
use crate::parallel::{map_rows, PARALLEL_DEFAULT};

/// Selects one of the two generalized spread algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneralizedSpreadVariant {
    /// [`generalized_spread`].
    #[default]
    Ported,
    /// [`generalized_spread_original`].
    Original,
}

impl GeneralizedSpreadVariant {
    /// Runs the selected algorithm.
    pub fn compute(self, front: FrontView<'_>, true_front: FrontView<'_>) -> Result<f64> {
        self.compute_with(front, true_front, PARALLEL_DEFAULT)
    }

    pub(crate) fn compute_with(
        self,
        front: FrontView<'_>,
        true_front: FrontView<'_>,
        parallel: bool,
    ) -> Result<f64> {
        match self {
            Self::Ported => ported(front, true_front, parallel),
            Self::Original => original(front, true_front, parallel),
        }
    }
}

/// Generalized spread as computed by jMetal and `mco`.
///
/// With `d_i` the distance from candidate point `i` to its nearest distinct
/// neighbour in the candidate front, `d̄` their mean and `d(e_k)` the
/// distance from extreme solution `k` to the closest candidate point:
///
/// `I_GS = (Σ_k d(e_k) + Σ_i |d_i − d̄|) / (Σ_k d(e_k) + |front|·d̄)`
///
/// Lower is better.
///
/// # Errors
///
/// Fails if either front is empty, has no objectives, or the widths differ.
pub fn generalized_spread(front: FrontView<'_>, true_front: FrontView<'_>) -> Result<f64> {
    ported(front, true_front, PARALLEL_DEFAULT)
}

/// Generalized spread as defined in Zhou et al. (2006).
///
/// With `d_t` the squared distance from true-front point `t` to its nearest
/// candidate point not equal to it, `d̄` their mean and `d(e_k)` the same
/// squared distance for extreme solution `k`:
///
/// `I_GS = (Σ_k d(e_k) + Σ_t |d_t − d̄|) / (Σ_k d(e_k) + |true_front|·d̄)`
///
/// Lower is better.
///
/// # Errors
///
/// Fails if either front is empty, has no objectives, or the widths differ.
pub fn generalized_spread_original(
    front: FrontView<'_>,
    true_front: FrontView<'_>,
) -> Result<f64> {
    original(front, true_front, PARALLEL_DEFAULT)
}

fn ported(front: FrontView<'_>, true_front: FrontView<'_>, parallel: bool) -> Result<f64> {
    check_pair(front, true_front)?;
    log::debug!(
        "generalized spread: {} vectors against {} reference vectors",
        front.nrows(),
        true_front.nrows()
    );
    let (norm_front, norm_true_front) = normalize_pair(front, true_front)?;
    let extremes = extreme_solutions(norm_true_front.view())?;
    let candidates = norm_front.view();

    let neighbor = map_rows(candidates, parallel, |_, x| {
        nearest_squared_distance(x, candidates).sqrt()
    });
    let n = candidates.nrows() as f64;
    let dbar = neighbor.iter().sum::<f64>() / n;

    let sum_extremis: f64 = extremes
        .outer_iter()
        .map(|e| closest_squared_distance(e, candidates).sqrt())
        .sum();
    let sum: f64 = neighbor.iter().map(|d| (d - dbar).abs()).sum();

    let gs = (sum + sum_extremis) / (sum_extremis + n * dbar);
    log::trace!("generalized spread: dbar = {dbar}, extremes = {sum_extremis}, value = {gs}");
    Ok(gs)
}

fn original(front: FrontView<'_>, true_front: FrontView<'_>, parallel: bool) -> Result<f64> {
    check_pair(front, true_front)?;
    log::debug!(
        "generalized spread (original): {} reference vectors against {} vectors",
        true_front.nrows(),
        front.nrows()
    );
    let (norm_front, norm_true_front) = normalize_pair(front, true_front)?;
    let extremes = extreme_solutions(norm_true_front.view())?;
    let candidates = norm_front.view();

    let to_front = map_rows(norm_true_front.view(), parallel, |_, t| {
        nearest_squared_distance(t, candidates)
    });
    let m = norm_true_front.nrows() as f64;
    let dbar = to_front.iter().sum::<f64>() / m;

    let sum_extremis: f64 = extremes
        .outer_iter()
        .map(|e| nearest_squared_distance(e, candidates))
        .sum();
    let sum: f64 = to_front.iter().map(|d| (d - dbar).abs()).sum();

    let gs = (sum + sum_extremis) / (sum_extremis + m * dbar);
    log::trace!(
        "generalized spread (original): dbar = {dbar}, extremes = {sum_extremis}, value = {gs}"
    );
    Ok(gs)
}
