//! Deb's spread indicator (Δ) for bi-objective fronts.
//!
//! # Algorithm
//!
//! 1. Normalize both fronts with the true front's bounds
//! 2. Sort both lexicographically
//! 3. `df`, `dl`: distances between the first and the last points of the
//!    two sorted fronts
//! 4. `d̄`: mean distance between consecutive points of the candidate front
//! 5. `Δ = (df + dl + Σ|d_i − d̄|) / (df + dl + (n − 1)·d̄)`
//!
//! A single-point candidate front scores `1` by convention.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"

use crate::error::{IndicatorError, Result};
use crate::front::geometry::euclidean_distance;
use crate::front::normalize::normalize_pair;
use crate::front::order::sort_lexicographic;
use crate::front::{check_pair, FrontView};

/// Number of objectives the spread indicator is defined for.
pub const SPREAD_OBJECTIVES: usize = 2;

/// Spread (Δ) of a bi-objective `front` relative to `true_front`.
///
/// Lower is better: uniform spacing and well covered extremes give values
/// close to `0`. If every gap and both extreme distances are zero the ratio
/// is `0/0` and the result is NaN.
///
/// # Errors
///
/// - [`IndicatorError::UnsupportedObjectiveCount`] unless both fronts have
///   exactly two objectives
/// - the usual empty/mismatched front errors
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use u_indicators::indicators::spread;
///
/// let true_front = array![[0.0, 1.0], [0.5, 0.5], [1.0, 0.0]];
/// assert_eq!(spread(true_front.view(), true_front.view()).unwrap(), 0.0);
///
/// let single = array![[0.0, 0.0]];
/// assert_eq!(spread(single.view(), true_front.view()).unwrap(), 1.0);
/// ```
pub fn spread(front: FrontView<'_>, true_front: FrontView<'_>) -> Result<f64> {
    let nobj = check_pair(front, true_front)?;
    if nobj != SPREAD_OBJECTIVES {
        return Err(IndicatorError::UnsupportedObjectiveCount {
            indicator: "spread",
            expected: SPREAD_OBJECTIVES,
            found: nobj,
        });
    }
    log::debug!(
        "spread: {} vectors against {} reference vectors",
        front.nrows(),
        true_front.nrows()
    );

    let n = front.nrows();
    if n == 1 {
        return Ok(1.0);
    }

    let (norm_front, norm_true_front) = normalize_pair(front, true_front)?;
    let sorted = sort_lexicographic(norm_front.view());
    let sorted_true = sort_lexicographic(norm_true_front.view());

    let df = euclidean_distance(sorted.row(0), sorted_true.row(0));
    let dl = euclidean_distance(sorted.row(n - 1), sorted_true.row(sorted_true.nrows() - 1));

    let gaps: Vec<f64> = sorted
        .outer_iter()
        .zip(sorted.outer_iter().skip(1))
        .map(|(a, b)| euclidean_distance(a, b))
        .collect();
    let dbar = gaps.iter().sum::<f64>() / (n - 1) as f64;

    let diversity = gaps.iter().fold(df + dl, |acc, gap| acc + (gap - dbar).abs());
    let delta = diversity / (df + dl + (n - 1) as f64 * dbar);
    log::trace!("spread: df = {df}, dl = {dl}, dbar = {dbar}, delta = {delta}");
    Ok(delta)
}
