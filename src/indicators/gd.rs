//! Generational distance (GD) and inverted generational distance (IGD).
//!
//! Both fronts are normalized with the true front's bounds first. The
//! accumulated per-point distances are *squared* Euclidean distances, as in
//! the references, and the root of their sum is divided by the number of
//! points measured.
//!
//! # References
//!
//! - Van Veldhuizen & Lamont (1998), "Evolutionary Computation and
//!   Convergence to a Pareto Front"
//! - Khokhar et al. (2010), "On the Performance of the Pareto Set Pursuing
//!   (PSP) Method for Mixed-Variable Multi-Objective Design Optimization"

use crate::error::Result;
use crate::front::geometry::closest_squared_distance;
use crate::front::normalize::normalize_pair;
use crate::front::{check_pair, FrontView};
use crate::parallel::{map_rows, PARALLEL_DEFAULT};

/// Generational distance of `front` to `true_front`.
///
/// `sqrt(Σ_{a ∈ front} min_{t ∈ true_front} ‖a − t‖²) / |front|`, computed
/// on normalized fronts. Measures convergence; lower is better and a front
/// measured against itself scores `0`.
///
/// # Errors
///
/// Fails if either front is empty, has no objectives, or the widths differ.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use u_indicators::indicators::generational_distance;
///
/// let true_front = array![[0.0, 1.0], [0.5, 0.5], [1.0, 0.0]];
/// let gd = generational_distance(true_front.view(), true_front.view()).unwrap();
/// assert_eq!(gd, 0.0);
/// ```
pub fn generational_distance(front: FrontView<'_>, true_front: FrontView<'_>) -> Result<f64> {
    generational_distance_with(front, true_front, PARALLEL_DEFAULT)
}

/// Inverted generational distance of `front` to `true_front`.
///
/// The roles are swapped relative to [`generational_distance`]: every true
/// front point is measured against the candidate front and the result is
/// divided by `|true_front|`.
///
/// # Errors
///
/// Same as [`generational_distance`].
pub fn inverted_generational_distance(
    front: FrontView<'_>,
    true_front: FrontView<'_>,
) -> Result<f64> {
    inverted_generational_distance_with(front, true_front, PARALLEL_DEFAULT)
}

pub(crate) fn generational_distance_with(
    front: FrontView<'_>,
    true_front: FrontView<'_>,
    parallel: bool,
) -> Result<f64> {
    check_pair(front, true_front)?;
    log::debug!(
        "generational distance: {} vectors against {} reference vectors",
        front.nrows(),
        true_front.nrows()
    );
    let (norm_front, norm_true_front) = normalize_pair(front, true_front)?;
    let gd = root_sum_closest(norm_front.view(), norm_true_front.view(), parallel);
    log::trace!("generational distance = {gd}");
    Ok(gd)
}

pub(crate) fn inverted_generational_distance_with(
    front: FrontView<'_>,
    true_front: FrontView<'_>,
    parallel: bool,
) -> Result<f64> {
    check_pair(front, true_front)?;
    log::debug!(
        "inverted generational distance: {} reference vectors against {} vectors",
        true_front.nrows(),
        front.nrows()
    );
    let (norm_front, norm_true_front) = normalize_pair(front, true_front)?;
    let igd = root_sum_closest(norm_true_front.view(), norm_front.view(), parallel);
    log::trace!("inverted generational distance = {igd}");
    Ok(igd)
}

/// `sqrt(Σ_{x ∈ from} closest²(x, to)) / |from|`.
fn root_sum_closest(from: FrontView<'_>, to: FrontView<'_>, parallel: bool) -> f64 {
    let distances = map_rows(from, parallel, |_, x| closest_squared_distance(x, to));
    let sum: f64 = distances.iter().sum();
    sum.sqrt() / from.nrows() as f64
}
