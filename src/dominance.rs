//! Pareto dominance utilities.
//!
//! All objectives are **minimized**: lower values are better.
//!
//! # Algorithms
//!
//! - [`dominates`] / [`domination_cmp`]: pairwise dominance tests
//! - [`pareto_filter`]: in-place partition into non-dominated and dominated vectors
//! - [`remove_duplicates`]: keep one representative of each group of equal vectors
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - Zitzler et al. (2003), "Performance Assessment of Multiobjective Optimizers:
//!   An Analysis and Review"

use std::cmp::Ordering;

use ndarray::{ArrayViewMut2, Axis};

use crate::front::geometry::vectors_equal;
use crate::front::{Front, FrontView, Point};

/// Dominance comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other (equal or incomparable).
    Neither,
}

/// Whether `a` dominates `b`.
///
/// `a` dominates `b` iff `a` is no worse in every objective and strictly
/// better in at least one. A vector never dominates itself.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use u_indicators::dominance::dominates;
///
/// let a = array![1.0, 2.0];
/// let b = array![1.0, 3.0];
/// assert!(dominates(a.view(), b.view()));
/// assert!(!dominates(b.view(), a.view()));
/// assert!(!dominates(a.view(), a.view()));
/// ```
#[inline]
pub fn dominates(a: Point<'_>, b: Point<'_>) -> bool {
    let mut better_in_any = false;
    for (va, vb) in a.iter().zip(b.iter()) {
        match va.partial_cmp(vb) {
            Some(Ordering::Less) => better_in_any = true,
            Some(Ordering::Equal) => {}
            _ => return false,
        }
    }
    better_in_any
}

/// Compares two vectors for Pareto dominance.
pub fn domination_cmp(a: Point<'_>, b: Point<'_>) -> Dominance {
    if dominates(a, b) {
        Dominance::Left
    } else if dominates(b, a) {
        Dominance::Right
    } else {
        Dominance::Neither
    }
}

/// Swaps two rows of a front in place.
fn swap_rows(set: &mut ArrayViewMut2<'_, f64>, a: usize, b: usize) {
    if a == b {
        return;
    }
    for k in 0..set.ncols() {
        set.swap((a, k), (b, k));
    }
}

/// Partitions `set` in place into a non-dominated prefix and a dominated
/// suffix, returning the length of the prefix.
///
/// The order within either part is unspecified.
///
/// # Algorithm
///
/// An active window `[0, n)` starts as the whole set. Each vector `i` is
/// compared against every later active vector `j`:
///
/// - if `i` dominates `j`, `j` is swapped to the end of the window and the
///   window shrinks;
/// - if `j` dominates `i`, `i` is swapped to the end of the window, the
///   window shrinks and index `i` is examined again, since the vector now
///   at `i` has not been checked yet.
///
/// The second rule intentionally differs from the classic C filter, which
/// swaps the dominating `j` instead and can keep dominated vectors.
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of vectors
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use u_indicators::dominance::pareto_filter;
///
/// let mut set = array![[2.0, 2.0], [1.0, 3.0], [3.0, 3.0], [3.0, 1.0]];
/// let n = pareto_filter(set.view_mut());
/// assert_eq!(n, 3);
/// ```
pub fn pareto_filter(mut set: ArrayViewMut2<'_, f64>) -> usize {
    let mut n = set.nrows();
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        let mut restart = false;
        while j < n {
            if dominates(set.row(i), set.row(j)) {
                n -= 1;
                swap_rows(&mut set, j, n);
            } else if dominates(set.row(j), set.row(i)) {
                n -= 1;
                swap_rows(&mut set, i, n);
                restart = true;
                break;
            } else {
                j += 1;
            }
        }
        if !restart {
            i += 1;
        }
    }
    n
}

/// Returns a copy of `set` with one representative per group of exactly
/// equal vectors, in first-seen order.
///
/// # Complexity
///
/// O(m * n²); pairs where both sides are already known duplicates are skipped.
pub fn remove_duplicates(set: FrontView<'_>) -> Front {
    let n = set.nrows();
    let mut unique = vec![true; n];

    for i in 0..n.saturating_sub(1) {
        for j in (i + 1)..n {
            if (unique[i] || unique[j]) && vectors_equal(set.row(i), set.row(j)) {
                unique[j] = false;
            }
        }
    }

    let keep: Vec<usize> = (0..n).filter(|&i| unique[i]).collect();
    set.select(Axis(0), &keep)
}

// ============================================================================
// Tests
// ============================================================================
