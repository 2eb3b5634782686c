//! Normalization into the true front's reference frame.
//!
//! Bounds are always taken from the true front, and the same bounds are then
//! applied to both the candidate and the true front, so both end up in one
//! common unit frame. Candidate values outside the true front's range map
//! outside `[0, 1]`.
//!
//! An objective on which the true front is constant (`max == min`) is not
//! rejected: the division yields NaN or ±∞, which then propagates into the
//! indicator value. A warning is logged for each such objective.

use ndarray::{Array1, Array2, Axis, Zip};

use super::{check_front, Front, FrontView};
use crate::error::{FrontRole, IndicatorError, Result};

/// Per-objective minimum and maximum of a true front.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    /// Minimum value of each objective.
    pub min: Array1<f64>,
    /// Maximum value of each objective.
    pub max: Array1<f64>,
}

impl Bounds {
    /// Computes the bounds of `true_front`.
    ///
    /// # Errors
    ///
    /// Fails if `true_front` has no vectors or no objectives.
    pub fn of(true_front: FrontView<'_>) -> Result<Self> {
        check_front(true_front, FrontRole::TrueFront)?;
        let min = true_front.fold_axis(Axis(0), f64::INFINITY, |a, &b| a.min(b));
        let max = true_front.fold_axis(Axis(0), f64::NEG_INFINITY, |a, &b| a.max(b));

        for (j, (lo, hi)) in min.iter().zip(max.iter()).enumerate() {
            if lo == hi {
                log::warn!(
                    "objective {j} is constant ({lo}) on the true front; normalized values will not be finite"
                );
            }
        }

        Ok(Self { min, max })
    }

    /// Number of objectives the bounds cover.
    pub fn len(&self) -> usize {
        self.min.len()
    }

    /// Whether the bounds cover no objectives.
    pub fn is_empty(&self) -> bool {
        self.min.is_empty()
    }

    /// Rescales every component of `front` as `(v - min) / (max - min)`.
    ///
    /// # Errors
    ///
    /// [`IndicatorError::DimensionMismatch`] if `front` does not have as many
    /// columns as the bounds.
    pub fn normalize(&self, front: FrontView<'_>) -> Result<Front> {
        if front.ncols() != self.len() {
            return Err(IndicatorError::DimensionMismatch {
                expected: self.len(),
                found: front.ncols(),
            });
        }
        let mut out = front.to_owned();
        for row in out.rows_mut() {
            Zip::from(row)
                .and(&self.min)
                .and(&self.max)
                .for_each(|v, &lo, &hi| *v = (*v - lo) / (hi - lo));
        }
        Ok(out)
    }
}

/// Per-objective `(min, max)` of the true front.
pub fn bounds(true_front: FrontView<'_>) -> Result<Bounds> {
    Bounds::of(true_front)
}

/// Rescales `front` into the frame described by `bounds`.
pub fn normalize(front: FrontView<'_>, bounds: &Bounds) -> Result<Front> {
    bounds.normalize(front)
}

/// Normalizes a candidate front and its true front with the true front's
/// bounds. Returns `(normalized_front, normalized_true_front)`.
pub(crate) fn normalize_pair(front: FrontView<'_>, true_front: FrontView<'_>) -> Result<(Front, Front)> {
    let bounds = Bounds::of(true_front)?;
    Ok((bounds.normalize(front)?, bounds.normalize(true_front)?))
}

/// One extreme vector per objective.
///
/// Row `k` of the result is the vector of `front` with the greatest value on
/// objective `k`. On exact ties the first such vector wins. The result has
/// shape `nobj × nobj`.
///
/// # Errors
///
/// Fails if `front` has no vectors or no objectives.
pub fn extreme_solutions(front: FrontView<'_>) -> Result<Front> {
    let nobj = check_front(front, FrontRole::TrueFront)?;

    let mut positions = vec![0usize; nobj];
    let mut best = front.row(0).to_owned();
    for (i, row) in front.outer_iter().enumerate().skip(1) {
        for (k, &v) in row.iter().enumerate() {
            if v > best[k] {
                best[k] = v;
                positions[k] = i;
            }
        }
    }

    let mut extremes = Array2::zeros((nobj, nobj));
    for (k, &i) in positions.iter().enumerate() {
        extremes.row_mut(k).assign(&front.row(i));
    }
    Ok(extremes)
}
