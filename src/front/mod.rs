//! Fronts and the primitives every indicator is built on.
//!
//! A front is a set of objective vectors stored row-wise in a single
//! contiguous [`ndarray::Array2`]: each row is one vector, each column one
//! objective. All objectives are **minimized**.
//!
//! # Submodules
//!
//! - [`geometry`]: squared/Euclidean distance, exact equality, closest and
//!   nearest-neighbour search
//! - [`normalize`]: true-front bounds, affine rescaling, extreme solutions
//! - [`order`]: lexicographic ordering of vectors

pub mod geometry;
pub mod normalize;
pub mod order;

use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::error::{FrontRole, IndicatorError, Result};

/// Owned front: `rows = vectors`, `columns = objectives`.
pub type Front = Array2<f64>;

/// Borrowed front.
pub type FrontView<'a> = ArrayView2<'a, f64>;

/// Borrowed single objective vector.
pub type Point<'a> = ArrayView1<'a, f64>;

/// Builds a [`Front`] from nested rows.
///
/// # Errors
///
/// - [`IndicatorError::EmptyFront`] if `rows` is empty; the role is always
///   [`FrontRole::Candidate`], since the builder cannot tell which front it makes
/// - [`IndicatorError::NoObjectives`] if the first row is empty
/// - [`IndicatorError::RaggedRows`] if any row differs in length from the first
///
/// # Example
///
/// ```
/// use u_indicators::front::front_from_rows;
///
/// let front = front_from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
/// assert_eq!(front.dim(), (2, 2));
/// ```
pub fn front_from_rows(rows: &[Vec<f64>]) -> Result<Front> {
    let first = rows.first().ok_or(IndicatorError::EmptyFront {
        role: FrontRole::Candidate,
    })?;
    let nobj = first.len();
    if nobj == 0 {
        return Err(IndicatorError::NoObjectives);
    }

    let mut data = Vec::with_capacity(rows.len() * nobj);
    for (row, values) in rows.iter().enumerate() {
        if values.len() != nobj {
            return Err(IndicatorError::RaggedRows {
                row,
                expected: nobj,
                found: values.len(),
            });
        }
        data.extend_from_slice(values);
    }

    Array2::from_shape_vec((rows.len(), nobj), data)
        .map_err(|e| IndicatorError::InvalidConfig(e.to_string()))
}

/// Checks that a front has at least one vector and one objective.
pub(crate) fn check_front(front: FrontView<'_>, role: FrontRole) -> Result<usize> {
    if front.ncols() == 0 {
        return Err(IndicatorError::NoObjectives);
    }
    if front.nrows() == 0 {
        return Err(IndicatorError::EmptyFront { role });
    }
    Ok(front.ncols())
}

/// Checks a candidate/true front pair and returns the objective count.
///
/// The objective count is taken from the true front; the candidate must match.
pub(crate) fn check_pair(front: FrontView<'_>, true_front: FrontView<'_>) -> Result<usize> {
    let nobj = check_front(true_front, FrontRole::TrueFront)?;
    check_front(front, FrontRole::Candidate)?;
    if front.ncols() != nobj {
        return Err(IndicatorError::DimensionMismatch {
            expected: nobj,
            found: front.ncols(),
        });
    }
    Ok(nobj)
}
