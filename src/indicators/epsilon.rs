//! Binary epsilon indicator, additive and multiplicative.
//!
//! For sets `A` and `B`:
//!
//! `I_ε(A, B) = max_{a ∈ A} min_{b ∈ B} max_k term(a_k, b_k)`
//!
//! with `term = b_k − a_k` (additive) or `term = b_k / a_k` (multiplicative).
//! No normalization is applied; the indicator depends on the objectives'
//! scale. It is binary by definition but is commonly used as a unary
//! indicator by passing the true front as `B`.
//!
//! The multiplicative form requires every pair of compared components to be
//! non-zero and of the same sign. A violating pair aborts the computation
//! with [`IndicatorError::InvalidMultiplicativeOperand`].
//!
//! # References
//!
//! - Zitzler et al. (2003), "Performance Assessment of Multiobjective
//!   Optimizers: An Analysis and Review"

use std::fmt;
use std::str::FromStr;

use crate::error::{FrontRole, IndicatorError, Result};
use crate::front::{check_front, FrontView, Point};
use crate::parallel::{map_rows, PARALLEL_DEFAULT};

/// Epsilon indicator flavour.
///
/// # Examples
///
/// ```
/// use u_indicators::indicators::EpsilonMethod;
///
/// let method: EpsilonMethod = "multiplicative".parse().unwrap();
/// assert_eq!(method, EpsilonMethod::Multiplicative);
/// assert!("quadratic".parse::<EpsilonMethod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EpsilonMethod {
    /// `b_k − a_k`.
    Additive,
    /// `b_k / a_k`, operands must be non-zero and share a sign.
    Multiplicative,
}

impl EpsilonMethod {
    /// Per-objective term, or `None` if the operands are invalid for this method.
    #[inline]
    fn term(self, a: f64, b: f64) -> Option<f64> {
        match self {
            EpsilonMethod::Additive => Some(b - a),
            EpsilonMethod::Multiplicative => {
                let mismatched = (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0);
                if mismatched || a == 0.0 || b == 0.0 {
                    None
                } else {
                    Some(b / a)
                }
            }
        }
    }
}

impl fmt::Display for EpsilonMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpsilonMethod::Additive => f.write_str("additive"),
            EpsilonMethod::Multiplicative => f.write_str("multiplicative"),
        }
    }
}

impl FromStr for EpsilonMethod {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "additive" | "add" | "+" => Ok(EpsilonMethod::Additive),
            "multiplicative" | "mult" | "mul" | "*" => Ok(EpsilonMethod::Multiplicative),
            _ => Err(IndicatorError::UnknownEpsilonMethod(s.to_string())),
        }
    }
}

impl TryFrom<u8> for EpsilonMethod {
    type Error = IndicatorError;

    /// `0` is additive, `1` multiplicative.
    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(EpsilonMethod::Additive),
            1 => Ok(EpsilonMethod::Multiplicative),
            other => Err(IndicatorError::UnknownEpsilonMethod(other.to_string())),
        }
    }
}

/// Epsilon indicator of `a` relative to `b` using `method`.
///
/// # Errors
///
/// - [`IndicatorError::EmptyFront`] / [`IndicatorError::NoObjectives`] /
///   [`IndicatorError::DimensionMismatch`] for malformed sets
/// - [`IndicatorError::InvalidMultiplicativeOperand`] for the first invalid
///   operand pair met in `(a, b, objective)` order
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use u_indicators::indicators::{epsilon, EpsilonMethod};
///
/// let a = array![[1.0, 2.0]];
/// let b = array![[2.0, 2.5]];
/// let eps = epsilon(a.view(), b.view(), EpsilonMethod::Additive).unwrap();
/// assert_eq!(eps, 1.0);
/// ```
pub fn epsilon(a: FrontView<'_>, b: FrontView<'_>, method: EpsilonMethod) -> Result<f64> {
    epsilon_with(a, b, method, PARALLEL_DEFAULT)
}

/// Additive epsilon indicator.
pub fn additive_epsilon(a: FrontView<'_>, b: FrontView<'_>) -> Result<f64> {
    epsilon(a, b, EpsilonMethod::Additive)
}

/// Multiplicative epsilon indicator.
pub fn multiplicative_epsilon(a: FrontView<'_>, b: FrontView<'_>) -> Result<f64> {
    epsilon(a, b, EpsilonMethod::Multiplicative)
}

pub(crate) fn epsilon_with(
    a: FrontView<'_>,
    b: FrontView<'_>,
    method: EpsilonMethod,
    parallel: bool,
) -> Result<f64> {
    let nobj = check_front(a, FrontRole::SetA)?;
    check_front(b, FrontRole::SetB)?;
    if b.ncols() != nobj {
        return Err(IndicatorError::DimensionMismatch {
            expected: nobj,
            found: b.ncols(),
        });
    }
    log::debug!(
        "{method} epsilon: |A| = {}, |B| = {}, {nobj} objectives",
        a.nrows(),
        b.nrows()
    );

    let per_a = map_rows(a, parallel, |i, point| best_cover(i, point, b, method));

    let mut eps = None;
    for value in per_a {
        eps = Some(keep_max(eps, value?));
    }
    let eps = eps.ok_or(IndicatorError::EmptyFront {
        role: FrontRole::SetA,
    })?;
    log::trace!("{method} epsilon = {eps}");
    Ok(eps)
}

/// `min_{b ∈ B} max_k term(a_k, b_k)` for the vector of `A` at `a_index`.
fn best_cover(a_index: usize, a: Point<'_>, b: FrontView<'_>, method: EpsilonMethod) -> Result<f64> {
    let mut eps_j = None;
    for (b_index, candidate) in b.outer_iter().enumerate() {
        let mut eps_k = None;
        for (objective, (&x, &y)) in a.iter().zip(candidate.iter()).enumerate() {
            let term = method
                .term(x, y)
                .ok_or(IndicatorError::InvalidMultiplicativeOperand {
                    a_index,
                    b_index,
                    objective,
                    a: x,
                    b: y,
                })?;
            eps_k = Some(keep_max(eps_k, term));
        }
        let eps_k = eps_k.ok_or(IndicatorError::NoObjectives)?;
        eps_j = Some(keep_min(eps_j, eps_k));
    }
    eps_j.ok_or(IndicatorError::EmptyFront {
        role: FrontRole::SetB,
    })
}

/// The first value seeds the accumulator; later ones replace it only if larger.
#[inline]
fn keep_max(current: Option<f64>, value: f64) -> f64 {
    match current {
        Some(c) if c < value => value,
        Some(c) => c,
        None => value,
    }
}

#[inline]
fn keep_min(current: Option<f64>, value: f64) -> f64 {
    match current {
        Some(c) if c > value => value,
        Some(c) => c,
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};
    use proptest::prelude::*;

    #[test]
    fn test_additive_identical_sets() {
        let tf = array![[0.0, 1.0], [0.5, 0.5], [1.0, 0.0]];
        assert_eq!(additive_epsilon(tf.view(), tf.view()).unwrap(), 0.0);
    }

    #[test]
    fn test_additive_known_value() {
        let a = array![[1.0, 3.0], [3.0, 1.0]];
        let b = array![[1.0, 2.0], [2.0, 1.0]];
        // a0: vs b0 max(0,-1)=0, vs b1 max(1,-2)=1 -> min 0
        // a1: vs b0 max(-2,1)=1, vs b1 max(-1,0)=0 -> min 0
        assert_eq!(additive_epsilon(a.view(), b.view()).unwrap(), 0.0);
        // b vs a: b0: vs a0 max(0,1)=1, vs a1 max(2,-1)=2 -> 1
        //         b1: vs a0 max(-1,2)=2, vs a1 max(1,0)=1 -> 1
        assert_eq!(additive_epsilon(b.view(), a.view()).unwrap(), 1.0);
    }

    #[test]
    fn test_additive_negative() {
        // A is dominated everywhere by B shifted down by 2.
        let a = array![[3.0, 3.0]];
        let b = array![[1.0, 1.0]];
        assert_eq!(additive_epsilon(a.view(), b.view()).unwrap(), -2.0);
    }

    #[test]
    fn test_multiplicative_known_value() {
        let a = array![[1.0, 4.0], [2.0, 2.0]];
        let b = array![[2.0, 4.0], [4.0, 1.0]];
        // a0: vs b0 max(2,1)=2, vs b1 max(4,0.25)=4 -> 2
        // a1: vs b0 max(1,2)=2, vs b1 max(2,0.5)=2 -> 2
        assert_eq!(multiplicative_epsilon(a.view(), b.view()).unwrap(), 2.0);
    }

    #[test]
    fn test_multiplicative_negative_operands() {
        let a = array![[-2.0, -1.0]];
        let b = array![[-4.0, -1.0]];
        assert_eq!(multiplicative_epsilon(a.view(), b.view()).unwrap(), 2.0);
    }

    #[test]
    fn test_multiplicative_zero_is_error() {
        let a = array![[1.0, 2.0], [1.0, 0.0]];
        let b = array![[1.0, 1.0]];
        assert_eq!(
            multiplicative_epsilon(a.view(), b.view()).unwrap_err(),
            IndicatorError::InvalidMultiplicativeOperand {
                a_index: 1,
                b_index: 0,
                objective: 1,
                a: 0.0,
                b: 1.0
            }
        );
    }

    #[test]
    fn test_multiplicative_sign_mismatch_is_error() {
        let a = array![[1.0, 2.0]];
        let b = array![[1.0, -2.0]];
        assert!(matches!(
            multiplicative_epsilon(a.view(), b.view()),
            Err(IndicatorError::InvalidMultiplicativeOperand { objective: 1, .. })
        ));
    }

    #[test]
    fn test_shape_errors() {
        let a = array![[1.0, 2.0]];
        let empty = Array2::<f64>::zeros((0, 2));
        assert_eq!(
            additive_epsilon(a.view(), empty.view()).unwrap_err(),
            IndicatorError::EmptyFront {
                role: FrontRole::SetB
            }
        );
        assert_eq!(
            additive_epsilon(empty.view(), a.view()).unwrap_err(),
            IndicatorError::EmptyFront {
                role: FrontRole::SetA
            }
        );
        let wide = array![[1.0, 2.0, 3.0]];
        assert!(matches!(
            additive_epsilon(a.view(), wide.view()),
            Err(IndicatorError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("Additive".parse::<EpsilonMethod>().unwrap(), EpsilonMethod::Additive);
        assert_eq!(" * ".parse::<EpsilonMethod>().unwrap(), EpsilonMethod::Multiplicative);
        assert_eq!(
            "hyper".parse::<EpsilonMethod>().unwrap_err(),
            IndicatorError::UnknownEpsilonMethod("hyper".into())
        );
        assert_eq!(EpsilonMethod::try_from(1).unwrap(), EpsilonMethod::Multiplicative);
        assert!(matches!(
            EpsilonMethod::try_from(7),
            Err(IndicatorError::UnknownEpsilonMethod(_))
        ));
        assert_eq!(EpsilonMethod::Additive.to_string(), "additive");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let a = array![[1.0, 4.0], [2.0, 2.0], [3.5, 1.5], [0.5, 6.0]];
        let b = array![[2.0, 4.0], [4.0, 1.0], [1.0, 5.0]];
        for method in [EpsilonMethod::Additive, EpsilonMethod::Multiplicative] {
            let seq = epsilon_with(a.view(), b.view(), method, false).unwrap();
            let par = epsilon_with(a.view(), b.view(), method, true).unwrap();
            assert_eq!(seq.to_bits(), par.to_bits());
        }
    }

    proptest! {
        #[test]
        fn prop_multiplicative_zero_never_finite(
            values in prop::collection::vec(0.5f64..5.0, 6),
            zero_at in 0usize..6,
        ) {
            let mut data = values;
            data[zero_at] = 0.0;
            let a = Array2::from_shape_vec((2, 2), data[..4].to_vec()).unwrap();
            let b = Array2::from_shape_vec((1, 2), data[4..].to_vec()).unwrap();
            let result = multiplicative_epsilon(a.view(), b.view());
            let is_invalid_operand = matches!(result, Err(IndicatorError::InvalidMultiplicativeOperand { .. }));
            prop_assert!(is_invalid_operand);
        }
    }
}
