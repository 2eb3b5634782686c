//! Lexicographic ordering of objective vectors.

use std::cmp::Ordering;

use ndarray::Axis;

use super::{Front, FrontView, Point};

/// Lexicographic comparison: the first differing component decides.
///
/// Components are compared with [`f64::total_cmp`], so the order stays total
/// when normalization produced NaN or ±∞: `-0.0` sorts before `+0.0` and a
/// positive NaN sorts after `+∞`.
pub fn lexicographic_cmp(a: Point<'_>, b: Point<'_>) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x.total_cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Returns a copy of `front` with its rows in ascending lexicographic order.
///
/// The sort is stable: equal rows keep their relative order.
pub fn sort_lexicographic(front: FrontView<'_>) -> Front {
    let mut indices: Vec<usize> = (0..front.nrows()).collect();
    indices.sort_by(|&a, &b| lexicographic_cmp(front.row(a), front.row(b)));
    front.select(Axis(0), &indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_cmp() {
        let a = array![0.0, 1.0];
        let b = array![0.0, 2.0];
        let c = array![1.0, 0.0];
        assert_eq!(lexicographic_cmp(a.view(), b.view()), Ordering::Less);
        assert_eq!(lexicographic_cmp(c.view(), b.view()), Ordering::Greater);
        assert_eq!(lexicographic_cmp(a.view(), a.view()), Ordering::Equal);
    }

    #[test]
    fn test_cmp_non_finite_is_total() {
        let nan = array![f64::NAN, 0.0];
        let inf = array![f64::INFINITY, 0.0];
        let neg = array![f64::NEG_INFINITY, 0.0];
        assert_eq!(lexicographic_cmp(neg.view(), inf.view()), Ordering::Less);
        assert_eq!(lexicographic_cmp(inf.view(), nan.view()), Ordering::Less);
        assert_eq!(lexicographic_cmp(nan.view(), neg.view()), Ordering::Greater);
        assert_eq!(lexicographic_cmp(nan.view(), nan.view()), Ordering::Equal);
    }

    #[test]
    fn test_sort_mixed_non_finite() {
        let values = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
        let front = Front::from_shape_fn((64, 2), |(i, j)| {
            if j == 0 {
                values[(i * 7) % 3]
            } else {
                i as f64
            }
        });
        let sorted = sort_lexicographic(front.view());
        assert!(sorted.column(0).iter().take(21).all(|v| *v == f64::NEG_INFINITY));
        assert!(sorted.column(0).iter().skip(43).all(|v| v.is_nan()));
    }

    #[test]
    fn test_sort() {
        let front = array![[1.0, 0.0], [0.0, 1.0], [0.5, 0.5], [0.0, 0.5]];
        let sorted = sort_lexicographic(front.view());
        assert_eq!(sorted, array![[0.0, 0.5], [0.0, 1.0], [0.5, 0.5], [1.0, 0.0]]);
    }

    #[test]
    fn test_sort_three_objectives() {
        let front = array![[1.0, 1.0, 2.0], [1.0, 1.0, 1.0], [0.0, 9.0, 9.0]];
        let sorted = sort_lexicographic(front.view());
        assert_eq!(
            sorted,
            array![[0.0, 9.0, 9.0], [1.0, 1.0, 1.0], [1.0, 1.0, 2.0]]
        );
    }
}
