//! Distance and equality primitives.
//!
//! The two point-to-front searches differ only in whether a vector equal to
//! the query counts as a neighbour:
//!
//! - [`closest_squared_distance`] includes it. Use it when the query comes
//!   from a different front than the one being scanned.
//! - [`nearest_squared_distance`] skips it, so a point is never its own
//!   neighbour when scanning its own front.
//!
//! Both return [`NO_NEIGHBOR`] when nothing qualifies.

use super::{FrontView, Point};

/// Returned by the point-to-front searches when no vector qualifies.
pub const NO_NEIGHBOR: f64 = f64::MAX;

/// Squared Euclidean distance `Σ(a_i - b_i)²`.
#[inline]
pub fn squared_distance(a: Point<'_>, b: Point<'_>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Euclidean distance.
#[inline]
pub fn euclidean_distance(a: Point<'_>, b: Point<'_>) -> f64 {
    squared_distance(a, b).sqrt()
}

/// Exact component-wise equality, no tolerance.
#[inline]
pub fn vectors_equal(a: Point<'_>, b: Point<'_>) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// Minimum squared distance from `x` to any vector of `front`, including a
/// vector equal to `x`.
pub fn closest_squared_distance(x: Point<'_>, front: FrontView<'_>) -> f64 {
    front
        .rows()
        .into_iter()
        .map(|row| squared_distance(x, row))
        .fold(NO_NEIGHBOR, |min, d| if d < min { d } else { min })
}

/// Minimum squared distance from `x` to any vector of `front` that is not
/// exactly equal to `x`.
pub fn nearest_squared_distance(x: Point<'_>, front: FrontView<'_>) -> f64 {
    front
        .rows()
        .into_iter()
        .filter(|row| !vectors_equal(x, *row))
        .map(|row| squared_distance(x, row))
        .fold(NO_NEIGHBOR, |min, d| if d < min { d } else { min })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_distances() {
        let a = array![0.0, 0.0];
        let b = array![3.0, 4.0];
        assert_eq!(squared_distance(a.view(), b.view()), 25.0);
        assert_eq!(euclidean_distance(a.view(), b.view()), 5.0);
        assert_eq!(euclidean_distance(a.view(), a.view()), 0.0);
    }

    #[test]
    fn test_vectors_equal_is_exact() {
        let a = array![0.1 + 0.2, 1.0];
        let b = array![0.3, 1.0];
        assert!(!vectors_equal(a.view(), b.view()));
        assert!(vectors_equal(b.view(), b.view()));
    }

    #[test]
    fn test_closest_includes_self() {
        let front = array![[0.0, 0.0], [1.0, 1.0]];
        let x = array![0.0, 0.0];
        assert_eq!(closest_squared_distance(x.view(), front.view()), 0.0);
    }

    #[test]
    fn test_nearest_skips_self() {
        let front = array![[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]];
        let x = array![0.0, 0.0];
        assert_eq!(nearest_squared_distance(x.view(), front.view()), 2.0);
    }

    #[test]
    fn test_no_neighbor_sentinel() {
        let front = array![[2.0, 2.0]];
        let x = array![2.0, 2.0];
        assert_eq!(nearest_squared_distance(x.view(), front.view()), NO_NEIGHBOR);

        let empty = ndarray::Array2::<f64>::zeros((0, 2));
        assert_eq!(closest_squared_distance(x.view(), empty.view()), NO_NEIGHBOR);
    }
}
