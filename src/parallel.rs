//! Row-wise evaluation helpers.
//!
//! With the `parallel` feature the per-row work is spread over the rayon
//! pool. Results are always collected in row order and reduced by the
//! caller, so both paths produce bit-identical indicator values.

use crate::front::{FrontView, Point};

/// Whether the free indicator functions evaluate rows in parallel.
pub(crate) const PARALLEL_DEFAULT: bool = cfg!(feature = "parallel");

/// Applies `f` to every row of `front`, returning the results in row order.
pub(crate) fn map_rows<T, F>(front: FrontView<'_>, parallel: bool, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, Point<'_>) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if parallel && front.nrows() > 1 {
            use rayon::prelude::*;
            return (0..front.nrows())
                .into_par_iter()
                .map(|i| f(i, front.row(i)))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    front
        .outer_iter()
        .enumerate()
        .map(|(i, row)| f(i, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_map_rows_preserves_order() {
        let front = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]];
        for parallel in [false, true] {
            let sums = map_rows(front.view(), parallel, |i, row| (i, row.sum()));
            assert_eq!(sums, vec![(0, 3.0), (1, 7.0), (2, 11.0), (3, 15.0)]);
        }
    }
}
