//! Assessment pipeline.
//!
//! [`assess`] prepares the candidate front (duplicate removal, dominance
//! filtering), then computes every indicator against the true front.

use ndarray::s;

use super::config::AssessmentConfig;
use super::report::QualityReport;
use crate::dominance::{pareto_filter, remove_duplicates};
use crate::error::Result;
use crate::front::{check_pair, FrontView};
use crate::indicators::{
    epsilon_with, generational_distance_with, inverted_generational_distance_with, spread,
    SPREAD_OBJECTIVES,
};

/// Evaluates `front` against `true_front`.
///
/// Works on a private copy of `front`; the caller's data is never reordered.
/// Spread is only reported for bi-objective problems. Any indicator error
/// aborts the whole assessment.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use u_indicators::assessment::{assess, AssessmentConfig};
///
/// let true_front = array![[1.0, 2.0], [1.5, 1.5], [2.0, 1.0]];
/// let front = array![[1.0, 2.0], [1.5, 1.5], [2.0, 1.0], [2.0, 2.0]];
///
/// let report = assess(front.view(), true_front.view(), &AssessmentConfig::default()).unwrap();
/// assert_eq!(report.front_len, 3); // (2, 2) is dominated
/// assert_eq!(report.generational_distance, 0.0);
/// assert_eq!(report.epsilon, 1.0);
/// ```
pub fn assess(
    front: FrontView<'_>,
    true_front: FrontView<'_>,
    config: &AssessmentConfig,
) -> Result<QualityReport> {
    let objectives = check_pair(front, true_front)?;

    let mut candidate = if config.remove_duplicates {
        let unique = remove_duplicates(front);
        log::debug!(
            "removed {} duplicate vectors",
            front.nrows() - unique.nrows()
        );
        unique
    } else {
        front.to_owned()
    };

    if config.filter_dominated {
        let total = candidate.nrows();
        let kept = pareto_filter(candidate.view_mut());
        candidate.slice_collapse(s![..kept, ..]);
        log::debug!("pareto filter kept {kept} of {total} vectors");
    }

    let view = candidate.view();
    let parallel = config.parallel;

    let generational_distance = generational_distance_with(view, true_front, parallel)?;
    let inverted_generational_distance =
        inverted_generational_distance_with(view, true_front, parallel)?;
    let spread = if objectives == SPREAD_OBJECTIVES {
        Some(spread(view, true_front)?)
    } else {
        log::debug!("skipping spread: {objectives} objectives");
        None
    };
    let generalized_spread = config
        .generalized_spread
        .compute_with(view, true_front, parallel)?;
    let epsilon = epsilon_with(view, true_front, config.epsilon_method, parallel)?;

    Ok(QualityReport {
        objectives,
        front_len: candidate.nrows(),
        generational_distance,
        inverted_generational_distance,
        spread,
        generalized_spread,
        generalized_spread_variant: config.generalized_spread,
        epsilon,
        epsilon_method: config.epsilon_method,
    })
}
