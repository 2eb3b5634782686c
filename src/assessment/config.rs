//! Assessment configuration.

use crate::indicators::{EpsilonMethod, GeneralizedSpreadVariant};

/// Configuration for [`assess`](super::assess).
///
/// # Defaults
///
/// The defaults reproduce the classic evaluation: dominated candidates are
/// filtered out, the jMetal-style generalized spread is used, and epsilon is
/// multiplicative, used as a unary indicator against the true front.
///
/// ```
/// use u_indicators::assessment::AssessmentConfig;
/// use u_indicators::indicators::EpsilonMethod;
///
/// let config = AssessmentConfig::default();
/// assert!(config.filter_dominated);
/// assert!(!config.remove_duplicates);
/// assert_eq!(config.epsilon_method, EpsilonMethod::Multiplicative);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_indicators::assessment::AssessmentConfig;
/// use u_indicators::indicators::{EpsilonMethod, GeneralizedSpreadVariant};
///
/// let config = AssessmentConfig::default()
///     .with_remove_duplicates(true)
///     .with_epsilon_method(EpsilonMethod::Additive)
///     .with_generalized_spread(GeneralizedSpreadVariant::Original);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AssessmentConfig {
    /// Keep only the non-dominated vectors of the candidate front.
    pub filter_dominated: bool,

    /// Drop exact duplicate vectors from the candidate front first.
    pub remove_duplicates: bool,

    /// Epsilon flavour. Multiplicative requires strictly same-sign,
    /// non-zero objective values in both fronts.
    pub epsilon_method: EpsilonMethod,

    /// Which generalized spread algorithm to report.
    pub generalized_spread: GeneralizedSpreadVariant,

    /// Evaluate per-point loops in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Results are
    /// identical either way.
    pub parallel: bool,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            filter_dominated: true,
            remove_duplicates: false,
            epsilon_method: EpsilonMethod::Multiplicative,
            generalized_spread: GeneralizedSpreadVariant::Ported,
            parallel: true,
        }
    }
}

impl AssessmentConfig {
    pub fn with_filter_dominated(mut self, filter: bool) -> Self {
        self.filter_dominated = filter;
        self
    }

    pub fn with_remove_duplicates(mut self, remove: bool) -> Self {
        self.remove_duplicates = remove;
        self
    }

    pub fn with_epsilon_method(mut self, method: EpsilonMethod) -> Self {
        self.epsilon_method = method;
        self
    }

    pub fn with_generalized_spread(mut self, variant: GeneralizedSpreadVariant) -> Self {
        self.generalized_spread = variant;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AssessmentConfig::default();
        assert!(config.filter_dominated);
        assert!(!config.remove_duplicates);
        assert_eq!(config.epsilon_method, EpsilonMethod::Multiplicative);
        assert_eq!(config.generalized_spread, GeneralizedSpreadVariant::Ported);
        assert!(config.parallel);
    }

    #[test]
    fn test_config_builder() {
        let config = AssessmentConfig::default()
            .with_filter_dominated(false)
            .with_remove_duplicates(true)
            .with_epsilon_method(EpsilonMethod::Additive)
            .with_generalized_spread(GeneralizedSpreadVariant::Original)
            .with_parallel(false);

        assert!(!config.filter_dominated);
        assert!(config.remove_duplicates);
        assert_eq!(config.epsilon_method, EpsilonMethod::Additive);
        assert_eq!(config.generalized_spread, GeneralizedSpreadVariant::Original);
        assert!(!config.parallel);
    }
}
