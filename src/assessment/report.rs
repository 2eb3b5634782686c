//! Assessment result.

use std::fmt;

use crate::indicators::{EpsilonMethod, GeneralizedSpreadVariant};

/// Indicator values for one candidate front.
///
/// `Display` prints one `name: value` line per indicator with four decimals
/// unless a precision is given (`format!("{report:.6}")`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityReport {
    /// Number of objectives.
    pub objectives: usize,

    /// Candidate vectors that were evaluated, after duplicate removal and
    /// dominance filtering.
    pub front_len: usize,

    /// Generational distance (GD).
    pub generational_distance: f64,

    /// Inverted generational distance (IGD).
    pub inverted_generational_distance: f64,

    /// Spread (Δ). `None` unless the problem is bi-objective.
    pub spread: Option<f64>,

    /// Generalized spread (I_GS) computed with [`Self::generalized_spread_variant`].
    pub generalized_spread: f64,

    pub generalized_spread_variant: GeneralizedSpreadVariant,

    /// Epsilon of the candidate front relative to the true front.
    pub epsilon: f64,

    pub epsilon_method: EpsilonMethod,
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(4);
        writeln!(f, "I_GD: {:.p$}", self.generational_distance)?;
        writeln!(f, "I_IGD: {:.p$}", self.inverted_generational_distance)?;
        match self.spread {
            Some(s) => writeln!(f, "I_S: {s:.p$}")?,
            None => writeln!(f, "I_S: n/a")?,
        }
        writeln!(f, "I_GS: {:.p$}", self.generalized_spread)?;
        write!(f, "I_epsilon: {:.p$}", self.epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(spread: Option<f64>) -> QualityReport {
        QualityReport {
            objectives: 2,
            front_len: 3,
            generational_distance: 0.012345,
            inverted_generational_distance: 0.5,
            spread,
            generalized_spread: 0.25,
            generalized_spread_variant: GeneralizedSpreadVariant::Ported,
            epsilon: 1.0,
            epsilon_method: EpsilonMethod::Multiplicative,
        }
    }

    #[test]
    fn test_display_four_decimals() {
        let text = report(Some(0.75)).to_string();
        assert_eq!(
            text,
            "I_GD: 0.0123\nI_IGD: 0.5000\nI_S: 0.7500\nI_GS: 0.2500\nI_epsilon: 1.0000"
        );
    }

    #[test]
    fn test_display_precision_and_missing_spread() {
        let text = format!("{:.2}", report(None));
        assert_eq!(
            text,
            "I_GD: 0.01\nI_IGD: 0.50\nI_S: n/a\nI_GS: 0.25\nI_epsilon: 1.00"
        );
    }
}
