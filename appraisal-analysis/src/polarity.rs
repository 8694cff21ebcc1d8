//! Polarity and intensity labels attached to extracted adjectives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Evaluative polarity of an adjective occurrence.
///
/// Neutral marks a lemma absent from both seed lists; it is a fixed point
/// of negation, not a midpoint on a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// Polarity under negation. Positive and negative swap; neutral is
    /// unaffected.
    pub fn inverted(self) -> Polarity {
        match self {
            Polarity::Positive => Polarity::Negative,
            Polarity::Negative => Polarity::Positive,
            Polarity::Neutral => Polarity::Neutral,
        }
    }

    pub fn is_evaluative(self) -> bool {
        !matches!(self, Polarity::Neutral)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Degree marking found immediately before an adjective.
///
/// Recorded as provenance only; it never feeds into counts or polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Plain,
    Intensified,
    Attenuated,
}

impl Intensity {
    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Plain => "plain",
            Intensity::Intensified => "intensified",
            Intensity::Attenuated => "attenuated",
        }
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Intensity::Plain
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_negation_restores_polarity() {
        for polarity in [Polarity::Positive, Polarity::Negative, Polarity::Neutral] {
            assert_eq!(polarity.inverted().inverted(), polarity);
        }
    }

    #[test]
    fn neutral_is_a_fixed_point() {
        assert_eq!(Polarity::Neutral.inverted(), Polarity::Neutral);
        assert!(!Polarity::Neutral.is_evaluative());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Polarity::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&Intensity::Attenuated).unwrap(),
            "\"attenuated\""
        );
    }
}
