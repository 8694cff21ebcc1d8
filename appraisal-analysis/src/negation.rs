//! Negation scope and degree marking around a candidate.

use std::sync::Arc;

use appraisal_nlp::Document;

use crate::lexicon::LexiconRegistry;
use crate::polarity::Intensity;

/// Result of scanning the tokens before a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegationScan {
    pub negated: bool,
    pub intensity: Intensity,
}

/// Resolves negation by inspecting a bounded preceding window.
///
/// The scope is purely positional. It does not stop at sentence or mention
/// boundaries, and it never propagates beyond the window.
#[derive(Debug, Clone)]
pub struct NegationResolver {
    lexicon: Arc<LexiconRegistry>,
    window: usize,
    intensity_lookback: usize,
}

impl NegationResolver {
    pub fn new(lexicon: Arc<LexiconRegistry>) -> Self {
        NegationResolver {
            lexicon,
            window: 3,
            intensity_lookback: 2,
        }
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_intensity_lookback(mut self, lookback: usize) -> Self {
        self.intensity_lookback = lookback;
        self
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// True when a negation-marker lemma sits within `window` tokens
    /// before `index`, boundary inclusive, up to the candidate itself.
    pub fn is_negated(&self, doc: &Document, index: usize) -> bool {
        let start = index.saturating_sub(self.window);
        (start..=index).any(|i| {
            doc.token(i)
                .map_or(false, |t| self.lexicon.is_negation_marker(t.lemma()))
        })
    }

    /// Degree marking from the tokens immediately before the candidate;
    /// the marker closest to the candidate wins.
    pub fn intensity(&self, doc: &Document, index: usize) -> Intensity {
        let start = index.saturating_sub(self.intensity_lookback);
        for i in (start..index).rev() {
            let Some(token) = doc.token(i) else { continue };
            if self.lexicon.is_intensifier(token.lemma()) {
                return Intensity::Intensified;
            }
            if self.lexicon.is_attenuator(token.lemma()) {
                return Intensity::Attenuated;
            }
        }
        Intensity::Plain
    }

    pub fn scan(&self, doc: &Document, index: usize) -> NegationScan {
        NegationScan {
            negated: self.is_negated(doc, index),
            intensity: self.intensity(doc, index),
        }
    }
}
