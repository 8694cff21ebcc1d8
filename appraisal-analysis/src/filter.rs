//! Validity filtering of adjective candidates.
//!
//! Every candidate passes through the same gate regardless of the strategy
//! that surfaced it: part-of-speech check, exclusion list, lemma length,
//! character-class pattern, and finally the morphological gate selected by
//! [`MorphologyMode`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use appraisal_nlp::Token;

use crate::lexicon::LexiconRegistry;

/// How unknown lemmas are treated by the morphological gate.
///
/// Suffix fallback trades precision for recall and changes what corpora
/// are comparable, so the mode in force is carried into the snapshot
/// rather than mixed silently into the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MorphologyMode {
    /// Admit only lemmas present in the adjective or polarity lexicons.
    LexiconOnly,
    /// Additionally admit unknown lemmas with an adjective-forming ending.
    SuffixFallback,
}

impl MorphologyMode {
    pub fn as_str(self) -> &'static str {
        match self {
            MorphologyMode::LexiconOnly => "lexicon-only",
            MorphologyMode::SuffixFallback => "suffix-fallback",
        }
    }
}

impl Default for MorphologyMode {
    fn default() -> Self {
        MorphologyMode::SuffixFallback
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Shortest admissible lemma, in characters.
    pub min_lemma_len: usize,
    /// Shortest lemma the suffix fallback may admit.
    pub fallback_min_len: usize,
    pub morphology: MorphologyMode,
}

impl Default for FilterSettings {
    fn default() -> Self {
        FilterSettings {
            min_lemma_len: 3,
            fallback_min_len: 4,
            morphology: MorphologyMode::default(),
        }
    }
}

/// Which rule admitted a lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmissionBasis {
    /// Found in the adjective lexicon or a polarity seed list.
    Lexicon,
    /// Unknown lemma admitted by an adjective-forming ending.
    Suffix,
}

#[derive(Debug, Clone)]
pub struct ValidityFilter {
    lexicon: Arc<LexiconRegistry>,
    settings: FilterSettings,
}

impl ValidityFilter {
    pub fn new(lexicon: Arc<LexiconRegistry>) -> Self {
        ValidityFilter::with_settings(lexicon, FilterSettings::default())
    }

    pub fn with_settings(lexicon: Arc<LexiconRegistry>, settings: FilterSettings) -> Self {
        ValidityFilter { lexicon, settings }
    }

    pub fn settings(&self) -> FilterSettings {
        self.settings
    }

    /// `None` when the token is rejected; otherwise the rule that admitted
    /// its lemma.
    pub fn assess(&self, token: &Token) -> Option<AdmissionBasis> {
        if !token.pos().is_adjective() {
            return None;
        }
        let lemma = token.lemma();
        if self.lexicon.is_excluded(lemma) {
            return None;
        }
        if lemma.chars().count() < self.settings.min_lemma_len {
            return None;
        }
        if !self.lexicon.matches_lemma_pattern(lemma) {
            return None;
        }
        if self.lexicon.is_known_adjective(lemma) || self.lexicon.polarity_of(lemma).is_evaluative()
        {
            return Some(AdmissionBasis::Lexicon);
        }
        match self.settings.morphology {
            MorphologyMode::LexiconOnly => None,
            MorphologyMode::SuffixFallback => {
                if lemma.chars().count() >= self.settings.fallback_min_len
                    && self.lexicon.has_adjective_suffix(lemma)
                {
                    Some(AdmissionBasis::Suffix)
                } else {
                    None
                }
            }
        }
    }

    pub fn admits(&self, token: &Token) -> bool {
        self.assess(token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appraisal_nlp::{DepRel, DocMeta, Document, DocumentBuilder, PosTag, TokenInit};

    fn adj(lemma: &str) -> Document {
        token(lemma, PosTag::Adj)
    }

    fn token(lemma: &str, pos: PosTag) -> Document {
        let mut builder = DocumentBuilder::new(DocMeta::new("ONDAS", "filter.conllu"));
        builder.push(TokenInit::new(lemma, lemma, pos, DepRel::parse("amod"), None));
        builder.finish()
    }

    fn filter(settings: FilterSettings) -> ValidityFilter {
        ValidityFilter::with_settings(LexiconRegistry::spanish_music_press(), settings)
    }

    #[test]
    fn known_and_seed_lemmas_are_admitted_by_lexicon() {
        let filter = filter(FilterSettings::default());
        let known = adj("sinfónico");
        let seed = adj("espléndido");
        assert_eq!(
            filter.assess(known.token(0).unwrap()),
            Some(AdmissionBasis::Lexicon)
        );
        assert_eq!(
            filter.assess(seed.token(0).unwrap()),
            Some(AdmissionBasis::Lexicon)
        );
    }

    #[test]
    fn unknown_lemmas_need_the_suffix_fallback() {
        let doc = adj("armonioso");
        let fallback = filter(FilterSettings::default());
        let strict = filter(FilterSettings {
            morphology: MorphologyMode::LexiconOnly,
            ..FilterSettings::default()
        });
        assert_eq!(
            fallback.assess(doc.token(0).unwrap()),
            Some(AdmissionBasis::Suffix)
        );
        assert_eq!(strict.assess(doc.token(0).unwrap()), None);
    }

    #[test]
    fn rejects_wrong_pos_exclusions_and_malformed_lemmas() {
        let filter = filter(FilterSettings::default());
        // right lemma, wrong part of speech
        assert!(!filter.admits(token("hermoso", PosTag::Noun).token(0).unwrap()));
        // mistagged determiner on the exclusion list
        assert!(!filter.admits(adj("mismo").token(0).unwrap()));
        // too short
        assert!(!filter.admits(adj("ya").token(0).unwrap()));
        // digits and punctuation fail the character class
        assert!(!filter.admits(adj("op.25").token(0).unwrap()));
        assert!(!filter.admits(adj("anti-wagneriano").token(0).unwrap()));
    }

    #[test]
    fn suffix_fallback_respects_its_own_length_floor() {
        let filter = filter(FilterSettings {
            fallback_min_len: 8,
            ..FilterSettings::default()
        });
        // ends in -oso but is shorter than the fallback floor
        assert!(!filter.admits(adj("airoso").token(0).unwrap()));
        assert!(filter.admits(adj("majestuoso").token(0).unwrap()));
    }
}
