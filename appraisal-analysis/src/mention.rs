//! Locating target-concept and related-term mentions.

use appraisal_nlp::Document;

use crate::lexicon::LexiconRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentionKind {
    /// The target concept itself.
    Target,
    /// A lemma from the related-terms lexicon.
    Related,
}

/// One occurrence of the target concept or a related term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mention {
    index: usize,
    kind: MentionKind,
}

impl Mention {
    pub fn new(index: usize, kind: MentionKind) -> Self {
        Mention { index, kind }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> MentionKind {
        self.kind
    }

    pub fn is_target(&self) -> bool {
        self.kind == MentionKind::Target
    }
}

/// Lazy scan for mentions, in document order.
///
/// Matches on normalized lemma only, never on surface form, so inflected
/// occurrences collapse onto one concept. When a lemma is both the target
/// and a related term, target wins. Call again to restart.
pub fn mentions<'a>(
    doc: &'a Document,
    lexicon: &'a LexiconRegistry,
) -> impl Iterator<Item = Mention> + 'a {
    doc.tokens().filter_map(move |token| {
        let lemma = token.lemma();
        if lexicon.is_target(lemma) {
            Some(Mention::new(token.index(), MentionKind::Target))
        } else if lexicon.is_related(lemma) {
            Some(Mention::new(token.index(), MentionKind::Related))
        } else {
            None
        }
    })
}
