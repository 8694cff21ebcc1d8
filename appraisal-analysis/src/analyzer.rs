//! The per-document analysis pass.

use std::sync::Arc;

use appraisal_nlp::{DocMeta, Document};

use crate::extract::{Candidate, CandidateExtractor, ExtractorSettings};
use crate::lexicon::LexiconRegistry;
use crate::mention::{mentions, MentionKind};

/// Everything one document contributes to a run: its candidates plus the
/// mention and audit bookkeeping the aggregate keeps totals of.
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    pub meta: DocMeta,
    pub candidates: Vec<Candidate>,
    pub target_mentions: usize,
    pub related_mentions: usize,
    /// Tokens the document audit flagged and extraction skipped.
    pub defective_tokens: usize,
}

/// The front half of the pipeline: mention location, extraction, negation,
/// classification.
///
/// Holds no mutable state, so one analyzer can be shared across as many
/// worker threads as the runner cares to spawn.
#[derive(Debug, Clone)]
pub struct DocumentAnalyzer {
    lexicon: Arc<LexiconRegistry>,
    extractor: CandidateExtractor,
}

impl DocumentAnalyzer {
    pub fn new(lexicon: Arc<LexiconRegistry>) -> Self {
        DocumentAnalyzer::with_settings(lexicon, ExtractorSettings::default())
    }

    pub fn with_settings(lexicon: Arc<LexiconRegistry>, settings: ExtractorSettings) -> Self {
        let extractor = CandidateExtractor::with_settings(Arc::clone(&lexicon), settings);
        DocumentAnalyzer { lexicon, extractor }
    }

    pub fn lexicon(&self) -> &Arc<LexiconRegistry> {
        &self.lexicon
    }

    pub fn settings(&self) -> &ExtractorSettings {
        self.extractor.settings()
    }

    pub fn analyze(&self, doc: &Document) -> DocumentAnalysis {
        let mut target_mentions = 0;
        let mut related_mentions = 0;
        for mention in mentions(doc, &self.lexicon) {
            match mention.kind() {
                MentionKind::Target => target_mentions += 1,
                MentionKind::Related => related_mentions += 1,
            }
        }
        DocumentAnalysis {
            meta: doc.meta().clone(),
            candidates: self.extractor.extract(doc),
            target_mentions,
            related_mentions,
            defective_tokens: doc.tree_defects().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appraisal_nlp::{DepRel, DocumentBuilder, PosTag, TokenInit};

    #[test]
    fn analysis_carries_meta_and_mention_counts() {
        let meta = DocMeta::new("ONDAS", "1925_11.conllu").with_year(1925);
        let mut builder = DocumentBuilder::new(meta);
        for (surface, lemma, pos, deprel, parent) in [
            ("la", "el", PosTag::Det, "det", Some(1)),
            ("música", "música", PosTag::Noun, "root", None),
            ("del", "del", PosTag::Adp, "case", Some(3)),
            ("concierto", "concierto", PosTag::Noun, "nmod", Some(1)),
            ("fue", "ser", PosTag::Verb, "advcl", Some(1)),
            ("sublime", "sublime", PosTag::Adj, "amod", Some(1)),
        ] {
            builder.push(TokenInit::new(surface, lemma, pos, DepRel::parse(deprel), parent));
        }
        let doc = builder.finish();

        let analyzer = DocumentAnalyzer::new(LexiconRegistry::spanish_music_press());
        let analysis = analyzer.analyze(&doc);
        assert_eq!(analysis.meta.source_id, "ONDAS");
        assert_eq!(analysis.meta.year, Some(1925));
        assert_eq!(analysis.target_mentions, 1);
        assert_eq!(analysis.related_mentions, 1);
        assert_eq!(analysis.defective_tokens, 0);
        assert!(analysis
            .candidates
            .iter()
            .any(|c| c.lemma == "sublime"));
    }

    #[test]
    fn analyzing_twice_is_deterministic() {
        let mut builder = DocumentBuilder::new(DocMeta::new("EL SOL", "det.conllu"));
        for (surface, lemma, pos, deprel, parent) in [
            ("música", "música", PosTag::Noun, "root", None),
            ("exquisita", "exquisito", PosTag::Adj, "amod", Some(0)),
        ] {
            builder.push(TokenInit::new(surface, lemma, pos, DepRel::parse(deprel), parent));
        }
        let doc = builder.finish();
        let analyzer = DocumentAnalyzer::new(LexiconRegistry::spanish_music_press());
        assert_eq!(analyzer.analyze(&doc).candidates, analyzer.analyze(&doc).candidates);
    }
}
