//! Multi-strategy extraction of adjective candidates around mentions.
//!
//! Three independent strategies produce candidates:
//!
//! * direct dependency modification of the mention, following coordination
//!   one hop to pick up "X and Y" adjective chains;
//! * predicative constructions, both local (the mention is a subject or
//!   object of a head with an adjectival complement) and distant (a
//!   document-wide scan for copular verbs whose subject mentions the
//!   concept);
//! * a proximity window, deliberately more permissive, reported under its
//!   own level and never summed with the dependency counts.
//!
//! Traversal is bounded to the explicit hops described above, so malformed
//! annotator output can slow nothing down; tokens flagged by the document
//! audit are skipped outright.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

use appraisal_nlp::{DepRel, Document, Token};

use crate::filter::{AdmissionBasis, FilterSettings, ValidityFilter};
use crate::lexicon::LexiconRegistry;
use crate::mention::{mentions, Mention, MentionKind};
use crate::negation::NegationResolver;
use crate::polarity::{Intensity, Polarity};

/// The strategy level a candidate was extracted at.
///
/// A closed set so downstream aggregation can match exhaustively. The
/// window level is not comparable with the dependency-grounded ones; it
/// answers "what occurs nearby", not "what modifies the concept".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionLevel {
    /// Syntactic modification of the target concept itself.
    Direct,
    /// Syntactic modification of a related term.
    Related,
    /// Distant copular construction whose subject mentions the concept.
    Predicative,
    /// Proximity window around a mention.
    Window,
}

impl ExtractionLevel {
    /// Numeric depth of the dependency-grounded levels; the window level
    /// has none.
    pub fn depth(self) -> Option<u8> {
        match self {
            ExtractionLevel::Direct => Some(1),
            ExtractionLevel::Related => Some(2),
            ExtractionLevel::Predicative => Some(3),
            ExtractionLevel::Window => None,
        }
    }

    pub fn is_dependency_grounded(self) -> bool {
        !matches!(self, ExtractionLevel::Window)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExtractionLevel::Direct => "direct",
            ExtractionLevel::Related => "related",
            ExtractionLevel::Predicative => "predicative",
            ExtractionLevel::Window => "window",
        }
    }
}

impl fmt::Display for ExtractionLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a candidate token is linked to its mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateRelation {
    /// Found through a dependency edge of this relation.
    Dependency(DepRel),
    /// Found by position alone.
    Window,
}

impl CandidateRelation {
    pub fn label(&self) -> &str {
        match self {
            CandidateRelation::Dependency(rel) => rel.as_str(),
            CandidateRelation::Window => "window",
        }
    }
}

impl Serialize for CandidateRelation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One admitted adjective occurrence, with enough provenance to trace it
/// back to its document position and mention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub lemma: String,
    pub surface: String,
    pub level: ExtractionLevel,
    pub relation: CandidateRelation,
    /// Signed token offset from the mention; window candidates only.
    pub distance: Option<isize>,
    pub negated: bool,
    pub intensity: Intensity,
    /// Polarity after negation has been applied. Never mutated afterward.
    pub polarity: Polarity,
    /// The lemma was admitted by its ending alone, not by any lexicon.
    pub suffix_admitted: bool,
    /// Bounded surrounding text for human review.
    pub context: String,
    pub token_index: usize,
    pub mention_index: usize,
}

/// Extraction constants, all tunable.
///
/// The defaults are empirically tuned on the corpus the built-in lexicon
/// came from, not derived from a gold standard; changing them materially
/// changes the counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorSettings {
    /// Tokens scanned on each side of a mention by the window strategy.
    pub window_radius: usize,
    /// Anchor proximity windows at related-term mentions too, not just at
    /// the target concept.
    pub extend_window_to_related: bool,
    /// Tokens of surrounding text kept on each side of a mention in a
    /// candidate's context sample.
    pub context_radius: usize,
    /// Context padding on each side of a subject-to-adjective span.
    pub predicative_context_pad: usize,
    /// Preceding tokens scanned for negation markers.
    pub negation_window: usize,
    /// Preceding tokens scanned for degree markers.
    pub intensity_lookback: usize,
    pub filter: FilterSettings,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        ExtractorSettings {
            window_radius: 5,
            extend_window_to_related: false,
            context_radius: 15,
            predicative_context_pad: 10,
            negation_window: 3,
            intensity_lookback: 2,
            filter: FilterSettings::default(),
        }
    }
}

/// Runs the three strategies over every mention in a document.
#[derive(Debug, Clone)]
pub struct CandidateExtractor {
    lexicon: Arc<LexiconRegistry>,
    filter: ValidityFilter,
    negation: NegationResolver,
    settings: ExtractorSettings,
}

type SeenKey = (usize, usize, ExtractionLevel);

impl CandidateExtractor {
    pub fn new(lexicon: Arc<LexiconRegistry>) -> Self {
        CandidateExtractor::with_settings(lexicon, ExtractorSettings::default())
    }

    pub fn with_settings(lexicon: Arc<LexiconRegistry>, settings: ExtractorSettings) -> Self {
        let filter = ValidityFilter::with_settings(Arc::clone(&lexicon), settings.filter);
        let negation = NegationResolver::new(Arc::clone(&lexicon))
            .with_window(settings.negation_window)
            .with_intensity_lookback(settings.intensity_lookback);
        CandidateExtractor {
            lexicon,
            filter,
            negation,
            settings,
        }
    }

    pub fn settings(&self) -> &ExtractorSettings {
        &self.settings
    }

    /// All candidates for the document, in mention order. A mention with
    /// no qualifying children or neighbors simply contributes nothing.
    pub fn extract(&self, doc: &Document) -> Vec<Candidate> {
        let mut seen: HashSet<SeenKey> = HashSet::new();
        let mut out = Vec::new();
        let found: Vec<Mention> = mentions(doc, &self.lexicon).collect();
        for &mention in &found {
            if !doc.is_sound(mention.index()) {
                log::warn!(
                    "{}: mention at token {} has broken dependency links, skipped",
                    doc.file_id(),
                    mention.index()
                );
                continue;
            }
            self.modifier_candidates(doc, mention, &mut seen, &mut out);
            self.local_predicative_candidates(doc, mention, &mut seen, &mut out);
            if mention.is_target() || self.settings.extend_window_to_related {
                self.window_candidates(doc, mention, &mut seen, &mut out);
            }
        }
        self.distant_predicative_candidates(doc, &mut seen, &mut out);
        out
    }

    /// Direct adjectival children of the mention, plus one coordination
    /// hop. Deeper conjunction chains are not traversed.
    fn modifier_candidates(
        &self,
        doc: &Document,
        mention: Mention,
        seen: &mut HashSet<SeenKey>,
        out: &mut Vec<Candidate>,
    ) {
        let level = level_of(mention);
        let context = self.mention_context(doc, mention.index());
        for child in doc.children_of(mention.index()) {
            if !(child.deprel().is_adjectival_modifier() && child.pos().is_adjective()) {
                continue;
            }
            self.emit(
                doc,
                mention,
                child,
                level,
                CandidateRelation::Dependency(child.deprel().clone()),
                None,
                context.clone(),
                seen,
                out,
            );
            for grandchild in doc.children_of(child.index()) {
                if matches!(grandchild.deprel(), DepRel::Conj) && grandchild.pos().is_adjective() {
                    self.emit(
                        doc,
                        mention,
                        grandchild,
                        level,
                        CandidateRelation::Dependency(DepRel::Conj),
                        None,
                        context.clone(),
                        seen,
                        out,
                    );
                }
            }
        }
    }

    /// The mention serves as subject or object of its head; the adjective
    /// sits among the head's other children.
    fn local_predicative_candidates(
        &self,
        doc: &Document,
        mention: Mention,
        seen: &mut HashSet<SeenKey>,
        out: &mut Vec<Candidate>,
    ) {
        let Some(token) = doc.token(mention.index()) else {
            return;
        };
        let Some(head) = doc.parent_of(mention.index()) else {
            return;
        };
        let level = level_of(mention);
        let context = self.mention_context(doc, mention.index());
        if token.deprel().is_nominal_subject() {
            for sibling in doc.children_of(head.index()) {
                if sibling.deprel().is_adjectival_complement() && sibling.pos().is_adjective() {
                    self.emit(
                        doc,
                        mention,
                        sibling,
                        level,
                        CandidateRelation::Dependency(sibling.deprel().clone()),
                        None,
                        context.clone(),
                        seen,
                        out,
                    );
                }
            }
        }
        if token.deprel().is_direct_object() {
            for sibling in doc.children_of(head.index()) {
                if matches!(sibling.deprel(), DepRel::Xcomp) && sibling.pos().is_adjective() {
                    self.emit(
                        doc,
                        mention,
                        sibling,
                        level,
                        CandidateRelation::Dependency(DepRel::Xcomp),
                        None,
                        context.clone(),
                        seen,
                        out,
                    );
                }
            }
        }
    }

    /// Document-wide scan for copular verbs whose subject mentions the
    /// concept; their adjectival complements become level-3 candidates.
    fn distant_predicative_candidates(
        &self,
        doc: &Document,
        seen: &mut HashSet<SeenKey>,
        out: &mut Vec<Candidate>,
    ) {
        for verb in doc.tokens() {
            if !self.lexicon.is_copular(verb.lemma()) {
                continue;
            }
            let subject = doc.children_of(verb.index()).find(|child| {
                child.deprel().is_nominal_subject()
                    && (self.lexicon.is_target(child.lemma())
                        || self.lexicon.is_related(child.lemma()))
            });
            let Some(subject) = subject else { continue };
            if !doc.is_sound(subject.index()) {
                log::warn!(
                    "{}: copular subject at token {} has broken dependency links, skipped",
                    doc.file_id(),
                    subject.index()
                );
                continue;
            }
            let kind = if self.lexicon.is_target(subject.lemma()) {
                MentionKind::Target
            } else {
                MentionKind::Related
            };
            let mention = Mention::new(subject.index(), kind);
            for complement in doc.children_of(verb.index()) {
                if !(complement.deprel().is_adjectival_complement()
                    && complement.pos().is_adjective())
                {
                    continue;
                }
                let context = self.span_context(doc, subject.index(), complement.index());
                self.emit(
                    doc,
                    mention,
                    complement,
                    ExtractionLevel::Predicative,
                    CandidateRelation::Dependency(complement.deprel().clone()),
                    None,
                    context,
                    seen,
                    out,
                );
            }
        }
    }

    /// Every admissible adjective within the radius, tagged with its
    /// signed offset. The mention itself is skipped.
    fn window_candidates(
        &self,
        doc: &Document,
        mention: Mention,
        seen: &mut HashSet<SeenKey>,
        out: &mut Vec<Candidate>,
    ) {
        if doc.is_empty() {
            return;
        }
        let center = mention.index();
        let start = center.saturating_sub(self.settings.window_radius);
        let end = (center + self.settings.window_radius).min(doc.len() - 1);
        let context = self.mention_context(doc, center);
        for index in start..=end {
            if index == center {
                continue;
            }
            let Some(token) = doc.token(index) else {
                continue;
            };
            let distance = index as isize - center as isize;
            self.emit(
                doc,
                mention,
                token,
                ExtractionLevel::Window,
                CandidateRelation::Window,
                Some(distance),
                context.clone(),
                seen,
                out,
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn emit(
        &self,
        doc: &Document,
        mention: Mention,
        token: &Token,
        level: ExtractionLevel,
        relation: CandidateRelation,
        distance: Option<isize>,
        context: String,
        seen: &mut HashSet<SeenKey>,
        out: &mut Vec<Candidate>,
    ) {
        if !doc.is_sound(token.index()) {
            log::warn!(
                "{}: candidate at token {} has broken dependency links, skipped",
                doc.file_id(),
                token.index()
            );
            return;
        }
        let Some(basis) = self.filter.assess(token) else {
            return;
        };
        if !seen.insert((mention.index(), token.index(), level)) {
            return;
        }
        let scan = self.negation.scan(doc, token.index());
        let seed = self.lexicon.polarity_of(token.lemma());
        let polarity = if scan.negated { seed.inverted() } else { seed };
        out.push(Candidate {
            lemma: token.lemma().to_string(),
            surface: token.surface().to_string(),
            level,
            relation,
            distance,
            negated: scan.negated,
            intensity: scan.intensity,
            polarity,
            suffix_admitted: basis == AdmissionBasis::Suffix,
            context,
            token_index: token.index(),
            mention_index: mention.index(),
        });
    }

    fn mention_context(&self, doc: &Document, center: usize) -> String {
        let radius = self.settings.context_radius;
        doc.text_span(center.saturating_sub(radius), center + radius + 1)
    }

    fn span_context(&self, doc: &Document, a: usize, b: usize) -> String {
        let pad = self.settings.predicative_context_pad;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        doc.text_span(lo.saturating_sub(pad), hi + pad + 1)
    }
}

fn level_of(mention: Mention) -> ExtractionLevel {
    match mention.kind() {
        MentionKind::Target => ExtractionLevel::Direct,
        MentionKind::Related => ExtractionLevel::Related,
    }
}
