//! Evaluative-polarity analysis over dependency-annotated documents.
//!
//! Given documents produced by an annotator, the pipeline locates mentions
//! of a target concept, extracts adjective candidates through several
//! independent strategies, resolves negation, classifies polarity and
//! semantic category, and aggregates everything into an immutable
//! snapshot. A temporal analyzer compares the early and late thirds of a
//! source's year range.
//!
//! ```
//! use appraisal_analysis::{AggregateSettings, AggregateStore, DocumentAnalyzer, LexiconRegistry};
//! use appraisal_analysis::MorphologyMode;
//! use appraisal_nlp::{Annotator, ConlluReader, DocMeta};
//!
//! # fn main() -> Result<(), appraisal_nlp::AnnotateError> {
//! let lexicon = LexiconRegistry::spanish_music_press();
//! let analyzer = DocumentAnalyzer::new(lexicon.clone());
//! let mut store = AggregateStore::new(
//!     lexicon,
//!     AggregateSettings::default(),
//!     MorphologyMode::SuffixFallback,
//! );
//!
//! let reader = ConlluReader::default();
//! let meta = DocMeta::new("ONDAS", "1925_11.conllu").with_year(1925);
//! let doc = reader.annotate("1\tmúsica\tmúsica\tNOUN\t_\t_\t0\troot\t_\t_\n", meta)?;
//! store.absorb(analyzer.analyze(&doc));
//!
//! let snapshot = store.finalize();
//! assert_eq!(snapshot.target_mentions, 1);
//! # Ok(())
//! # }
//! ```

mod aggregate;
mod analyzer;
mod display;
mod extract;
mod filter;
mod lexicon;
mod mention;
mod negation;
mod polarity;
mod snapshot;
mod taxonomy;
mod temporal;

pub use aggregate::{AggregateSettings, AggregateStore};
pub use analyzer::{DocumentAnalysis, DocumentAnalyzer};
pub use display::AnalysisDisplay;
pub use extract::{
    Candidate, CandidateExtractor, CandidateRelation, ExtractionLevel, ExtractorSettings,
};
pub use filter::{AdmissionBasis, FilterSettings, MorphologyMode, ValidityFilter};
pub use lexicon::{LexiconError, LexiconProfile, LexiconRegistry};
pub use mention::{mentions, Mention, MentionKind};
pub use negation::{NegationResolver, NegationScan};
pub use polarity::{Intensity, Polarity};
pub use snapshot::{PolarityTotals, RankedLemma, Snapshot, SourceTotals};
pub use taxonomy::CategoryTaxonomy;
pub use temporal::{
    PeriodSummary, TemporalAnalyzer, TemporalOutcome, TemporalResult, TrendEntry, TrendThresholds,
};
