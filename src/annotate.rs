//! The annotation boundary.
//!
//! Linguistic analysis (tokenization, lemmatization, tagging, parsing) is
//! not performed here; anything that can turn raw text plus provenance into
//! a [`Document`] plugs in through [`Annotator`]. The crate ships one
//! implementation, the CoNLL-U-style reader in [`crate::conllu`].

use thiserror::Error;

use crate::document::{DocMeta, Document};

/// Errors crossing the annotation boundary.
///
/// `Syntax` marks one unparseable input (the caller may skip it and go on);
/// `Unavailable` marks a backend that cannot serve at all and should abort
/// the run.
#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("invalid annotation input at line {line}: {message}")]
    Syntax { line: usize, message: String },
    #[error("annotation backend unavailable: {message}")]
    Unavailable { message: String },
}

/// Produces annotated documents from raw input.
///
/// Implementations must uphold the document contract: every token carries a
/// non-empty lemma, a closed-set POS tag, and a dependency label; parent
/// links form a tree per sentence. Violations of the tree shape are
/// tolerated downstream (they surface as
/// [`TreeDefect`](crate::document::TreeDefect)s), but implementations
/// should not produce them knowingly.
pub trait Annotator {
    fn annotate(&self, raw: &str, meta: DocMeta) -> Result<Document, AnnotateError>;
}
