//! Dependency-annotated document model for evaluative-language analysis.
//!
//! This crate is the substrate the extraction engine is built on:
//!
//! - [`Token`] / [`PosTag`] / [`DepRel`]: one annotated word and its
//!   place in the dependency tree, addressed by integer indices.
//! - [`Document`] / [`DocumentBuilder`]: an immutable token arena with
//!   provenance metadata and a construction-time tree audit
//!   ([`TreeDefect`]).
//! - [`Annotator`]: the boundary behind which linguistic analysis lives;
//!   [`ConlluReader`] is the built-in implementation for pre-annotated
//!   corpora.
//! - [`DocumentDisplay`]: aligned plain-text rendering for inspection
//!   and snapshot tests.

mod annotate;
mod conllu;
mod display;
mod document;
mod token;

pub use annotate::{AnnotateError, Annotator};
pub use conllu::ConlluReader;
pub use display::DocumentDisplay;
pub use document::{DocMeta, Document, DocumentBuilder, TreeDefect};
pub use token::{DepRel, PosTag, Token, TokenInit};
