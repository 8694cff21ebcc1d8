//! Reader for CoNLL-U-style annotated corpora.
//!
//! One file becomes one [`Document`]: sentences are separated by blank
//! lines, `#` lines are comments, and each token row carries at least the
//! first eight tab-separated columns
//! (`ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL ...`).
//!
//! - Multiword ranges (`3-4`) and empty nodes (`3.1`) are skipped.
//! - Sentence-relative heads are rebased to document-absolute indices;
//!   `HEAD = 0` becomes a sentence root.
//! - A `_` lemma falls back to the lowercased surface form, keeping the
//!   non-empty-lemma contract.
//!
//! Column-level syntax problems fail the whole file (the caller logs and
//! skips it); structurally odd but parseable trees are left to the
//! document audit instead.

use crate::annotate::{AnnotateError, Annotator};
use crate::document::{DocMeta, Document, DocumentBuilder};
use crate::token::{DepRel, PosTag, TokenInit};

/// Parses pre-annotated corpora; the workspace's only built-in
/// [`Annotator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConlluReader;

struct Row {
    surface: String,
    lemma: String,
    pos: PosTag,
    deprel: DepRel,
    /// Sentence-relative head, 0 for root.
    head: usize,
}

impl ConlluReader {
    pub fn new() -> Self {
        ConlluReader
    }

    pub fn parse_str(&self, input: &str, meta: DocMeta) -> Result<Document, AnnotateError> {
        let mut builder = DocumentBuilder::new(meta);
        let mut sentence: Vec<Row> = Vec::new();
        let mut offset = 0usize;

        for (line_idx, line) in input.lines().enumerate() {
            let line_no = line_idx + 1;
            let trimmed = line.trim_end();
            if trimmed.is_empty() {
                offset = flush_sentence(&mut builder, &mut sentence, offset);
                continue;
            }
            if trimmed.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = trimmed.split('\t').collect();
            if fields.len() < 8 {
                return Err(AnnotateError::Syntax {
                    line: line_no,
                    message: format!("expected at least 8 columns, found {}", fields.len()),
                });
            }

            let id = fields[0];
            if id.contains('-') || id.contains('.') {
                // Multiword range or empty node; the syntactic words follow.
                continue;
            }
            let id: usize = id.parse().map_err(|_| AnnotateError::Syntax {
                line: line_no,
                message: format!("token id {:?} is not an integer", fields[0]),
            })?;
            if id != sentence.len() + 1 {
                return Err(AnnotateError::Syntax {
                    line: line_no,
                    message: format!("token id {} out of sequence (expected {})", id, sentence.len() + 1),
                });
            }

            let head: usize = fields[6].parse().map_err(|_| AnnotateError::Syntax {
                line: line_no,
                message: format!("head {:?} is not an integer", fields[6]),
            })?;

            let surface = fields[1].to_string();
            let lemma = match fields[2] {
                "" | "_" => surface.to_lowercase(),
                lemma => lemma.to_string(),
            };

            sentence.push(Row {
                surface,
                lemma,
                pos: PosTag::parse(fields[3]),
                deprel: DepRel::parse(fields[7]),
                head,
            });
        }
        flush_sentence(&mut builder, &mut sentence, offset);

        Ok(builder.finish())
    }
}

fn flush_sentence(builder: &mut DocumentBuilder, sentence: &mut Vec<Row>, offset: usize) -> usize {
    let next_offset = offset + sentence.len();
    for row in sentence.drain(..) {
        let parent = match row.head {
            0 => None,
            head => Some(offset + head - 1),
        };
        builder.push(TokenInit::new(row.surface, row.lemma, row.pos, row.deprel, parent));
    }
    next_offset
}

impl Annotator for ConlluReader {
    fn annotate(&self, raw: &str, meta: DocMeta) -> Result<Document, AnnotateError> {
        self.parse_str(raw, meta)
    }
}
