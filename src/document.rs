//! Arena-indexed annotated documents.
//!
//! A [`Document`] owns its tokens in a flat vector; the dependency tree is
//! navigated through integer indices, so cyclic annotator output can never
//! produce cyclic ownership. Broken links are detected once at build time
//! and recorded as [`TreeDefect`]s for downstream components to skip.

use std::fmt;

use crate::token::{Token, TokenInit};

/// Provenance attached to every document by the ingestion layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocMeta {
    pub source_id: String,
    pub file_id: String,
    pub year: Option<i32>,
}

impl DocMeta {
    pub fn new(source_id: impl Into<String>, file_id: impl Into<String>) -> Self {
        DocMeta {
            source_id: source_id.into(),
            file_id: file_id.into(),
            year: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// A structurally invalid dependency link found at document construction.
///
/// Defective tokens stay in the document (indices must remain stable) but
/// are excluded from extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeDefect {
    /// Token listed as its own parent.
    SelfParent { index: usize },
    /// Parent index outside the document.
    DanglingParent { index: usize, parent: usize },
    /// Token whose parent chain never reaches a root.
    ParentCycle { index: usize },
}

impl TreeDefect {
    pub fn index(&self) -> usize {
        match self {
            TreeDefect::SelfParent { index }
            | TreeDefect::DanglingParent { index, .. }
            | TreeDefect::ParentCycle { index } => *index,
        }
    }
}

impl fmt::Display for TreeDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeDefect::SelfParent { index } => {
                write!(f, "token {} is its own parent", index)
            }
            TreeDefect::DanglingParent { index, parent } => {
                write!(f, "token {} points at nonexistent parent {}", index, parent)
            }
            TreeDefect::ParentCycle { index } => {
                write!(f, "token {} sits on a parent cycle", index)
            }
        }
    }
}

/// An immutable, fully linked annotated document.
#[derive(Debug, Clone)]
pub struct Document {
    tokens: Vec<Token>,
    meta: DocMeta,
    defects: Vec<TreeDefect>,
    sound: Vec<bool>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Direct dependents of `index`, in document order. Out-of-range input
    /// yields an empty iterator rather than panicking.
    pub fn children_of(&self, index: usize) -> impl Iterator<Item = &Token> {
        self.tokens
            .get(index)
            .map(|t| t.children.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |&child| self.tokens.get(child))
    }

    /// The syntactic head of `index`, if it has one and the link is valid.
    pub fn parent_of(&self, index: usize) -> Option<&Token> {
        let parent = self.tokens.get(index)?.parent?;
        if parent == index {
            return None;
        }
        self.tokens.get(parent)
    }

    /// Surface text of tokens in `[from, to)`, clamped to the document,
    /// joined with single spaces.
    pub fn text_span(&self, from: usize, to: usize) -> String {
        let to = to.min(self.tokens.len());
        if from >= to {
            return String::new();
        }
        let mut out = String::new();
        for token in &self.tokens[from..to] {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&token.surface);
        }
        out
    }

    pub fn meta(&self) -> &DocMeta {
        &self.meta
    }

    pub fn source_id(&self) -> &str {
        &self.meta.source_id
    }

    pub fn file_id(&self) -> &str {
        &self.meta.file_id
    }

    pub fn year(&self) -> Option<i32> {
        self.meta.year
    }

    /// Every broken link found at construction, ordered by token index.
    pub fn tree_defects(&self) -> &[TreeDefect] {
        &self.defects
    }

    /// False when the token carries a tree defect (or is out of range);
    /// extraction skips unsound tokens.
    pub fn is_sound(&self, index: usize) -> bool {
        self.sound.get(index).copied().unwrap_or(false)
    }
}

/// Builds a [`Document`] from annotator output.
///
/// Child lists are derived from the parent links, lemmas are lowercased,
/// and the tree is audited once. Construction never fails: defects are
/// recorded, not raised, so one bad token cannot sink a whole document.
#[derive(Debug)]
pub struct DocumentBuilder {
    meta: DocMeta,
    inits: Vec<TokenInit>,
}

impl DocumentBuilder {
    pub fn new(meta: DocMeta) -> Self {
        DocumentBuilder {
            meta,
            inits: Vec::new(),
        }
    }

    /// Append a token and return its index.
    pub fn push(&mut self, init: TokenInit) -> usize {
        self.inits.push(init);
        self.inits.len() - 1
    }

    pub fn finish(self) -> Document {
        let len = self.inits.len();
        let mut tokens: Vec<Token> = Vec::with_capacity(len);
        for (index, init) in self.inits.into_iter().enumerate() {
            tokens.push(Token {
                index,
                surface: init.surface,
                lemma: init.lemma.to_lowercase(),
                pos: init.pos,
                deprel: init.deprel,
                parent: init.parent,
                children: Vec::new(),
            });
        }

        let mut defects = Vec::new();
        let mut sound = vec![true; len];

        // Link-level defects first; the defective link is treated as absent
        // when deriving children and walking chains.
        for index in 0..len {
            match tokens[index].parent {
                Some(parent) if parent == index => {
                    defects.push(TreeDefect::SelfParent { index });
                    sound[index] = false;
                }
                Some(parent) if parent >= len => {
                    defects.push(TreeDefect::DanglingParent { index, parent });
                    sound[index] = false;
                }
                _ => {}
            }
        }

        // Parent links with self/dangling references treated as absent.
        let parents: Vec<Option<usize>> = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| t.parent.filter(|&p| p != i && p < len))
            .collect();

        // A chain longer than the document can only mean a cycle.
        for index in 0..len {
            let mut cursor = index;
            let mut steps = 0usize;
            while let Some(parent) = parents[cursor] {
                cursor = parent;
                steps += 1;
                if steps > len {
                    defects.push(TreeDefect::ParentCycle { index });
                    sound[index] = false;
                    break;
                }
            }
        }
        defects.sort_by_key(|d| d.index());

        for index in 0..len {
            if let Some(parent) = parents[index] {
                tokens[parent].children.push(index);
            }
        }

        Document {
            tokens,
            meta: self.meta,
            defects,
            sound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{DepRel, PosTag};

    fn init(surface: &str, lemma: &str, pos: PosTag, deprel: DepRel, parent: Option<usize>) -> TokenInit {
        TokenInit::new(surface, lemma, pos, deprel, parent)
    }

    #[test]
    fn builder_derives_children_and_lowercases_lemmas() {
        let mut builder = DocumentBuilder::new(DocMeta::new("ONDAS", "doc.conllu"));
        builder.push(init("La", "El", PosTag::Det, DepRel::parse("det"), Some(1)));
        builder.push(init("música", "Música", PosTag::Noun, DepRel::Nsubj, Some(3)));
        builder.push(init("es", "ser", PosTag::Aux, DepRel::Cop, Some(3)));
        builder.push(init("bella", "bello", PosTag::Adj, DepRel::Root, None));
        let doc = builder.finish();

        assert_eq!(doc.len(), 4);
        assert_eq!(doc.token(1).unwrap().lemma(), "música");
        assert_eq!(doc.token(0).unwrap().lemma(), "el");
        let children: Vec<usize> = doc.children_of(3).map(|t| t.index()).collect();
        assert_eq!(children, vec![1, 2]);
        assert!(doc.tree_defects().is_empty());
        assert!(doc.is_sound(0) && doc.is_sound(3));
    }

    #[test]
    fn self_parent_and_dangling_links_are_defects() {
        let mut builder = DocumentBuilder::new(DocMeta::new("ONDAS", "bad.conllu"));
        builder.push(init("uno", "uno", PosTag::Num, DepRel::Root, Some(0)));
        builder.push(init("dos", "dos", PosTag::Num, DepRel::Obj, Some(9)));
        builder.push(init("tres", "tres", PosTag::Num, DepRel::Root, None));
        let doc = builder.finish();

        assert_eq!(
            doc.tree_defects(),
            &[
                TreeDefect::SelfParent { index: 0 },
                TreeDefect::DanglingParent { index: 1, parent: 9 },
            ]
        );
        assert!(!doc.is_sound(0));
        assert!(!doc.is_sound(1));
        assert!(doc.is_sound(2));
        // The broken links never show up as children.
        assert_eq!(doc.children_of(0).count(), 0);
        assert_eq!(doc.children_of(9).count(), 0);
    }

    #[test]
    fn parent_cycles_terminate_and_mark_members() {
        let mut builder = DocumentBuilder::new(DocMeta::new("ONDAS", "cycle.conllu"));
        builder.push(init("a", "a", PosTag::X, DepRel::Conj, Some(1)));
        builder.push(init("b", "b", PosTag::X, DepRel::Conj, Some(0)));
        builder.push(init("c", "c", PosTag::X, DepRel::Root, None));
        let doc = builder.finish();

        assert_eq!(
            doc.tree_defects(),
            &[
                TreeDefect::ParentCycle { index: 0 },
                TreeDefect::ParentCycle { index: 1 },
            ]
        );
        assert!(doc.is_sound(2));
    }

    #[test]
    fn text_span_clamps_to_document() {
        let mut builder = DocumentBuilder::new(DocMeta::new("EL SOL", "span.conllu"));
        for word in ["una", "noche", "de", "ópera"] {
            builder.push(init(word, word, PosTag::Noun, DepRel::Root, None));
        }
        let doc = builder.finish();
        assert_eq!(doc.text_span(1, 99), "noche de ópera");
        assert_eq!(doc.text_span(3, 2), "");
        assert_eq!(doc.text_span(0, 2), "una noche");
    }

    #[test]
    fn meta_carries_year() {
        let meta = DocMeta::new("ESPAÑA", "1920_03.conllu").with_year(1920);
        let doc = DocumentBuilder::new(meta).finish();
        assert!(doc.is_empty());
        assert_eq!(doc.year(), Some(1920));
        assert_eq!(doc.source_id(), "ESPAÑA");
    }
}
