//! Core token types for dependency-annotated text.
//!
//! A [`Token`] is one annotated word: surface form, normalized lemma, a
//! coarse part-of-speech tag, and its position in the dependency tree
//! (parent/children stored as document indices, never references).

use std::fmt;

/// Coarse part-of-speech tag, following the Universal Dependencies tagset.
///
/// The set is closed: annotators must map their inventory onto these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PosTag {
    /// Adjective: "bello", "mediocre"
    Adj,
    /// Adposition: "de", "en"
    Adp,
    /// Adverb: "muy", "no"
    Adv,
    /// Auxiliary verb: "haber", "ser" (when auxiliary)
    Aux,
    /// Coordinating conjunction: "y", "pero"
    Cconj,
    /// Determiner: "el", "una"
    Det,
    /// Interjection: "¡ay!"
    Intj,
    /// Common noun: "música", "concierto"
    Noun,
    /// Numeral: "1920", "tres"
    Num,
    /// Particle
    Part,
    /// Pronoun: "ella", "que"
    Pron,
    /// Proper noun: "Falla", "Madrid"
    Propn,
    /// Punctuation
    Punct,
    /// Subordinating conjunction: "que", "si"
    Sconj,
    /// Symbol
    Sym,
    /// Verb: "resultar", "interpretar"
    Verb,
    /// Anything that cannot be assigned a real tag
    X,
}

impl PosTag {
    /// Parse an annotator-supplied tag. Unknown or placeholder tags map to
    /// [`PosTag::X`] rather than failing: the tag inventory is closed, but
    /// upstream annotators occasionally leave gaps ("_").
    pub fn parse(tag: &str) -> PosTag {
        match tag.trim().to_ascii_uppercase().as_str() {
            "ADJ" => PosTag::Adj,
            "ADP" => PosTag::Adp,
            "ADV" => PosTag::Adv,
            "AUX" => PosTag::Aux,
            "CCONJ" | "CONJ" => PosTag::Cconj,
            "DET" => PosTag::Det,
            "INTJ" => PosTag::Intj,
            "NOUN" => PosTag::Noun,
            "NUM" => PosTag::Num,
            "PART" => PosTag::Part,
            "PRON" => PosTag::Pron,
            "PROPN" => PosTag::Propn,
            "PUNCT" => PosTag::Punct,
            "SCONJ" => PosTag::Sconj,
            "SYM" => PosTag::Sym,
            "VERB" => PosTag::Verb,
            _ => PosTag::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Adj => "ADJ",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Det => "DET",
            PosTag::Intj => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Num => "NUM",
            PosTag::Part => "PART",
            PosTag::Pron => "PRON",
            PosTag::Propn => "PROPN",
            PosTag::Punct => "PUNCT",
            PosTag::Sconj => "SCONJ",
            PosTag::Sym => "SYM",
            PosTag::Verb => "VERB",
            PosTag::X => "X",
        }
    }

    /// True for the only tag the extractor emits candidates from.
    pub fn is_adjective(&self) -> bool {
        matches!(self, PosTag::Adj)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dependency relation between a token and its parent.
///
/// The variants cover the relations the extraction strategies consume;
/// everything else is preserved verbatim under [`DepRel::Other`] so that
/// displays and per-relation statistics stay faithful to the annotator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DepRel {
    /// Adjectival modifier: "música *española*"
    Amod,
    /// Adjectival complement of a verb: "resultó *magnífica*"
    Acomp,
    /// Attribute in a copular clause: "la obra es *nueva*"
    Attr,
    /// Coordination: "española y *moderna*"
    Conj,
    /// Copula verb itself
    Cop,
    /// Nominal subject
    Nsubj,
    /// Passive nominal subject
    NsubjPass,
    /// Direct object (Universal Dependencies label)
    Obj,
    /// Direct object (legacy label used by some annotators)
    Dobj,
    /// Open clausal complement: "consideran la música *excelente*"
    Xcomp,
    /// Root of a sentence
    Root,
    /// Any other relation, label kept as-is (lowercased, subtype stripped)
    Other(String),
}

impl DepRel {
    /// Parse an annotator-supplied relation label. Subtypes after ':' are
    /// folded into the base relation ("nsubj:pass" is the one exception,
    /// kept as a passive subject).
    pub fn parse(label: &str) -> DepRel {
        let label = label.trim().to_ascii_lowercase();
        if label == "nsubj:pass" || label == "nsubjpass" {
            return DepRel::NsubjPass;
        }
        let base = label.split(':').next().unwrap_or("");
        match base {
            "amod" => DepRel::Amod,
            "acomp" => DepRel::Acomp,
            "attr" => DepRel::Attr,
            "conj" => DepRel::Conj,
            "cop" => DepRel::Cop,
            "nsubj" => DepRel::Nsubj,
            "obj" => DepRel::Obj,
            "dobj" => DepRel::Dobj,
            "xcomp" => DepRel::Xcomp,
            "root" => DepRel::Root,
            "" => DepRel::Other(String::new()),
            _ => DepRel::Other(base.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DepRel::Amod => "amod",
            DepRel::Acomp => "acomp",
            DepRel::Attr => "attr",
            DepRel::Conj => "conj",
            DepRel::Cop => "cop",
            DepRel::Nsubj => "nsubj",
            DepRel::NsubjPass => "nsubjpass",
            DepRel::Obj => "obj",
            DepRel::Dobj => "dobj",
            DepRel::Xcomp => "xcomp",
            DepRel::Root => "root",
            DepRel::Other(label) => label,
        }
    }

    /// Nominal subject of any voice.
    pub fn is_nominal_subject(&self) -> bool {
        matches!(self, DepRel::Nsubj | DepRel::NsubjPass)
    }

    /// Adjectival complement or copular attribute.
    pub fn is_adjectival_complement(&self) -> bool {
        matches!(self, DepRel::Acomp | DepRel::Attr)
    }

    /// Direct object under either labeling convention.
    pub fn is_direct_object(&self) -> bool {
        matches!(self, DepRel::Obj | DepRel::Dobj)
    }

    /// Direct adjectival modification (the strategy-A relations).
    pub fn is_adjectival_modifier(&self) -> bool {
        matches!(self, DepRel::Amod | DepRel::Acomp)
    }
}

impl fmt::Display for DepRel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One annotated token, owned by exactly one [`Document`](crate::Document).
///
/// Parent and children are document indices; the document guarantees the
/// child lists mirror the parent links it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub(crate) index: usize,
    pub(crate) surface: String,
    pub(crate) lemma: String,
    pub(crate) pos: PosTag,
    pub(crate) deprel: DepRel,
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
}

impl Token {
    /// Zero-based position in the owning document.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Normalized lemma, always lowercased at construction.
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn pos(&self) -> PosTag {
        self.pos
    }

    pub fn deprel(&self) -> &DepRel {
        &self.deprel
    }

    /// Index of the syntactic head, `None` for a sentence root.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Indices of direct dependents, in document order.
    pub fn children(&self) -> &[usize] {
        &self.children
    }
}

/// Field bundle for feeding tokens into a
/// [`DocumentBuilder`](crate::DocumentBuilder).
///
/// `parent` is the index the annotator reported; child lists are derived by
/// the builder, so callers never specify them.
#[derive(Debug, Clone)]
pub struct TokenInit {
    pub surface: String,
    pub lemma: String,
    pub pos: PosTag,
    pub deprel: DepRel,
    pub parent: Option<usize>,
}

impl TokenInit {
    pub fn new(
        surface: impl Into<String>,
        lemma: impl Into<String>,
        pos: PosTag,
        deprel: DepRel,
        parent: Option<usize>,
    ) -> Self {
        TokenInit {
            surface: surface.into(),
            lemma: lemma.into(),
            pos,
            deprel,
            parent,
        }
    }
}
