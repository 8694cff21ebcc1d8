//! Lexicon profiles and the compiled registry the analyzers query.
//!
//! A [`LexiconProfile`] is plain serializable data: seed polarity lists,
//! target and related terms, marker words, morphological hints, and the
//! category taxonomy. Profiles can be loaded from RON files so a corpus
//! run can swap domains without recompiling. [`LexiconRegistry`] is the
//! compiled form with hashed lookups and the lemma pattern built, which is
//! what the extraction pipeline actually holds.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::polarity::Polarity;
use crate::taxonomy::CategoryTaxonomy;

/// Serializable lexicon data for one analysis domain.
///
/// All word lists hold lemma forms in lowercase. Missing fields in a RON
/// profile fall back to [`Default`], so a minimal profile only needs the
/// target and the polarity seeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconProfile {
    /// Lemma of the target concept mentions are located for.
    pub target: String,
    /// Lemmas treated as stand-ins for the target (performers, venues,
    /// works) when locating mentions.
    pub related_terms: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    /// Degree markers recorded as intensity provenance.
    pub intensifiers: Vec<String>,
    pub attenuators: Vec<String>,
    /// Negation markers that invert polarity when found shortly before an
    /// adjective.
    pub negations: Vec<String>,
    /// Lemmas never admitted as adjective candidates, however tagged.
    pub exclusions: Vec<String>,
    /// Lemmas accepted as adjectives without a polarity seed or suffix cue.
    pub known_adjectives: Vec<String>,
    /// Endings that admit an unknown lemma under suffix-fallback morphology.
    pub adjective_suffixes: Vec<String>,
    /// Copular verb lemmas that license predicative extraction.
    pub copular_verbs: Vec<String>,
    /// Anchored pattern a candidate lemma must match in full.
    pub lemma_pattern: String,
    /// Category name → member lemmas. Membership is non-exclusive.
    pub categories: BTreeMap<String, Vec<String>>,
    /// Category assigned when no listed category matches.
    pub fallback_category: String,
}

impl Default for LexiconProfile {
    fn default() -> Self {
        LexiconProfile {
            target: String::new(),
            related_terms: Vec::new(),
            positive: Vec::new(),
            negative: Vec::new(),
            intensifiers: Vec::new(),
            attenuators: Vec::new(),
            negations: Vec::new(),
            exclusions: Vec::new(),
            known_adjectives: Vec::new(),
            adjective_suffixes: Vec::new(),
            copular_verbs: Vec::new(),
            lemma_pattern: String::from(SPANISH_LEMMA_PATTERN),
            categories: BTreeMap::new(),
            fallback_category: String::from("Otros"),
        }
    }
}

impl LexiconProfile {
    /// The built-in profile for Spanish music criticism, tuned on early
    /// 20th-century periodical prose.
    pub fn spanish_music_press() -> LexiconProfile {
        let mut categories = BTreeMap::new();
        for (name, members) in CATEGORIES {
            categories.insert(String::from(*name), strings(members));
        }
        LexiconProfile {
            target: String::from("música"),
            related_terms: strings(RELATED_TERMS),
            positive: strings(POSITIVE),
            negative: strings(NEGATIVE),
            intensifiers: strings(INTENSIFIERS),
            attenuators: strings(ATTENUATORS),
            negations: strings(NEGATIONS),
            exclusions: strings(EXCLUSIONS),
            known_adjectives: strings(KNOWN_ADJECTIVES),
            adjective_suffixes: strings(ADJECTIVE_SUFFIXES),
            copular_verbs: strings(COPULAR_VERBS),
            lemma_pattern: String::from(SPANISH_LEMMA_PATTERN),
            categories,
            fallback_category: String::from("Otros"),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| String::from(*s)).collect()
}

/// Compiled lexicon with set lookups and the lemma pattern built.
#[derive(Debug)]
pub struct LexiconRegistry {
    target: String,
    related: HashSet<String>,
    positive: HashSet<String>,
    negative: HashSet<String>,
    intensifiers: HashSet<String>,
    attenuators: HashSet<String>,
    negations: HashSet<String>,
    exclusions: HashSet<String>,
    known_adjectives: HashSet<String>,
    adjective_suffixes: Vec<String>,
    copular_verbs: HashSet<String>,
    lemma_pattern: Regex,
    taxonomy: CategoryTaxonomy,
}

impl LexiconRegistry {
    pub fn from_profile(profile: LexiconProfile) -> Result<Self, LexiconError> {
        if profile.target.is_empty() {
            return Err(LexiconError::EmptyTarget);
        }
        let lemma_pattern =
            Regex::new(&profile.lemma_pattern).map_err(|source| LexiconError::Pattern {
                pattern: profile.lemma_pattern.clone(),
                source,
            })?;
        let mut taxonomy = CategoryTaxonomy::new(profile.fallback_category);
        for (name, members) in profile.categories {
            taxonomy.insert(name, members);
        }
        Ok(LexiconRegistry {
            target: profile.target,
            related: profile.related_terms.into_iter().collect(),
            positive: profile.positive.into_iter().collect(),
            negative: profile.negative.into_iter().collect(),
            intensifiers: profile.intensifiers.into_iter().collect(),
            attenuators: profile.attenuators.into_iter().collect(),
            negations: profile.negations.into_iter().collect(),
            exclusions: profile.exclusions.into_iter().collect(),
            known_adjectives: profile.known_adjectives.into_iter().collect(),
            adjective_suffixes: profile.adjective_suffixes,
            copular_verbs: profile.copular_verbs.into_iter().collect(),
            lemma_pattern,
            taxonomy,
        })
    }

    pub fn from_ron_str(input: &str) -> Result<Self, LexiconError> {
        let profile: LexiconProfile =
            ron::from_str(input).map_err(|err| LexiconError::Profile {
                message: err.to_string(),
            })?;
        LexiconRegistry::from_profile(profile)
    }

    pub fn from_ron_path(path: &Path) -> Result<Self, LexiconError> {
        let input = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        LexiconRegistry::from_ron_str(&input)
    }

    /// Shared registry built from [`LexiconProfile::spanish_music_press`].
    pub fn spanish_music_press() -> Arc<LexiconRegistry> {
        static REGISTRY: Lazy<Arc<LexiconRegistry>> = Lazy::new(|| {
            let profile = LexiconProfile::spanish_music_press();
            Arc::new(
                LexiconRegistry::from_profile(profile)
                    .expect("built-in Spanish profile compiles"),
            )
        });
        Arc::clone(&REGISTRY)
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_target(&self, lemma: &str) -> bool {
        lemma == self.target
    }

    pub fn is_related(&self, lemma: &str) -> bool {
        self.related.contains(lemma)
    }

    /// Seed polarity of a lemma before any negation is applied.
    pub fn polarity_of(&self, lemma: &str) -> Polarity {
        if self.positive.contains(lemma) {
            Polarity::Positive
        } else if self.negative.contains(lemma) {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    pub fn is_negation_marker(&self, lemma: &str) -> bool {
        self.negations.contains(lemma)
    }

    pub fn is_intensifier(&self, lemma: &str) -> bool {
        self.intensifiers.contains(lemma)
    }

    pub fn is_attenuator(&self, lemma: &str) -> bool {
        self.attenuators.contains(lemma)
    }

    pub fn is_excluded(&self, lemma: &str) -> bool {
        self.exclusions.contains(lemma)
    }

    pub fn is_known_adjective(&self, lemma: &str) -> bool {
        self.known_adjectives.contains(lemma)
    }

    pub fn is_copular(&self, lemma: &str) -> bool {
        self.copular_verbs.contains(lemma)
    }

    pub fn matches_lemma_pattern(&self, lemma: &str) -> bool {
        self.lemma_pattern.is_match(lemma)
    }

    pub fn has_adjective_suffix(&self, lemma: &str) -> bool {
        self.adjective_suffixes
            .iter()
            .any(|suffix| lemma.ends_with(suffix.as_str()))
    }

    pub fn taxonomy(&self) -> &CategoryTaxonomy {
        &self.taxonomy
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("lexicon profile has an empty target lemma")]
    EmptyTarget,
    #[error("invalid lemma pattern {pattern:?}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("malformed lexicon profile: {message}")]
    Profile { message: String },
    #[error("failed to read lexicon profile {path:?}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

const SPANISH_LEMMA_PATTERN: &str = "^[a-záéíóúñü]+$";

const RELATED_TERMS: &[&str] = &[
    // events
    "concierto",
    "recital",
    "audición",
    "función",
    "sesión",
    "actuación",
    "programa",
    "festival",
    "temporada",
    "estreno",
    "representación",
    // performances of a work
    "interpretación",
    "ejecución",
    "versión",
    "lectura",
    // works and forms
    "obra",
    "pieza",
    "composición",
    "partitura",
    "sinfonía",
    "ópera",
    "zarzuela",
    "sonata",
    "cuarteto",
    "suite",
    "preludio",
    // performers and makers
    "orquesta",
    "coro",
    "conjunto",
    "agrupación",
    "banda",
    "pianista",
    "violinista",
    "cantante",
    "soprano",
    "tenor",
    "barítono",
    "director",
    "maestro",
    "compositor",
    "autor",
    "intérprete",
];

const POSITIVE: &[&str] = &[
    // excellence
    "excelente",
    "magnífico",
    "magistral",
    "espléndido",
    "soberbio",
    "sublime",
    "extraordinario",
    "excepcional",
    "admirable",
    "notable",
    "destacado",
    "brillante",
    "glorioso",
    "triunfal",
    "memorable",
    "insuperable",
    // aesthetic quality
    "hermoso",
    "bello",
    "precioso",
    "delicioso",
    "encantador",
    "maravilloso",
    "exquisito",
    "refinado",
    "elegante",
    "distinguido",
    "selecto",
    "fino",
    // technical command
    "perfecto",
    "impecable",
    "correcto",
    "preciso",
    "exacto",
    "cuidado",
    "depurado",
    "pulido",
    "acabado",
    "logrado",
    "conseguido",
    // originality
    "original",
    "novedoso",
    "innovador",
    "genial",
    "creativo",
    "inspirado",
    "ingenioso",
    "sugestivo",
    "interesante",
    "curioso",
    // intensity of feeling
    "emotivo",
    "conmovedor",
    "emocionante",
    "apasionado",
    "sentido",
    "profundo",
    "intenso",
    "vibrante",
    "enérgico",
    "vigoroso",
    "potente",
    "fuerte",
    // reception
    "exitoso",
    "triunfante",
    "aplaudido",
    "celebrado",
    "aclamado",
    "festejado",
    // general praise
    "bueno",
    "grande",
    "alto",
    "superior",
    "óptimo",
    "ideal",
    "mejor",
];

const NEGATIVE: &[&str] = &[
    // deficiency
    "malo",
    "pobre",
    "deficiente",
    "insuficiente",
    "inadecuado",
    "inaceptable",
    "deplorable",
    "lamentable",
    "lastimoso",
    "penoso",
    "triste",
    // mediocrity
    "mediocre",
    "vulgar",
    "ordinario",
    "común",
    "corriente",
    "ramplón",
    "anodino",
    "insulso",
    "soso",
    "desabrido",
    "gris",
    "opaco",
    // failed craft
    "torpe",
    "tosco",
    "burdo",
    "chapucero",
    "imperfecto",
    "defectuoso",
    "erróneo",
    "equivocado",
    "fallido",
    "fracasado",
    "frustrado",
    // tedium
    "aburrido",
    "tedioso",
    "monótono",
    "cansado",
    "pesado",
    "árido",
    "soporífero",
    "fastidioso",
    "insípido",
    // excess and shortfall
    "excesivo",
    "exagerado",
    "desmesurado",
    "ampuloso",
    "pretencioso",
    "escaso",
    "limitado",
    "reducido",
    "débil",
    "flojo",
    // displeasure
    "desagradable",
    "feo",
    "horrible",
    "espantoso",
    "atroz",
    "pésimo",
    "detestable",
    "odioso",
    "molesto",
    "irritante",
    // staleness
    "repetitivo",
    "imitativo",
    "plagiario",
    "convencional",
    "trillado",
    "gastado",
    "manido",
    "anticuado",
    "obsoleto",
    "pasado",
];

const INTENSIFIERS: &[&str] = &[
    "muy",
    "sumamente",
    "extremadamente",
    "extraordinariamente",
    "altamente",
    "profundamente",
    "absolutamente",
    "completamente",
    "totalmente",
    "enteramente",
    "verdaderamente",
    "realmente",
    "auténticamente",
    "genuinamente",
    "excesivamente",
    "demasiado",
    "sobremanera",
    "harto",
    "bien",
    "tan",
    "tanto",
    "bastante",
    "asaz",
];

const ATTENUATORS: &[&str] = &[
    "algo",
    "poco",
    "apenas",
    "ligeramente",
    "levemente",
    "relativamente",
    "moderadamente",
    "medianamente",
    "regularmente",
    "ciertamente",
    "prácticamente",
    "casi",
];

const NEGATIONS: &[&str] = &["no", "nunca", "jamás", "tampoco", "ni", "sin", "nada"];

const EXCLUSIONS: &[&str] = &[
    // institutions and venues
    "cámara",
    "palacio",
    "teatro",
    "conservatorio",
    "salón",
    "academia",
    "sociedad",
    "círculo",
    "club",
    "historia",
    "escuela",
    "casa",
    "sala",
    "local",
    "edificio",
    "centro",
    "instituto",
    "universidad",
    "ministerio",
    "gobierno",
    // musical nouns the tagger confuses with modifiers
    "maestro",
    "director",
    "compositor",
    "orquesta",
    "programa",
    "concierto",
    "ópera",
    "zarzuela",
    "sinfonía",
    "obra",
    "pieza",
    "festival",
    "temporada",
    "sesión",
    "audición",
    "función",
    "estreno",
    "interpretación",
    "música",
    "piano",
    "autor",
    "artista",
    "género",
    "estilo",
    "nota",
    "éxito",
    // press apparatus
    "crítica",
    "revista",
    "periódico",
    "artículo",
    "sección",
    "página",
    "número",
    "edición",
    "serie",
    "colección",
    "referencia",
    // broad abstract nouns
    "mundo",
    "vida",
    "arte",
    "cultura",
    "parte",
    "forma",
    "nombre",
    "lugar",
    "cosa",
    "medio",
    "manera",
    "modo",
    "caso",
    "ejemplo",
    "aspecto",
    "carácter",
    "gente",
    "persona",
    "público",
    // time words
    "época",
    "siglo",
    "tiempo",
    "momento",
    "día",
    "noche",
    "tarde",
    "mañana",
    "semana",
    "mes",
    "año",
    "década",
    "periodo",
    // place words
    "ciudad",
    "país",
    "capital",
    // determiners the tagger mislabels as adjectives
    "todo",
    "otro",
    "mismo",
    "este",
];

const KNOWN_ADJECTIVES: &[&str] = &[
    // nationality and region
    "español",
    "francés",
    "alemán",
    "italiano",
    "ruso",
    "inglés",
    "americano",
    "argentino",
    "cubano",
    "mexicano",
    "austríaco",
    "checo",
    "húngaro",
    "noruego",
    "bohemio",
    "andaluz",
    "catalán",
    "vasco",
    "asturiano",
    "gallego",
    "nacional",
    // genre and medium
    "sinfónico",
    "coral",
    "operístico",
    "instrumental",
    "vocal",
    "orquestal",
    "teatral",
    "dramático",
    "escénico",
    "ligero",
    "bailable",
    "popular",
    "clásico",
    "moderno",
    "contemporáneo",
    "antiguo",
    "tradicional",
    "folclórico",
    "folklórico",
    // esteem
    "bueno",
    "excelente",
    "magnífico",
    "perfecto",
    "soberbio",
    "delicioso",
    "hermoso",
    "bello",
    "admirable",
    "distinguido",
    "fino",
    "selecto",
    "elegante",
    "superior",
    "gran",
    "grande",
    "glorioso",
    "ilustre",
    "importante",
    "magistral",
    "noble",
    "rico",
    "sublime",
    // disesteem
    "inferior",
    "pobre",
    "malo",
    "mediocre",
    "ordinario",
    "vulgar",
    // expressive character
    "alegre",
    "triste",
    "melancólico",
    "romántico",
    "apasionado",
    "lírico",
    "poético",
    "emotivo",
    "expresivo",
    "suave",
    "delicado",
    "íntimo",
    "profundo",
    "misterioso",
    "sugestivo",
    // complexity and learning
    "sencillo",
    "simple",
    "fácil",
    "complicado",
    "complejo",
    "difícil",
    "erudito",
    "culto",
    "refinado",
    "puro",
    // novelty
    "nuevo",
    "actual",
    "renovador",
    "revolucionario",
    "viejo",
    "arcaico",
    // social register
    "aristocrático",
    "religioso",
    "profano",
    "sagrado",
    "militar",
    "serio",
    "frívolo",
    // cultural origin
    "negro",
    "tzíngaro",
    "gitano",
    "flamenco",
    "oriental",
    "exótico",
    "indígena",
    "arábigo",
    "africano",
    "tropical",
    // broadcasting
    "radiofónico",
    "radiogénico",
    "microfónico",
    "transmitido",
    "registrado",
    // general descriptors
    "variado",
    "lleno",
    "mozartiano",
    "wagneriano",
    "beethoveniano",
    "evocativo",
    "heredado",
    "escrito",
    "compuesto",
    "interpretado",
    "ejecutado",
    "trascendental",
    "característico",
    "típico",
    "propio",
    "nuestro",
    "diverso",
    "amplio",
    "extenso",
    "breve",
    "largo",
    "corto",
    "único",
    "especial",
    "particular",
    "general",
    "universal",
    "internacional",
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ada", "ado", "adas", "ados", "osa", "oso", "osas", "osos", "ica", "ico", "icas", "icos",
    "ana", "ano", "anas", "anos", "esa", "és", "esas", "eses", "enta", "ento", "entas", "entos",
    "iva", "ivo", "ivas", "ivos", "ble", "bles", "al", "ales",
];

const COPULAR_VERBS: &[&str] = &[
    "ser",
    "estar",
    "resultar",
    "parecer",
    "mostrarse",
    "revelarse",
    "demostrarse",
    "considerarse",
];

const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Nacionalidad",
        &[
            "español",
            "francés",
            "alemán",
            "italiano",
            "ruso",
            "inglés",
            "americano",
            "cubano",
            "argentino",
            "austríaco",
            "checo",
            "húngaro",
            "noruego",
            "bohemio",
            "andaluz",
            "catalán",
            "vasco",
            "nacional",
            "sudamericano",
            "centroeuropeo",
        ],
    ),
    (
        "Género musical",
        &[
            "sinfónico",
            "coral",
            "operístico",
            "instrumental",
            "vocal",
            "orquestal",
            "teatral",
            "dramático",
            "escénico",
            "ligero",
            "bailable",
            "popular",
            "clásico",
            "moderno",
            "contemporáneo",
            "antiguo",
            "tradicional",
            "folclórico",
        ],
    ),
    (
        "Valoración estética",
        &[
            "bueno",
            "excelente",
            "perfecto",
            "soberbio",
            "delicioso",
            "hermoso",
            "bello",
            "admirable",
            "distinguido",
            "fino",
            "selecto",
            "elegante",
            "superior",
            "gran",
            "grande",
            "glorioso",
            "ilustre",
            "importante",
            "magistral",
            "noble",
            "rico",
            "sublime",
        ],
    ),
    (
        "Valoración negativa",
        &["inferior", "pobre", "malo", "mediocre", "ordinario", "vulgar"],
    ),
    (
        "Cualidades expresivas",
        &[
            "alegre",
            "triste",
            "melancólico",
            "romántico",
            "apasionado",
            "dramático",
            "lírico",
            "poético",
            "emotivo",
            "expresivo",
            "suave",
            "delicado",
            "íntimo",
            "profundo",
            "misterioso",
            "sugestivo",
        ],
    ),
    (
        "Complejidad",
        &[
            "sencillo",
            "simple",
            "fácil",
            "complicado",
            "complejo",
            "difícil",
            "erudito",
            "culto",
            "refinado",
            "puro",
        ],
    ),
    (
        "Novedad/Modernidad",
        &[
            "nuevo",
            "moderno",
            "actual",
            "contemporáneo",
            "renovador",
            "revolucionario",
            "viejo",
            "antiguo",
            "tradicional",
            "pasado",
            "arcaico",
        ],
    ),
    (
        "Carácter social",
        &[
            "aristocrático",
            "popular",
            "culto",
            "religioso",
            "profano",
            "sagrado",
            "militar",
            "serio",
            "frívolo",
        ],
    ),
    (
        "Diversidad cultural",
        &[
            "negro",
            "tzíngaro",
            "flamenco",
            "oriental",
            "exótico",
            "indígena",
            "arábigo",
            "africano",
            "tropical",
        ],
    ),
    (
        "Tecnología/Radio",
        &[
            "radiofónico",
            "radiogénico",
            "microfónico",
            "transmitido",
            "registrado",
            "radioyente",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profile_compiles() {
        let registry = LexiconRegistry::spanish_music_press();
        assert_eq!(registry.target(), "música");
        assert!(registry.is_related("orquesta"));
        assert!(registry.is_copular("resultar"));
        assert_eq!(registry.taxonomy().len(), 10);
    }

    #[test]
    fn polarity_lookup_covers_both_seeds() {
        let registry = LexiconRegistry::spanish_music_press();
        assert_eq!(registry.polarity_of("magnífico"), Polarity::Positive);
        assert_eq!(registry.polarity_of("mediocre"), Polarity::Negative);
        assert_eq!(registry.polarity_of("sinfónico"), Polarity::Neutral);
    }

    #[test]
    fn lemma_pattern_rejects_digits_and_punctuation() {
        let registry = LexiconRegistry::spanish_music_press();
        assert!(registry.matches_lemma_pattern("enérgico"));
        assert!(!registry.matches_lemma_pattern("op.25"));
        assert!(!registry.matches_lemma_pattern("1900"));
        assert!(!registry.matches_lemma_pattern("anti-wagneriano"));
    }

    #[test]
    fn suffix_probe_matches_endings_only() {
        let registry = LexiconRegistry::spanish_music_press();
        assert!(registry.has_adjective_suffix("armonioso"));
        assert!(registry.has_adjective_suffix("aterciopelada"));
        assert!(!registry.has_adjective_suffix("violín"));
    }

    #[test]
    fn profile_round_trips_through_ron() {
        let profile = LexiconProfile::spanish_music_press();
        let encoded = ron::to_string(&profile).unwrap();
        let decoded: LexiconProfile = ron::from_str(&encoded).unwrap();
        assert_eq!(decoded, profile);
    }

    #[test]
    fn minimal_ron_profile_uses_defaults() {
        let registry = LexiconRegistry::from_ron_str(
            r#"(
                target: "cine",
                positive: ["espléndido"],
                negative: ["tedioso"],
            )"#,
        )
        .unwrap();
        assert_eq!(registry.target(), "cine");
        assert_eq!(registry.polarity_of("espléndido"), Polarity::Positive);
        assert!(registry.matches_lemma_pattern("nuevo"));
        assert_eq!(registry.taxonomy().fallback_category(), "Otros");
    }

    #[test]
    fn empty_target_is_rejected() {
        let err = LexiconRegistry::from_profile(LexiconProfile::default()).unwrap_err();
        assert!(matches!(err, LexiconError::EmptyTarget));
    }

    #[test]
    fn bad_pattern_is_reported_with_its_source() {
        let profile = LexiconProfile {
            target: String::from("música"),
            lemma_pattern: String::from("["),
            ..LexiconProfile::default()
        };
        let err = LexiconRegistry::from_profile(profile).unwrap_err();
        assert!(matches!(err, LexiconError::Pattern { .. }));
    }
}
