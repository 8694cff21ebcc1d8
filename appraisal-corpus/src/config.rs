//! TOML run configuration.

use std::fs;
use std::path::{Path, PathBuf};

use appraisal_analysis::{AggregateSettings, ExtractorSettings, TrendThresholds};
use serde::{Deserialize, Serialize};

use crate::errors::CorpusError;

/// One corpus partition: a publication name mapped to a directory under
/// the corpus root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    pub dir: PathBuf,
}

impl SourceConfig {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        SourceConfig {
            name: name.into(),
            dir: dir.into(),
        }
    }
}

/// A whole run, as read from TOML. Missing fields fall back to
/// [`Default`], so a minimal file only needs the corpus root and the
/// sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub corpus_root: PathBuf,
    pub sources: Vec<SourceConfig>,
    /// Eligible file extensions, without the dot.
    pub extensions: Vec<String>,
    /// Worker thread count; 0 means one per available core.
    pub workers: usize,
    /// Capacity of the two hand-off queues; ingestion blocks while they
    /// are full.
    pub queue_capacity: usize,
    /// RON lexicon profile path; the built-in Spanish profile when absent.
    pub lexicon_path: Option<PathBuf>,
    pub extractor: ExtractorSettings,
    pub aggregate: AggregateSettings,
    pub trends: TrendThresholds,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            corpus_root: PathBuf::from("corpus"),
            sources: Vec::new(),
            extensions: vec![String::from("conllu")],
            workers: 0,
            queue_capacity: 64,
            lexicon_path: None,
            extractor: ExtractorSettings::default(),
            aggregate: AggregateSettings::default(),
            trends: TrendThresholds::default(),
        }
    }
}

impl RunConfig {
    /// The three publications of the corpus the built-in lexicon was
    /// tuned on, under their archive directory names.
    pub fn standard() -> Self {
        RunConfig {
            sources: vec![
                SourceConfig::new("EL SOL", "EL SOL"),
                SourceConfig::new("ONDAS", "ONDAS"),
                SourceConfig::new("ESPAÑA", "ESPAÑA"),
            ],
            ..RunConfig::default()
        }
    }

    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    pub fn from_toml_path(path: &Path) -> Result<Self, CorpusError> {
        let input = fs::read_to_string(path).map_err(|source| CorpusError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input).map_err(|source| CorpusError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Directory holding one source's files.
    pub fn source_dir(&self, source: &SourceConfig) -> PathBuf {
        self.corpus_root.join(&source.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_minimal_file_only_names_root_and_sources() {
        let config = RunConfig::from_toml_str(
            r#"
            corpus_root = "hemeroteca"

            [[sources]]
            name = "ONDAS"
            dir = "ondas"
            "#,
        )
        .unwrap();

        assert_eq!(config.corpus_root, PathBuf::from("hemeroteca"));
        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.extensions, vec![String::from("conllu")]);
        assert_eq!(config.workers, 0);
        assert_eq!(config.queue_capacity, 64);
        assert_eq!(config.extractor, ExtractorSettings::default());
        assert_eq!(
            config.source_dir(&config.sources[0]),
            PathBuf::from("hemeroteca/ondas")
        );
    }

    #[test]
    fn nested_tables_override_engine_settings() {
        let config = RunConfig::from_toml_str(
            r#"
            corpus_root = "corpus"
            workers = 4

            [[sources]]
            name = "EL SOL"
            dir = "EL SOL"

            [extractor]
            window_radius = 7

            [extractor.filter]
            min_lemma_len = 4

            [aggregate]
            context_cap = 5

            [trends]
            emergent_min_rate = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.workers, 4);
        assert_eq!(config.extractor.window_radius, 7);
        assert_eq!(config.extractor.filter.min_lemma_len, 4);
        // untouched siblings keep their defaults
        assert_eq!(
            config.extractor.negation_window,
            ExtractorSettings::default().negation_window
        );
        assert_eq!(config.aggregate.context_cap, 5);
        assert_eq!(config.trends.emergent_min_rate, 2.0);
    }

    #[test]
    fn the_standard_preset_names_the_three_publications() {
        let standard = RunConfig::standard();
        let names: Vec<&str> = standard.sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["EL SOL", "ONDAS", "ESPAÑA"]);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(RunConfig::from_toml_str("corpus_root = [").is_err());
    }
}
