//! Bounded-queue parallel run orchestration.
//!
//! Documents are independent, so workers analyze them in parallel; only
//! the aggregation step touches shared counts, and it runs on a single
//! thread. Two bounded queues connect the stages, so ingestion blocks
//! rather than read the whole corpus into memory.

use std::collections::BTreeMap;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

use appraisal_analysis::{
    AggregateStore, DocumentAnalysis, DocumentAnalyzer, LexiconRegistry, Snapshot,
    TemporalAnalyzer, TemporalOutcome,
};
use appraisal_nlp::{AnnotateError, Annotator, DocMeta};
use log::{debug, info, warn};

use crate::config::RunConfig;
use crate::errors::CorpusError;
use crate::ingest::{self, CorpusFile};

/// Everything a finished run produces.
#[derive(Debug)]
pub struct RunOutcome {
    pub snapshot: Snapshot,
    /// Per-source trend outcome; sources without dated dependency
    /// candidates are absent.
    pub temporal: BTreeMap<String, TemporalOutcome>,
    pub files_processed: u64,
    pub files_failed: u64,
}

enum Dispatch {
    Analyzed(DocumentAnalysis),
    Skipped,
    /// The annotation backend cannot serve at all; the run must stop.
    Aborted(String),
}

/// Owns one run's configuration and lexicon; the annotator arrives at
/// [`CorpusRunner::run`], since it is the caller's collaborator.
pub struct CorpusRunner {
    config: RunConfig,
    lexicon: Arc<LexiconRegistry>,
}

impl CorpusRunner {
    /// Load the lexicon the configuration names, or the built-in Spanish
    /// profile when it names none.
    pub fn new(config: RunConfig) -> Result<Self, CorpusError> {
        let lexicon = match &config.lexicon_path {
            Some(path) => Arc::new(LexiconRegistry::from_ron_path(path)?),
            None => LexiconRegistry::spanish_music_press(),
        };
        Ok(CorpusRunner { config, lexicon })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Arc<LexiconRegistry> {
        &self.lexicon
    }

    /// Walk the corpus and run every eligible file through the annotator
    /// and the analysis pipeline.
    ///
    /// Missing root and source directories abort before any work starts.
    /// Per-file read and annotation failures are logged, counted and
    /// skipped.
    pub fn run<A>(&self, annotator: &A) -> Result<RunOutcome, CorpusError>
    where
        A: Annotator + Sync,
    {
        let files = ingest::discover(&self.config)?;
        info!(
            "corpus run over {} files from {} sources",
            files.len(),
            self.config.sources.len()
        );

        let analyzer =
            DocumentAnalyzer::with_settings(self.lexicon.clone(), self.config.extractor.clone());
        let mut store = AggregateStore::new(
            self.lexicon.clone(),
            self.config.aggregate,
            self.config.extractor.filter.morphology,
        );
        let workers = match self.config.workers {
            0 => thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
            n => n,
        };

        let mut files_processed = 0u64;
        let mut files_failed = 0u64;
        let mut aborted: Option<String> = None;

        thread::scope(|scope| {
            let (work_tx, work_rx) = mpsc::sync_channel::<CorpusFile>(self.config.queue_capacity);
            let (batch_tx, batch_rx) = mpsc::sync_channel::<Dispatch>(self.config.queue_capacity);
            let work_rx = Arc::new(Mutex::new(work_rx));

            for _ in 0..workers {
                let work_rx = Arc::clone(&work_rx);
                let batch_tx = batch_tx.clone();
                let analyzer = &analyzer;
                scope.spawn(move || loop {
                    // The guard is released as soon as recv returns, so
                    // analysis never runs under the lock.
                    let next = match work_rx.lock() {
                        Ok(rx) => rx.recv(),
                        Err(_) => break,
                    };
                    let Ok(file) = next else { break };
                    if batch_tx.send(process(annotator, analyzer, &file)).is_err() {
                        break;
                    }
                });
            }
            drop(batch_tx);

            scope.spawn(move || {
                for file in files {
                    if work_tx.send(file).is_err() {
                        break;
                    }
                }
            });

            // Single-writer aggregation on this thread. Dropping the
            // receiver on abort unblocks every producer still sending.
            for dispatch in batch_rx {
                match dispatch {
                    Dispatch::Analyzed(analysis) => {
                        files_processed += 1;
                        store.absorb(analysis);
                    }
                    Dispatch::Skipped => files_failed += 1,
                    Dispatch::Aborted(message) => {
                        aborted = Some(message);
                        break;
                    }
                }
            }
        });

        if let Some(message) = aborted {
            return Err(CorpusError::AnnotatorUnavailable { message });
        }

        let snapshot = store.finalize();
        let trends = TemporalAnalyzer::new()
            .with_thresholds(self.config.trends)
            .with_lexicon(self.lexicon.clone());
        let mut temporal = BTreeMap::new();
        for source in &self.config.sources {
            if let Some(yearly) = store.yearly_counts(&source.name) {
                temporal.insert(source.name.clone(), trends.analyze(yearly));
            }
        }

        info!(
            "run complete: {} documents aggregated, {} files skipped",
            files_processed, files_failed
        );
        Ok(RunOutcome {
            snapshot,
            temporal,
            files_processed,
            files_failed,
        })
    }
}

/// Read, annotate and analyze one file. Read and syntax failures are
/// logged here and reported to the aggregation loop as a skip; an
/// unavailable annotation backend is reported as an abort.
fn process<A: Annotator>(
    annotator: &A,
    analyzer: &DocumentAnalyzer,
    file: &CorpusFile,
) -> Dispatch {
    let text = match ingest::read_text(&file.path) {
        Ok(text) => text,
        Err(err) => {
            warn!("could not read {}: {err}", file.path.display());
            return Dispatch::Skipped;
        }
    };
    let file_id = file
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut meta = DocMeta::new(file.source_name.clone(), file_id);
    if let Some(year) = ingest::extract_year(&file.path, &text) {
        meta = meta.with_year(year);
    }
    match annotator.annotate(&text, meta) {
        Ok(doc) => {
            debug!("{}: {} tokens", file.path.display(), doc.len());
            Dispatch::Analyzed(analyzer.analyze(&doc))
        }
        Err(AnnotateError::Unavailable { message }) => Dispatch::Aborted(message),
        Err(err) => {
            warn!("could not annotate {}: {err}", file.path.display());
            Dispatch::Skipped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceConfig;
    use appraisal_nlp::ConlluReader;
    use std::fs;
    use std::path::Path;

    const PRAISE_1925: &str = "\
1\tLa\tel\tDET\t_\t_\t2\tdet\t_\t_
2\tmúsica\tmúsica\tNOUN\t_\t_\t0\troot\t_\t_
3\tespañola\tespañol\tADJ\t_\t_\t2\tamod\t_\t_
";

    const CONCERT_1926: &str = "\
1\tEl\tel\tDET\t_\t_\t2\tdet\t_\t_
2\tconcierto\tconcierto\tNOUN\t_\t_\t3\tnsubj\t_\t_
3\tresultó\tresultar\tVERB\t_\t_\t0\troot\t_\t_
4\tespléndido\tespléndido\tADJ\t_\t_\t3\tacomp\t_\t_
";

    const PAN_1926: &str = "\
1\tLa\tel\tDET\t_\t_\t2\tdet\t_\t_
2\tobra\tobra\tNOUN\t_\t_\t4\tnsubj\t_\t_
3\tno\tno\tADV\t_\t_\t4\tadvmod\t_\t_
4\tes\tser\tVERB\t_\t_\t0\troot\t_\t_
5\tbuena\tbueno\tADJ\t_\t_\t4\tacomp\t_\t_
";

    fn write_corpus(root: &Path) {
        let ondas = root.join("ondas");
        let espana = root.join("espana");
        fs::create_dir(&ondas).unwrap();
        fs::create_dir(&espana).unwrap();
        fs::write(ondas.join("1925_01.conllu"), PRAISE_1925).unwrap();
        fs::write(ondas.join("1926_02.conllu"), CONCERT_1926).unwrap();
        fs::write(espana.join("1926_01.conllu"), PAN_1926).unwrap();
        fs::write(espana.join("roto.conllu"), "1\tsolo\n").unwrap();
    }

    fn config_for(root: &Path) -> RunConfig {
        RunConfig {
            corpus_root: root.to_path_buf(),
            sources: vec![
                SourceConfig::new("ONDAS", "ondas"),
                SourceConfig::new("ESPAÑA", "espana"),
            ],
            workers: 2,
            ..RunConfig::default()
        }
    }

    #[test]
    fn a_full_run_walks_analyzes_and_aggregates() {
        let root = tempfile::tempdir().unwrap();
        write_corpus(root.path());
        let runner = CorpusRunner::new(config_for(root.path())).unwrap();
        let outcome = runner.run(&ConlluReader::new()).unwrap();

        assert_eq!(outcome.files_processed, 3);
        assert_eq!(outcome.files_failed, 1);
        let snapshot = &outcome.snapshot;
        assert_eq!(snapshot.documents_processed, 3);
        // espléndido twice (local and distant predicative), bueno negated
        // twice, español neutral once
        assert_eq!(snapshot.totals_by_polarity.positive, 2);
        assert_eq!(snapshot.totals_by_polarity.negative, 2);
        assert_eq!(snapshot.totals_by_polarity.neutral, 1);
        assert_eq!(snapshot.totals_by_source["ONDAS"].documents, 2);
        assert_eq!(snapshot.totals_by_source["ESPAÑA"].negative["bueno"], 2);

        // two distinct years per source at most, so trend analysis
        // refuses both
        assert_eq!(
            outcome.temporal["ONDAS"],
            TemporalOutcome::InsufficientRange { years_with_data: 2 }
        );
        assert_eq!(
            outcome.temporal["ESPAÑA"],
            TemporalOutcome::InsufficientRange { years_with_data: 1 }
        );
    }

    #[test]
    fn single_worker_runs_are_reproducible() {
        let root = tempfile::tempdir().unwrap();
        write_corpus(root.path());
        let config = RunConfig {
            workers: 1,
            ..config_for(root.path())
        };
        let runner = CorpusRunner::new(config).unwrap();
        let reader = ConlluReader::new();
        let first = runner.run(&reader).unwrap();
        let second = runner.run(&reader).unwrap();
        assert_eq!(first.snapshot, second.snapshot);
        assert_eq!(first.temporal, second.temporal);
    }

    #[test]
    fn a_missing_root_fails_before_any_work() {
        let root = tempfile::tempdir().unwrap();
        let config = RunConfig {
            corpus_root: root.path().join("no_such"),
            ..config_for(root.path())
        };
        let runner = CorpusRunner::new(config).unwrap();
        assert!(matches!(
            runner.run(&ConlluReader::new()),
            Err(CorpusError::MissingRoot { .. })
        ));
    }

    #[test]
    fn an_unavailable_backend_aborts_the_run() {
        struct Down;
        impl Annotator for Down {
            fn annotate(
                &self,
                _raw: &str,
                _meta: appraisal_nlp::DocMeta,
            ) -> Result<appraisal_nlp::Document, AnnotateError> {
                Err(AnnotateError::Unavailable {
                    message: String::from("model not loaded"),
                })
            }
        }

        let root = tempfile::tempdir().unwrap();
        write_corpus(root.path());
        let runner = CorpusRunner::new(config_for(root.path())).unwrap();
        match runner.run(&Down).unwrap_err() {
            CorpusError::AnnotatorUnavailable { message } => {
                assert_eq!(message, "model not loaded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn an_unreadable_lexicon_profile_aborts_construction() {
        let root = tempfile::tempdir().unwrap();
        let config = RunConfig {
            lexicon_path: Some(root.path().join("no_such.ron")),
            ..config_for(root.path())
        };
        assert!(matches!(
            CorpusRunner::new(config),
            Err(CorpusError::Lexicon(_))
        ));
    }

    #[test]
    fn a_configured_profile_replaces_the_built_in_lexicon() {
        let root = tempfile::tempdir().unwrap();
        let profile = root.path().join("teatro.ron");
        fs::write(
            &profile,
            r#"(target: "teatro", positive: ["luminoso"], negative: ["gris"])"#,
        )
        .unwrap();
        let dir = root.path().join("ondas");
        fs::create_dir(&dir).unwrap();
        fs::write(
            dir.join("1925_01.conllu"),
            "1\tteatro\tteatro\tNOUN\t_\t_\t0\troot\t_\t_\n\
             2\tluminoso\tluminoso\tADJ\t_\t_\t1\tamod\t_\t_\n",
        )
        .unwrap();

        let config = RunConfig {
            corpus_root: root.path().to_path_buf(),
            sources: vec![SourceConfig::new("ONDAS", "ondas")],
            lexicon_path: Some(profile),
            workers: 1,
            ..RunConfig::default()
        };
        let runner = CorpusRunner::new(config).unwrap();
        assert_eq!(runner.lexicon().target(), "teatro");
        let outcome = runner.run(&ConlluReader::new()).unwrap();
        assert_eq!(outcome.snapshot.totals_by_polarity.positive, 1);
        assert_eq!(outcome.snapshot.target_mentions, 1);
    }
}
