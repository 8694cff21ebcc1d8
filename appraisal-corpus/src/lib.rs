//! Corpus ingestion and run orchestration for the appraisal pipeline.
//!
//! Corpus I/O lives here, away from the analysis crates. This one walks
//! a configured corpus in deterministic order, reads each file with an
//! encoding fallback, extracts the year of publication, hands the text
//! to an [`appraisal_nlp::Annotator`], and funnels the per-document
//! analyses through bounded queues into one aggregate store. The outcome
//! is the finalized snapshot plus a per-source trend analysis.
//!
//! ```no_run
//! use appraisal_corpus::{CorpusRunner, RunConfig};
//! use appraisal_nlp::ConlluReader;
//!
//! # fn main() -> Result<(), appraisal_corpus::CorpusError> {
//! let config = RunConfig::from_toml_path("run.toml".as_ref())?;
//! let outcome = CorpusRunner::new(config)?.run(&ConlluReader::new())?;
//! println!("{}", outcome.snapshot.to_json().unwrap());
//! # Ok(())
//! # }
//! ```

mod config;
mod errors;
mod ingest;
mod runner;

pub use config::{RunConfig, SourceConfig};
pub use errors::CorpusError;
pub use ingest::{discover, extract_year, read_text, CorpusFile};
pub use runner::{CorpusRunner, RunOutcome};
