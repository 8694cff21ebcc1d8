//! Failure kinds that abort a run.
//!
//! Per-file read and annotation failures never appear here: the runner
//! logs them, counts them and moves on. Anything below aborts instead of
//! yielding a silently empty report.

use std::io;
use std::path::PathBuf;

use appraisal_analysis::LexiconError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus root {} does not exist", path.display())]
    MissingRoot { path: PathBuf },

    #[error("source directory {} for {name:?} does not exist", path.display())]
    MissingSource { name: String, path: PathBuf },

    #[error("could not walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read run configuration {}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse run configuration {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("annotation backend unavailable: {message}")]
    AnnotatorUnavailable { message: String },

    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}
