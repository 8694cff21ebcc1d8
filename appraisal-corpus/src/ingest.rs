//! Corpus walking, encoding fallback and year extraction.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::RunConfig;
use crate::errors::CorpusError;

static YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(19|20)\d{2}").expect("year pattern compiles"));

/// How far into the text the year search reaches when the file name
/// carries none.
const YEAR_SCAN_CHARS: usize = 500;

/// One file scheduled for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFile {
    pub path: PathBuf,
    pub source_name: String,
}

/// Enumerate every eligible file, source by source, file names sorted
/// within each source. The order is deterministic so context samples and
/// logs are reproducible across runs.
pub fn discover(config: &RunConfig) -> Result<Vec<CorpusFile>, CorpusError> {
    if !config.corpus_root.is_dir() {
        return Err(CorpusError::MissingRoot {
            path: config.corpus_root.clone(),
        });
    }
    let mut files = Vec::new();
    for source in &config.sources {
        let dir = config.source_dir(source);
        if !dir.is_dir() {
            return Err(CorpusError::MissingSource {
                name: source.name.clone(),
                path: dir,
            });
        }
        let mut batch: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(&dir).map_err(|source| walk_error(&dir, source))? {
            let path = entry.map_err(|source| walk_error(&dir, source))?.path();
            if path.is_file() && eligible(&path, &config.extensions) {
                batch.push(path);
            }
        }
        batch.sort();
        files.extend(batch.into_iter().map(|path| CorpusFile {
            path,
            source_name: source.name.clone(),
        }));
    }
    Ok(files)
}

fn walk_error(dir: &Path, source: io::Error) -> CorpusError {
    CorpusError::Walk {
        path: dir.to_path_buf(),
        source,
    }
}

fn eligible(path: &Path, extensions: &[String]) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

/// Read a file as UTF-8, reinterpreting the bytes as Latin-1 when that
/// fails. The archive mixes both encodings.
pub fn read_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    })
}

/// Year of publication: the first `19xx`/`20xx` match in the file stem,
/// then in the leading text. `None` keeps the document out of the
/// temporal tables only.
pub fn extract_year(path: &Path, text: &str) -> Option<i32> {
    let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or("");
    if let Some(year) = first_year(stem) {
        return Some(year);
    }
    let head: String = text.chars().take(YEAR_SCAN_CHARS).collect();
    first_year(&head)
}

fn first_year(input: &str) -> Option<i32> {
    YEAR.find(input).and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceConfig;

    fn write(dir: &Path, name: &str, contents: &[u8]) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn discovery_is_sorted_and_extension_filtered() {
        let root = tempfile::tempdir().unwrap();
        let ondas = root.path().join("ondas");
        fs::create_dir(&ondas).unwrap();
        write(&ondas, "b_1921.conllu", b"");
        write(&ondas, "a_1920.conllu", b"");
        write(&ondas, "notas.txt", b"");

        let config = RunConfig {
            corpus_root: root.path().to_path_buf(),
            sources: vec![SourceConfig::new("ONDAS", "ondas")],
            ..RunConfig::default()
        };
        let files = discover(&config).unwrap();
        let names: Vec<&str> = files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a_1920.conllu", "b_1921.conllu"]);
        assert!(files.iter().all(|f| f.source_name == "ONDAS"));
    }

    #[test]
    fn a_missing_source_directory_aborts() {
        let root = tempfile::tempdir().unwrap();
        let config = RunConfig {
            corpus_root: root.path().to_path_buf(),
            sources: vec![SourceConfig::new("RITMO", "ritmo")],
            ..RunConfig::default()
        };
        match discover(&config).unwrap_err() {
            CorpusError::MissingSource { name, .. } => assert_eq!(name, "RITMO"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn a_missing_root_aborts() {
        let root = tempfile::tempdir().unwrap();
        let config = RunConfig {
            corpus_root: root.path().join("no_such"),
            ..RunConfig::default()
        };
        assert!(matches!(
            discover(&config).unwrap_err(),
            CorpusError::MissingRoot { .. }
        ));
    }

    #[test]
    fn utf8_reads_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("critica.txt");
        fs::write(&path, "música española".as_bytes()).unwrap();
        assert_eq!(read_text(&path).unwrap(), "música española");
    }

    #[test]
    fn latin1_bytes_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("critica.txt");
        fs::write(&path, b"m\xfasica espa\xf1ola").unwrap();
        assert_eq!(read_text(&path).unwrap(), "música española");
    }

    #[test]
    fn year_prefers_the_file_stem() {
        assert_eq!(
            extract_year(Path::new("ondas_1925_03.conllu"), "texto de 1930"),
            Some(1925)
        );
    }

    #[test]
    fn year_falls_back_to_leading_text() {
        assert_eq!(
            extract_year(Path::new("cronica.conllu"), "Madrid, 3 de mayo de 1928."),
            Some(1928)
        );
    }

    #[test]
    fn year_search_stops_after_the_leading_text() {
        let text = format!("{}1928", "a ".repeat(300));
        assert_eq!(extract_year(Path::new("cronica.conllu"), &text), None);
    }

    #[test]
    fn year_can_be_absent() {
        assert_eq!(extract_year(Path::new("cronica.conllu"), "sin fecha"), None);
    }
}
