//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),
    GlobPattern(glob::PatternError),
    /// Corpus root does not exist.
    DirectoryNotFound(PathBuf),
    /// Corpus root exists but is not a directory.
    NotADirectory(PathBuf),
    /// Corpus root holds no raw/meta files at all.
    EmptyDirectory(PathBuf),
    /// Raw/meta pairing is broken: unequal counts, a missing id or an empty file.
    InconsistentDataset(String),
    /// Morphological analyzer invocation failure. Fatal for the whole run.
    Analysis(String),
    Custom(String),
}

impl Error {
    /// Attaches the offending article id to analysis failures,
    /// leaving other variants untouched.
    pub(crate) fn with_article(self, id: usize) -> Self {
        match self {
            Error::Analysis(msg) => Error::Analysis(format!("article {}: {}", id, msg)),
            other => other,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
