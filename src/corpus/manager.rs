//! Corpus validation and indexing.
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::article::{ArticleMeta, RawArticle};
use crate::error::Error;

/// Validates and indexes a directory of `<id>_raw.txt` / `<id>_meta.json`
/// pairs.
///
/// All validation happens at construction, before any processing: an invalid
/// corpus never yields partial output. After construction the index is
/// read-only and can be shared across workers without synchronization.
pub struct CorpusManager {
    path: PathBuf,
    storage: BTreeMap<usize, RawArticle>,
}

impl CorpusManager {
    pub fn new(path: &Path) -> Result<Self, Error> {
        let storage = Self::validate(path)?;
        info!("corpus at {:?}: {} articles", path, storage.len());
        Ok(CorpusManager {
            path: path.to_path_buf(),
            storage,
        })
    }

    /// Checks the dataset invariants and loads the articles.
    ///
    /// Raw and meta file counts must match, ids must be contiguous from 1,
    /// and no file may be empty.
    fn validate(path: &Path) -> Result<BTreeMap<usize, RawArticle>, Error> {
        if !path.exists() {
            return Err(Error::DirectoryNotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(Error::NotADirectory(path.to_path_buf()));
        }

        let nb_raw = Self::count(path, "*_raw.txt")?;
        let nb_meta = Self::count(path, "*_meta.json")?;
        if nb_raw == 0 && nb_meta == 0 {
            return Err(Error::EmptyDirectory(path.to_path_buf()));
        }
        if nb_raw != nb_meta {
            return Err(Error::InconsistentDataset(format!(
                "{} raw files but {} meta files",
                nb_raw, nb_meta
            )));
        }

        let mut storage = BTreeMap::new();
        for id in 1..=nb_raw {
            let raw_path = path.join(format!("{}_raw.txt", id));
            let meta_path = path.join(format!("{}_meta.json", id));
            Self::check_pair_file(&raw_path, id)?;
            Self::check_pair_file(&meta_path, id)?;

            let text = fs::read_to_string(&raw_path)?;
            let meta: ArticleMeta = serde_json::from_str(&fs::read_to_string(&meta_path)?)?;
            debug!("article {}: {} bytes of raw text", id, text.len());
            storage.insert(id, RawArticle::new(id, text, meta));
        }
        Ok(storage)
    }

    fn check_pair_file(path: &Path, id: usize) -> Result<(), Error> {
        if !path.is_file() {
            return Err(Error::InconsistentDataset(format!(
                "article {}: missing {:?}",
                id, path
            )));
        }
        if fs::metadata(path)?.len() == 0 {
            return Err(Error::InconsistentDataset(format!(
                "article {}: empty {:?}",
                id, path
            )));
        }
        Ok(())
    }

    fn count(path: &Path, pattern: &str) -> Result<usize, Error> {
        let pattern = path.join(pattern);
        let matches = glob::glob(&pattern.to_string_lossy())?;
        Ok(matches.filter_map(Result::ok).count())
    }

    /// Get a reference to the corpus root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The article index, keyed by contiguous 1-based ids.
    pub fn get_articles(&self) -> &BTreeMap<usize, RawArticle> {
        &self.storage
    }
}
