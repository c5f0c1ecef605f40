//! Per-article output files.
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;

/// Writes per-article artifacts under a destination directory.
///
/// File names are keyed by article id, so a re-run overwrites the previous
/// output of the same article regardless of worker completion order.
pub struct ArticleWriter {
    dst: PathBuf,
}

impl ArticleWriter {
    /// Creates the destination directory if needed.
    pub fn new(dst: &Path) -> Result<Self, Error> {
        fs::create_dir_all(dst)?;
        Ok(ArticleWriter {
            dst: dst.to_path_buf(),
        })
    }

    /// `<id>_sentences.conllu`: the article's CONLL-U blocks.
    pub fn write_conllu(&self, id: usize, blocks: &str) -> Result<(), Error> {
        self.write(&format!("{}_sentences.conllu", id), blocks)
    }

    /// `<id>_cleaned.txt`: one cleaned sentence per line.
    pub fn write_cleaned(&self, id: usize, sentences: &str) -> Result<(), Error> {
        self.write(&format!("{}_cleaned.txt", id), sentences)
    }

    fn write(&self, filename: &str, content: &str) -> Result<(), Error> {
        let path = self.dst.join(filename);
        debug!("writing {:?}", path);
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_are_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ArticleWriter::new(dir.path()).unwrap();
        writer.write_conllu(1, "first run\n").unwrap();
        writer.write_conllu(1, "second\n").unwrap();
        let content = fs::read_to_string(dir.path().join("1_sentences.conllu")).unwrap();
        assert_eq!(content, "second\n");
    }

    #[test]
    fn creates_missing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("conllu");
        let writer = ArticleWriter::new(&nested).unwrap();
        writer.write_cleaned(2, "чистый текст\n").unwrap();
        assert!(nested.join("2_cleaned.txt").is_file());
    }
}
