//! Lexicon-backed analyzer.
use std::collections::HashMap;
use std::path::Path;

use log::info;

use super::{Analyze, MorphAnalysis};
use crate::error::Error;
use crate::tagset::{AnalyzerTag, OpenCorporaTag, TagsetKind};

/// In-memory lexicon mapping lowercased surface forms to a lemma and a
/// source-tagset tag.
///
/// Loaded once at pipeline startup from a tab-separated file
/// (`form<TAB>lemma<TAB>tag`, `#`-prefixed lines skipped), then consulted
/// per token. The tag column is interpreted according to the lexicon's
/// [TagsetKind]: a delimited Mystem string, or a canonical OpenCorpora
/// rendering.
pub struct LexiconAnalyzer {
    kind: TagsetKind,
    entries: HashMap<String, (String, String)>,
}

impl LexiconAnalyzer {
    pub fn new(kind: TagsetKind) -> Self {
        LexiconAnalyzer {
            kind,
            entries: HashMap::new(),
        }
    }

    /// Loads a lexicon file. Rows must have exactly three fields.
    pub fn from_tsv(kind: TagsetKind, path: &Path) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .comment(Some(b'#'))
            .from_path(path)?;

        let mut analyzer = Self::new(kind);
        for record in reader.records() {
            let record = record?;
            match (record.get(0), record.get(1), record.get(2)) {
                (Some(form), Some(lemma), Some(tag)) if record.len() == 3 => {
                    analyzer.insert(form, lemma, tag);
                }
                _ => {
                    return Err(Error::Custom(format!(
                        "malformed lexicon row in {:?}: {:?}",
                        path, record
                    )))
                }
            }
        }
        info!(
            "loaded {} lexicon: {} entries from {:?}",
            kind.as_str(),
            analyzer.len(),
            path
        );
        Ok(analyzer)
    }

    pub fn insert(&mut self, form: &str, lemma: &str, tag: &str) {
        self.entries
            .insert(form.to_lowercase(), (lemma.to_string(), tag.to_string()));
    }

    pub fn kind(&self) -> TagsetKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn tag(&self, raw: &str) -> AnalyzerTag {
        match self.kind {
            TagsetKind::Mystem => AnalyzerTag::Mystem(raw.to_string()),
            TagsetKind::OpenCorpora => AnalyzerTag::OpenCorpora(OpenCorporaTag::from(raw)),
        }
    }
}

impl Analyze for LexiconAnalyzer {
    fn analyze(&self, word: &str) -> Result<Option<MorphAnalysis>, Error> {
        if word.is_empty() {
            return Err(Error::Analysis("empty word".to_string()));
        }
        Ok(self
            .entries
            .get(&word.to_lowercase())
            .map(|(lemma, tag)| MorphAnalysis::new(lemma, self.tag(tag))))
    }
}
