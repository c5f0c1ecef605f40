/*! Morphological analysis.

The extended pipeline consumes analyzers through the [Analyze] trait; any
backend that can propose a lemma and a source-tagset tag per word fits. The
shipped backend is [LexiconAnalyzer], an in-memory lexicon loaded from a
tab-separated file.
!*/
mod lexicon;

pub use lexicon::LexiconAnalyzer;

use crate::error::Error;
use crate::tagset::AnalyzerTag;

/// Analysis of a single surface form: a lemma and the analyzer's own tag,
/// still in the source tagset.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphAnalysis {
    lemma: String,
    tag: AnalyzerTag,
}

impl MorphAnalysis {
    pub fn new(lemma: &str, tag: AnalyzerTag) -> Self {
        MorphAnalysis {
            lemma: lemma.to_string(),
            tag,
        }
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn tag(&self) -> &AnalyzerTag {
        &self.tag
    }
}

/// Per-word morphological analysis capability.
///
/// `Ok(None)` means the word is outside the analyzer's vocabulary — the
/// caller degrades it to `X`/no features. `Err` is an invocation failure
/// and aborts the whole run; analyzing an empty word is such a failure.
pub trait Analyze {
    fn analyze(&self, word: &str) -> Result<Option<MorphAnalysis>, Error>;
}
