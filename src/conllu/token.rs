//! Token-level structures.
use crate::tagset::UdPos;

/// Morphological parameters of a single token.
///
/// Immutable once constructed. `tags` holds the UD feature string
/// (alphabetically ordered `Key=Value` pairs joined by `|`) or is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorphologicalToken {
    lemma: String,
    pos: UdPos,
    tags: String,
}

impl MorphologicalToken {
    pub fn new(lemma: &str, pos: UdPos, tags: &str) -> Self {
        MorphologicalToken {
            lemma: lemma.to_string(),
            pos,
            tags: tags.to_string(),
        }
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn pos(&self) -> UdPos {
        self.pos
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }
}

/// One surface word-form of a sentence.
///
/// Owns its morphology exclusively; the pipeline replaces it via
/// [ConlluToken::set_morphology] once the analyzer has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConlluToken {
    text: String,
    cleaned: String,
    morphology: MorphologicalToken,
}

impl ConlluToken {
    /// The cleaned form is derived at construction: lowercased, with
    /// everything but alphanumeric characters stripped. A punctuation-only
    /// surface form cleans to the empty string, never to a missing value.
    pub fn new(text: &str) -> Self {
        let cleaned = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        ConlluToken {
            text: text.to_string(),
            cleaned,
            morphology: MorphologicalToken::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    pub fn morphology(&self) -> &MorphologicalToken {
        &self.morphology
    }

    pub fn set_morphology(&mut self, morphology: MorphologicalToken) {
        self.morphology = morphology;
    }

    /// One CONLL-U line: `ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL DEPS MISC`,
    /// tab-separated. XPOS, HEAD, DEPREL, DEPS and MISC are always `_`;
    /// LEMMA/UPOS/FEATS are `_` placeholders unless morphology is included.
    pub fn render(&self, id: usize, include_morphological_tags: bool) -> String {
        let (lemma, upos, feats) = if include_morphological_tags {
            let lemma = if self.morphology.lemma().is_empty() {
                "_"
            } else {
                self.morphology.lemma()
            };
            let feats = if self.morphology.tags().is_empty() {
                "_"
            } else {
                self.morphology.tags()
            };
            (lemma, self.morphology.pos().as_str(), feats)
        } else {
            ("_", "_", "_")
        };

        format!(
            "{}\t{}\t{}\t{}\t_\t{}\t_\t_\t_\t_",
            id, self.text, lemma, upos, feats
        )
    }
}
