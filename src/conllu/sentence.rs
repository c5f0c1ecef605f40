//! Sentence-level structures.
use itertools::Itertools;

use super::token::ConlluToken;

/// A sentence in surface order: 1-based position within its article, the
/// untouched sentence text, and the tokens it splits into (token index + 1
/// is the CONLL-U token id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConlluSentence {
    position: usize,
    text: String,
    tokens: Vec<ConlluToken>,
}

impl ConlluSentence {
    pub fn new(position: usize, text: &str, tokens: Vec<ConlluToken>) -> Self {
        ConlluSentence {
            position,
            text: text.to_string(),
            tokens,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[ConlluToken] {
        &self.tokens
    }

    /// One CONLL-U block: `# sent_id` and `# text` comments, the token lines
    /// in surface order, and the terminating blank line.
    pub fn render(&self, include_morphological_tags: bool) -> String {
        let mut block = format!("# sent_id = {}\n# text = {}\n", self.position, self.text);
        for (idx, token) in self.tokens.iter().enumerate() {
            block.push_str(&token.render(idx + 1, include_morphological_tags));
            block.push('\n');
        }
        block.push('\n');
        block
    }

    /// Space-joined cleaned token forms. Punctuation-only tokens clean to
    /// the empty string and are omitted from the join.
    pub fn get_cleaned_sentence(&self) -> String {
        self.tokens
            .iter()
            .map(ConlluToken::cleaned)
            .filter(|cleaned| !cleaned.is_empty())
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str, surface: &[&str]) -> ConlluSentence {
        let tokens = surface.iter().map(|t| ConlluToken::new(t)).collect();
        ConlluSentence::new(1, text, tokens)
    }

    #[test]
    fn render_block_layout() {
        let s = sentence("Hello, World!", &["Hello", ",", "World", "!"]);
        let rendered = s.render(false);
        let expected = "# sent_id = 1\n\
                        # text = Hello, World!\n\
                        1\tHello\t_\t_\t_\t_\t_\t_\t_\t_\n\
                        2\t,\t_\t_\t_\t_\t_\t_\t_\t_\n\
                        3\tWorld\t_\t_\t_\t_\t_\t_\t_\t_\n\
                        4\t!\t_\t_\t_\t_\t_\t_\t_\t_\n\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn token_ids_are_one_based_and_ordered() {
        let s = sentence("a b c", &["a", "b", "c"]);
        let rendered = s.render(false);
        let ids: Vec<&str> = rendered
            .lines()
            .filter(|line| !line.starts_with('#') && !line.is_empty())
            .map(|line| line.split('\t').next().unwrap())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn cleaned_sentence_drops_punctuation() {
        let s = sentence("Hello, World!", &["Hello", ",", "World", "!"]);
        assert_eq!(s.get_cleaned_sentence(), "hello world");
    }

    #[test]
    fn cleaned_sentence_of_pure_punctuation_is_empty() {
        let s = sentence("?!", &["?", "!"]);
        assert_eq!(s.get_cleaned_sentence(), "");
    }
}
