//! CONLL-U annotation pipeline.
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::Analyze;
use crate::conllu::{ConlluSentence, ConlluToken, MorphologicalToken};
use crate::corpus::{CorpusManager, RawArticle};
use crate::error::Error;
use crate::io::ArticleWriter;
use crate::pipeline::pipeline::Pipeline;
use crate::processing;
use crate::tagset::UdPos;

/// Annotates every article of a corpus into CONLL-U.
///
/// The basic variant tokenizes and cleans only, rendering `_` placeholders
/// in the annotation columns; attaching an analyzer turns it into the
/// extended variant, which populates lemma/POS/features per token.
///
/// Articles are processed independently on a rayon pool. Output files are
/// keyed by article id, so the produced file set is a function of the input
/// corpus alone, not of worker scheduling. Any per-article failure aborts
/// the run: downstream tooling assumes a dense, fully processed corpus, so
/// skipping an article is not an option.
pub struct AnnotationPipeline {
    corpus: CorpusManager,
    dst: PathBuf,
    analyzer: Option<Box<dyn Analyze + Send + Sync>>,
}

impl AnnotationPipeline {
    /// Basic preprocessing pipeline: tokenization and cleaning only.
    pub fn new(corpus: CorpusManager, dst: &Path) -> Self {
        AnnotationPipeline {
            corpus,
            dst: dst.to_path_buf(),
            analyzer: None,
        }
    }

    /// Extended pipeline: morphological annotation through `analyzer`.
    pub fn with_morphology(
        corpus: CorpusManager,
        dst: &Path,
        analyzer: Box<dyn Analyze + Send + Sync>,
    ) -> Self {
        AnnotationPipeline {
            corpus,
            dst: dst.to_path_buf(),
            analyzer: Some(analyzer),
        }
    }

    /// Splits raw text into [ConlluSentence]s, analyzing each token when an
    /// analyzer is attached.
    fn process(&self, text: &str) -> Result<Vec<ConlluSentence>, Error> {
        let mut sentences = Vec::new();
        for (idx, sentence_text) in processing::split_sentences(text).iter().enumerate() {
            let mut tokens = Vec::new();
            for surface in processing::tokenize(sentence_text) {
                let mut token = ConlluToken::new(&surface);
                if let Some(analyzer) = &self.analyzer {
                    let morphology = Self::analyze_token(analyzer.as_ref(), &token)?;
                    token.set_morphology(morphology);
                }
                tokens.push(token);
            }
            sentences.push(ConlluSentence::new(idx + 1, sentence_text, tokens));
        }
        Ok(sentences)
    }

    /// Annotates one token. Punctuation and plain numbers bypass the
    /// analyzer; everything else goes through it and through tag
    /// conversion, unseen words degrading to `X` with no features.
    fn analyze_token(
        analyzer: &dyn Analyze,
        token: &ConlluToken,
    ) -> Result<MorphologicalToken, Error> {
        let surface = token.text();
        if surface.chars().all(|c| !c.is_alphanumeric()) {
            return Ok(MorphologicalToken::new(surface, UdPos::Punct, ""));
        }
        if surface.chars().all(|c| c.is_ascii_digit()) {
            return Ok(MorphologicalToken::new(surface, UdPos::Num, ""));
        }
        match analyzer.analyze(token.cleaned())? {
            Some(analysis) => Ok(MorphologicalToken::new(
                analysis.lemma(),
                analysis.tag().convert_pos(),
                &analysis.tag().convert_morphological_tags(),
            )),
            None => Ok(MorphologicalToken::new(token.cleaned(), UdPos::X, "")),
        }
    }

    /// Runs one article through tokenize → analyze → render → persist.
    fn process_article(&self, article: &RawArticle, writer: &ArticleWriter) -> Result<(), Error> {
        debug!("article {}: {:?}", article.id(), article.meta().title);
        let sentences = self
            .process(article.text())
            .map_err(|e| e.with_article(article.id()))?;
        if sentences.is_empty() {
            return Err(Error::Analysis(format!(
                "article {}: raw text yields no sentences",
                article.id()
            )));
        }

        let include_morphological_tags = self.analyzer.is_some();
        let conllu: String = sentences
            .iter()
            .map(|s| s.render(include_morphological_tags))
            .collect();
        let mut cleaned: String = sentences
            .iter()
            .map(ConlluSentence::get_cleaned_sentence)
            .join("\n");
        cleaned.push('\n');

        writer.write_conllu(article.id(), &conllu)?;
        writer.write_cleaned(article.id(), &cleaned)?;
        Ok(())
    }
}

impl Pipeline<()> for AnnotationPipeline {
    fn run(&self) -> Result<(), Error> {
        let articles = self.corpus.get_articles();
        info!(
            "annotating {} articles into {:?} (morphology: {})",
            articles.len(),
            self.dst,
            self.analyzer.is_some()
        );
        let writer = ArticleWriter::new(&self.dst)?;

        articles
            .par_iter()
            .try_for_each(|(_, article)| self.process_article(article, &writer))?;

        info!("annotation run complete");
        Ok(())
    }
}
