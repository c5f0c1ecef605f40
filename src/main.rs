//! # Glosser
//!
//! Glosser is a pipeline producing a morphologically annotated news corpus
//! from a directory of raw article/metadata file pairs.
//!
//! Each article is validated, tokenized, optionally run through a
//! morphological analyzer, and written out as one CONLL-U file plus one
//! cleaned-text file.
//!
//! ## Getting started
//!
//! ```sh
//! glosser 0.3.0
//! corpus annotation tool.
//!
//! USAGE:
//!     glosser <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help        Prints this message or the help of the given subcommand(s)
//!     pipeline    Annotate a raw article corpus into CONLL-U
//! ```
//!
use structopt::StructOpt;

#[macro_use]
extern crate log;

use glosser::analysis::LexiconAnalyzer;
use glosser::corpus::CorpusManager;
use glosser::error::Error;
use glosser::pipeline::{AnnotationPipeline, Pipeline};

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Glosser::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Glosser::Pipeline(p) => {
            let corpus = CorpusManager::new(&p.src)?;
            let pipeline = if p.morphology {
                let lexicon = p.lexicon.ok_or_else(|| {
                    Error::Custom("--morphology requires --lexicon".to_string())
                })?;
                let analyzer = LexiconAnalyzer::from_tsv(p.tagset, &lexicon)?;
                AnnotationPipeline::with_morphology(corpus, &p.dst, Box::new(analyzer))
            } else {
                AnnotationPipeline::new(corpus, &p.dst)
            };
            pipeline.run()?;
        }
    };

    Ok(())
}
