//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use glosser::tagset::TagsetKind;

#[derive(Debug, StructOpt)]
#[structopt(name = "glosser", about = "corpus annotation tool.")]
/// Holds every command that is callable by the `glosser` command.
pub enum Glosser {
    #[structopt(about = "Annotate a raw article corpus into CONLL-U")]
    Pipeline(Pipeline),
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
pub struct Pipeline {
    #[structopt(parse(from_os_str), help = "raw corpus location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of annotated files")]
    pub dst: PathBuf,
    #[structopt(
        long = "morphology",
        help = "populate lemma/POS/feature columns (extended variant)"
    )]
    pub morphology: bool,
    #[structopt(
        long = "tagset",
        default_value = "mystem",
        help = "analyzer tagset (mystem or opencorpora)"
    )]
    pub tagset: TagsetKind,
    #[structopt(
        parse(from_os_str),
        long = "lexicon",
        help = "analyzer lexicon file (form<TAB>lemma<TAB>tag)"
    )]
    pub lexicon: Option<PathBuf>,
}
