//! CONLL-U sentence and token model.
//!
//! [ConlluSentence] and [ConlluToken] are built fresh per pipeline run per
//! article, rendered, and discarded; nothing here touches the filesystem.
mod sentence;
mod token;

pub use sentence::ConlluSentence;
pub use token::{ConlluToken, MorphologicalToken};
