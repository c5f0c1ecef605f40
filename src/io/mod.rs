/*!
# IO utilities

Per-article output file writing.
!*/
pub mod writer;

pub use writer::ArticleWriter;
