//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait and the
//! [AnnotationPipeline], which turns a validated corpus into per-article
//! CONLL-U and cleaned-text files.
mod annotate;
pub mod pipeline;

pub use annotate::AnnotationPipeline;
pub use pipeline::Pipeline;
