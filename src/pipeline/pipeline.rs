//! Pipeline trait.
use crate::error::Error;

/// Implemented by every pipeline flavour.
///
/// Generic over the output type so that a pipeline which produces a value
/// (statistics, a report, ...) can use the trait as well.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
