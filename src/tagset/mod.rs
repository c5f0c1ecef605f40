/*! Tagset-to-UD conversion.

Each supported morphological analyzer speaks its own tag vocabulary; this
module normalizes both into Universal Dependencies POS tags and feature
strings. The supported tagsets form a closed set ([TagsetKind]), and each
strategy lives in its own submodule with a static mapping table that is
testable in isolation.
!*/
use std::str::FromStr;

pub mod mystem;
pub mod opencorpora;
pub mod ud;

pub use opencorpora::OpenCorporaTag;
pub use ud::UdPos;

/// The supported analyzer tagsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagsetKind {
    Mystem,
    OpenCorpora,
}

impl TagsetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagsetKind::Mystem => "mystem",
            TagsetKind::OpenCorpora => "opencorpora",
        }
    }
}

impl FromStr for TagsetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mystem" => Ok(TagsetKind::Mystem),
            "opencorpora" => Ok(TagsetKind::OpenCorpora),
            other => Err(format!("unknown tagset: {}", other)),
        }
    }
}

/// An analyzer-produced tag, in whichever shape its tagset uses.
///
/// Dispatches conversion to the matching static mapping table.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzerTag {
    /// Mystem delimited tag string, e.g. `S,persn,masc,sing,nom`.
    Mystem(String),
    /// OpenCorpora structured grammeme record.
    OpenCorpora(OpenCorporaTag),
}

impl AnalyzerTag {
    pub fn kind(&self) -> TagsetKind {
        match self {
            AnalyzerTag::Mystem(_) => TagsetKind::Mystem,
            AnalyzerTag::OpenCorpora(_) => TagsetKind::OpenCorpora,
        }
    }

    /// UD POS tag for this analysis. Unknown source tags map to [UdPos::X].
    pub fn convert_pos(&self) -> UdPos {
        match self {
            AnalyzerTag::Mystem(tag) => mystem::convert_pos(tag),
            AnalyzerTag::OpenCorpora(tag) => opencorpora::convert_pos(tag),
        }
    }

    /// UD feature string for this analysis, alphabetically ordered
    /// `Key=Value` pairs joined by `|`, empty when nothing maps.
    pub fn convert_morphological_tags(&self) -> String {
        match self {
            AnalyzerTag::Mystem(tag) => mystem::convert_morphological_tags(tag),
            AnalyzerTag::OpenCorpora(tag) => opencorpora::convert_morphological_tags(tag),
        }
    }
}
