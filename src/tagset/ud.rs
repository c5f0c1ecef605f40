//! Universal Dependencies part-of-speech inventory.
use std::fmt;

/// Closed set of UD POS tags emitted by the converters.
///
/// [UdPos::X] doubles as the fallback for source tags that no mapping table
/// knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UdPos {
    Noun,
    Verb,
    Adj,
    Adv,
    Pron,
    Adp,
    Num,
    Cconj,
    Sconj,
    Part,
    Intj,
    Punct,
    Sym,
    X,
    Aux,
    Det,
}

impl UdPos {
    pub fn as_str(&self) -> &'static str {
        match self {
            UdPos::Noun => "NOUN",
            UdPos::Verb => "VERB",
            UdPos::Adj => "ADJ",
            UdPos::Adv => "ADV",
            UdPos::Pron => "PRON",
            UdPos::Adp => "ADP",
            UdPos::Num => "NUM",
            UdPos::Cconj => "CCONJ",
            UdPos::Sconj => "SCONJ",
            UdPos::Part => "PART",
            UdPos::Intj => "INTJ",
            UdPos::Punct => "PUNCT",
            UdPos::Sym => "SYM",
            UdPos::X => "X",
            UdPos::Aux => "AUX",
            UdPos::Det => "DET",
        }
    }
}

impl Default for UdPos {
    fn default() -> Self {
        UdPos::X
    }
}

impl fmt::Display for UdPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
