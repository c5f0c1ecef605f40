//! Conversion of Mystem tag strings to Universal Dependencies.
//!
//! Mystem renders an analysis as a single delimited string: grammatical
//! categories separated by `,`, the lexical part separated from the
//! inflectional part by `=`, and alternative inflectional readings separated
//! by `|` (possibly parenthesized), e.g. `S,masc,anim=(acc,sing|gen,sing)`.
//! Only the first proposed reading is considered.
use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use lazy_static::lazy_static;

use super::ud::UdPos;

lazy_static! {
    /// Leading category marker -> UD POS.
    static ref POS: HashMap<&'static str, UdPos> = [
        ("A", UdPos::Adj),
        ("ADV", UdPos::Adv),
        ("ADVPRO", UdPos::Adv),
        ("ANUM", UdPos::Adj),
        ("APRO", UdPos::Det),
        ("COM", UdPos::Adj),
        ("CONJ", UdPos::Cconj),
        ("INTJ", UdPos::Intj),
        ("NUM", UdPos::Num),
        ("PART", UdPos::Part),
        ("PR", UdPos::Adp),
        ("S", UdPos::Noun),
        ("SPRO", UdPos::Pron),
        ("V", UdPos::Verb),
    ]
    .into_iter()
    .collect();

    /// Mystem grammeme -> UD feature key/value.
    ///
    /// Grammemes absent from this table (proper-noun classes, topicality
    /// markers, ...) carry no UD equivalent and are skipped.
    static ref FEATS: HashMap<&'static str, (&'static str, &'static str)> = [
        // case
        ("nom", ("Case", "Nom")),
        ("gen", ("Case", "Gen")),
        ("dat", ("Case", "Dat")),
        ("acc", ("Case", "Acc")),
        ("ins", ("Case", "Ins")),
        ("abl", ("Case", "Loc")),
        ("loc", ("Case", "Loc")),
        ("voc", ("Case", "Voc")),
        ("part", ("Case", "Par")),
        // gender
        ("masc", ("Gender", "Masc")),
        ("fem", ("Gender", "Fem")),
        ("neut", ("Gender", "Neut")),
        // number
        ("sing", ("Number", "Sing")),
        ("pl", ("Number", "Plur")),
        // animacy
        ("anim", ("Animacy", "Anim")),
        ("inan", ("Animacy", "Inan")),
        // tense
        ("praes", ("Tense", "Pres")),
        ("inpraes", ("Tense", "Pres")),
        ("praet", ("Tense", "Past")),
        // person
        ("1p", ("Person", "1")),
        ("2p", ("Person", "2")),
        ("3p", ("Person", "3")),
        // aspect
        ("ipf", ("Aspect", "Imp")),
        ("pf", ("Aspect", "Perf")),
        // voice
        ("act", ("Voice", "Act")),
        ("pass", ("Voice", "Pass")),
        // verb form and mood
        ("inf", ("VerbForm", "Inf")),
        ("partcp", ("VerbForm", "Part")),
        ("ger", ("VerbForm", "Conv")),
        ("indic", ("Mood", "Ind")),
        ("imper", ("Mood", "Imp")),
        // degree
        ("comp", ("Degree", "Cmp")),
        ("supr", ("Degree", "Sup")),
    ]
    .into_iter()
    .collect();
}

/// Grammemes of the first reading, lexical part first.
fn grammemes(tag: &str) -> impl Iterator<Item = &str> {
    let (lexical, inflected) = match tag.split_once('=') {
        Some((lexical, inflected)) => (lexical, inflected),
        None => (tag, ""),
    };
    let inflected = inflected
        .trim_start_matches('(')
        .split('|')
        .next()
        .unwrap_or("")
        .trim_end_matches(')');

    lexical
        .split(',')
        .chain(inflected.split(','))
        .map(str::trim)
        .filter(|g| !g.is_empty())
}

/// Extracts the POS marker (the leading category) and maps it to UD.
///
/// Unknown markers degrade to [UdPos::X]; analyzer vocabularies are not
/// guaranteed exhaustive and a single unseen tag must not abort a run.
pub fn convert_pos(tag: &str) -> UdPos {
    grammemes(tag)
        .next()
        .and_then(|marker| POS.get(marker))
        .copied()
        .unwrap_or(UdPos::X)
}

/// Maps every recognized grammeme to a UD feature, alphabetically ordered by
/// key and `|`-joined. Returns an empty string when nothing maps.
pub fn convert_morphological_tags(tag: &str) -> String {
    let mut feats: BTreeMap<&str, &str> = BTreeMap::new();
    for grammeme in grammemes(tag) {
        if let Some(&(key, value)) = FEATS.get(grammeme) {
            feats.entry(key).or_insert(value);
        }
    }
    feats
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .join("|")
}
