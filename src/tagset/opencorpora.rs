//! Conversion of OpenCorpora tags to Universal Dependencies.
//!
//! Unlike Mystem, OpenCorpora-flavoured analyzers expose a structured tag:
//! a POS marker plus one grammeme per grammatical category. [OpenCorporaTag]
//! models that record and also parses the canonical string rendering
//! (`NOUN,anim,masc sing,nomn` — grammemes separated by `,` or whitespace).
use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use lazy_static::lazy_static;

use super::ud::UdPos;

lazy_static! {
    /// POS marker -> UD POS.
    static ref POS: HashMap<&'static str, UdPos> = [
        ("NOUN", UdPos::Noun),
        ("VERB", UdPos::Verb),
        ("INFN", UdPos::Verb),
        ("PRTF", UdPos::Verb),
        ("PRTS", UdPos::Verb),
        ("GRND", UdPos::Verb),
        ("ADJF", UdPos::Adj),
        ("ADJS", UdPos::Adj),
        ("COMP", UdPos::Adv),
        ("NUMR", UdPos::Num),
        ("NUMB", UdPos::Num),
        ("ROMN", UdPos::Num),
        ("ADVB", UdPos::Adv),
        ("NPRO", UdPos::Pron),
        ("PRED", UdPos::Adv),
        ("PREP", UdPos::Adp),
        ("CONJ", UdPos::Cconj),
        ("PRCL", UdPos::Part),
        ("INTJ", UdPos::Intj),
        ("PNCT", UdPos::Punct),
    ]
    .into_iter()
    .collect();

    /// OpenCorpora grammeme -> UD feature key/value.
    static ref FEATS: HashMap<&'static str, (&'static str, &'static str)> = [
        // case
        ("nomn", ("Case", "Nom")),
        ("gent", ("Case", "Gen")),
        ("gen2", ("Case", "Gen")),
        ("datv", ("Case", "Dat")),
        ("accs", ("Case", "Acc")),
        ("acc2", ("Case", "Acc")),
        ("ablt", ("Case", "Ins")),
        ("loct", ("Case", "Loc")),
        ("loc2", ("Case", "Loc")),
        ("voct", ("Case", "Voc")),
        // gender
        ("masc", ("Gender", "Masc")),
        ("femn", ("Gender", "Fem")),
        ("neut", ("Gender", "Neut")),
        // number
        ("sing", ("Number", "Sing")),
        ("plur", ("Number", "Plur")),
        // animacy
        ("anim", ("Animacy", "Anim")),
        ("inan", ("Animacy", "Inan")),
        // tense
        ("pres", ("Tense", "Pres")),
        ("past", ("Tense", "Past")),
        ("futr", ("Tense", "Fut")),
        // aspect
        ("perf", ("Aspect", "Perf")),
        ("impf", ("Aspect", "Imp")),
        // voice
        ("actv", ("Voice", "Act")),
        ("pssv", ("Voice", "Pass")),
        // person
        ("1per", ("Person", "1")),
        ("2per", ("Person", "2")),
        ("3per", ("Person", "3")),
    ]
    .into_iter()
    .collect();
}

/// Grammeme categories recognized when parsing the string rendering.
const CASES: &[&str] = &[
    "nomn", "gent", "gen2", "datv", "accs", "acc2", "ablt", "loct", "loc2", "voct",
];
const GENDERS: &[&str] = &["masc", "femn", "neut"];
const NUMBERS: &[&str] = &["sing", "plur"];
const TENSES: &[&str] = &["pres", "past", "futr"];
const ASPECTS: &[&str] = &["perf", "impf"];
const VOICES: &[&str] = &["actv", "pssv"];
const ANIMACIES: &[&str] = &["anim", "inan"];
const PERSONS: &[&str] = &["1per", "2per", "3per"];

/// Structured OpenCorpora tag: POS marker plus per-category grammemes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenCorporaTag {
    pos: String,
    case: Option<String>,
    gender: Option<String>,
    number: Option<String>,
    tense: Option<String>,
    aspect: Option<String>,
    voice: Option<String>,
    animacy: Option<String>,
    person: Option<String>,
}

impl OpenCorporaTag {
    pub fn new(pos: &str) -> Self {
        OpenCorporaTag {
            pos: pos.to_string(),
            ..Default::default()
        }
    }

    pub fn pos(&self) -> &str {
        &self.pos
    }

    pub fn case(&self) -> Option<&str> {
        self.case.as_deref()
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    pub fn tense(&self) -> Option<&str> {
        self.tense.as_deref()
    }

    pub fn aspect(&self) -> Option<&str> {
        self.aspect.as_deref()
    }

    pub fn voice(&self) -> Option<&str> {
        self.voice.as_deref()
    }

    pub fn animacy(&self) -> Option<&str> {
        self.animacy.as_deref()
    }

    pub fn person(&self) -> Option<&str> {
        self.person.as_deref()
    }

    /// Every grammeme held by the record, category order.
    fn grammemes(&self) -> impl Iterator<Item = &str> {
        [
            &self.case,
            &self.gender,
            &self.number,
            &self.tense,
            &self.aspect,
            &self.voice,
            &self.animacy,
            &self.person,
        ]
        .into_iter()
        .filter_map(|slot| slot.as_deref())
    }
}

impl From<&str> for OpenCorporaTag {
    /// Parses the canonical rendering. The first grammeme is the POS marker;
    /// the rest are slotted by category membership, unknown ones dropped.
    fn from(rendering: &str) -> Self {
        let mut grammemes = rendering
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(str::trim)
            .filter(|g| !g.is_empty());

        let mut tag = OpenCorporaTag::new(grammemes.next().unwrap_or(""));
        for grammeme in grammemes {
            let slot = if CASES.contains(&grammeme) {
                &mut tag.case
            } else if GENDERS.contains(&grammeme) {
                &mut tag.gender
            } else if NUMBERS.contains(&grammeme) {
                &mut tag.number
            } else if TENSES.contains(&grammeme) {
                &mut tag.tense
            } else if ASPECTS.contains(&grammeme) {
                &mut tag.aspect
            } else if VOICES.contains(&grammeme) {
                &mut tag.voice
            } else if ANIMACIES.contains(&grammeme) {
                &mut tag.animacy
            } else if PERSONS.contains(&grammeme) {
                &mut tag.person
            } else {
                continue;
            };
            slot.get_or_insert_with(|| grammeme.to_string());
        }
        tag
    }
}

/// Maps the POS marker to UD, degrading to [UdPos::X] for unknown markers.
pub fn convert_pos(tag: &OpenCorporaTag) -> UdPos {
    POS.get(tag.pos()).copied().unwrap_or(UdPos::X)
}

/// Maps the record's grammemes to UD features, alphabetically ordered by key
/// and `|`-joined. Returns an empty string when nothing maps.
pub fn convert_morphological_tags(tag: &OpenCorporaTag) -> String {
    let mut feats: BTreeMap<&str, &str> = BTreeMap::new();
    for grammeme in tag.grammemes() {
        if let Some(&(key, value)) = FEATS.get(grammeme) {
            feats.entry(key).or_insert(value);
        }
    }
    feats
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_rendering() {
        let tag = OpenCorporaTag::from("NOUN,anim,masc sing,nomn");
        assert_eq!(tag.pos(), "NOUN");
        assert_eq!(tag.case(), Some("nomn"));
        assert_eq!(tag.gender(), Some("masc"));
        assert_eq!(tag.number(), Some("sing"));
        assert_eq!(tag.animacy(), Some("anim"));
        assert_eq!(tag.tense(), None);
    }

    #[test]
    fn noun_with_features() {
        let tag = OpenCorporaTag::from("NOUN,anim,masc sing,nomn");
        assert_eq!(convert_pos(&tag), UdPos::Noun);
        assert_eq!(
            convert_morphological_tags(&tag),
            "Animacy=Anim|Case=Nom|Gender=Masc|Number=Sing"
        );
    }

    #[test]
    fn verb_past_tense() {
        let tag = OpenCorporaTag::from("VERB,perf,intr masc,sing,past,indc");
        assert_eq!(convert_pos(&tag), UdPos::Verb);
        assert_eq!(
            convert_morphological_tags(&tag),
            "Aspect=Perf|Gender=Masc|Number=Sing|Tense=Past"
        );
    }

    #[test]
    fn unknown_pos_degrades_to_x() {
        let tag = OpenCorporaTag::from("UNKN");
        assert_eq!(convert_pos(&tag), UdPos::X);
        assert_eq!(convert_morphological_tags(&tag), "");
    }

    #[test]
    fn empty_tag_degrades_to_x() {
        let tag = OpenCorporaTag::default();
        assert_eq!(convert_pos(&tag), UdPos::X);
        assert_eq!(convert_morphological_tags(&tag), "");
    }
}
