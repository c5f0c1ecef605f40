/*! Text segmentation.

Deterministic sentence splitting and tokenization of raw article text.

The sentence-boundary heuristic is fixed (it pins the golden test fixtures):
a boundary is a maximal run of terminal punctuation (`.`, `!`, `?`, `…`),
optionally followed by closing quotes/brackets, followed by at least one
whitespace character, where the next non-space character opens a sentence
(an uppercase letter, a digit, an opening quote/bracket, or a dash).
Line breaks are unconditional boundaries.
!*/
use unicode_segmentation::UnicodeSegmentation;

const TERMINALS: &[char] = &['.', '!', '?', '…'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '»', '”', '’'];
const OPENERS: &[char] = &['"', '\'', '(', '[', '«', '“', '‘', '—', '–', '-'];

fn opens_sentence(c: char) -> bool {
    c.is_uppercase() || c.is_ascii_digit() || OPENERS.contains(&c)
}

/// Splits raw text into sentences. Whitespace-only fragments are dropped,
/// surviving fragments are trimmed.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for line in text.lines() {
        split_line(line, &mut sentences);
    }
    sentences
}

fn split_line(line: &str, out: &mut Vec<String>) {
    let chars: Vec<char> = line.chars().collect();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !TERMINALS.contains(&chars[i]) {
            i += 1;
            continue;
        }
        // absorb the terminal run and any trailing closers
        let mut end = i + 1;
        while end < chars.len() && (TERMINALS.contains(&chars[end]) || CLOSERS.contains(&chars[end]))
        {
            end += 1;
        }
        // a boundary needs whitespace plus a sentence-opening character
        let mut next = end;
        while next < chars.len() && chars[next].is_whitespace() {
            next += 1;
        }
        if next > end && next < chars.len() && opens_sentence(chars[next]) {
            push_fragment(&chars[start..end], out);
            start = next;
            i = next;
        } else {
            i = end;
        }
    }
    push_fragment(&chars[start..], out);
}

fn push_fragment(chars: &[char], out: &mut Vec<String>) {
    let fragment: String = chars.iter().collect();
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        out.push(fragment.to_string());
    }
}

/// Splits a sentence into surface tokens on Unicode word boundaries.
/// Whitespace is dropped; punctuation marks come out as their own tokens.
pub fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .split_word_bounds()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
