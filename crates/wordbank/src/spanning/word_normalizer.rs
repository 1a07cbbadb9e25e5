//! # Word Normalizer

use std::sync::LazyLock;

use regex::Regex;

/// Characters which are neither word characters nor whitespace.
///
/// `\w` is the Unicode word class: alphabetic chars, combining marks,
/// decimal digits, connector punctuation (`_`, `‿`) and join controls.
pub const NON_WORD_PATTERN: &str = r"[^\w\s]";

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NON_WORD_PATTERN).expect("NON_WORD_PATTERN is a valid regex"));

/// Lower-case `text` and replace every non-word, non-whitespace character with a space.
///
/// Whitespace is left as-is; see [`normalize_text`] for the collapsed form.
pub fn clean_text(text: &str) -> String {
    NON_WORD
        .replace_all(&text.to_lowercase(), " ")
        .into_owned()
}

/// Split `text` into normalized words.
///
/// Lower-cases, strips punctuation, and splits on whitespace runs;
/// empty fragments are dropped. Total over all inputs.
///
/// ## Arguments
/// * `text` - The raw text.
///
/// ## Returns
/// The words, in input order.
pub fn normalize(text: &str) -> Vec<String> {
    clean_text(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// The normalized form of `text`: its words joined by single spaces.
pub fn normalize_text(text: &str) -> String {
    normalize(text).join(" ")
}
