use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::debug_span;

use super::Transliterator;

/// "а" as a word of its own: the conjunction, spelled with a schwa.
const STANDALONE_VOWEL: &str = r"\b[аА]\b";
const SCHWA: (&str, &str) = ("ə", "Ə");

fn standalone_vowel() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(STANDALONE_VOWEL).expect("standalone vowel pattern must compile"))
}

/// Rewrite every free-standing "а"/"А" to the schwa. Word boundaries are
/// Unicode `\b`, so whitespace, punctuation and the ends of the text all
/// delimit; letters, digits and "_" do not.
pub(super) fn mark_standalone_vowels(text: &str) -> Cow<'_, str> {
    standalone_vowel().replace_all(text, |caps: &Captures| {
        if &caps[0] == "а" {
            SCHWA.0
        } else {
            SCHWA.1
        }
    })
}

/// Transliterate each non-whitespace run as a word. Whitespace is copied
/// verbatim, so repeated, leading and trailing spaces survive unchanged.
pub(super) fn transliterate(tr: &Transliterator<'_>, text: &str) -> String {
    let _span = debug_span!("transliterate_text", len = text.len()).entered();

    let text = if tr.settings().prepass.standalone_vowel {
        mark_standalone_vowels(text)
    } else {
        Cow::Borrowed(text)
    };

    let mut out = String::with_capacity(text.len());
    let mut token_start = None;
    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(start) = token_start.take() {
                tr.push_word(&text[start..idx], &mut out);
            }
            out.push(ch);
        } else if token_start.is_none() {
            token_start = Some(idx);
        }
    }
    if let Some(start) = token_start {
        tr.push_word(&text[start..], &mut out);
    }
    out
}
