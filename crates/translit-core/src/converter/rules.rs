use std::borrow::Cow;

use serde::Serialize;
use tracing::debug;

use crate::alphabet::{eq_ignore_case, is_shouted};
use crate::lexicon::LexicalClass;

use super::Transliterator;

/// The rule that produced one segment of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Stored table value.
    Table,
    /// Hard sign dropped before a glide vowel.
    GlottalElided,
    /// Hard sign after "к" before a glide vowel, read as the ejective.
    GlottalEjective,
    /// Word-initial "е" read as "ye".
    InitialGlide,
    /// "е" after a bare hard sign read as "ye".
    PostGlottalGlide,
    /// Titlecase table value raised to capitals inside an all-caps word.
    CapsGlide,
    /// Word-final "н" nasalised.
    FinalNasal,
    /// Word-final "н" kept plain (blacklisted word).
    FinalPlain,
    /// Word-final "н" nasalised and flagged for review.
    FinalUnsure,
    /// Character with no table entry, copied as is.
    Passthrough,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::Table => "table",
            Rule::GlottalElided => "glottal_elided",
            Rule::GlottalEjective => "glottal_ejective",
            Rule::InitialGlide => "initial_glide",
            Rule::PostGlottalGlide => "post_glottal_glide",
            Rule::CapsGlide => "caps_glide",
            Rule::FinalNasal => "final_nasal",
            Rule::FinalPlain => "final_plain",
            Rule::FinalUnsure => "final_unsure",
            Rule::Passthrough => "passthrough",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(super) struct Resolved<'t> {
    pub output: Cow<'t, str>,
    pub rule: Rule,
}

impl<'t> Resolved<'t> {
    fn borrowed(output: &'t str, rule: Rule) -> Self {
        Self {
            output: Cow::Borrowed(output),
            rule,
        }
    }
}

const HARD_SIGN: char = 'ъ';
const GLIDE_VOWELS: [char; 4] = ['е', 'ё', 'ю', 'я'];
const EJECTIVE_BASE: char = 'к';
const EJECTIVE_GLIDE: (&str, &str) = ("q\u{307}", "Q\u{307}");
const FRONT_VOWEL: char = 'е';
const FRONT_GLIDE: (&str, &str, &str) = ("ye", "Ye", "YE");
const NASAL: char = 'н';
const DERIVED_NASAL: (&str, &str) = ("ŋ", "Ŋ");

/// Pick the output for the table key `chars[i..i + len]` whose stored value
/// is `stored`. Only single-character keys have contextual overrides.
pub(super) fn resolve<'t>(
    tr: &Transliterator<'_>,
    chars: &[char],
    i: usize,
    len: usize,
    stored: &'t str,
) -> Resolved<'t> {
    if len == 1 {
        let c = chars[i];
        let special = hard_sign(chars, i, c)
            .or_else(|| front_vowel(chars, i, c))
            .or_else(|| final_nasal(tr, chars, i, c, stored))
            .or_else(|| caps_glide(chars, i, c, stored));
        if let Some(resolved) = special {
            return resolved;
        }
    }
    Resolved::borrowed(stored, Rule::Table)
}

fn hard_sign<'t>(chars: &[char], i: usize, c: char) -> Option<Resolved<'t>> {
    if !eq_ignore_case(c, HARD_SIGN) {
        return None;
    }
    let next = *chars.get(i + 1)?;
    if !GLIDE_VOWELS.iter().any(|&v| eq_ignore_case(v, next)) {
        return None;
    }
    match i.checked_sub(1).map(|p| chars[p]) {
        Some(prev) if eq_ignore_case(prev, EJECTIVE_BASE) => {
            let output = if prev.is_uppercase() {
                EJECTIVE_GLIDE.1
            } else {
                EJECTIVE_GLIDE.0
            };
            Some(Resolved::borrowed(output, Rule::GlottalEjective))
        }
        _ => Some(Resolved::borrowed("", Rule::GlottalElided)),
    }
}

fn front_vowel<'t>(chars: &[char], i: usize, c: char) -> Option<Resolved<'t>> {
    if !eq_ignore_case(c, FRONT_VOWEL) {
        return None;
    }
    let rule = if i == 0 {
        Rule::InitialGlide
    } else if follows_bare_hard_sign(chars, i) {
        Rule::PostGlottalGlide
    } else {
        return None;
    };
    let output = if c.is_lowercase() {
        FRONT_GLIDE.0
    } else if is_shouted(chars, i) {
        FRONT_GLIDE.2
    } else {
        FRONT_GLIDE.1
    };
    Some(Resolved::borrowed(output, rule))
}

/// "ъ" right before `i`, and not as the second half of "къ".
fn follows_bare_hard_sign(chars: &[char], i: usize) -> bool {
    i >= 1
        && eq_ignore_case(chars[i - 1], HARD_SIGN)
        && !(i >= 2 && eq_ignore_case(chars[i - 2], EJECTIVE_BASE))
}

fn final_nasal<'t>(
    tr: &Transliterator<'_>,
    chars: &[char],
    i: usize,
    c: char,
    stored: &'t str,
) -> Option<Resolved<'t>> {
    if !eq_ignore_case(c, NASAL) || i + 1 != chars.len() {
        return None;
    }
    let nasal = if c.is_uppercase() {
        DERIVED_NASAL.1
    } else {
        DERIVED_NASAL.0
    };
    let word: String = chars.iter().collect();
    let resolved = match tr.lexicon().classify(&word) {
        LexicalClass::Blacklisted => Resolved::borrowed(stored, Rule::FinalPlain),
        LexicalClass::Unsure => {
            debug!(word = %word, "final nasal flagged for review");
            Resolved {
                output: Cow::Owned(format!("{nasal}{}", tr.settings().review.marker)),
                rule: Rule::FinalUnsure,
            }
        }
        LexicalClass::Unlisted => Resolved::borrowed(nasal, Rule::FinalNasal),
    };
    Some(resolved)
}

/// Capital glide vowels store a titlecase value ("Ю" → "Yu"); inside an
/// all-caps word the whole value goes up.
fn caps_glide<'t>(chars: &[char], i: usize, c: char, stored: &'t str) -> Option<Resolved<'t>> {
    if !c.is_uppercase()
        || stored.chars().nth(1).is_none()
        || !stored.chars().any(char::is_lowercase)
        || !is_shouted(chars, i)
    {
        return None;
    }
    Some(Resolved {
        output: Cow::Owned(stored.to_uppercase()),
        rule: Rule::CapsGlide,
    })
}
