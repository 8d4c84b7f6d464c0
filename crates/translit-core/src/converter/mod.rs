//! Chechen Cyrillic to Latin conversion.
//!
//! Each word is scanned left to right, taking the longest table key (up to
//! three chars) at every position. A few single-letter keys are resolved by
//! context instead of by the table: the hard sign before a glide vowel,
//! word-initial "е", and word-final "н" (checked against the lexicon).
//! Text is split on whitespace after rewriting a free-standing "а".

pub mod explain;
mod rules;
mod text;
#[cfg(test)]
pub(crate) mod testutil;
mod word;

#[cfg(test)]
mod tests;

use tracing::debug_span;

use crate::lexicon::Lexicon;
use crate::settings::{settings, Settings};
use crate::table::MappingTable;

pub use explain::{ExplainResult, ExplainSegment};
pub use rules::Rule;

/// A view over one mapping table, lexicon and settings. Holds only shared
/// references, so it is cheap to copy and safe to use from many threads.
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'a> {
    table: &'a MappingTable,
    lexicon: &'a Lexicon,
    settings: &'a Settings,
}

impl Transliterator<'static> {
    /// Transliterator over the global table, lexicon and settings.
    pub fn global() -> Self {
        Self::new(MappingTable::global(), Lexicon::global(), settings())
    }
}

impl<'a> Transliterator<'a> {
    pub fn new(table: &'a MappingTable, lexicon: &'a Lexicon, settings: &'a Settings) -> Self {
        Self {
            table,
            lexicon,
            settings,
        }
    }

    pub fn table(&self) -> &'a MappingTable {
        self.table
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    /// Transliterate a single whitespace-free token.
    pub fn word(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len());
        self.push_word(word, &mut out);
        out
    }

    /// Transliterate running text, keeping its whitespace as is.
    pub fn text(&self, text: &str) -> String {
        text::transliterate(self, text)
    }

    /// Like [`word`](Self::word), but records every scanner step.
    pub fn explain(&self, word: &str) -> ExplainResult {
        explain::explain(self, word)
    }

    fn push_word(&self, word: &str, out: &mut String) {
        let _span = debug_span!("transliterate_word", len = word.len()).entered();
        let chars: Vec<char> = word.chars().collect();
        word::scan(self, &chars, |_, _, output, _| out.push_str(output));
    }
}

/// Transliterate one token with the global tables.
pub fn transliterate_word(word: &str) -> String {
    Transliterator::global().word(word)
}

/// Transliterate text with the global tables.
pub fn transliterate_text(text: &str) -> String {
    Transliterator::global().text(text)
}

/// Explain one token with the global tables.
pub fn explain_word(word: &str) -> ExplainResult {
    Transliterator::global().explain(word)
}
