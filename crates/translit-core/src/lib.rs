//! Chechen Cyrillic to Latin transliteration.
//!
//! The engine is a greedy longest-match scanner over an embedded mapping
//! table, with a handful of context rules and two whole-word exception lists.
//! All tables are immutable process-wide singletons; every call is pure.

pub mod alphabet;
pub mod converter;
pub mod lexicon;
pub mod settings;
pub mod table;

pub use converter::{
    explain_word, transliterate_text, transliterate_word, ExplainResult, ExplainSegment, Rule,
    Transliterator,
};
