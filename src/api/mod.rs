//! UniFFI export layer: the surface a host application (web view, native UI)
//! calls with a string and renders the returned string.
//!
//! Each public type here maps to a generated foreign class, record, or enum.

mod engine;
mod types;


pub use engine::TranslitEngine;
pub use types::{
    TranslitError, TranslitExplain, TranslitLexicalClass, TranslitRule, TranslitSegment,
};

use std::path::Path;

use translit_core::lexicon::Lexicon;
use translit_core::table::MappingTable;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn transliterate_word(word: String) -> String {
    translit_core::transliterate_word(&word)
}

#[uniffi::export]
fn transliterate_text(text: String) -> String {
    translit_core::transliterate_text(&text)
}

#[uniffi::export]
fn explain_word(word: String) -> TranslitExplain {
    translit_core::explain_word(&word).into()
}

#[uniffi::export]
fn table_lookup(key: String) -> Option<String> {
    MappingTable::global().get(&key).map(str::to_string)
}

#[uniffi::export]
fn lexicon_classify(word: String) -> TranslitLexicalClass {
    Lexicon::global().classify(&word).into()
}

fn read_config(path: &str) -> Result<String, TranslitError> {
    std::fs::read_to_string(path).map_err(|e| TranslitError::Io {
        msg: format!("{path}: {e}"),
    })
}

#[uniffi::export]
fn table_load_config(path: String) -> Result<(), TranslitError> {
    let content = read_config(&path)?;
    MappingTable::init_custom(content).map_err(TranslitError::invalid)
}

#[uniffi::export]
fn lexicon_load_config(path: String) -> Result<(), TranslitError> {
    let content = read_config(&path)?;
    Lexicon::init_custom(content).map_err(TranslitError::invalid)
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), TranslitError> {
    let content = read_config(&path)?;
    translit_core::settings::init_custom(content).map_err(TranslitError::invalid)
}

#[uniffi::export]
fn table_default_config() -> String {
    translit_core::table::default_toml().to_string()
}

#[uniffi::export]
fn lexicon_default_config() -> String {
    translit_core::lexicon::default_toml().to_string()
}

#[uniffi::export]
fn settings_default_config() -> String {
    translit_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
