//! Transliteration engine for hosts: UniFFI bindings over `translit-core`
//! plus optional tracing to a JSON log file.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use translit_core::{alphabet, converter, lexicon, settings, table};
