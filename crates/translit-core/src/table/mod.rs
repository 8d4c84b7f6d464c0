//! Cyrillic-to-Latin mapping table.
//!
//! Grapheme clusters of one to three characters live in a char trie so the
//! converter finds the longest key at a position in a single walk. The table
//! is plain data: every case variant of a cluster is its own key.

mod config;
mod trie;

pub use config::{parse_table_toml, TableConfigError};
pub use trie::{MappingTable, TrieLookupResult, MAX_KEY_CHARS};

pub const DEFAULT_TOML: &str = include_str!("default_table.toml");

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
