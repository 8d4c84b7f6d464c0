use crate::lexicon::{parse_lexicon_toml, Lexicon};
use crate::settings::{parse_settings_toml, Settings, DEFAULT_SETTINGS_TOML};
use crate::table::{MappingTable, DEFAULT_TOML};

/// Owned tables for tests that need something other than the globals.
pub(crate) struct Fixture {
    pub table: MappingTable,
    pub lexicon: Lexicon,
    pub settings: Settings,
}

impl Fixture {
    pub fn with_defaults() -> Self {
        Self {
            table: MappingTable::from_toml(DEFAULT_TOML).unwrap(),
            lexicon: parse_lexicon_toml(crate::lexicon::DEFAULT_TOML).unwrap(),
            settings: parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap(),
        }
    }

    pub fn table(mut self, toml: &str) -> Self {
        self.table = MappingTable::from_toml(toml).unwrap();
        self
    }

    pub fn lexicon(mut self, toml: &str) -> Self {
        self.lexicon = parse_lexicon_toml(toml).unwrap();
        self
    }

    pub fn settings(mut self, toml: &str) -> Self {
        self.settings = parse_settings_toml(toml).unwrap();
        self
    }

    pub fn transliterator(&self) -> super::Transliterator<'_> {
        super::Transliterator::new(&self.table, &self.lexicon, &self.settings)
    }
}
