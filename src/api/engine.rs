use std::sync::Arc;

use translit_core::lexicon::{parse_lexicon_toml, Lexicon};
use translit_core::settings::{parse_settings_toml, settings, Settings};
use translit_core::table::MappingTable;
use translit_core::Transliterator;

use super::{TranslitError, TranslitExplain};

/// A transliterator with its own tables. Any config left out is copied from
/// the global one.
#[derive(uniffi::Object)]
pub struct TranslitEngine {
    table: MappingTable,
    lexicon: Lexicon,
    settings: Settings,
}

#[uniffi::export]
impl TranslitEngine {
    #[uniffi::constructor]
    pub fn new(
        table_toml: Option<String>,
        lexicon_toml: Option<String>,
        settings_toml: Option<String>,
    ) -> Result<Arc<Self>, TranslitError> {
        let table = match table_toml {
            Some(t) => MappingTable::from_toml(&t).map_err(TranslitError::invalid)?,
            None => MappingTable::global().clone(),
        };
        let lexicon = match lexicon_toml {
            Some(t) => parse_lexicon_toml(&t).map_err(TranslitError::invalid)?,
            None => Lexicon::global().clone(),
        };
        let settings = match settings_toml {
            Some(t) => parse_settings_toml(&t).map_err(TranslitError::invalid)?,
            None => settings().clone(),
        };
        Ok(Arc::new(Self {
            table,
            lexicon,
            settings,
        }))
    }

    pub fn word(&self, word: String) -> String {
        self.transliterator().word(&word)
    }

    pub fn text(&self, text: String) -> String {
        self.transliterator().text(&text)
    }

    pub fn explain(&self, word: String) -> TranslitExplain {
        self.transliterator().explain(&word).into()
    }
}

impl TranslitEngine {
    fn transliterator(&self) -> Transliterator<'_> {
        Transliterator::new(&self.table, &self.lexicon, &self.settings)
    }
}
