use std::collections::BTreeMap;

use serde::Deserialize;

use super::MAX_KEY_CHARS;

#[derive(Deserialize)]
struct TableConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key must be 1 to 3 characters long: {0:?}")]
    KeyLength(String),
    #[error("key {key:?} starts with {prefix:?}, which has no entry of its own")]
    MissingFallback { key: String, prefix: char },
    #[error("mapping table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<cluster, latin>`.
///
/// Empty values are allowed and mean the cluster is dropped from the output.
pub fn parse_table_toml(toml_str: &str) -> Result<BTreeMap<String, String>, TableConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(TableConfigError::Empty);
    }

    for key in config.mappings.keys() {
        let len = key.chars().count();
        if len == 0 || len > MAX_KEY_CHARS {
            return Err(TableConfigError::KeyLength(key.clone()));
        }
        if len == 1 {
            continue;
        }
        // The scanner falls back to the first char alone when a longer
        // cluster is cut short, so that char must be mapped too.
        if let Some(prefix) = key.chars().next() {
            let mut buf = [0u8; 4];
            if !config.mappings.contains_key(&*prefix.encode_utf8(&mut buf)) {
                return Err(TableConfigError::MissingFallback {
                    key: key.clone(),
                    prefix,
                });
            }
        }
    }

    Ok(config.mappings)
}
