use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_table_toml, TableConfigError};
use super::DEFAULT_TOML;

/// Longest cluster the scanner will try at one position.
pub const MAX_KEY_CHARS: usize = 3;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<MappingTable> = OnceLock::new();

#[derive(Debug, PartialEq)]
pub enum TrieLookupResult {
    None,
    Prefix,
    Exact(String),
    ExactAndPrefix(String),
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<char, Node>,
    value: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MappingTable {
    root: Node,
    entries: BTreeMap<String, String>,
}

impl MappingTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableConfigError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(TableConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableConfigError::AlreadyInitialized)?;
        debug!("custom mapping table installed");
        Ok(())
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static MappingTable {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = parse_table_toml(toml_str).expect("mapping table TOML must be valid");
            Self::from_entries(map)
        })
    }

    /// Build a standalone table, independent of the global one.
    pub fn from_toml(toml_str: &str) -> Result<Self, TableConfigError> {
        Ok(Self::from_entries(parse_table_toml(toml_str)?))
    }

    fn from_entries(entries: BTreeMap<String, String>) -> Self {
        let mut root = Node::default();
        for (key, value) in &entries {
            let mut node = &mut root;
            for c in key.chars() {
                node = node.children.entry(c).or_default();
            }
            node.value = Some(value.clone());
        }
        debug!(entries = entries.len(), "mapping table built");
        Self { root, entries }
    }

    /// Exact lookup of a single cluster.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(cluster, latin)` pairs in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn lookup(&self, key: &str) -> TrieLookupResult {
        let mut node = &self.root;
        for c in key.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return TrieLookupResult::None,
            }
        }
        let has_children = !node.children.is_empty();
        match &node.value {
            Some(value) => {
                if has_children {
                    TrieLookupResult::ExactAndPrefix(value.clone())
                } else {
                    TrieLookupResult::Exact(value.clone())
                }
            }
            None => {
                if has_children {
                    TrieLookupResult::Prefix
                } else {
                    TrieLookupResult::None
                }
            }
        }
    }

    /// Longest key (at most [`MAX_KEY_CHARS`]) that starts `chars`, with its
    /// value. Returns the key length in chars.
    pub fn longest_match(&self, chars: &[char]) -> Option<(usize, &str)> {
        let mut node = &self.root;
        let mut best = None;
        for (idx, c) in chars.iter().take(MAX_KEY_CHARS).enumerate() {
            match node.children.get(c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(value) = &node.value {
                best = Some((idx + 1, value.as_str()));
            }
        }
        best
    }
}
