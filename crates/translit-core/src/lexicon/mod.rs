//! Whole-word exceptions to the word-final nasal rule.
//!
//! Two closed word lists: the blacklist keeps a final "н" as a plain "n",
//! the unsure list nasalises it but flags the result for review. Lookups
//! compare the whole token, ignoring case.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_TOML: &str = include_str!("default_lexicon.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Lexicon> = OnceLock::new();

/// Returns the embedded default lexicon TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: &'static str },
    #[error("word {0:?} is in both blacklist and unsure")]
    Overlap(String),
    #[error("lexicon already initialized")]
    AlreadyInitialized,
}

/// Which list, if any, a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalClass {
    Blacklisted,
    Unsure,
    Unlisted,
}

#[derive(Deserialize)]
struct LexiconConfig {
    #[serde(default)]
    blacklist: Vec<String>,
    #[serde(default)]
    unsure: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    blacklist: HashSet<String>,
    unsure: HashSet<String>,
}

impl Lexicon {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), LexiconConfigError> {
        parse_lexicon_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(LexiconConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| LexiconConfigError::AlreadyInitialized)?;
        debug!("custom lexicon installed");
        Ok(())
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Lexicon {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            parse_lexicon_toml(toml_str).expect("lexicon TOML must be valid")
        })
    }

    pub fn classify(&self, word: &str) -> LexicalClass {
        let lower = word.to_lowercase();
        if self.blacklist.contains(&lower) {
            LexicalClass::Blacklisted
        } else if self.unsure.contains(&lower) {
            LexicalClass::Unsure
        } else {
            LexicalClass::Unlisted
        }
    }

    pub fn is_blacklisted(&self, word: &str) -> bool {
        self.classify(word) == LexicalClass::Blacklisted
    }

    pub fn is_unsure(&self, word: &str) -> bool {
        self.classify(word) == LexicalClass::Unsure
    }

    /// Blacklisted words, sorted.
    pub fn blacklist(&self) -> Vec<&str> {
        sorted(&self.blacklist)
    }

    /// Words flagged for review, sorted.
    pub fn unsure(&self) -> Vec<&str> {
        sorted(&self.unsure)
    }
}

fn sorted(set: &HashSet<String>) -> Vec<&str> {
    let mut words: Vec<&str> = set.iter().map(String::as_str).collect();
    words.sort_unstable();
    words
}

pub fn parse_lexicon_toml(toml_str: &str) -> Result<Lexicon, LexiconConfigError> {
    let config: LexiconConfig =
        toml::from_str(toml_str).map_err(|e| LexiconConfigError::Parse(e.to_string()))?;

    let blacklist = collect_words(config.blacklist)?;
    let unsure = collect_words(config.unsure)?;

    if let Some(word) = blacklist.intersection(&unsure).next() {
        return Err(LexiconConfigError::Overlap(word.clone()));
    }

    Ok(Lexicon { blacklist, unsure })
}

fn collect_words(words: Vec<String>) -> Result<HashSet<String>, LexiconConfigError> {
    let mut set = HashSet::with_capacity(words.len());
    for word in words {
        let reason = if word.is_empty() {
            Some("must not be empty")
        } else if word.chars().any(char::is_whitespace) {
            Some("must be a single word")
        } else if word.to_lowercase() != word {
            Some("must be lowercase")
        } else if !word.ends_with('н') {
            Some("must end in \"н\"")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(LexiconConfigError::InvalidWord { word, reason });
        }
        set.insert(word);
    }
    Ok(set)
}
