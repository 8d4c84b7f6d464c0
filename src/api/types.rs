use translit_core::lexicon::LexicalClass;
use translit_core::{ExplainResult, ExplainSegment, Rule};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum TranslitError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

impl TranslitError {
    pub(super) fn invalid(e: impl std::fmt::Display) -> Self {
        Self::InvalidData { msg: e.to_string() }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, uniffi::Record)]
pub struct TranslitSegment {
    pub start: u32,
    pub source: String,
    pub output: String,
    pub rule: TranslitRule,
}

#[derive(Debug, uniffi::Record)]
pub struct TranslitExplain {
    pub word: String,
    pub output: String,
    pub segments: Vec<TranslitSegment>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum TranslitRule {
    Table,
    GlottalElided,
    GlottalEjective,
    InitialGlide,
    PostGlottalGlide,
    CapsGlide,
    FinalNasal,
    FinalPlain,
    FinalUnsure,
    Passthrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum TranslitLexicalClass {
    Blacklisted,
    Unsure,
    Unlisted,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<Rule> for TranslitRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::Table => Self::Table,
            Rule::GlottalElided => Self::GlottalElided,
            Rule::GlottalEjective => Self::GlottalEjective,
            Rule::InitialGlide => Self::InitialGlide,
            Rule::PostGlottalGlide => Self::PostGlottalGlide,
            Rule::CapsGlide => Self::CapsGlide,
            Rule::FinalNasal => Self::FinalNasal,
            Rule::FinalPlain => Self::FinalPlain,
            Rule::FinalUnsure => Self::FinalUnsure,
            Rule::Passthrough => Self::Passthrough,
        }
    }
}

impl From<LexicalClass> for TranslitLexicalClass {
    fn from(class: LexicalClass) -> Self {
        match class {
            LexicalClass::Blacklisted => Self::Blacklisted,
            LexicalClass::Unsure => Self::Unsure,
            LexicalClass::Unlisted => Self::Unlisted,
        }
    }
}

impl From<ExplainSegment> for TranslitSegment {
    fn from(seg: ExplainSegment) -> Self {
        Self {
            start: u32::try_from(seg.start).unwrap_or(u32::MAX),
            source: seg.source,
            output: seg.output,
            rule: seg.rule.into(),
        }
    }
}

impl From<ExplainResult> for TranslitExplain {
    fn from(r: ExplainResult) -> Self {
        Self {
            word: r.word,
            output: r.output,
            segments: r.segments.into_iter().map(Into::into).collect(),
        }
    }
}
