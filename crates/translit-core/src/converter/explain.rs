use serde::Serialize;

use super::rules::Rule;
use super::word::scan;
use super::Transliterator;

/// Step-by-step account of how one word was transliterated.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainResult {
    pub word: String,
    pub output: String,
    pub segments: Vec<ExplainSegment>,
}

/// One scanner step: a table key (or an unmapped char) and what it became.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainSegment {
    /// Char offset of the cluster in the word.
    pub start: usize,
    pub source: String,
    pub output: String,
    pub rule: Rule,
}

impl ExplainResult {
    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.segments.iter().map(|s| s.rule)
    }
}

pub(super) fn explain(tr: &Transliterator<'_>, word: &str) -> ExplainResult {
    let chars: Vec<char> = word.chars().collect();
    let mut segments = Vec::with_capacity(chars.len());
    let mut output = String::with_capacity(word.len());
    scan(tr, &chars, |start, source, out, rule| {
        output.push_str(out);
        segments.push(ExplainSegment {
            start,
            source: source.iter().collect(),
            output: out.to_string(),
            rule,
        });
    });
    ExplainResult {
        word: word.to_string(),
        output,
        segments,
    }
}
