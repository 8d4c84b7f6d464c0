use super::rules::{self, Rule};
use super::Transliterator;

/// Greedy longest-match scan over one token.
///
/// `emit` is called once per step with the char offset, the source cluster,
/// its output and the rule that produced it. Characters with no table entry
/// are emitted unchanged.
pub(super) fn scan<F>(tr: &Transliterator<'_>, chars: &[char], mut emit: F)
where
    F: FnMut(usize, &[char], &str, Rule),
{
    let mut i = 0;
    while i < chars.len() {
        match tr.table().longest_match(&chars[i..]) {
            Some((len, stored)) => {
                let resolved = rules::resolve(tr, chars, i, len, stored);
                emit(i, &chars[i..i + len], &resolved.output, resolved.rule);
                i += len;
            }
            None => {
                let mut buf = [0u8; 4];
                let same = chars[i].encode_utf8(&mut buf);
                emit(i, &chars[i..i + 1], same, Rule::Passthrough);
                i += 1;
            }
        }
    }
}
