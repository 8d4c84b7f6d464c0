use std::fs;
use std::io::{self, Read, Write};

use unicode_width::UnicodeWidthStr;

use translit_core::{ExplainResult, Transliterator};

/// Shown in explain tables for clusters that produce no output.
const ELIDED: &str = "∅";

pub fn text_cmd(text: Option<&str>) {
    let input = match text {
        Some(t) => t.to_string(),
        None => die!(read_input(None), "Error reading stdin: {}"),
    };
    let out = Transliterator::global().text(&input);
    die!(write_output(None, &out), "Error writing output: {}");
}

pub fn word_cmd(words: &[String]) {
    let tr = Transliterator::global();
    for word in words {
        println!("{}", tr.word(word));
    }
}

pub fn file_cmd(input: &str, output: Option<&str>) {
    die!(
        transliterate_file(Some(input), output),
        "Error transliterating {input}: {}"
    );
}

pub fn explain_cmd(word: &str, json: bool) {
    let result = Transliterator::global().explain(word);
    if json {
        let s = die!(serde_json::to_string_pretty(&result), "Error: {}");
        println!("{s}");
    } else {
        print!("{}", render_explain(&result));
    }
}

/// Read a whole file, or stdin when `path` is `None`.
pub fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write to a file, or stdout when `path` is `None`.
pub fn write_output(path: Option<&str>, content: &str) -> io::Result<()> {
    match path {
        Some(p) => fs::write(p, content),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()
        }
    }
}

pub fn transliterate_file(input: Option<&str>, output: Option<&str>) -> io::Result<()> {
    let text = read_input(input)?;
    let out = Transliterator::global().text(&text);
    write_output(output, &out)
}

/// Render an explain result as a table aligned on display width. Combining
/// dots (q̇, ç̇) take no column, so char counts would misalign.
pub fn render_explain(result: &ExplainResult) -> String {
    let src_width = result
        .segments
        .iter()
        .map(|s| s.source.width())
        .max()
        .unwrap_or(0);
    let out_width = result
        .segments
        .iter()
        .map(|s| shown(&s.output).width())
        .max()
        .unwrap_or(0);

    let mut text = format!("{} -> {}\n", result.word, result.output);
    for seg in &result.segments {
        text.push_str(&format!(
            "{:>3}  {}  {}  {}\n",
            seg.start,
            pad(&seg.source, src_width),
            pad(shown(&seg.output), out_width),
            seg.rule
        ));
    }
    text
}

fn shown(output: &str) -> &str {
    if output.is_empty() {
        ELIDED
    } else {
        output
    }
}

fn pad(s: &str, width: usize) -> String {
    let mut padded = s.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(s.width())));
    padded
}
