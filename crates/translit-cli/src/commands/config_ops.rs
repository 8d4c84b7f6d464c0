use std::fs;

use translit_core::lexicon::{self, Lexicon};
use translit_core::settings;
use translit_core::table::{self, MappingTable};

/// Install custom configuration files before any transliteration runs.
pub fn load_custom(table_file: Option<&str>, lexicon_file: Option<&str>, settings_file: Option<&str>) {
    if let Some(file) = table_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(MappingTable::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = lexicon_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(Lexicon::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
}

pub fn table_export() {
    print!("{}", table::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(table::parse_table_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}

pub fn lexicon_export() {
    print!("{}", lexicon::default_toml());
}

pub fn lexicon_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let lex = die!(lexicon::parse_lexicon_toml(&content), "Error: {}");
    println!(
        "OK: {} blacklisted, {} unsure",
        lex.blacklist().len(),
        lex.unsure().len()
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: review.marker={:?}, prepass.standalone_vowel={}",
        s.review.marker, s.prepass.standalone_vowel
    );
}
