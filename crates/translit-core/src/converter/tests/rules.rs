use crate::converter::testutil::Fixture;
use crate::converter::{explain_word, transliterate_word, Rule};

// Minimal table without "къ", so the hard sign after "к" reaches the
// contextual rule instead of being swallowed by the digraph.
const BARE_K_TABLE: &str = r#"
[mappings]
"к" = "k"
"К" = "K"
"ъ" = "ə"
"Ъ" = "Ə"
"е" = "e"
"Е" = "E"
"я" = "ya"
"#;

// --- hard sign ---

#[test]
fn test_hard_sign_elided_before_glide_vowel() {
    assert_eq!(transliterate_word("подъезд"), "podyezd");
    assert_eq!(transliterate_word("объяв"), "obyav");
}

#[test]
fn test_hard_sign_kept_before_other_letters() {
    assert_eq!(transliterate_word("маъна"), "maəna");
    assert_eq!(transliterate_word("ъ"), "ə");
    assert_eq!(transliterate_word("Ъ"), "Ə");
}

#[test]
fn test_hard_sign_after_k_is_ejective() {
    let fx = Fixture::with_defaults().table(BARE_K_TABLE);
    let tr = fx.transliterator();
    assert_eq!(tr.word("къе"), "kq\u{307}e");
    assert_eq!(tr.word("КЪЕ"), "KQ\u{307}E");
    assert_eq!(tr.word("къя"), "kq\u{307}ya");
    let rules: Vec<Rule> = tr.explain("къе").rules().collect();
    assert_eq!(rules, vec![Rule::Table, Rule::GlottalEjective, Rule::Table]);
}

#[test]
fn test_k_hard_sign_digraph_wins_over_rule() {
    assert_eq!(transliterate_word("къе"), "q\u{307}e");
    assert_eq!(transliterate_word("КЪЕ"), "Q\u{307}E");
}

// --- initial and post-glottal "е" ---

#[test]
fn test_initial_e_glide() {
    assert_eq!(transliterate_word("еза"), "yeza");
    assert_eq!(transliterate_word("е"), "ye");
}

#[test]
fn test_initial_e_titlecase() {
    assert_eq!(transliterate_word("Еза"), "Yeza");
    assert_eq!(transliterate_word("Е"), "Ye");
}

#[test]
fn test_initial_e_all_caps() {
    assert_eq!(transliterate_word("ЕЗА"), "YEZA");
}

#[test]
fn test_medial_e_uses_table() {
    assert_eq!(transliterate_word("деши"), "deşi");
    assert_eq!(transliterate_word("ДЕШИ"), "DEŞI");
}

#[test]
fn test_post_glottal_e_glide() {
    assert_eq!(transliterate_word("ПОДЪЕЗД"), "PODYEZD");
    let rules: Vec<Rule> = explain_word("подъезд").rules().collect();
    assert_eq!(rules[4], Rule::PostGlottalGlide);
}

#[test]
fn test_e_after_k_hard_sign_is_plain() {
    let fx = Fixture::with_defaults().table(BARE_K_TABLE);
    let rules: Vec<Rule> = fx.transliterator().explain("къе").rules().collect();
    assert_eq!(rules[2], Rule::Table);
}

// --- word-final "н" ---

#[test]
fn test_final_nasal_default() {
    assert_eq!(transliterate_word("дийцин"), "diyciŋ");
    assert_eq!(transliterate_word("ДИЙЦИН"), "DIYCIŊ");
}

#[test]
fn test_final_nasal_blacklisted() {
    assert_eq!(transliterate_word("дин"), "din");
    assert_eq!(transliterate_word("Дин"), "Din");
    assert_eq!(transliterate_word("ТЕЛЕФОН"), "TELEFON");
}

#[test]
fn test_final_nasal_unsure() {
    assert_eq!(transliterate_word("хан"), "xaŋ(?)");
    assert_eq!(transliterate_word("ХАН"), "XAŊ(?)");
    assert_eq!(transliterate_word("ХЬАН"), "ẊAŊ(?)");
}

#[test]
fn test_final_nasal_only_at_token_end() {
    // Trailing punctuation belongs to the token, so "н" is no longer last.
    assert_eq!(transliterate_word("дийцин,"), "diycin,");
}

#[test]
fn test_final_nasal_custom_lexicon_and_marker() {
    let fx = Fixture::with_defaults()
        .lexicon("blacklist = [\"хан\"]\nunsure = [\"дийцин\"]\n")
        .settings("[review]\nmarker = \"[?]\"\n\n[prepass]\nstandalone_vowel = true\n");
    let tr = fx.transliterator();
    assert_eq!(tr.word("хан"), "xan");
    assert_eq!(tr.word("дийцин"), "diyciŋ[?]");
    assert_eq!(tr.word("дин"), "diŋ");
}

// --- all-caps glide vowels ---

#[test]
fn test_caps_glide() {
    assert_eq!(transliterate_word("ЮРТ"), "YURT");
    assert_eq!(transliterate_word("ЯЗ"), "YAZ");
    assert_eq!(transliterate_word("ЦЯ"), "CYA");
}

#[test]
fn test_caps_glide_not_in_titlecase() {
    assert_eq!(transliterate_word("Юрт"), "Yurt");
    assert_eq!(transliterate_word("Я"), "Ya");
}
