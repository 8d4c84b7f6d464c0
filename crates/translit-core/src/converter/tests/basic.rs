use crate::converter::{transliterate_word, Transliterator};
use crate::table::MappingTable;

#[test]
fn test_demo_word() {
    assert_eq!(transliterate_word("дӏахьаьдира"), "djaẋädira");
}

#[test]
fn test_demo_word_titlecase() {
    assert_eq!(transliterate_word("Дӏахьаьдира"), "Djaẋädira");
}

#[test]
fn test_demo_word_all_caps() {
    assert_eq!(transliterate_word("ДӀАХЬАЬДИРА"), "DJAẊÄDIRA");
}

#[test]
fn test_empty_word() {
    assert_eq!(transliterate_word(""), "");
}

#[test]
fn test_digraphs() {
    assert_eq!(transliterate_word("кхо"), "qo");
    assert_eq!(transliterate_word("цӏе"), "ċe");
    assert_eq!(transliterate_word("тӏе"), "ṫe");
    assert_eq!(transliterate_word("чӏара"), "ç\u{307}ara");
    assert_eq!(transliterate_word("гӏала"), "ġala");
    assert_eq!(transliterate_word("уьйра"), "üyra");
}

#[test]
fn test_palochka_typed_as_capital() {
    // Capital palochka inside a lowercase word still forms the digraph.
    assert_eq!(transliterate_word("хӀума"), "huma");
    assert_eq!(transliterate_word("хӏума"), "huma");
}

#[test]
fn test_doubled_consonants_take_longest_match() {
    assert_eq!(transliterate_word("ккха"), "qqa");
    assert_eq!(transliterate_word("ккъа"), "q\u{307}q\u{307}a");
    assert_eq!(transliterate_word("ттӏа"), "ṫṫa");
    assert_eq!(transliterate_word("ККХА"), "QQA");
}

#[test]
fn test_doubled_consonants_with_lowercase_second_half() {
    // Capitals typed with a lowercase palochka or a lowercase last letter.
    assert_eq!(transliterate_word("ТТӏА"), "\u{1e6a}\u{1e6a}A");
    assert_eq!(transliterate_word("ККӏа"), "K\u{307}K\u{307}a");
    assert_eq!(transliterate_word("ППӏ"), "\u{1e56}\u{1e56}");
    assert_eq!(transliterate_word("ККха"), "QQa");
    assert_eq!(transliterate_word("ККъа"), "Q\u{307}Q\u{307}a");
}

#[test]
fn test_multi_char_keys_never_split() {
    let table = MappingTable::global();
    let tr = Transliterator::global();
    for (key, latin) in table.entries().filter(|(k, _)| k.chars().count() > 1) {
        assert_eq!(tr.word(key), latin, "key={key}");
        let split: String = key
            .chars()
            .map(|c| table.get(c.encode_utf8(&mut [0u8; 4])).unwrap_or_default())
            .collect();
        if split != latin {
            assert_ne!(tr.word(key), split, "key={key} was split");
        }
    }
}

#[test]
fn test_elided_signs() {
    assert_eq!(transliterate_word("бы"), "b");
    assert_eq!(transliterate_word("ыб"), "b");
    assert_eq!(transliterate_word("БЫ"), "B");
    assert_eq!(transliterate_word("ьа"), "a");
}

#[test]
fn test_glide_vowels() {
    assert_eq!(transliterate_word("юкъ"), "yuq\u{307}");
    assert_eq!(transliterate_word("Юрт"), "Yurt");
    assert_eq!(transliterate_word("яьсса"), "yässa");
}

#[test]
fn test_unknown_chars_pass_through() {
    assert_eq!(transliterate_word("2024,"), "2024,");
    assert_eq!(transliterate_word("hello"), "hello");
    assert_eq!(transliterate_word("хьо!"), "ẋo!");
    assert_eq!(transliterate_word("«со»"), "«so»");
}

#[test]
fn test_non_final_nasal_is_plain() {
    assert_eq!(transliterate_word("нана"), "nana");
}

#[test]
fn test_global_transliterator_is_shared() {
    let a = Transliterator::global();
    let b = Transliterator::global();
    assert!(std::ptr::eq(a.table(), b.table()));
    assert!(std::ptr::eq(a.lexicon(), b.lexicon()));
}

#[test]
fn test_usable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| transliterate_word("дӏахьаьдира")))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "djaẋädira");
    }
}
