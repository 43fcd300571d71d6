use crate::converter::{arpabet_to_ipa, convert, convert_detailed, ipa_to_arpabet};

#[test]
fn test_stress_moves_onto_preceding_vowel() {
    let cases = [
        ("AE1 D V ER0 T", "ˈæ d v ɚ t"),
        ("AE1 D V ER1 T", "ˈæ d v ˈɝ t"),
        ("AE0 ER1 T", "æ ˈɝ t"),
        ("AE0 D V ER1 T AH0 Z M AH0 N T", "æ d v ˈɝ t ə z m ə n t"),
    ];
    for (input, expected) in cases {
        assert_eq!(convert(input, "arpabet", "ipa", None, None).unwrap(), expected, "{input}");
    }
}

#[test]
fn test_lower_case_input_is_folded() {
    assert_eq!(arpabet_to_ipa("ae1 d", None, None).unwrap(), "ˈæ d");
}

#[test]
fn test_ipa_to_arpabet_appends_stress() {
    assert_eq!(ipa_to_arpabet("ˈæ d v ɚ t", None, None).unwrap(), "AE1 D V ER0 T");
}

#[test]
fn test_language_is_ignored_when_no_specific_table() {
    assert_eq!(
        arpabet_to_ipa("AE1 D", Some("eng"), None).unwrap(),
        arpabet_to_ipa("AE1 D", None, None).unwrap()
    );
}

#[test]
fn test_result_is_trimmed() {
    assert_eq!(arpabet_to_ipa("  AA  ", None, None).unwrap(), "ɑ");
}

#[test]
fn test_unknown_symbols_pass_through() {
    let out = convert_detailed("AE1 ?D", "arpabet", "ipa", None, None).unwrap();
    assert_eq!(out.text, "ˈæ ?d");
    // æ ˈ ␠ ? d
    assert_eq!(out.hits, vec![true, true, false, false, true]);
    assert!(out.diagnostics.is_empty());
}

#[test]
fn test_orphan_stress_is_kept() {
    assert_eq!(ipa_to_arpabet("ˈ d", None, None).unwrap(), "1 D");
}

#[test]
fn test_empty_input() {
    assert_eq!(arpabet_to_ipa("", None, None).unwrap(), "");
}
