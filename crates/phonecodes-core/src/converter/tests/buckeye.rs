use crate::converter::{buckeye_to_ipa, ipa_to_buckeye};

#[test]
fn test_buckeye_round_trip_examples() {
    let cases = [
        ("kæ\u{303}n", "KAENN"),
        ("kæ\u{303}n", "kaenn"),
        ("ʌpβoʊt", "AHPBFOWT"),
        ("bɪɡtɪps", "BIHGTIHPS"),
    ];
    for (ipa, buckeye) in cases {
        assert_eq!(buckeye_to_ipa(buckeye, None, None).unwrap(), ipa, "{buckeye}");
        assert_eq!(
            ipa_to_buckeye(ipa, None, None).unwrap(),
            buckeye.to_uppercase(),
            "{ipa}"
        );
    }
}

#[test]
fn test_language_is_ignored() {
    assert_eq!(
        buckeye_to_ipa("BIHGTIHPS", Some("eng_no_stress"), None).unwrap(),
        "bɪɡtɪps"
    );
}
