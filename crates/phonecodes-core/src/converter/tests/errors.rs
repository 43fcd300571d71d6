use crate::converter::{
    callhome_to_ipa, convert, convert_detailed, convert_list, ipa_to_timit,
};
use crate::error::ConvertError;

#[test]
fn test_invalid_code_fails_first() {
    let err = convert("AA", "sampa", "ipa", None, None).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidCode { ref code } if code == "sampa"));
    // checked before the structurally impossible pair
    let err = convert("AA", "ipa", "timitt", None, None).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidCode { .. }));
}

#[test]
fn test_unsupported_pair() {
    let err = convert("DH IH S", "arpabet", "buckeye", None, None).unwrap_err();
    assert!(matches!(err, ConvertError::Unsupported { .. }));
    assert!(err.to_string().contains("arpabet to buckeye"));
}

#[test]
fn test_ipa_to_timit_always_fails() {
    for input in ["", "tʃ ɑ k l ɨ t", "anything"] {
        let err = convert(input, "ipa", "timit", None, None).unwrap_err();
        assert!(matches!(err, ConvertError::ClosureSymbols));
        let err = ipa_to_timit(input, Some("eng"), None).unwrap_err();
        assert!(matches!(err, ConvertError::ClosureSymbols));
    }
}

#[test]
fn test_callhome_unknown_language() {
    let err = callhome_to_ipa("ma1", "eng", None).unwrap_err();
    assert!(matches!(err, ConvertError::Unsupported { .. }));
}

#[test]
fn test_list_fails_without_partial_output() {
    let err = convert_list(&["AA", "AE"], "arpabet", "nope", None, None).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidCode { .. }));
    assert!(convert_detailed("AA", "ipa", "timit", None, None).is_err());
}
