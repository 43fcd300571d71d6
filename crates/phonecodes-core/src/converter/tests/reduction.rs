use crate::converter::{convert, convert_detailed, ReductionDiagnostic, ReductionMap, ReductionPreset};

#[test]
fn test_standard_timit_reduction() {
    let map = ReductionPreset::StandardTimit.map();
    assert_eq!(
        convert("h# ch aa kcl k l ix tcl t h#", "timit", "ipa", None, Some(map)).unwrap(),
        "tʃ ɑ k l ɪ t"
    );
    assert_eq!(
        convert("h#chaakclklixzhh#", "timit", "ipa", None, Some(map)).unwrap(),
        "tʃɑklɪʃ"
    );
}

#[test]
fn test_buckeye_shared_reduction() {
    let map = ReductionMap::preset("buckeye-shared").unwrap();
    assert_eq!(
        convert("w iyn w ern k ih n aan nx eh tq", "buckeye", "ipa", None, Some(map)).unwrap(),
        "w i w ɹ\u{329} k ɪ n ɑ n ɛ ʔ"
    );
}

#[test]
fn test_timit_shared_reduction() {
    let map = ReductionMap::preset("timit-shared").unwrap();
    assert_eq!(
        convert("w ax w axr k ih n aa nx eh q hv zh", "timit", "ipa", None, Some(map)).unwrap(),
        "w ə w ɹ\u{329} k ɪ n ɑ n ɛ ʔ h ʒ"
    );
}

#[test]
fn test_presets_produce_no_diagnostics() {
    let out = convert_detailed(
        "h# ch aa kcl k l ix tcl t h#",
        "timit",
        "ipa",
        None,
        Some(ReductionPreset::StandardTimit.map()),
    )
    .unwrap();
    assert!(out.diagnostics.is_empty());
}

#[test]
fn test_custom_map_reports_extra_keys_and_still_applies() {
    let map = ReductionMap::new([("ɑ", "a"), ("ɪ", "i"), ("q", "k")]).unwrap();
    let out = convert_detailed("AA IH", "arpabet", "ipa", None, Some(&map)).unwrap();
    assert_eq!(out.text, "a i");
    assert_eq!(out.diagnostics.len(), 1);
    match &out.diagnostics[0] {
        ReductionDiagnostic::ExtraKeys { keys } => {
            assert_eq!(keys.iter().collect::<Vec<_>>(), vec!["q"]);
        }
        other => panic!("unexpected diagnostic {other:?}"),
    }
}

#[test]
fn test_cascading_map_is_single_pass() {
    let map = ReductionMap::new([("ɑ", "æ"), ("æ", "e")]).unwrap();
    let out = convert_detailed("AA", "arpabet", "ipa", None, Some(&map)).unwrap();
    assert_eq!(out.text, "æ");
    assert!(matches!(
        out.diagnostics[0],
        ReductionDiagnostic::CascadingKeys { .. }
    ));
}

#[test]
fn test_reduction_runs_before_trim() {
    let map = ReductionMap::new([("ɑ", " ")]).unwrap();
    assert_eq!(convert("D AA", "arpabet", "ipa", None, Some(&map)).unwrap(), "d");
}
