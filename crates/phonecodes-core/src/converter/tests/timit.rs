use crate::converter::{convert_list, timit_to_ipa};

#[test]
fn test_closures_merge_with_release() {
    let cases = [
        ("h# ch aa kcl k l ix tcl t h#", "tʃ ɑ k l ɨ t"),
        ("tcl ch aa k l ix tcl t", "tʃ ɑ k l ɨ t"),
        ("tcl ch aa k l ix t", "tʃ ɑ k l ɨ t"),
        ("tclchaaklixtclt", "tʃɑklɨt"),
        ("tclchaaklixt", "tʃɑklɨt"),
        ("JH OW K", "dʒ oʊ k"),
        ("DCL JH OW KCL K", "dʒ oʊ k"),
        (
            "R IX W AO R DX IH DCL B AY BCL B IH GCL T IH PCL P S",
            "ɹ ɨ w ɔ ɹ ɾ ɪ d b aɪ b ɪ ɡ t ɪ p s",
        ),
        ("bclbihgcltihpclps", "bɪɡtɪps"),
        ("bihgclgtcltihps", "bɪɡtɪps"),
    ];
    for (input, expected) in cases {
        assert_eq!(timit_to_ipa(input, None, None).unwrap(), expected, "{input}");
    }
}

#[test]
fn test_unspaced_sentences() {
    let cases = [
        (
            "DHIHS HHEHZ BCLBEHN IHTCLCHIHBCLBUXDXIHDCL TUX HVIHLIYIXM FIHLM FLOW AXN DHIX VEYPCLPAX PCLPREHSHER THAXMAAMIXDXAXR",
            "ðɪs hɛz bɛn ɪtʃɪbʉɾɪd tʉ ɦɪliɨm fɪlm floʊ ən ðɨ veɪpə pɹɛʃɝ θəmɑmɨɾɚ",
        ),
        (
            "AX-HBCLBAWTCLDAONHVIYGCLGAADXAHPCLTIXBCLBLOW",
            "ə\u{325}baʊtdɔnɦiɡɑɾʌptɨbloʊ",
        ),
        ("QAEZWIYEYTCLWIYTCLTAOKCLT", "ʔæzwieɪtwitɔkt"),
        // the closure-to-release space is consumed: "overweight charmer", "slip poison"
        (
            "DHIY OWVAXRWEYTCL CHAARMAXR KCLKUHDCLD SLIHPCL POYZEN IHNTCLTQ EHNXIYWAXNZ TCLTIY",
            "ði oʊvɚweɪtʃɑɹmɚ kʊd slɪpɔɪzn\u{329} ɪntʔ ɛɾ\u{303}iwənz ti",
        ),
    ];
    for (input, expected) in cases {
        assert_eq!(timit_to_ipa(input, None, None).unwrap(), expected);
    }
}

#[test]
fn test_language_is_ignored() {
    assert_eq!(
        timit_to_ipa("JH OW K", Some("eng_no_stress"), None).unwrap(),
        "dʒ oʊ k"
    );
}

#[test]
fn test_convert_list_preserves_order() {
    let inputs = ["JH OW K", "", "tclchaaklixt"];
    let out = convert_list(&inputs, "timit", "ipa", None, None).unwrap();
    assert_eq!(out, vec!["dʒ oʊ k", "", "tʃɑklɨt"]);
}
