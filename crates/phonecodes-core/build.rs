fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml("src/data/inventory.toml", include_str!("src/data/inventory.toml"));

    let tables: [(&str, &str, &[&str]); 7] = [
        (
            "src/data/arpabet.toml",
            include_str!("src/data/arpabet.toml"),
            &["arpabet_to_ipa", "ipa_to_arpabet"],
        ),
        (
            "src/data/buckeye.toml",
            include_str!("src/data/buckeye.toml"),
            &["buckeye_to_ipa", "ipa_to_buckeye"],
        ),
        (
            "src/data/callhome.toml",
            include_str!("src/data/callhome.toml"),
            &[
                "callhome_to_ipa_arz",
                "callhome_to_ipa_cmn",
                "callhome_to_ipa_spa",
                "ipa_to_callhome_arz",
                "ipa_to_callhome_cmn",
                "ipa_to_callhome_spa",
            ],
        ),
        (
            "src/data/disc.toml",
            include_str!("src/data/disc.toml"),
            &["disc_to_ipa", "disc_to_ipa_eng", "disc_to_ipa_nld", "ipa_to_disc"],
        ),
        (
            "src/data/timit.toml",
            include_str!("src/data/timit.toml"),
            &["timit_to_ipa"],
        ),
        (
            "src/data/xsampa.toml",
            include_str!("src/data/xsampa.toml"),
            &["ipa_to_xsampa", "xsampa_to_ipa"],
        ),
        (
            "src/data/reductions.toml",
            include_str!("src/data/reductions.toml"),
            &["standard-timit", "timit-shared", "buckeye-shared"],
        ),
    ];
    for (path, content, sections) in tables {
        validate_sections(path, content, sections);
    }
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}

/// Each section must be a table of non-empty keys mapped to strings.
fn validate_sections(path: &str, content: &str, sections: &[&str]) {
    let doc: toml::Table = match content.parse() {
        Ok(doc) => doc,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    for section in sections {
        let Some(entries) = doc.get(*section).and_then(toml::Value::as_table) else {
            panic!("{path} is missing [{section}]");
        };
        for (key, value) in entries {
            if key.is_empty() {
                panic!("{path} [{section}] has an empty key");
            }
            if !value.is_str() {
                panic!("{path} [{section}] {key:?} is not a string");
            }
        }
    }
}
