use std::fs;

pub fn settings_export() {
    print!("{}", phonecodes_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        phonecodes_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: cost.symbol_cost={}, cost.oov_cost={}",
        s.cost.symbol_cost, s.cost.oov_cost
    );
}

/// Install custom settings for this process. Must run before any conversion.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        phonecodes_core::settings::init_custom(content),
        "Error loading settings from {file}: {}"
    );
}
