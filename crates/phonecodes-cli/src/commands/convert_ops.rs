use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use phonecodes_core::converter::explain;
use phonecodes_core::{
    convert_detailed, convert_list, Conversion, Language, PhoneCode, ReductionMap,
};
use tracing::debug;

pub fn convert_cmd(
    from: &str,
    to: &str,
    text: &str,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
    json: bool,
) {
    let output = die!(
        convert_detailed(text, from, to, language, reduction),
        "Error: {}"
    );
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization failed")
        );
    } else {
        println!("{}", output.text);
    }
}

/// Convert a file of strings, one per line, writing results in input order.
pub fn batch_cmd(
    from: &str,
    to: &str,
    input_file: &str,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
) {
    let file = die!(File::open(input_file), "Error opening {input_file}: {}");
    let lines: Vec<String> = die!(
        BufReader::new(file).lines().collect::<io::Result<Vec<_>>>(),
        "Error reading {input_file}: {}"
    );
    debug!(lines = lines.len(), input_file, "batch input read");
    let results = die!(
        convert_list(&lines, from, to, language, reduction),
        "Error: {}"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in &results {
        die!(writeln!(out, "{line}"), "Error writing output: {}");
    }
    die!(out.flush(), "Error writing output: {}");
}

pub fn explain_cmd(from: &str, to: &str, text: &str, language: Option<&str>, json: bool) {
    let from: PhoneCode = die!(from.parse(), "Error: {}");
    let to: PhoneCode = die!(to.parse(), "Error: {}");
    let conversion = die!(Conversion::resolve(from, to, language), "Error: {}");
    let result = explain::explain(text, conversion);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).expect("JSON serialization failed")
        );
    } else {
        print!("{}", explain::format_text(&result));
    }
}

/// List codes, languages and legal conversions.
pub fn codes_cmd() {
    let codes: Vec<&str> = PhoneCode::ALL.iter().map(|c| c.as_str()).collect();
    let languages: Vec<&str> = Language::ALL.iter().map(|l| l.as_str()).collect();
    println!("codes:     {}", codes.join(" "));
    println!("languages: {}", languages.join(" "));
    println!();
    println!("{:<10} {:<10} {:<6} {:<6} tones", "from", "to", "lang", "case");
    for conversion in Conversion::ALL {
        let (from, to) = conversion.codes();
        let lang = conversion.language().map_or("-", |l| l.as_str());
        let case = if conversion.folds_case() { "upper" } else { "-" };
        let tones = match conversion.tone_config() {
            Some(config) => format!(
                "{:?}/{:?} [{}]",
                config.direction,
                config.side,
                config.tones().join(" ")
            ),
            None => "-".to_string(),
        };
        println!(
            "{:<10} {:<10} {:<6} {:<6} {}",
            from.as_str(),
            to.as_str(),
            lang,
            case,
            tones
        );
    }
    println!("{:<10} {:<10} (not convertible: closure symbols)", "ipa", "timit");
}
