use std::fs;
use std::str::FromStr;

use phonecodes_core::{Conversion, PhoneCode, ReductionError, ReductionMap, ReductionPreset};

#[derive(Debug, thiserror::Error)]
pub enum AgainstError {
    #[error("expected FROM:TO or FROM:TO:LANG, got {0:?}")]
    Format(String),
    #[error(transparent)]
    Convert(#[from] phonecodes_core::ConvertError),
}

/// A conversion named on the command line as `FROM:TO[:LANG]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Against(pub Conversion);

impl FromStr for Against {
    type Err = AgainstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let (from, to, language) = match parts.as_slice() {
            [from, to] => (*from, *to, None),
            [from, to, lang] => (*from, *to, Some(*lang)),
            _ => return Err(AgainstError::Format(s.to_string())),
        };
        let from: PhoneCode = from.parse()?;
        let to: PhoneCode = to.parse()?;
        Ok(Against(Conversion::resolve(from, to, language)?))
    }
}

/// Load a reduction map from a TOML file or a shipped preset.
pub fn load_reduction(
    file: Option<&str>,
    preset: Option<&str>,
) -> Result<Option<ReductionMap>, ReductionError> {
    if let Some(name) = preset {
        return Ok(Some(name.parse::<ReductionPreset>()?.map().clone()));
    }
    match file {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| ReductionError::Parse(format!("reading {path}: {e}")))?;
            ReductionMap::parse_toml(&content).map(Some)
        }
        None => Ok(None),
    }
}

pub fn check_reduction_cmd(file: &str, against: &str) {
    let Against(conversion) = die!(against.parse::<Against>(), "Error: {}");
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(ReductionMap::parse_toml(&content), "Error: {}");

    let diagnostics = map.diagnose(conversion.table());
    if diagnostics.is_empty() {
        println!("OK: {} rules, no diagnostics against {conversion:?}", map.len());
        return;
    }
    println!("{} rules, {} diagnostics against {conversion:?}:", map.len(), diagnostics.len());
    for d in &diagnostics {
        println!("  {d}");
    }
}

pub fn presets_cmd() {
    for preset in ReductionPreset::ALL {
        let map = preset.map();
        println!(
            "{:<16} {:>3} rules  (reduces {})",
            preset.name(),
            map.len(),
            preset.source_table().name()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_against() {
        assert_eq!(
            "timit:ipa".parse::<Against>().unwrap(),
            Against(Conversion::TimitToIpa)
        );
        assert_eq!(
            "callhome:ipa:cmn".parse::<Against>().unwrap(),
            Against(Conversion::CallhomeToIpaCmn)
        );
    }

    #[test]
    fn parse_against_errors() {
        assert!(matches!(
            "timit".parse::<Against>().unwrap_err(),
            AgainstError::Format(_)
        ));
        assert!(matches!(
            "timit:ipa:eng:x".parse::<Against>().unwrap_err(),
            AgainstError::Format(_)
        ));
        assert!(matches!(
            "ipa:timit".parse::<Against>().unwrap_err(),
            AgainstError::Convert(_)
        ));
    }

    #[test]
    fn load_reduction_prefers_preset() {
        let map = load_reduction(Some("/nonexistent"), Some("timit-shared"))
            .unwrap()
            .unwrap();
        assert_eq!(map.len(), ReductionPreset::TimitShared.map().len());
        assert!(load_reduction(None, None).unwrap().is_none());
        assert!(load_reduction(None, Some("nope")).is_err());
        assert!(load_reduction(Some("/nonexistent/reduce.toml"), None).is_err());
    }
}
