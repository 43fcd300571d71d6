//! Phone codes and the languages that select language-specific tables.

use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// A phonetic transcription notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhoneCode {
    Ipa,
    Arpabet,
    Xsampa,
    Disc,
    Callhome,
    Buckeye,
    Timit,
}

impl PhoneCode {
    pub const ALL: [PhoneCode; 7] = [
        PhoneCode::Ipa,
        PhoneCode::Arpabet,
        PhoneCode::Xsampa,
        PhoneCode::Disc,
        PhoneCode::Callhome,
        PhoneCode::Buckeye,
        PhoneCode::Timit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PhoneCode::Ipa => "ipa",
            PhoneCode::Arpabet => "arpabet",
            PhoneCode::Xsampa => "xsampa",
            PhoneCode::Disc => "disc",
            PhoneCode::Callhome => "callhome",
            PhoneCode::Buckeye => "buckeye",
            PhoneCode::Timit => "timit",
        }
    }
}

impl fmt::Display for PhoneCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhoneCode {
    type Err = ConvertError;

    /// Code names are matched exactly (lower case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhoneCode::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ConvertError::InvalidCode {
                code: s.to_string(),
            })
    }
}

/// Languages with language-specific tables or tone letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Eng,
    Deu,
    Nld,
    Arz,
    Cmn,
    Spa,
    Yue,
    Lao,
    Vie,
}

impl Language {
    pub const ALL: [Language; 9] = [
        Language::Eng,
        Language::Deu,
        Language::Nld,
        Language::Arz,
        Language::Cmn,
        Language::Spa,
        Language::Yue,
        Language::Lao,
        Language::Vie,
    ];

    /// ISO 639-3 code.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Eng => "eng",
            Language::Deu => "deu",
            Language::Nld => "nld",
            Language::Arz => "arz",
            Language::Cmn => "cmn",
            Language::Spa => "spa",
            Language::Yue => "yue",
            Language::Lao => "lao",
            Language::Vie => "vie",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a language string outside [`Language::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_code_round_trips_through_str() {
        for code in PhoneCode::ALL {
            assert_eq!(code.as_str().parse::<PhoneCode>().unwrap(), code);
            assert_eq!(code.to_string(), code.as_str());
        }
    }

    #[test]
    fn invalid_phone_code() {
        let err = "sampa".parse::<PhoneCode>().unwrap_err();
        assert!(matches!(err, ConvertError::InvalidCode { ref code } if code == "sampa"));
        assert!(err.to_string().contains("sampa"));
    }

    #[test]
    fn phone_code_is_case_sensitive() {
        assert!("IPA".parse::<PhoneCode>().is_err());
    }

    #[test]
    fn language_parse() {
        assert_eq!("cmn".parse::<Language>().unwrap(), Language::Cmn);
        assert_eq!(Language::Yue.to_string(), "yue");
        assert_eq!(
            "amh".parse::<Language>().unwrap_err(),
            UnknownLanguage("amh".to_string())
        );
    }
}
