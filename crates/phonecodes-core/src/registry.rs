//! The closed set of legal conversions.
//!
//! Each [`Conversion`] names one (input code, output code, language) triple
//! and carries its symbol table, its optional tone/stress configuration and
//! whether input is upper-cased before lookup.

use std::sync::OnceLock;

use tracing::debug;

use crate::codes::{Language, PhoneCode};
use crate::converter::reattach::{Direction, Side, ToneConfig};
use crate::error::ConvertError;
use crate::table::inventory::inventory;
use crate::table::{SymbolTable, TableId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    IpaToXsampa,
    XsampaToIpa,
    DiscToIpa,
    DiscToIpaNld,
    DiscToIpaEng,
    IpaToDisc,
    CallhomeToIpaArz,
    CallhomeToIpaCmn,
    CallhomeToIpaSpa,
    IpaToCallhomeArz,
    IpaToCallhomeCmn,
    IpaToCallhomeSpa,
    ArpabetToIpa,
    IpaToArpabet,
    TimitToIpa,
    BuckeyeToIpa,
    IpaToBuckeye,
}

impl Conversion {
    pub const ALL: [Conversion; 17] = [
        Conversion::IpaToXsampa,
        Conversion::XsampaToIpa,
        Conversion::DiscToIpa,
        Conversion::DiscToIpaNld,
        Conversion::DiscToIpaEng,
        Conversion::IpaToDisc,
        Conversion::CallhomeToIpaArz,
        Conversion::CallhomeToIpaCmn,
        Conversion::CallhomeToIpaSpa,
        Conversion::IpaToCallhomeArz,
        Conversion::IpaToCallhomeCmn,
        Conversion::IpaToCallhomeSpa,
        Conversion::ArpabetToIpa,
        Conversion::IpaToArpabet,
        Conversion::TimitToIpa,
        Conversion::BuckeyeToIpa,
        Conversion::IpaToBuckeye,
    ];

    /// (input code, output code)
    pub fn codes(self) -> (PhoneCode, PhoneCode) {
        use PhoneCode::*;
        match self {
            Conversion::IpaToXsampa => (Ipa, Xsampa),
            Conversion::XsampaToIpa => (Xsampa, Ipa),
            Conversion::DiscToIpa | Conversion::DiscToIpaNld | Conversion::DiscToIpaEng => {
                (Disc, Ipa)
            }
            Conversion::IpaToDisc => (Ipa, Disc),
            Conversion::CallhomeToIpaArz
            | Conversion::CallhomeToIpaCmn
            | Conversion::CallhomeToIpaSpa => (Callhome, Ipa),
            Conversion::IpaToCallhomeArz
            | Conversion::IpaToCallhomeCmn
            | Conversion::IpaToCallhomeSpa => (Ipa, Callhome),
            Conversion::ArpabetToIpa => (Arpabet, Ipa),
            Conversion::IpaToArpabet => (Ipa, Arpabet),
            Conversion::TimitToIpa => (Timit, Ipa),
            Conversion::BuckeyeToIpa => (Buckeye, Ipa),
            Conversion::IpaToBuckeye => (Ipa, Buckeye),
        }
    }

    /// The language this entry is specific to, `None` for language-agnostic entries.
    pub fn language(self) -> Option<Language> {
        match self {
            Conversion::DiscToIpaNld => Some(Language::Nld),
            Conversion::DiscToIpaEng => Some(Language::Eng),
            Conversion::CallhomeToIpaArz | Conversion::IpaToCallhomeArz => Some(Language::Arz),
            Conversion::CallhomeToIpaCmn | Conversion::IpaToCallhomeCmn => Some(Language::Cmn),
            Conversion::CallhomeToIpaSpa | Conversion::IpaToCallhomeSpa => Some(Language::Spa),
            _ => None,
        }
    }

    pub fn table_id(self) -> TableId {
        match self {
            Conversion::IpaToXsampa => TableId::IpaToXsampa,
            Conversion::XsampaToIpa => TableId::XsampaToIpa,
            Conversion::DiscToIpa => TableId::DiscToIpa,
            Conversion::DiscToIpaNld => TableId::DiscToIpaNld,
            Conversion::DiscToIpaEng => TableId::DiscToIpaEng,
            Conversion::IpaToDisc => TableId::IpaToDisc,
            Conversion::CallhomeToIpaArz => TableId::CallhomeToIpaArz,
            Conversion::CallhomeToIpaCmn => TableId::CallhomeToIpaCmn,
            Conversion::CallhomeToIpaSpa => TableId::CallhomeToIpaSpa,
            Conversion::IpaToCallhomeArz => TableId::IpaToCallhomeArz,
            Conversion::IpaToCallhomeCmn => TableId::IpaToCallhomeCmn,
            Conversion::IpaToCallhomeSpa => TableId::IpaToCallhomeSpa,
            Conversion::ArpabetToIpa => TableId::ArpabetToIpa,
            Conversion::IpaToArpabet => TableId::IpaToArpabet,
            Conversion::TimitToIpa => TableId::TimitToIpa,
            Conversion::BuckeyeToIpa => TableId::BuckeyeToIpa,
            Conversion::IpaToBuckeye => TableId::IpaToBuckeye,
        }
    }

    pub fn table(self) -> &'static SymbolTable {
        self.table_id().table()
    }

    /// Tone/stress reattachment for this conversion, if any.
    pub fn tone_config(self) -> Option<&'static ToneConfig> {
        static CONFIGS: OnceLock<Vec<Option<ToneConfig>>> = OnceLock::new();
        let configs =
            CONFIGS.get_or_init(|| Conversion::ALL.iter().map(|c| build_tone_config(*c)).collect());
        configs[self as usize].as_ref()
    }

    /// Tables keyed in upper case; input is upper-cased before lookup.
    pub fn folds_case(self) -> bool {
        matches!(
            self,
            Conversion::ArpabetToIpa | Conversion::BuckeyeToIpa | Conversion::TimitToIpa
        )
    }

    /// Find the conversion for a code pair, preferring an entry specific to
    /// `language` over the language-agnostic one.
    ///
    /// Any language string is accepted; one with no specific entry falls
    /// back to the agnostic entry. IPA to TIMIT always fails with
    /// [`ConvertError::ClosureSymbols`].
    pub fn resolve(
        from: PhoneCode,
        to: PhoneCode,
        language: Option<&str>,
    ) -> Result<Conversion, ConvertError> {
        if (from, to) == (PhoneCode::Ipa, PhoneCode::Timit) {
            return Err(ConvertError::ClosureSymbols);
        }
        let candidates = || Conversion::ALL.into_iter().filter(|c| c.codes() == (from, to));

        let parsed = match language.map(str::parse::<Language>) {
            Some(Ok(lang)) => Some(lang),
            Some(Err(e)) => {
                debug!(%e, "no language-specific tables");
                None
            }
            None => None,
        };
        let specific = parsed.and_then(|lang| candidates().find(|c| c.language() == Some(lang)));
        let resolved = specific.or_else(|| candidates().find(|c| c.language().is_none()));

        match resolved {
            Some(conversion) => {
                debug!(?conversion, language, "resolved conversion");
                Ok(conversion)
            }
            None => Err(ConvertError::Unsupported {
                from: from.to_string(),
                to: to.to_string(),
                language: language.map(str::to_string),
            }),
        }
    }
}

fn strings<'a>(items: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    items.into_iter().cloned().collect()
}

fn build_tone_config(conversion: Conversion) -> Option<ToneConfig> {
    let inv = inventory();
    let ipa_vowels = || strings(&inv.ipa.vowels);
    let stress_digits = ["0", "1", "2"];

    let config = match conversion {
        Conversion::CallhomeToIpaArz | Conversion::CallhomeToIpaSpa | Conversion::ArpabetToIpa => {
            ToneConfig::new(
                strings(&inv.ipa.stress_markers),
                ipa_vowels(),
                Direction::Backward,
                Side::Prepend,
            )
        }
        Conversion::CallhomeToIpaCmn => ToneConfig::new(
            strings(&inv.ipa.tones),
            ipa_vowels(),
            Direction::Backward,
            Side::Append,
        ),
        Conversion::IpaToCallhomeArz => ToneConfig::new(
            stress_digits,
            strings(&inv.callhome.arz),
            Direction::Forward,
            Side::Append,
        ),
        Conversion::IpaToCallhomeSpa => ToneConfig::new(
            stress_digits,
            strings(&inv.callhome.spa),
            Direction::Forward,
            Side::Append,
        ),
        Conversion::IpaToCallhomeCmn => ToneConfig::new(
            ["0", "1", "2", "3", "4", "5"],
            strings(&inv.callhome.cmn),
            Direction::Backward,
            Side::Append,
        ),
        Conversion::IpaToArpabet => ToneConfig::new(
            stress_digits,
            strings(&inv.arpabet.vowels),
            Direction::Forward,
            Side::Append,
        ),
        _ => return None,
    };
    Some(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_declaration_order() {
        for (i, c) in Conversion::ALL.iter().enumerate() {
            assert_eq!(*c as usize, i);
        }
    }

    #[test]
    fn every_conversion_touches_ipa() {
        for c in Conversion::ALL {
            let (from, to) = c.codes();
            assert!(from == PhoneCode::Ipa || to == PhoneCode::Ipa, "{c:?}");
            assert_ne!(from, to);
        }
    }

    #[test]
    fn resolve_language_agnostic() {
        let c = Conversion::resolve(PhoneCode::Arpabet, PhoneCode::Ipa, None).unwrap();
        assert_eq!(c, Conversion::ArpabetToIpa);
    }

    #[test]
    fn resolve_prefers_language_specific() {
        let c = Conversion::resolve(PhoneCode::Disc, PhoneCode::Ipa, Some("eng")).unwrap();
        assert_eq!(c, Conversion::DiscToIpaEng);
        let c = Conversion::resolve(PhoneCode::Disc, PhoneCode::Ipa, Some("nld")).unwrap();
        assert_eq!(c, Conversion::DiscToIpaNld);
    }

    #[test]
    fn resolve_falls_back_to_agnostic() {
        let c = Conversion::resolve(PhoneCode::Disc, PhoneCode::Ipa, Some("deu")).unwrap();
        assert_eq!(c, Conversion::DiscToIpa);
        let c = Conversion::resolve(PhoneCode::Arpabet, PhoneCode::Ipa, Some("eng_no_stress"))
            .unwrap();
        assert_eq!(c, Conversion::ArpabetToIpa);
    }

    #[test]
    fn resolve_is_case_sensitive_on_language() {
        let c = Conversion::resolve(PhoneCode::Disc, PhoneCode::Ipa, Some("ENG")).unwrap();
        assert_eq!(c, Conversion::DiscToIpa);
        let err = Conversion::resolve(PhoneCode::Callhome, PhoneCode::Ipa, Some("CMN")).unwrap_err();
        assert!(matches!(err, ConvertError::Unsupported { .. }));
    }

    #[test]
    fn callhome_requires_language() {
        let err = Conversion::resolve(PhoneCode::Callhome, PhoneCode::Ipa, None).unwrap_err();
        assert!(matches!(err, ConvertError::Unsupported { language: None, .. }));
        let err =
            Conversion::resolve(PhoneCode::Ipa, PhoneCode::Callhome, Some("eng")).unwrap_err();
        assert!(
            matches!(err, ConvertError::Unsupported { ref language, .. } if language.as_deref() == Some("eng"))
        );
        let c = Conversion::resolve(PhoneCode::Ipa, PhoneCode::Callhome, Some("cmn")).unwrap();
        assert_eq!(c, Conversion::IpaToCallhomeCmn);
    }

    #[test]
    fn ipa_to_timit_is_structurally_impossible() {
        for lang in [None, Some("eng"), Some("xyz")] {
            let err = Conversion::resolve(PhoneCode::Ipa, PhoneCode::Timit, lang).unwrap_err();
            assert!(matches!(err, ConvertError::ClosureSymbols));
        }
    }

    #[test]
    fn unsupported_pair() {
        let err = Conversion::resolve(PhoneCode::Arpabet, PhoneCode::Timit, None).unwrap_err();
        assert!(err.to_string().contains("arpabet to timit"));
        let err = Conversion::resolve(PhoneCode::Ipa, PhoneCode::Ipa, None).unwrap_err();
        assert!(matches!(err, ConvertError::Unsupported { .. }));
    }

    #[test]
    fn tone_configs() {
        let with_tones: Vec<_> = Conversion::ALL
            .into_iter()
            .filter(|c| c.tone_config().is_some())
            .collect();
        assert_eq!(with_tones.len(), 8);

        let arpabet = Conversion::ArpabetToIpa.tone_config().unwrap();
        assert_eq!(arpabet.direction, Direction::Backward);
        assert_eq!(arpabet.side, Side::Prepend);
        assert!(arpabet.is_tone("ˈ"));
        assert!(arpabet.is_vowel("æ"));

        let cmn = Conversion::IpaToCallhomeCmn.tone_config().unwrap();
        assert_eq!(cmn.tones(), vec!["0", "1", "2", "3", "4", "5"]);
        assert_eq!(cmn.direction, Direction::Backward);

        assert!(Conversion::TimitToIpa.tone_config().is_none());
        assert!(Conversion::IpaToXsampa.tone_config().is_none());
    }

    #[test]
    fn case_folding() {
        let folding: Vec<_> = Conversion::ALL
            .into_iter()
            .filter(|c| c.folds_case())
            .collect();
        assert_eq!(
            folding,
            vec![
                Conversion::ArpabetToIpa,
                Conversion::TimitToIpa,
                Conversion::BuckeyeToIpa
            ]
        );
    }
}
