/// Failure of a conversion request. Raised before any transformation begins.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{code:?} is not a known phone code (expected one of ipa, arpabet, xsampa, disc, callhome, buckeye, timit)")]
    InvalidCode { code: String },
    #[error("unsupported conversion: {from} to {to}{}", language_suffix(.language))]
    Unsupported {
        from: String,
        to: String,
        language: Option<String>,
    },
    #[error("IPA cannot be converted to TIMIT: TIMIT transcribes stop closures separately from releases, and IPA has no closure symbols")]
    ClosureSymbols,
    #[error("no IPA tone letters for tone {tone:?} in language {language:?}")]
    UnknownTone { language: String, tone: String },
}

fn language_suffix(language: &Option<String>) -> String {
    match language {
        Some(l) => format!(" (language {l})"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_message_names_triple() {
        let err = ConvertError::Unsupported {
            from: "disc".into(),
            to: "timit".into(),
            language: Some("eng".into()),
        };
        assert_eq!(
            err.to_string(),
            "unsupported conversion: disc to timit (language eng)"
        );
        let err = ConvertError::Unsupported {
            from: "disc".into(),
            to: "timit".into(),
            language: None,
        };
        assert_eq!(err.to_string(), "unsupported conversion: disc to timit");
    }

    #[test]
    fn closure_symbols_explains_reason() {
        assert!(ConvertError::ClosureSymbols.to_string().contains("closure"));
    }
}
