//! Phone-code conversion: minimum-cost segmentation, tone/stress
//! reattachment and optional post-conversion reduction.
//!
//! The input is segmented into table symbols over a cost lattice (misses
//! pass through as single characters), prosodic markers are merged into
//! their vowels where the conversion has a tone configuration, the symbols
//! are joined, a caller-supplied reduction map is applied, and the result is
//! trimmed.

pub mod explain;
mod lattice;
pub mod reattach;
pub mod reduce;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use serde::Serialize;
use tracing::{debug_span, warn};

use crate::codes::PhoneCode;
use crate::error::ConvertError;
use crate::registry::Conversion;
use crate::settings::settings;

pub use lattice::{
    build_lattice, segment_translate, segment_translate_with, Lattice, LatticeNode, Segmentation,
};
pub use reattach::{reattach, Direction, Side, ToneConfig};
pub use reduce::{reduce, Reduced, ReductionDiagnostic, ReductionError, ReductionMap, ReductionPreset};

/// Converted text plus what happened along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionOutput {
    pub text: String,
    /// One flag per segmented symbol, before reattachment; false for
    /// characters passed through untranslated
    pub hits: Vec<bool>,
    /// Advisory findings about the reduction map, empty without one
    pub diagnostics: Vec<ReductionDiagnostic>,
}

/// Symbols of one input before and after tone reattachment.
pub(crate) struct Translated {
    pub segmentation: Segmentation,
    /// `None` when the conversion has no tone configuration
    pub reattached: Option<Vec<String>>,
}

impl Translated {
    /// The final symbol sequence.
    pub fn symbols(&self) -> &[String] {
        self.reattached
            .as_deref()
            .unwrap_or(&self.segmentation.symbols)
    }
}

impl Conversion {
    /// Input as the table sees it: upper-cased for upper-case-keyed tables.
    pub(crate) fn fold_case(self, input: &str) -> Cow<'_, str> {
        if self.folds_case() {
            Cow::Owned(input.to_uppercase())
        } else {
            Cow::Borrowed(input)
        }
    }

    /// Lattice over the case-folded input, with the configured costs.
    pub(crate) fn lattice<'a>(self, folded: &'a str) -> Lattice<'a> {
        build_lattice(self.table(), folded, settings().cost)
    }

    /// Backtrace `lattice` and reattach tones where configured.
    pub(crate) fn translate(self, lattice: &Lattice<'_>) -> Translated {
        let segmentation = lattice.backtrace();
        let reattached = self
            .tone_config()
            .map(|config| reattach(&segmentation.symbols, config));
        Translated {
            segmentation,
            reattached,
        }
    }

    /// Convert one string with this conversion's table and tone configuration.
    pub fn run(self, input: &str, reduction: Option<&ReductionMap>) -> ConversionOutput {
        let _span = debug_span!("convert", conversion = ?self).entered();
        let folded = self.fold_case(input);
        let translated = self.translate(&self.lattice(&folded));
        let joined = translated.symbols().concat();
        let table = self.table();

        let (text, diagnostics) = match reduction {
            Some(map) => {
                let reduced = reduce(&joined, table, map);
                for diagnostic in &reduced.diagnostics {
                    warn!("{diagnostic}");
                }
                (reduced.text, reduced.diagnostics)
            }
            None => (joined, Vec::new()),
        };

        ConversionOutput {
            text: text.trim().to_string(),
            hits: translated.segmentation.hits,
            diagnostics,
        }
    }
}

fn resolve(from: &str, to: &str, language: Option<&str>) -> Result<Conversion, ConvertError> {
    let from: PhoneCode = from.parse()?;
    let to: PhoneCode = to.parse()?;
    Conversion::resolve(from, to, language)
}

/// Convert `input` from one phone code to another.
///
/// `from` and `to` are code names (`ipa`, `arpabet`, `xsampa`, `disc`,
/// `callhome`, `buckeye`, `timit`). `language` selects a language-specific
/// table where one exists. `reduction` is applied after conversion.
pub fn convert(
    input: &str,
    from: &str,
    to: &str,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
) -> Result<String, ConvertError> {
    Ok(convert_detailed(input, from, to, language, reduction)?.text)
}

/// Like [`convert`], also returning hit flags and reduction diagnostics.
pub fn convert_detailed(
    input: &str,
    from: &str,
    to: &str,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
) -> Result<ConversionOutput, ConvertError> {
    let conversion = resolve(from, to, language)?;
    Ok(conversion.run(input, reduction))
}

/// Convert each string independently. Fails before converting anything if
/// the codes do not resolve. Output order matches input order.
pub fn convert_list<S: AsRef<str>>(
    inputs: &[S],
    from: &str,
    to: &str,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
) -> Result<Vec<String>, ConvertError> {
    let conversion = resolve(from, to, language)?;
    let _span = debug_span!("convert_list", count = inputs.len()).entered();
    Ok(inputs
        .iter()
        .map(|s| conversion.run(s.as_ref(), reduction).text)
        .collect())
}

fn convert_codes(
    input: &str,
    from: PhoneCode,
    to: PhoneCode,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
) -> Result<String, ConvertError> {
    let conversion = Conversion::resolve(from, to, language)?;
    Ok(conversion.run(input, reduction).text)
}

pub fn ipa_to_xsampa(
    input: &str,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
) -> Result<String, ConvertError> {
    convert_codes(input, PhoneCode::Ipa, PhoneCode::Xsampa, language, reduction)
}

pub fn xsampa_to_ipa(
    input: &str,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
) -> Result<String, ConvertError> {
    convert_codes(input, PhoneCode::Xsampa, PhoneCode::Ipa, language, reduction)
}

/// DISC to IPA; `eng` and `nld` have their own tables.
pub fn disc_to_ipa(
    input: &str,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
) -> Result<String, ConvertError> {
    convert_codes(input, PhoneCode::Disc, PhoneCode::Ipa, language, reduction)
}

pub fn ipa_to_disc(
    input: &str,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
) -> Result<String, ConvertError> {
    convert_codes(input, PhoneCode::Ipa, PhoneCode::Disc, language, reduction)
}

/// CALLHOME to IPA. CALLHOME tables exist for `arz`, `cmn` and `spa` only.
pub fn callhome_to_ipa(
    input: &str,
    language: &str,
    reduction: Option<&ReductionMap>,
) -> Result<String, ConvertError> {
    convert_codes(input, PhoneCode::Callhome, PhoneCode::Ipa, Some(language), reduction)
}

pub fn ipa_to_callhome(
    input: &str,
    language: &str,
    reduction: Option<&ReductionMap>,
) -> Result<String, ConvertError> {
    convert_codes(input, PhoneCode::Ipa, PhoneCode::Callhome, Some(language), reduction)
}

pub fn arpabet_to_ipa(
    input: &str,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
) -> Result<String, ConvertError> {
    convert_codes(input, PhoneCode::Arpabet, PhoneCode::Ipa, language, reduction)
}

pub fn ipa_to_arpabet(
    input: &str,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
) -> Result<String, ConvertError> {
    convert_codes(input, PhoneCode::Ipa, PhoneCode::Arpabet, language, reduction)
}

pub fn timit_to_ipa(
    input: &str,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
) -> Result<String, ConvertError> {
    convert_codes(input, PhoneCode::Timit, PhoneCode::Ipa, language, reduction)
}

/// Always fails: TIMIT marks stop closures, which IPA does not transcribe.
pub fn ipa_to_timit(
    _input: &str,
    _language: Option<&str>,
    _reduction: Option<&ReductionMap>,
) -> Result<String, ConvertError> {
    Err(ConvertError::ClosureSymbols)
}

pub fn buckeye_to_ipa(
    input: &str,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
) -> Result<String, ConvertError> {
    convert_codes(input, PhoneCode::Buckeye, PhoneCode::Ipa, language, reduction)
}

pub fn ipa_to_buckeye(
    input: &str,
    language: Option<&str>,
    reduction: Option<&ReductionMap>,
) -> Result<String, ConvertError> {
    convert_codes(input, PhoneCode::Ipa, PhoneCode::Buckeye, language, reduction)
}
