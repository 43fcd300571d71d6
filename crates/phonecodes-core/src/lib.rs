//! Conversion between IPA and corpus phone codes: ARPABET, X-SAMPA, DISC,
//! CALLHOME, Buckeye and TIMIT.
//!
//! ```
//! let ipa = phonecodes_core::convert("AE1 D V ER0 T", "arpabet", "ipa", None, None).unwrap();
//! assert_eq!(ipa, "ˈæ d v ɚ t");
//! ```

pub mod codes;
pub mod converter;
pub mod error;
pub mod registry;
pub mod settings;
pub mod table;

pub use codes::{Language, PhoneCode};
pub use converter::explain::{explain, Explanation};
pub use converter::{
    arpabet_to_ipa, buckeye_to_ipa, callhome_to_ipa, convert, convert_detailed, convert_list,
    disc_to_ipa, ipa_to_arpabet, ipa_to_buckeye, ipa_to_callhome, ipa_to_disc, ipa_to_timit,
    ipa_to_xsampa, timit_to_ipa, xsampa_to_ipa, ConversionOutput, ReductionDiagnostic,
    ReductionError, ReductionMap, ReductionPreset,
};
pub use error::ConvertError;
pub use registry::Conversion;
pub use table::inventory::{ipa_consonants, ipa_stress_markers, ipa_tones, ipa_vowels, tone_to_ipa};
pub use table::{SymbolTable, TableError, TableId};
