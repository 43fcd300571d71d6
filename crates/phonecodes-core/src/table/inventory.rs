//! Vowel, consonant, stress and tone inventories.
//!
//! Reattachment needs to know which translated symbols are vowels and which
//! are tone or stress markers; the sets depend on the output code.

use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::ConvertError;

pub(crate) const INVENTORY_TOML: &str = include_str!("../data/inventory.toml");

#[derive(Debug, Deserialize)]
pub struct Inventory {
    pub ipa: IpaInventory,
    pub arpabet: ArpabetInventory,
    pub callhome: CallhomeInventory,
    /// language → (tone number → IPA tone letters)
    pub tone_letters: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize)]
pub struct IpaInventory {
    pub vowels: Vec<String>,
    pub consonants: Vec<String>,
    pub stress_markers: Vec<String>,
    pub tones: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArpabetInventory {
    pub vowels: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CallhomeInventory {
    pub arz: Vec<String>,
    pub cmn: Vec<String>,
    pub spa: Vec<String>,
}

/// Get or initialize the inventory singleton.
pub fn inventory() -> &'static Inventory {
    static INSTANCE: OnceLock<Inventory> = OnceLock::new();
    INSTANCE.get_or_init(|| toml::from_str(INVENTORY_TOML).expect("inventory TOML must be valid"))
}

pub fn ipa_vowels() -> HashSet<&'static str> {
    inventory().ipa.vowels.iter().map(String::as_str).collect()
}

pub fn ipa_consonants() -> HashSet<&'static str> {
    inventory().ipa.consonants.iter().map(String::as_str).collect()
}

pub fn ipa_stress_markers() -> HashSet<&'static str> {
    inventory().ipa.stress_markers.iter().map(String::as_str).collect()
}

pub fn ipa_tones() -> HashSet<&'static str> {
    inventory().ipa.tones.iter().map(String::as_str).collect()
}

/// IPA tone letters for a tone label such as `T3` (the leading letter is
/// ignored, the rest is the tone number).
pub fn tone_to_ipa(tone: &str, language: &str) -> Result<&'static str, ConvertError> {
    let unknown = || ConvertError::UnknownTone {
        language: language.to_string(),
        tone: tone.to_string(),
    };
    let mut chars = tone.chars();
    chars.next().ok_or_else(unknown)?;
    let number: u32 = chars.as_str().parse().map_err(|_| unknown())?;
    inventory()
        .tone_letters
        .get(language)
        .and_then(|letters| letters.get(&number.to_string()))
        .map(String::as_str)
        .ok_or_else(unknown)
}
