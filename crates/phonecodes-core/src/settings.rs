//! Lattice path costs.
//!
//! The segmenter prices every table hit at `symbol_cost` and every character
//! passed through untranslated at `oov_cost`. The defaults ship in
//! `default_settings.toml`; a process may install its own document once, with
//! [`init_custom`], before the first conversion reads [`settings`].

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// `oov_cost` must be at least this multiple of `symbol_cost`, so that any
/// full translation through the table beats leaving a character untranslated.
pub const MIN_OOV_RATIO: u64 = 10;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Validate `toml_content` and install it in place of the defaults.
///
/// Only a call made before the first [`settings`] call takes effect. A second
/// call fails with [`SettingsError::AlreadyInitialized`].
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Costs in effect for this process. The first call freezes the choice
/// between the custom document and the embedded defaults.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(String::as_str)
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub cost: CostSettings,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CostSettings {
    /// Path cost of one symbol found in the table.
    pub symbol_cost: u32,
    /// Path cost of one character passed through untranslated.
    pub oov_cost: u32,
}

impl Default for CostSettings {
    fn default() -> Self {
        Self {
            symbol_cost: 1,
            oov_cost: 10,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.cost.symbol_cost == 0 {
        return Err(SettingsError::InvalidValue {
            field: "cost.symbol_cost".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    let min_oov = u64::from(s.cost.symbol_cost) * MIN_OOV_RATIO;
    if u64::from(s.cost.oov_cost) < min_oov {
        return Err(SettingsError::InvalidValue {
            field: "cost.oov_cost".to_string(),
            reason: format!("must be at least {MIN_OOV_RATIO} x cost.symbol_cost ({min_oov})"),
        });
    }
    Ok(())
}
