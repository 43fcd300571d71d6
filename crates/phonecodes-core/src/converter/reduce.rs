//! Post-conversion reduction: an ordered literal substitution pass that folds
//! the converted symbol inventory onto a smaller one.
//!
//! Substitution is a single left-to-right scan. Replacement output is never
//! re-scanned, so a rule whose value occurs inside a later key does not chain.
//! [`ReductionMap::cascading_keys`] reports such pairs and
//! [`ReductionMap::extra_keys`] reports keys the source table can never emit.
//! Both are advisory.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::Serialize;
use tracing::{debug, debug_span};

use crate::table::{SymbolTable, TableId};

pub(crate) const REDUCTIONS_TOML: &str = include_str!("../data/reductions.toml");

#[derive(Debug, thiserror::Error)]
pub enum ReductionError {
    #[error("empty key in reduction map")]
    EmptyKey,
    #[error("invalid reduction pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("unknown reduction preset {0:?} (expected one of standard-timit, timit-shared, buckeye-shared)")]
    UnknownPreset(String),
}

/// Ordered substring → replacement rules. Declaration order is match priority.
#[derive(Debug, Clone, Default)]
pub struct ReductionMap {
    rules: Vec<(String, String)>,
    index: HashMap<String, usize>,
    /// Alternation of the escaped keys in rule order; `None` when empty
    pattern: Option<Regex>,
}

impl ReductionMap {
    /// Build from `(key, value)` pairs in priority order.
    ///
    /// A repeated key keeps its first position and takes the last value.
    pub fn new<I, K, V>(rules: I) -> Result<Self, ReductionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = ReductionMap::default();
        for (key, value) in rules {
            let key = key.into();
            if key.is_empty() {
                return Err(ReductionError::EmptyKey);
            }
            let value = value.into();
            match map.index.get(&key) {
                Some(&i) => map.rules[i].1 = value,
                None => {
                    map.index.insert(key.clone(), map.rules.len());
                    map.rules.push((key, value));
                }
            }
        }
        if !map.rules.is_empty() {
            let alternation = map
                .rules
                .iter()
                .map(|(k, _)| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            map.pattern = Some(Regex::new(&alternation)?);
        }
        Ok(map)
    }

    /// Parse a flat TOML document of `"key" = "value"` lines, keeping order.
    pub fn parse_toml(toml_str: &str) -> Result<Self, ReductionError> {
        let doc = parse_document(toml_str)?;
        Self::from_toml_table(&doc)
    }

    /// Parse the `[section]` table of a TOML document, keeping order.
    pub fn parse_toml_section(toml_str: &str, section: &str) -> Result<Self, ReductionError> {
        let doc = parse_document(toml_str)?;
        let table = doc
            .get(section)
            .and_then(toml::Value::as_table)
            .ok_or_else(|| ReductionError::Parse(format!("missing [{section}] table")))?;
        Self::from_toml_table(table)
    }

    fn from_toml_table(table: &toml::Table) -> Result<Self, ReductionError> {
        let mut rules = Vec::with_capacity(table.len());
        for (key, value) in table {
            let value = value.as_str().ok_or_else(|| {
                ReductionError::Parse(format!("value for key {key:?} is not a string"))
            })?;
            rules.push((key.as_str(), value));
        }
        Self::new(rules)
    }

    /// A shipped preset by name (`standard-timit`, `timit-shared`, `buckeye-shared`).
    pub fn preset(name: &str) -> Result<&'static ReductionMap, ReductionError> {
        Ok(name.parse::<ReductionPreset>()?.map())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.rules[i].1.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Pairs `(k1, k2)` where `k1` precedes `k2` and the non-empty value of
    /// `k1` occurs inside `k2`.
    pub fn cascading_keys(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (i, (k1, value)) in self.rules.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            for (k2, _) in &self.rules[i + 1..] {
                if k2.contains(value.as_str()) {
                    pairs.push((k1.clone(), k2.clone()));
                }
            }
        }
        pairs
    }

    /// Keys that are not among the values `table` can produce.
    pub fn extra_keys(&self, table: &SymbolTable) -> BTreeSet<String> {
        let produced = table.values();
        self.keys()
            .filter(|k| !produced.contains(k))
            .map(str::to_string)
            .collect()
    }

    /// Both advisory checks against the table that produced the input.
    pub fn diagnose(&self, table: &SymbolTable) -> Vec<ReductionDiagnostic> {
        let mut diagnostics = Vec::new();
        let pairs = self.cascading_keys();
        if !pairs.is_empty() {
            diagnostics.push(ReductionDiagnostic::CascadingKeys { pairs });
        }
        let keys = self.extra_keys(table);
        if !keys.is_empty() {
            diagnostics.push(ReductionDiagnostic::ExtraKeys { keys });
        }
        diagnostics
    }

    /// Replace every non-overlapping key occurrence, leftmost first. At one
    /// position the earliest declared key wins.
    pub fn apply(&self, input: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return input.to_string();
        };
        pattern
            .replace_all(input, |caps: &Captures<'_>| {
                let matched = &caps[0];
                self.get(matched).unwrap_or(matched).to_string()
            })
            .into_owned()
    }
}

/// Advisory finding about a reduction map. Never blocks substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReductionDiagnostic {
    CascadingKeys { pairs: Vec<(String, String)> },
    ExtraKeys { keys: BTreeSet<String> },
}

impl fmt::Display for ReductionDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReductionDiagnostic::CascadingKeys { pairs } => {
                write!(
                    f,
                    "reduction does not perform cascading replacements, but these keys overlap:"
                )?;
                for (k1, k2) in pairs {
                    write!(f, " ({k1:?} -> {k2:?})")?;
                }
                Ok(())
            }
            ReductionDiagnostic::ExtraKeys { keys } => {
                write!(f, "reduction keys do not appear in the original table:")?;
                for k in keys {
                    write!(f, " {k:?}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduced {
    pub text: String,
    pub diagnostics: Vec<ReductionDiagnostic>,
}

/// Diagnose `map` against `table`, then apply it to `input`.
pub fn reduce(input: &str, table: &SymbolTable, map: &ReductionMap) -> Reduced {
    let _span = debug_span!("reduce", rules = map.len()).entered();
    let diagnostics = map.diagnose(table);
    let text = map.apply(input);
    debug!(diagnostics = diagnostics.len());
    Reduced { text, diagnostics }
}

/// Reduction maps shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReductionPreset {
    /// TIMIT IPA onto the standard reduced TIMIT inventory
    StandardTimit,
    /// TIMIT IPA onto the inventory shared with Buckeye
    TimitShared,
    /// Buckeye IPA onto the inventory shared with TIMIT
    BuckeyeShared,
}

impl ReductionPreset {
    pub const ALL: [ReductionPreset; 3] = [
        ReductionPreset::StandardTimit,
        ReductionPreset::TimitShared,
        ReductionPreset::BuckeyeShared,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ReductionPreset::StandardTimit => "standard-timit",
            ReductionPreset::TimitShared => "timit-shared",
            ReductionPreset::BuckeyeShared => "buckeye-shared",
        }
    }

    /// The table whose output this preset reduces.
    pub fn source_table(self) -> TableId {
        match self {
            ReductionPreset::StandardTimit | ReductionPreset::TimitShared => TableId::TimitToIpa,
            ReductionPreset::BuckeyeShared => TableId::BuckeyeToIpa,
        }
    }

    /// Get or initialize the preset's map.
    pub fn map(self) -> &'static ReductionMap {
        static MAPS: OnceLock<Vec<ReductionMap>> = OnceLock::new();
        let maps = MAPS.get_or_init(|| {
            ReductionPreset::ALL
                .iter()
                .map(|p| {
                    ReductionMap::parse_toml_section(REDUCTIONS_TOML, p.name())
                        .expect("embedded reduction presets must be valid")
                })
                .collect()
        });
        &maps[self as usize]
    }
}

impl FromStr for ReductionPreset {
    type Err = ReductionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReductionPreset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ReductionError::UnknownPreset(s.to_string()))
    }
}

fn parse_document(toml_str: &str) -> Result<toml::Table, ReductionError> {
    toml_str
        .parse()
        .map_err(|e: toml::de::Error| ReductionError::Parse(e.to_string()))
}
