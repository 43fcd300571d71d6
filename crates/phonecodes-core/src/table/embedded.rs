use std::sync::OnceLock;

use tracing::debug;

use super::SymbolTable;

pub(crate) const ARPABET_TOML: &str = include_str!("../data/arpabet.toml");
pub(crate) const BUCKEYE_TOML: &str = include_str!("../data/buckeye.toml");
pub(crate) const CALLHOME_TOML: &str = include_str!("../data/callhome.toml");
pub(crate) const DISC_TOML: &str = include_str!("../data/disc.toml");
pub(crate) const TIMIT_TOML: &str = include_str!("../data/timit.toml");
pub(crate) const XSAMPA_TOML: &str = include_str!("../data/xsampa.toml");

/// Identifies one of the symbol tables embedded in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
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

impl TableId {
    pub const ALL: [TableId; 17] = [
        TableId::IpaToXsampa,
        TableId::XsampaToIpa,
        TableId::DiscToIpa,
        TableId::DiscToIpaNld,
        TableId::DiscToIpaEng,
        TableId::IpaToDisc,
        TableId::CallhomeToIpaArz,
        TableId::CallhomeToIpaCmn,
        TableId::CallhomeToIpaSpa,
        TableId::IpaToCallhomeArz,
        TableId::IpaToCallhomeCmn,
        TableId::IpaToCallhomeSpa,
        TableId::ArpabetToIpa,
        TableId::IpaToArpabet,
        TableId::TimitToIpa,
        TableId::BuckeyeToIpa,
        TableId::IpaToBuckeye,
    ];

    /// The embedded TOML document and the section holding this table.
    pub(crate) fn source(self) -> (&'static str, &'static str) {
        match self {
            TableId::IpaToXsampa => (XSAMPA_TOML, "ipa_to_xsampa"),
            TableId::XsampaToIpa => (XSAMPA_TOML, "xsampa_to_ipa"),
            TableId::DiscToIpa => (DISC_TOML, "disc_to_ipa"),
            TableId::DiscToIpaNld => (DISC_TOML, "disc_to_ipa_nld"),
            TableId::DiscToIpaEng => (DISC_TOML, "disc_to_ipa_eng"),
            TableId::IpaToDisc => (DISC_TOML, "ipa_to_disc"),
            TableId::CallhomeToIpaArz => (CALLHOME_TOML, "callhome_to_ipa_arz"),
            TableId::CallhomeToIpaCmn => (CALLHOME_TOML, "callhome_to_ipa_cmn"),
            TableId::CallhomeToIpaSpa => (CALLHOME_TOML, "callhome_to_ipa_spa"),
            TableId::IpaToCallhomeArz => (CALLHOME_TOML, "ipa_to_callhome_arz"),
            TableId::IpaToCallhomeCmn => (CALLHOME_TOML, "ipa_to_callhome_cmn"),
            TableId::IpaToCallhomeSpa => (CALLHOME_TOML, "ipa_to_callhome_spa"),
            TableId::ArpabetToIpa => (ARPABET_TOML, "arpabet_to_ipa"),
            TableId::IpaToArpabet => (ARPABET_TOML, "ipa_to_arpabet"),
            TableId::TimitToIpa => (TIMIT_TOML, "timit_to_ipa"),
            TableId::BuckeyeToIpa => (BUCKEYE_TOML, "buckeye_to_ipa"),
            TableId::IpaToBuckeye => (BUCKEYE_TOML, "ipa_to_buckeye"),
        }
    }

    /// Section name of this table in its TOML document.
    pub fn name(self) -> &'static str {
        self.source().1
    }

    /// Get or initialize the table. All embedded tables are parsed on first use.
    pub fn table(self) -> &'static SymbolTable {
        static TABLES: OnceLock<Vec<SymbolTable>> = OnceLock::new();
        let tables = TABLES.get_or_init(|| {
            TableId::ALL
                .iter()
                .map(|id| {
                    let (doc, section) = id.source();
                    let table = SymbolTable::parse_toml(doc, section)
                        .expect("embedded symbol table must be valid");
                    debug!(table = section, entries = table.len(), "loaded symbol table");
                    table
                })
                .collect()
        });
        // ALL lists variants in declaration order
        &tables[self as usize]
    }
}
