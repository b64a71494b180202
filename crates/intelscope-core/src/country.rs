//! Country key normalization for the threat map
//!
//! Backend threat-map keys arrive as either ISO-3166 alpha-2 codes or full
//! country names. Both are canonicalized to a code for intensity lookups,
//! while the display rule keeps whatever form carries the most information:
//! a full-name key is shown as-is, a code key is shown as `"CC (Full Name)"`.

/// Resolves raw threat-map keys to canonical ISO alpha-2 codes.
pub trait CountryResolver {
    /// Canonical code for `key`, or `None` when the key is unrecognized.
    fn canonical_code(&self, key: &str) -> Option<&'static str>;

    /// Full display name for a canonical code.
    fn full_name(&self, code: &str) -> Option<&'static str>;
}

/// Static lookup tables covering the countries the world map renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCountryTable;

/// Raw key (code or full name) to canonical alpha-2 code.
const ALIASES: &[(&str, &str)] = &[
    ("US", "US"),
    ("CN", "CN"),
    ("RU", "RU"),
    ("DE", "DE"),
    ("GB", "GB"),
    ("FR", "FR"),
    ("JP", "JP"),
    ("IN", "IN"),
    ("BR", "BR"),
    ("CA", "CA"),
    ("United States", "US"),
    ("China", "CN"),
    ("Russia", "RU"),
    ("Germany", "DE"),
    ("United Kingdom", "GB"),
    ("France", "FR"),
    ("Japan", "JP"),
    ("India", "IN"),
    ("Brazil", "BR"),
    ("Canada", "CA"),
];

/// Alpha-2 code to full country name.
const NAMES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("CN", "China"),
    ("RU", "Russia"),
    ("DE", "Germany"),
    ("GB", "United Kingdom"),
    ("FR", "France"),
    ("JP", "Japan"),
    ("IN", "India"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("AU", "Australia"),
    ("MX", "Mexico"),
    ("IT", "Italy"),
    ("ES", "Spain"),
    ("KR", "South Korea"),
    ("NL", "Netherlands"),
    ("SE", "Sweden"),
    ("PL", "Poland"),
    ("TR", "Turkey"),
    ("AR", "Argentina"),
    ("SA", "Saudi Arabia"),
    ("ZA", "South Africa"),
    ("EG", "Egypt"),
    ("SG", "Singapore"),
    ("VG", "British Virgin Islands"),
    ("NZ", "New Zealand"),
    ("CH", "Switzerland"),
    ("NO", "Norway"),
    ("DK", "Denmark"),
    ("FI", "Finland"),
    ("BE", "Belgium"),
    ("AT", "Austria"),
    ("PT", "Portugal"),
];

impl CountryResolver for StaticCountryTable {
    fn canonical_code(&self, key: &str) -> Option<&'static str> {
        ALIASES.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    fn full_name(&self, code: &str) -> Option<&'static str> {
        NAMES.iter().find(|(k, _)| *k == code).map(|(_, v)| *v)
    }
}

impl StaticCountryTable {
    /// Canonical code for a raw key. Unrecognized keys pass through so the
    /// intensity map still keys them consistently.
    pub fn code_for<'a>(&self, key: &'a str) -> &'a str {
        self.canonical_code(key).unwrap_or(key)
    }

    /// Display label for a raw threat-map key.
    ///
    /// Full-name keys are already self-describing. Code keys get the full
    /// name appended when known, and fall back to the bare key otherwise.
    pub fn display_name(&self, key: &str) -> String {
        let code = self.code_for(key);
        if code != key {
            // key was a full name already
            return key.to_string();
        }
        match self.full_name(code) {
            Some(name) => format!("{code} ({name})"),
            None => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_passthrough_and_alias() {
        let table = StaticCountryTable;
        assert_eq!(table.code_for("US"), "US");
        assert_eq!(table.code_for("United States"), "US");
        assert_eq!(table.code_for("XX"), "XX");
    }

    #[test]
    fn test_display_name_for_code_key() {
        let table = StaticCountryTable;
        assert_eq!(table.display_name("DE"), "DE (Germany)");
        assert_eq!(table.display_name("VG"), "VG (British Virgin Islands)");
    }

    #[test]
    fn test_display_name_for_full_name_key() {
        let table = StaticCountryTable;
        assert_eq!(table.display_name("Russia"), "Russia");
    }

    #[test]
    fn test_display_name_unknown_key() {
        let table = StaticCountryTable;
        assert_eq!(table.display_name("ZZ"), "ZZ");
    }
}
