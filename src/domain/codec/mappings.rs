//! Static shortcut tables for the lookup domain strategy.
//!
//! Tables are built once at startup, wrapped in an `Arc` and shared read-only
//! by every request. Construction checks that each table is injective in both
//! directions, so decoding a shortcut is never ambiguous.

use std::collections::HashMap;

use super::error::CodecError;

/// Common subdomains.
pub const SUBDOMAIN_MAP: &[(&str, &str)] = &[("www", "w"), ("blog", "b"), ("mail", "m")];

/// Common top-level domains, including multi-label suffixes.
pub const TLD_MAP: &[(&str, &str)] = &[
    ("com", "c"),
    ("org", "o"),
    ("net", "n"),
    ("io", "i"),
    ("co.uk", "uk"),
];

/// Full-domain shortcuts for frequently shortened hosts.
pub const DOMAIN_MAP: &[(&str, &str)] = &[
    ("google.com", "g"),
    ("youtube.com", "y"),
    ("facebook.com", "f"),
    ("github.com", "gh"),
    ("openai.com", "oa"),
];

/// A forward table and its exact inverse.
#[derive(Debug, Clone, Default)]
struct Table {
    forward: HashMap<String, String>,
    inverse: HashMap<String, String>,
}

impl Table {
    fn new<'a>(
        name: &'static str,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, CodecError> {
        let mut table = Table::default();

        for (key, shortcut) in pairs {
            if table.inverse.contains_key(shortcut) || table.forward.contains_key(key) {
                return Err(CodecError::AmbiguousMapping {
                    table: name,
                    shortcut: shortcut.to_string(),
                });
            }
            table.forward.insert(key.to_string(), shortcut.to_string());
            table.inverse.insert(shortcut.to_string(), key.to_string());
        }

        Ok(table)
    }

    fn shortcut(&self, key: &str) -> Option<&str> {
        self.forward.get(key).map(String::as_str)
    }

    fn expand(&self, shortcut: &str) -> Option<&str> {
        self.inverse.get(shortcut).map(String::as_str)
    }
}

/// Immutable subdomain, TLD and full-domain shortcut tables.
#[derive(Debug, Clone)]
pub struct DomainMappings {
    subdomains: Table,
    tlds: Table,
    domains: Table,
}

impl DomainMappings {
    /// Builds mappings from explicit `(key, shortcut)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::AmbiguousMapping`] if a key or shortcut repeats
    /// within one table.
    pub fn new<'a>(
        subdomains: impl IntoIterator<Item = (&'a str, &'a str)>,
        tlds: impl IntoIterator<Item = (&'a str, &'a str)>,
        domains: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            subdomains: Table::new("subdomain", subdomains)?,
            tlds: Table::new("tld", tlds)?,
            domains: Table::new("domain", domains)?,
        })
    }

    /// Tables shipped with the service.
    pub fn builtin() -> Self {
        Self::new(
            SUBDOMAIN_MAP.iter().copied(),
            TLD_MAP.iter().copied(),
            DOMAIN_MAP.iter().copied(),
        )
        .expect("built-in domain tables are injective")
    }

    pub fn domain_shortcut(&self, domain: &str) -> Option<&str> {
        self.domains.shortcut(domain)
    }

    pub fn domain_for(&self, shortcut: &str) -> Option<&str> {
        self.domains.expand(shortcut)
    }

    pub fn subdomain_shortcut(&self, subdomain: &str) -> Option<&str> {
        self.subdomains.shortcut(subdomain)
    }

    pub fn subdomain_for(&self, shortcut: &str) -> Option<&str> {
        self.subdomains.expand(shortcut)
    }

    pub fn tld_shortcut(&self, tld: &str) -> Option<&str> {
        self.tlds.shortcut(tld)
    }

    pub fn tld_for(&self, shortcut: &str) -> Option<&str> {
        self.tlds.expand(shortcut)
    }
}

impl Default for DomainMappings {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_injective() {
        assert!(
            DomainMappings::new(
                SUBDOMAIN_MAP.iter().copied(),
                TLD_MAP.iter().copied(),
                DOMAIN_MAP.iter().copied(),
            )
            .is_ok()
        );
    }

    #[test]
    fn test_inverse_matches_forward() {
        let mappings = DomainMappings::builtin();

        for &(domain, shortcut) in DOMAIN_MAP {
            assert_eq!(mappings.domain_shortcut(domain), Some(shortcut));
            assert_eq!(mappings.domain_for(shortcut), Some(domain));
        }
        for &(sub, shortcut) in SUBDOMAIN_MAP {
            assert_eq!(mappings.subdomain_shortcut(sub), Some(shortcut));
            assert_eq!(mappings.subdomain_for(shortcut), Some(sub));
        }
        for &(tld, shortcut) in TLD_MAP {
            assert_eq!(mappings.tld_shortcut(tld), Some(shortcut));
            assert_eq!(mappings.tld_for(shortcut), Some(tld));
        }
    }

    #[test]
    fn test_domain_shortcuts_contain_no_dots() {
        for &(_, shortcut) in DOMAIN_MAP {
            assert!(!shortcut.contains('.'));
        }
    }

    #[test]
    fn test_duplicate_shortcut_is_rejected() {
        let result = DomainMappings::new(
            [("www", "w"), ("web", "w")],
            TLD_MAP.iter().copied(),
            DOMAIN_MAP.iter().copied(),
        );

        match result {
            Err(CodecError::AmbiguousMapping { table, shortcut }) => {
                assert_eq!(table, "subdomain");
                assert_eq!(shortcut, "w");
            }
            other => panic!("expected AmbiguousMapping, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let result = DomainMappings::new(
            SUBDOMAIN_MAP.iter().copied(),
            TLD_MAP.iter().copied(),
            [("google.com", "g"), ("google.com", "gg")],
        );

        assert!(matches!(
            result,
            Err(CodecError::AmbiguousMapping { table: "domain", .. })
        ));
    }

    #[test]
    fn test_unknown_entries_are_absent() {
        let mappings = DomainMappings::builtin();
        assert_eq!(mappings.domain_shortcut("example.com"), None);
        assert_eq!(mappings.subdomain_for("zz"), None);
        assert_eq!(mappings.tld_for("de"), None);
    }
}
