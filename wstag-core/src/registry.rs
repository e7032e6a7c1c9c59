//! Tag vocabulary: tag name → display symbol.
//!
//! The registry is built once per invocation (from [`crate::config::Config`] or
//! the stock vocabulary) and never mutated afterwards. Lookups are typed: an
//! unknown name yields [`TagError::UnknownTag`] carrying the sorted vocabulary,
//! so callers can resolve every name before touching any workspace.

use std::collections::BTreeMap;

use crate::error::TagError;
use crate::types::{Symbol, TagName};

/// Stock vocabulary, Font Awesome private-use glyphs.
pub const DEFAULT_TAGS: &[(&str, &str)] = &[
    ("mail", "\u{f0e0}"),
    ("web", "\u{f269}"),
    ("code", "\u{f121}"),
    ("notes", "\u{f040}"),
    ("film", "\u{f008}"),
    ("music", "\u{f001}"),
    ("tunnel", "\u{f066}"),
    ("teaching", "\u{f19d}"),
    ("paperwork", "\u{f24e}"),
    ("admin", "\u{f233}"),
    ("reading", "\u{f02d}"),
    ("chat", "\u{f2c0}"),
    ("paper", "\u{f0f6}"),
    ("calculation", "\u{f080}"),
];

/// Immutable mapping from tag name to symbol, ordered by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRegistry {
    tags: BTreeMap<TagName, Symbol>,
}

impl TagRegistry {
    pub fn new<N, S>(entries: impl IntoIterator<Item = (N, S)>) -> Self
    where
        N: Into<TagName>,
        S: Into<Symbol>,
    {
        Self {
            tags: entries
                .into_iter()
                .map(|(n, s)| (n.into(), s.into()))
                .collect(),
        }
    }

    /// Resolve one tag name to its symbol.
    pub fn lookup(&self, name: &str) -> Result<&Symbol, TagError> {
        self.tags.get(name).ok_or_else(|| TagError::UnknownTag {
            name: name.to_string(),
            valid: self.all_names().into_iter().map(str::to_string).collect(),
        })
    }

    /// Resolve every name, in order. Fails on the first unknown name without
    /// returning any partial result.
    pub fn resolve_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Symbol>, TagError> {
        names
            .iter()
            .map(|n| self.lookup(n.as_ref()).cloned())
            .collect()
    }

    /// All tag names, sorted.
    pub fn all_names(&self) -> Vec<&str> {
        self.tags.keys().map(|k| k.0.as_str()).collect()
    }

    /// `(name, symbol)` pairs sorted by name.
    pub fn entries(&self) -> impl Iterator<Item = (&TagName, &Symbol)> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_TAGS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> TagRegistry {
        TagRegistry::new([("web", "W"), ("mail", "M"), ("film", "F")])
    }

    #[test]
    fn lookup_known_tag() {
        assert_eq!(small().lookup("mail").expect("mail").as_str(), "M");
    }

    #[test]
    fn unknown_tag_carries_sorted_vocabulary() {
        let err = small().lookup("bogus").unwrap_err();
        match err {
            TagError::UnknownTag { name, valid } => {
                assert_eq!(name, "bogus");
                assert_eq!(valid, vec!["film", "mail", "web"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_tag_message_lists_vocabulary() {
        let msg = small().lookup("bogus").unwrap_err().to_string();
        assert!(msg.contains("unknown tag 'bogus'"));
        assert!(msg.contains("film mail web"));
    }

    #[test]
    fn resolve_all_is_all_or_nothing() {
        let reg = small();
        assert!(reg.resolve_all(&["mail", "bogus", "web"]).is_err());
        let ok = reg.resolve_all(&["web", "mail", "web"]).expect("resolve");
        assert_eq!(ok, vec![Symbol::from("W"), Symbol::from("M"), Symbol::from("W")]);
    }

    #[test]
    fn default_vocabulary_is_single_glyphs() {
        let reg = TagRegistry::default();
        assert_eq!(reg.len(), DEFAULT_TAGS.len());
        assert!(reg.entries().all(|(_, s)| s.is_single_char()));
        assert_eq!(reg.all_names().first(), Some(&"admin"));
    }
}
