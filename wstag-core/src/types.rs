//! Domain types shared by every wstag crate.
//!
//! Workspaces are snapshots of window-manager state and are never cached across
//! operations. Symbol sets are rebuilt from the workspace name on every invocation.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A human-chosen tag name such as `mail` or `web`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TagName(pub String);

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TagName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TagName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl Borrow<str> for TagName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The glyph stored inside a workspace name for one tag.
///
/// Normally a single character. Raw string tags and custom vocabularies may
/// produce longer symbols, which the codec stores as delimited tokens.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl Symbol {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the symbol occupies exactly one character position.
    pub fn is_single_char(&self) -> bool {
        let mut chars = self.0.chars();
        chars.next().is_some() && chars.next().is_none()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

// ---------------------------------------------------------------------------
// Workspace
// ---------------------------------------------------------------------------

/// One entry of the window manager's workspace list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub num: i32,
    pub name: String,
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Workspace {
    pub fn new(num: i32, name: impl Into<String>, focused: bool) -> Self {
        Self {
            num,
            name: name.into(),
            focused,
            visible: focused,
            output: None,
        }
    }
}

// ---------------------------------------------------------------------------
// SymbolSet
// ---------------------------------------------------------------------------

/// Ordered symbols currently encoded in a workspace name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolSet(pub Vec<Symbol>);

impl SymbolSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.0.iter()
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.0.contains(symbol)
    }

    /// Append without any deduplication.
    pub fn push(&mut self, symbol: Symbol) {
        self.0.push(symbol);
    }

    /// Append only if the symbol is not already present.
    pub fn push_unique(&mut self, symbol: Symbol) {
        if !self.contains(&symbol) {
            self.0.push(symbol);
        }
    }

    /// Drop every symbol that appears in `removed`.
    pub fn remove_all(&mut self, removed: &[Symbol]) {
        self.0.retain(|s| !removed.contains(s));
    }

    /// True when every symbol is a single character (legacy encoding applies).
    pub fn all_single_char(&self) -> bool {
        self.0.iter().all(Symbol::is_single_char)
    }
}

impl From<Vec<Symbol>> for SymbolSet {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }
}

impl FromIterator<Symbol> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.0 {
            f.write_str(s.as_str())?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
