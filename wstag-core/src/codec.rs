//! Workspace name encoding.
//!
//! A workspace name is `<num>[<separator><symbols>]`, or just `<symbols>` in
//! compressed mode once symbols exist. Single-character symbols are stored by
//! plain concatenation. If any symbol is longer than one character, every
//! symbol is instead prefixed with the delimiter so the name can be split back
//! into tokens.

use crate::types::{Symbol, SymbolSet};

/// Encodes and decodes symbol sets in workspace names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameCodec {
    separator: char,
    delimiter: char,
    compressed: bool,
}

impl NameCodec {
    pub const DEFAULT_SEPARATOR: char = ' ';
    pub const DEFAULT_DELIMITER: char = '\u{200b}';

    pub fn new(separator: char, compressed: bool) -> Self {
        Self {
            separator,
            delimiter: Self::DEFAULT_DELIMITER,
            compressed,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn compressed(&self) -> bool {
        self.compressed
    }

    /// Recover the symbols of a workspace name.
    ///
    /// Every numeric character (any script, including superscripts) and every
    /// separator character is dropped. Without a delimiter in the name, each
    /// remaining character is one symbol.
    pub fn decode(&self, name: &str) -> SymbolSet {
        let stripped = name
            .chars()
            .filter(|&c| !c.is_numeric() && c != self.separator);

        if name.contains(self.delimiter) {
            let rest: String = stripped.collect();
            rest.split(self.delimiter)
                .filter(|t| !t.is_empty())
                .map(Symbol::from)
                .collect()
        } else {
            stripped.map(Symbol::from).collect()
        }
    }

    /// Build the workspace name for `num` carrying `symbols`.
    ///
    /// The number cannot be recovered from a compressed name; callers keep it
    /// from the workspace entry.
    pub fn encode(&self, num: i32, symbols: &SymbolSet) -> String {
        if symbols.is_empty() {
            return num.to_string();
        }

        let joined = if symbols.all_single_char() {
            symbols.to_string()
        } else {
            let mut out = String::new();
            for s in symbols {
                out.push(self.delimiter);
                out.push_str(s.as_str());
            }
            out
        };

        if self.compressed {
            joined
        } else {
            format!("{num}{}{joined}", self.separator)
        }
    }
}

impl Default for NameCodec {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEPARATOR, false)
    }
}
