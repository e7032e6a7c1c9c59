//! The requested change to a workspace's symbols.

use wstag_core::{Symbol, SymbolSet};

/// Which workspace an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    Focused,
    Number(i32),
}

/// Exactly one mutation per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Append symbols not already present.
    Add(Vec<String>),
    /// Drop the symbols of these tags.
    Remove(Vec<String>),
    /// Replace the symbol set outright.
    Set(Vec<String>),
    Clear,
    /// Append an arbitrary string as one opaque symbol.
    Raw(String),
    /// Replace the symbol set with tags inferred from the workspace's windows.
    Auto,
}

impl Operation {
    /// Tag names that must resolve before anything else happens.
    pub fn tag_names(&self) -> &[String] {
        match self {
            Operation::Add(tags) | Operation::Remove(tags) | Operation::Set(tags) => tags,
            Operation::Clear | Operation::Raw(_) | Operation::Auto => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Operation::Add(_) => "add",
            Operation::Remove(_) => "remove",
            Operation::Set(_) => "set",
            Operation::Clear => "clear",
            Operation::Raw(_) => "string",
            Operation::Auto => "auto",
        }
    }
}

/// Apply a resolved, non-auto operation to `current`.
///
/// `resolved` holds the symbols of [`Operation::tag_names`], in order.
pub fn apply(current: SymbolSet, operation: &Operation, resolved: Vec<Symbol>) -> SymbolSet {
    match operation {
        Operation::Add(_) => {
            let mut symbols = current;
            for symbol in resolved {
                symbols.push_unique(symbol);
            }
            symbols
        }
        Operation::Remove(_) => {
            let mut symbols = current;
            symbols.remove_all(&resolved);
            symbols
        }
        Operation::Set(_) => SymbolSet::from(resolved),
        Operation::Clear => SymbolSet::new(),
        Operation::Raw(raw) => {
            let mut symbols = current;
            symbols.push(Symbol::from(raw.as_str()));
            symbols
        }
        Operation::Auto => SymbolSet::from(resolved),
    }
}
