//! wstag core library: domain types, tag vocabulary, name codec, config, errors.
//!
//! Public API surface:
//! - [`types`]: newtypes, [`Workspace`], [`SymbolSet`]
//! - [`registry`]: [`TagRegistry`]
//! - [`codec`]: [`NameCodec`]
//! - [`tree`]: [`WindowNode`] container tree
//! - [`directory`]: the [`WorkspaceDirectory`] seam to the window manager
//! - [`config`]: load `config.yaml`
//! - [`error`]: [`TagError`]

pub mod codec;
pub mod config;
pub mod directory;
pub mod error;
pub mod registry;
pub mod tree;
pub mod types;

pub use codec::NameCodec;
pub use config::{Config, RuleSpec, Signal, TransportKind};
pub use directory::WorkspaceDirectory;
pub use error::TagError;
pub use registry::TagRegistry;
pub use tree::{WindowNode, WindowProperties};
pub use types::{Symbol, SymbolSet, TagName, Workspace};
