//! Process-wide configuration, read once at startup.
//!
//! # Storage layout
//!
//! ```text
//! ~/.config/wstag/config.yaml   (optional; stock defaults apply when absent)
//! ```
//!
//! # API pattern
//!
//! - `fn_at(home: &Path, …)` takes an explicit home; used in tests with `TempDir`
//! - `fn(…)` derives home from `dirs::home_dir()` and delegates to `_at`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec::NameCodec;
use crate::error::TagError;
use crate::registry::TagRegistry;

/// Window metadata field a classification rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Role,
    Class,
    Instance,
    Title,
}

/// A user-supplied classification rule. Exactly one of `equals`, `one_of`,
/// `contains` must be set; the detector validates this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub signal: Signal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equals: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,
    pub tag: String,
}

/// How wstag reaches the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TransportKind {
    /// Speak the binary IPC protocol over the window manager's Unix socket.
    #[default]
    #[serde(rename = "socket")]
    Socket,
    /// Shell out to `i3-msg`.
    #[serde(rename = "i3-msg")]
    I3Msg,
}

/// Root of `config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What separates the number from the symbols.
    pub separator: char,
    /// Suppress the workspace number once symbols exist.
    pub compressed: bool,
    /// Prefix for each symbol when some symbol spans several characters.
    pub delimiter: char,
    /// Tag vocabulary. Replaces the stock vocabulary entirely when given.
    pub tags: BTreeMap<String, String>,
    /// Classification rules appended to the built-in table.
    pub rules: Vec<RuleSpec>,
    pub transport: TransportKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: NameCodec::DEFAULT_SEPARATOR,
            compressed: false,
            delimiter: NameCodec::DEFAULT_DELIMITER,
            tags: crate::registry::DEFAULT_TAGS
                .iter()
                .map(|(n, s)| (n.to_string(), s.to_string()))
                .collect(),
            rules: Vec::new(),
            transport: TransportKind::Socket,
            socket_path: None,
        }
    }
}

impl Config {
    pub fn registry(&self) -> TagRegistry {
        TagRegistry::new(self.tags.iter().map(|(n, s)| (n.as_str(), s.as_str())))
    }

    pub fn codec(&self) -> NameCodec {
        NameCodec::new(self.separator, self.compressed).with_delimiter(self.delimiter)
    }
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// `<home>/.config/wstag/config.yaml`, pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".config").join("wstag").join("config.yaml")
}

/// Load `<home>/.config/wstag/config.yaml`, falling back to defaults when absent.
pub fn load_at(home: &Path) -> Result<Config, TagError> {
    let path = config_path_at(home);
    if !path.exists() {
        return Ok(Config::default());
    }
    load_from(&path)
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<Config, TagError> {
    load_at(&home()?)
}

/// Load an explicit config file. A missing file is an error here.
pub fn load_from(path: &Path) -> Result<Config, TagError> {
    if !path.exists() {
        return Err(TagError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(&contents).map_err(|e| TagError::Config {
        path: path.to_path_buf(),
        source: e,
    })
}

fn home() -> Result<PathBuf, TagError> {
    dirs::home_dir().ok_or(TagError::HomeNotFound)
}
