pub mod list;
pub mod tag;

use std::path::Path;

use anyhow::{Context, Result};

use wstag_core::{config, Config, NameCodec, TagRegistry};

/// Config file values with command-line overrides applied.
#[derive(Debug)]
pub struct Settings {
    pub config: Config,
}

impl Settings {
    pub fn load(
        path: Option<&Path>,
        separator: Option<char>,
        compressed: Option<bool>,
    ) -> Result<Self> {
        let mut config = match path {
            Some(path) => config::load_from(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?,
            None => config::load().context("failed to load config")?,
        };
        if let Some(separator) = separator {
            config.separator = separator;
        }
        if let Some(compressed) = compressed {
            config.compressed = compressed;
        }
        tracing::debug!(
            tags = config.tags.len(),
            rules = config.rules.len(),
            separator = ?config.separator,
            compressed = config.compressed,
            "settings loaded"
        );
        Ok(Self { config })
    }

    pub fn registry(&self) -> TagRegistry {
        self.config.registry()
    }

    pub fn codec(&self) -> NameCodec {
        self.config.codec()
    }
}
