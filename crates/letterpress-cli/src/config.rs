//! Configuration file support.
//!
//! ```toml
//! [render]
//! lang = "de"
//! container_width = 640
//! doctype = true
//! placeholder = "<p>Preview unavailable</p>"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use letterpress::RenderOptions;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub render: RenderOptions,
}

impl Config {
    /// Read `path`, or fall back to defaults when no file was given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply command-line and environment overrides
    pub fn with_overrides(
        mut self,
        lang: Option<String>,
        width: Option<u32>,
        no_doctype: bool,
    ) -> Self {
        if let Some(lang) = lang {
            self.render.lang = lang;
        }
        if let Some(width) = width {
            self.render.container_width = width;
        }
        if no_doctype {
            self.render.doctype = false;
        }
        self
    }
}
