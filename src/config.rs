//! Converter configuration loaded from TOML
//!
//! ```toml
//! [convert]
//! max_depth = 32
//!
//! [svg]
//! pretty_print = false
//! class_prefix = ""   # empty disables class attributes
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::SvgConfig;
use crate::ConvertConfig;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings file contents; every table and key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub convert: ConvertSection,
    pub svg: SvgSection,
}

/// `[convert]` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertSection {
    /// Deepest nesting of shapes below a drawing root; unbounded when absent
    pub max_depth: Option<usize>,
}

/// `[svg]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SvgSection {
    pub pretty_print: bool,
    pub standalone: bool,
    pub width: Option<String>,
    pub height: Option<String>,
    pub class_prefix: String,
}

impl Default for SvgSection {
    fn default() -> Self {
        let svg = SvgConfig::default();
        Self {
            pretty_print: svg.pretty_print,
            standalone: svg.standalone,
            width: svg.width,
            height: svg.height,
            class_prefix: svg.class_prefix.unwrap_or_default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Pipeline configuration described by this file
    pub fn to_convert_config(&self) -> ConvertConfig {
        let svg = &self.svg;
        let class_prefix = Some(svg.class_prefix.clone()).filter(|p| !p.is_empty());
        ConvertConfig::new()
            .with_max_depth(self.convert.max_depth)
            .with_svg(SvgConfig {
                standalone: svg.standalone,
                pretty_print: svg.pretty_print,
                width: svg.width.clone(),
                height: svg.height.clone(),
                class_prefix,
            })
    }
}
