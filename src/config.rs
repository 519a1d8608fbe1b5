//! Configuration with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. An optional TOML file or string handed in by the caller

use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};

/// How trees are labelled when rendered with `TreeNodeConvert`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Append `root=N` once `find_steps_from_root` has run
    pub show_root_steps: bool,
    /// Append `min_leaf=N` / `max_leaf=N` once `find_steps_from_leaf` has run
    pub show_leaf_steps: bool,
    /// Label used when the requested root is not in the arena
    pub empty_label: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            show_root_steps: true,
            show_leaf_steps: true,
            empty_label: "Empty tree".into(),
        }
    }
}

/// Unified configuration for rstree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub render: RenderSettings,
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings from compiled defaults, overlaid by the TOML file at
    /// `path` if one is given. A given path must exist.
    #[instrument(level = "debug")]
    pub fn load(path: Option<&Path>) -> TreeResult<Self> {
        let mut builder = Self::defaults_builder()?;
        if let Some(path) = path {
            debug!("loading settings from {}", path.display());
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }
        Self::build(builder)
    }

    /// Load settings from compiled defaults, overlaid by TOML `content`.
    #[instrument(level = "debug", skip(content))]
    pub fn from_toml_str(content: &str) -> TreeResult<Self> {
        let builder =
            Self::defaults_builder()?.add_source(File::from_str(content, FileFormat::Toml));
        Self::build(builder)
    }

    fn defaults_builder() -> TreeResult<ConfigBuilder<DefaultState>> {
        let defaults = RenderSettings::default();
        Config::builder()
            .set_default("render.show_root_steps", defaults.show_root_steps)
            .map_err(config_err)?
            .set_default("render.show_leaf_steps", defaults.show_leaf_steps)
            .map_err(config_err)?
            .set_default("render.empty_label", defaults.empty_label)
            .map_err(config_err)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> TreeResult<Self> {
        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }
}
