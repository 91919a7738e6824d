use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants;


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Image naming configuration
    #[serde(default)]
    pub image: ImageConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Registry to prefix images with (e.g. ghcr.io)
    pub registry: Option<String>,

    /// Group (namespace) of the image, replacing the user name
    pub group: Option<String>,

    /// Image name, replacing the application name
    pub name: Option<String>,

    /// Image tag, replacing the application version
    pub tag: Option<String>,

    /// Full image reference, replacing everything above
    pub image: Option<String>,

    /// Extra tags the image is also published under
    #[serde(default)]
    pub additional_tags: Vec<String>,
}

impl ImageConfig {
    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: ImageConfig) -> ImageConfig {
        let mut additional_tags = self.additional_tags;
        for tag in overrides.additional_tags {
            if !additional_tags.contains(&tag) {
                additional_tags.push(tag);
            }
        }

        ImageConfig {
            registry: overrides.registry.or(self.registry),
            group: overrides.group.or(self.group),
            name: overrides.name.or(self.name),
            tag: overrides.tag.or(self.tag),
            image: overrides.image.or(self.image),
            additional_tags,
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(constants::config::DIR_NAME)
                .join(constants::config::FILE_NAME)
        })
    }

    /// Load the default config file, falling back to defaults when absent
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_default(Self::default_path().as_deref())
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(config_path) if config_path.exists() => Self::load_from(config_path),
            _ => Ok(Config::default()),
        }
    }

    /// Load an explicit config file, which must exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}
