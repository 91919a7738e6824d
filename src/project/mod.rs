//! Application metadata read from a Cargo project

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;


/// Name and version of the application an image is derived for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub name: String,
    pub version: String,
}

impl ProjectMetadata {
    /// Read `[package]` name and version from `<project_path>/Cargo.toml`
    pub fn from_dir(project_path: &Path) -> Result<Self> {
        let cargo_toml_path = project_path.join("Cargo.toml");
        debug!("Reading project metadata from {:?}", cargo_toml_path);

        let content =
            std::fs::read_to_string(&cargo_toml_path).context("Failed to read Cargo.toml")?;
        let manifest: toml::Value =
            toml::from_str(&content).context("Failed to parse Cargo.toml")?;

        let package = manifest.get("package");
        let name = package
            .and_then(|p| p.get("name"))
            .and_then(|n| n.as_str())
            .filter(|n| !n.is_empty())
            .context("Failed to get package name from Cargo.toml")?;
        // An inherited `version.workspace = true` is a table, not a string
        let version = package
            .and_then(|p| p.get("version"))
            .and_then(|v| v.as_str())
            .filter(|v| !v.is_empty())
            .context("Failed to get package version from Cargo.toml")?;

        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
        })
    }
}
