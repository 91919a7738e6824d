//! Resolve service for deriving image references
//!
//! Combines the merged image configuration, the project's Cargo metadata and
//! the ambient user identity into the image reference(s) for a project.

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{
    config::ImageConfig,
    image::{self, ImageNameInputs, ImageReference},
    project::ProjectMetadata,
};

/// Configuration for a resolve operation
pub struct ResolveRequest {
    pub project_path: PathBuf,
    pub image: ImageConfig,
    /// Ambient user identity, used as namespace when no group is configured
    pub user: Option<String>,
}

/// Result of a resolve operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub primary: ImageReference,
    pub additional: Vec<ImageReference>,
}

#[derive(Serialize)]
struct ResolvedImageJson<'a> {
    image: String,
    registry: Option<&'a str>,
    group: Option<&'a str>,
    name: &'a str,
    tag: &'a str,
    additional_images: Vec<String>,
}

impl ResolvedImage {
    /// Primary reference first, then the additional ones
    pub fn images(&self) -> impl Iterator<Item = &ImageReference> {
        std::iter::once(&self.primary).chain(self.additional.iter())
    }

    pub fn to_json(&self) -> Result<String> {
        let json = ResolvedImageJson {
            image: self.primary.to_string(),
            registry: self.primary.registry(),
            group: self.primary.namespace(),
            name: self.primary.repository(),
            tag: self.primary.tag(),
            additional_images: self.additional.iter().map(|i| i.to_string()).collect(),
        };
        Ok(serde_json::to_string_pretty(&json)?)
    }
}

/// Service for orchestrating image reference derivation
pub struct ResolveService;

impl ResolveService {
    /// Derive the image references for the given request
    pub fn resolve(request: ResolveRequest) -> Result<ResolvedImage> {
        let config = request.image;
        let (name, version) =
            Self::application_name_and_version(&request.project_path, config.name, config.tag)?;

        match (&config.group, &request.user) {
            (Some(group), _) if !group.is_empty() => debug!("Namespace from configured group"),
            (_, Some(user)) if !user.is_empty() => debug!("Namespace from user identity"),
            _ => debug!("No namespace"),
        }

        let inputs = ImageNameInputs::new(name, version)
            .with_namespace_override(request.user)
            .with_explicit_group(config.group)
            .with_image_override(config.image)
            .with_registry(config.registry);

        let primary = image::resolve(&inputs)?;
        info!("Resolved image: {}", primary);

        let mut additional: Vec<ImageReference> = Vec::new();
        for tag in &config.additional_tags {
            if tag.is_empty() || tag == primary.tag() || additional.iter().any(|i| i.tag() == tag)
            {
                continue;
            }
            let tagged = primary.with_tag(tag.as_str())?;
            info!("Additional image: {}", tagged);
            additional.push(tagged);
        }

        Ok(ResolvedImage {
            primary,
            additional,
        })
    }

    /// Overrides win; Cargo.toml is only read when one of them is missing
    fn application_name_and_version(
        project_path: &Path,
        name: Option<String>,
        version: Option<String>,
    ) -> Result<(String, String)> {
        let name = name.filter(|n| !n.is_empty());
        let version = version.filter(|v| !v.is_empty());

        match (name, version) {
            (Some(name), Some(version)) => Ok((name, version)),
            (name, version) => {
                let metadata = ProjectMetadata::from_dir(project_path)?;
                Ok((
                    name.unwrap_or(metadata.name),
                    version.unwrap_or(metadata.version),
                ))
            }
        }
    }
}
