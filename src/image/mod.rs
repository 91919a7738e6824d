//! Container image reference derivation
//!
//! Turns application metadata plus an optional group, ambient user identity
//! and registry into a `[registry/][namespace/]repository:tag` reference.

use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::constants::tag;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An explicitly configured group contains whitespace
    #[error("Invalid container image group '{0}': the group must not contain whitespace")]
    InvalidGroup(String),

    /// An image override with no repository or containing whitespace
    #[error("Invalid container image '{0}': expected a non-empty repository and no whitespace")]
    InvalidImage(String),

    /// A tag that is empty or contains whitespace
    #[error("Invalid container image tag '{0}': the tag must be non-empty and contain no whitespace")]
    InvalidTag(String),
}

/// Everything `resolve` needs to derive an image reference
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageNameInputs {
    application_name: String,
    application_version: String,
    namespace_override: Option<String>,
    explicit_group: Option<String>,
    image_override: Option<String>,
    registry: Option<String>,
}

impl ImageNameInputs {
    /// Both values must be non-empty; callers validate them beforehand.
    pub fn new(application_name: impl Into<String>, application_version: impl Into<String>) -> Self {
        let inputs = Self {
            application_name: application_name.into(),
            application_version: application_version.into(),
            ..Default::default()
        };
        debug_assert!(
            !inputs.application_name.is_empty() && !inputs.application_version.is_empty(),
            "application name and version must be non-empty"
        );
        inputs
    }

    /// Namespace derived from the environment, e.g. the OS user name.
    /// Normalized rather than rejected.
    pub fn with_namespace_override(mut self, namespace: Option<String>) -> Self {
        self.namespace_override = namespace;
        self
    }

    /// Explicitly configured group. Takes precedence over the namespace
    /// override and must not contain whitespace.
    pub fn with_explicit_group(mut self, group: Option<String>) -> Self {
        self.explicit_group = group;
        self
    }

    /// Full image reference replacing the derived one
    pub fn with_image_override(mut self, image: Option<String>) -> Self {
        self.image_override = image;
        self
    }

    pub fn with_registry(mut self, registry: Option<String>) -> Self {
        self.registry = registry;
        self
    }
}

/// A rendered-on-demand image reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    registry: Option<String>,
    namespace: Option<String>,
    repository: String,
    tag: String,
}

impl ImageReference {
    pub fn registry(&self) -> Option<&str> {
        self.registry.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Same image under a different tag
    pub fn with_tag(&self, tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();
        if tag.is_empty() || tag.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidTag(tag));
        }
        Ok(Self {
            tag,
            ..self.clone()
        })
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(registry) = &self.registry {
            write!(f, "{}/", registry)?;
        }
        if let Some(namespace) = &self.namespace {
            write!(f, "{}/", namespace)?;
        }
        write!(f, "{}:{}", self.repository, self.tag)
    }
}

/// Collapse every run of whitespace into a single `-`, dropping leading and
/// trailing whitespace.
pub fn normalize_namespace(candidate: &str) -> String {
    candidate.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Derive the image reference for the given inputs.
///
/// Namespace precedence is explicit group, then the (normalized) namespace
/// override, then none. An image override bypasses all of it.
pub fn resolve(inputs: &ImageNameInputs) -> Result<ImageReference, ValidationError> {
    if let Some(image) = non_empty(inputs.image_override.as_deref().map(str::trim)) {
        debug!("Using image override: {}", image);
        return parse_image_override(image);
    }

    let namespace = match non_empty(inputs.explicit_group.as_deref()) {
        Some(group) => {
            if group.chars().any(char::is_whitespace) {
                return Err(ValidationError::InvalidGroup(group.to_string()));
            }
            debug!("Using configured group: {}", group);
            Some(group.to_string())
        }
        None => inputs
            .namespace_override
            .as_deref()
            .map(normalize_namespace)
            .filter(|namespace| !namespace.is_empty()),
    };

    let registry = inputs
        .registry
        .as_deref()
        .map(|r| r.trim().trim_end_matches('/'))
        .filter(|r| !r.is_empty())
        .map(str::to_string);

    Ok(ImageReference {
        registry,
        namespace,
        repository: inputs.application_name.clone(),
        tag: inputs.application_version.clone(),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// The tag is whatever follows the last ':' after the last '/', so a
// registry port is never mistaken for a tag.
fn parse_image_override(image: &str) -> Result<ImageReference, ValidationError> {
    let (repository, tag) = match image.rfind(':') {
        Some(idx) if !image[idx..].contains('/') => (&image[..idx], &image[idx + 1..]),
        _ => (image, ""),
    };
    if repository.is_empty() || image.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidImage(image.to_string()));
    }

    Ok(ImageReference {
        registry: None,
        namespace: None,
        repository: repository.to_string(),
        tag: if tag.is_empty() { tag::DEFAULT } else { tag }.to_string(),
    })
}
