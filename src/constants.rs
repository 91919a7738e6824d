/// Container image tag constants
pub mod tag {
    /// Tag used when an image override carries no tag
    pub const DEFAULT: &str = "latest";
}

/// Environment variables consulted for the ambient user identity
pub mod env {
    /// Checked in order; the first non-empty value wins
    pub const IDENTITY_VARS: &[&str] = &["USER", "USERNAME"];
}

/// Config file location under the user's config directory
pub mod config {
    pub const DIR_NAME: &str = "imgname";

    pub const FILE_NAME: &str = "config.toml";
}
