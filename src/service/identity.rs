//! Ambient user identity detection
//!
//! The OS user name is the fallback image namespace when no group is
//! configured.

use tracing::debug;

use crate::constants::env::IDENTITY_VARS;

/// Service for detecting the ambient user identity
pub struct IdentityDetector;

impl IdentityDetector {
    /// Current OS user name from the environment, if any
    pub fn detect() -> Option<String> {
        Self::detect_with(|name| std::env::var(name).ok())
    }

    /// First non-empty identity variable according to `lookup`
    pub fn detect_with<F>(lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let identity = IDENTITY_VARS
            .iter()
            .filter_map(|name| lookup(*name).map(|value| (*name, value)))
            .find(|(_, value)| !value.is_empty());

        match identity {
            Some((name, value)) => {
                debug!("Detected user identity from {}: {:?}", name, value);
                Some(value)
            }
            None => {
                debug!("No user identity found in environment");
                None
            }
        }
    }
}
