//! Service layer for business logic orchestration
//!
//! This module contains the service layer that ties configuration, project
//! metadata and the environment to image reference derivation, separating
//! concerns from the CLI layer in main.rs.

pub mod identity;
pub mod resolve;

pub use identity::IdentityDetector;
pub use resolve::{ResolveRequest, ResolveService, ResolvedImage};
