use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::{StorageError, TransportError};
use crate::modules::portfolio::domain::{
    Certification, Experience, Profile, Project, Resource, Skill,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Malformed {resource} payload: {reason}")]
    Parse { resource: Resource, reason: String },
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port
// ──────────────────────────────────────────────────────────
//

/// Read-through access to the portfolio backend.
///
/// Every method answers from the session cache when it can. Errors are
/// reported as-is; collapsing them to empty values is the view boundary's job.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PortfolioQuery: Send + Sync {
    async fn fetch_profile(&self) -> Result<Profile, FetchError>;

    async fn fetch_experience(&self) -> Result<Vec<Experience>, FetchError>;

    /// `featured = true` asks the backend for featured projects only.
    async fn fetch_projects(&self, featured: bool) -> Result<Vec<Project>, FetchError>;

    async fn fetch_skills(&self) -> Result<Vec<Skill>, FetchError>;

    async fn fetch_certifications(&self) -> Result<Vec<Certification>, FetchError>;

    /// Drops every cached entry, featured projects included.
    fn clear_cache(&self) -> Result<(), StorageError>;
}
