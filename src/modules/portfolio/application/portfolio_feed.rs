use std::sync::Arc;

use tracing::error;

use crate::modules::portfolio::application::ports::incoming::{FetchError, PortfolioQuery};
use crate::modules::portfolio::domain::{Certification, Experience, Profile, Project, Skill};

/// What the view layer talks to.
///
/// Never fails: any error from the query side is logged and replaced by the
/// resource's empty value (`None` for the profile, an empty list otherwise).
/// A view therefore cannot tell "no items" from "fetch failed".
#[derive(Clone)]
pub struct PortfolioFeed {
    query: Arc<dyn PortfolioQuery>,
}

impl std::fmt::Debug for PortfolioFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioFeed")
            .field("query", &"<dyn PortfolioQuery>")
            .finish()
    }
}

impl PortfolioFeed {
    pub fn new(query: Arc<dyn PortfolioQuery>) -> Self {
        Self { query }
    }

    pub async fn fetch_profile(&self) -> Option<Profile> {
        self.query
            .fetch_profile()
            .await
            .map_err(|e| log_failure("profile", &e))
            .ok()
    }

    pub async fn fetch_experience(&self) -> Vec<Experience> {
        or_empty("experience", self.query.fetch_experience().await)
    }

    pub async fn fetch_projects(&self, featured: bool) -> Vec<Project> {
        or_empty("projects", self.query.fetch_projects(featured).await)
    }

    pub async fn fetch_skills(&self) -> Vec<Skill> {
        or_empty("skills", self.query.fetch_skills().await)
    }

    pub async fn fetch_certifications(&self) -> Vec<Certification> {
        or_empty("certifications", self.query.fetch_certifications().await)
    }

    pub fn clear_cache(&self) {
        if let Err(e) = self.query.clear_cache() {
            error!(error = %e, "error clearing cache");
        }
    }
}

fn or_empty<T>(what: &str, result: Result<Vec<T>, FetchError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log_failure(what, &e);
        Vec::new()
    })
}

fn log_failure(what: &str, err: &FetchError) {
    error!(resource = what, error = %err, "error fetching {what}");
}
