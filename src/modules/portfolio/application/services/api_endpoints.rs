use std::env;

use crate::modules::portfolio::domain::Resource;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variables consulted for the backend address, first match wins.
const API_URL_VARS: [&str; 2] = ["PORTFOLIO_API_URL", "REACT_APP_API_URL"];

/// Resolves each [`Resource`] to an absolute backend URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base_url: String,
}

impl ApiEndpoints {
    /// A blank base falls back to [`DEFAULT_API_URL`]; trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// Load the backend address from the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = API_URL_VARS
            .iter()
            .find_map(|key| lookup(key).filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url, resource.path())
    }

    pub fn projects_url(&self, featured: bool) -> String {
        let url = self.url(Resource::Projects);
        if featured {
            format!("{url}?featured=true")
        } else {
            url
        }
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
