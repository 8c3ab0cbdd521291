use async_trait::async_trait;
use tracing::{debug, warn};

use crate::modules::portfolio::application::ports::incoming::{FetchError, PortfolioQuery};
use crate::modules::portfolio::application::ports::outgoing::{
    HttpTransport, SessionStore, StorageError,
};
use crate::modules::portfolio::application::services::api_endpoints::ApiEndpoints;
use crate::modules::portfolio::application::services::fetch_gate::FetchGate;
use crate::modules::portfolio::domain::{
    CacheKey, Certification, Experience, Payload, Profile, Project, Resource, Skill,
};

// ============================================================================
// Service Implementation
// ============================================================================

/// Session-cached reads of the portfolio backend.
///
/// For one call the order is fixed: cache read, then network, then cache
/// write, then return. Entries never expire; only [`PortfolioQuery::clear_cache`]
/// removes them.
pub struct CachedPortfolioService<T, S>
where
    T: HttpTransport,
    S: SessionStore,
{
    transport: T,
    store: S,
    endpoints: ApiEndpoints,
    gate: FetchGate,
}

impl<T, S> CachedPortfolioService<T, S>
where
    T: HttpTransport,
    S: SessionStore,
{
    pub fn new(transport: T, store: S, endpoints: ApiEndpoints) -> Self {
        Self {
            transport,
            store,
            endpoints,
            gate: FetchGate::new(),
        }
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    async fn fetch_cached<V: Payload>(
        &self,
        resource: Resource,
        key: CacheKey,
        url: String,
    ) -> Result<V, FetchError> {
        if let Some(hit) = self.read_cache::<V>(key) {
            debug!(%key, "cache hit");
            return Ok(hit);
        }

        let _lane = self.gate.enter(key).await;

        // Someone ahead of us in the lane may have filled it.
        if let Some(hit) = self.read_cache::<V>(key) {
            debug!(%key, "cache filled while waiting");
            return Ok(hit);
        }

        debug!(%key, %url, "cache miss, fetching");
        let body = self.transport.get(&url).await?;
        let value = decode::<V>(resource, &body)?;

        if let Err(e) = self.write_cache(key, &value) {
            warn!(%key, error = %e, "could not cache response");
        }

        Ok(value)
    }

    /// Unreadable or undecodable entries count as a miss.
    fn read_cache<V: Payload>(&self, key: CacheKey) -> Option<V> {
        let raw = match self.store.get(key.as_str()) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(%key, error = %e, "error reading from cache");
                return None;
            }
        };

        match serde_json::from_str::<V>(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%key, error = %e, "ignoring malformed cache entry");
                None
            }
        }
    }

    fn write_cache<V: Payload>(&self, key: CacheKey, value: &V) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set(key.as_str(), &json)
    }
}

fn decode<V: Payload>(resource: Resource, body: &str) -> Result<V, FetchError> {
    let parsed = serde_json::from_str::<Option<V>>(body).map_err(|e| FetchError::Parse {
        resource,
        reason: e.to_string(),
    })?;

    match parsed {
        Some(value) => Ok(value),
        None => V::from_null().ok_or_else(|| FetchError::Parse {
            resource,
            reason: "unexpected null body".to_string(),
        }),
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T, S> PortfolioQuery for CachedPortfolioService<T, S>
where
    T: HttpTransport,
    S: SessionStore,
{
    async fn fetch_profile(&self) -> Result<Profile, FetchError> {
        let url = self.endpoints.url(Resource::Profile);
        self.fetch_cached(Resource::Profile, CacheKey::Profile, url)
            .await
    }

    async fn fetch_experience(&self) -> Result<Vec<Experience>, FetchError> {
        let url = self.endpoints.url(Resource::Experience);
        self.fetch_cached(Resource::Experience, CacheKey::Experience, url)
            .await
    }

    async fn fetch_projects(&self, featured: bool) -> Result<Vec<Project>, FetchError> {
        let url = self.endpoints.projects_url(featured);
        self.fetch_cached(Resource::Projects, CacheKey::for_projects(featured), url)
            .await
    }

    async fn fetch_skills(&self) -> Result<Vec<Skill>, FetchError> {
        let url = self.endpoints.url(Resource::Skills);
        self.fetch_cached(Resource::Skills, CacheKey::Skills, url)
            .await
    }

    async fn fetch_certifications(&self) -> Result<Vec<Certification>, FetchError> {
        let url = self.endpoints.url(Resource::Certifications);
        self.fetch_cached(Resource::Certifications, CacheKey::Certifications, url)
            .await
    }

    fn clear_cache(&self) -> Result<(), StorageError> {
        let mut outcome = Ok(());
        for key in CacheKey::ALL {
            if let Err(e) = self.store.remove(key.as_str()) {
                warn!(%key, error = %e, "could not remove cache entry");
                outcome = Err(e);
            }
        }
        outcome
    }
}
