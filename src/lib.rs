//! Session-cached client for the portfolio backend.
//!
//! Views go through [`PortfolioFeed`], which never fails; everything under it
//! reports errors as `Result`s.

pub mod modules;
pub mod shared;

pub use modules::assets;
pub use modules::portfolio;

pub use modules::assets::AssetConfig;
pub use modules::portfolio::adapter::outgoing::api::{ReqwestTransport, TransportConfig};
pub use modules::portfolio::adapter::outgoing::storage::MemorySessionStore;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use modules::portfolio::adapter::outgoing::storage::WebSessionStore;
pub use modules::portfolio::application::ports::incoming::{FetchError, PortfolioQuery};
pub use modules::portfolio::application::ports::outgoing::{
    HttpTransport, SessionStore, StorageError, TransportError,
};
pub use modules::portfolio::application::services::{ApiEndpoints, CachedPortfolioService};
pub use modules::portfolio::application::PortfolioFeed;
pub use modules::portfolio::domain::{
    format_date, format_duration, CacheKey, Certification, Experience, Profile, Project,
    Resource, Skill,
};

#[cfg(test)]
mod tests;
