pub mod api_endpoints;
pub mod cached_portfolio_service;
pub mod fetch_gate;

pub use api_endpoints::{ApiEndpoints, DEFAULT_API_URL};
pub use cached_portfolio_service::CachedPortfolioService;
pub use fetch_gate::FetchGate;
