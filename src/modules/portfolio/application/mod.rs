pub mod portfolio_feed;
pub mod ports;
pub mod services;

pub use portfolio_feed::PortfolioFeed;
