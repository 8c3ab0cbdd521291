mod portfolio_query;

pub use portfolio_query::{FetchError, PortfolioQuery};
