pub mod asset_config;

pub use asset_config::AssetConfig;
