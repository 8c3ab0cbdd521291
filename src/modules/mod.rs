pub mod assets;
pub mod portfolio;
