use std::env;

pub const DEFAULT_ASSETS_URL: &str = "https://s3.sudarshanrajagopalan.one";
pub const DEFAULT_BUCKET: &str = "surajwebsite";

const RESUME_PATH: &str = "resume/SUDARSHAN-RAJAGOPALAN-Resume.pdf";
const PROFILE_IMAGE_PATH: &str = "images/suraj.jpg";
const PROFILE_IMAGE_NO_BG_PATH: &str = "images/suraj_no_bg.png";

/// Where the static assets (resume, profile photos) live in object storage.
///
/// Only URLs are built here; the browser loads the files itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    base_url: String,
    bucket: String,
}

impl AssetConfig {
    pub fn new(base_url: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bucket: bucket.into().trim_matches('/').to_string(),
        }
    }

    /// Load asset storage settings from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self::new(
            non_blank("PORTFOLIO_ASSETS_URL").unwrap_or_else(|| DEFAULT_ASSETS_URL.to_string()),
            non_blank("PORTFOLIO_ASSETS_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
        )
    }

    /// `{base}/{bucket}/{path}`
    pub fn asset_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            self.bucket,
            path.trim_start_matches('/')
        )
    }

    pub fn resume_url(&self) -> String {
        self.asset_url(RESUME_PATH)
    }

    pub fn profile_image_url(&self) -> String {
        self.asset_url(PROFILE_IMAGE_PATH)
    }

    pub fn profile_image_no_bg_url(&self) -> String {
        self.asset_url(PROFILE_IMAGE_NO_BG_PATH)
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ASSETS_URL, DEFAULT_BUCKET)
    }
}
