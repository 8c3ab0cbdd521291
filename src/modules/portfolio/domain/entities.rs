use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::date_format::format_duration;
use super::timestamp::Timestamp;

/// The backend writes absent slices and maps as JSON `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub about_me: String,
    pub resume_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social_links: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub id: i64,
    pub company: String,
    pub role: String,
    pub start_date: Timestamp,
    /// `None` while the engagement is ongoing.
    pub end_date: Option<Timestamp>,
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
}

impl Experience {
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }

    /// `"07/2021 – Present"` style label for the timeline.
    pub fn duration_label(&self) -> String {
        format_duration(
            self.start_date.as_datetime(),
            self.end_date.as_ref().map(Timestamp::as_datetime),
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
    pub repo_link: String,
    pub live_link: String,
    pub featured: bool,
    pub display_order: i64,
}

impl Project {
    pub fn has_repo(&self) -> bool {
        !self.repo_link.trim().is_empty()
    }

    pub fn has_live_demo(&self) -> bool {
        !self.live_link.trim().is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: i64,
    pub category: String,
    pub skill: String,
    pub description: String,
    pub icon_name: String,
    pub icon_color: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub id: i64,
    pub name: String,
    pub issuer: String,
    pub issue_date: Timestamp,
    pub credential_url: String,
    pub display_order: i64,
}

/// A value the cached fetch layer can move between the wire and the session store.
pub trait Payload: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// What a JSON `null` body decodes to, if anything.
    fn from_null() -> Option<Self>;
}

impl Payload for Profile {
    fn from_null() -> Option<Self> {
        None
    }
}

impl<T> Payload for Vec<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn from_null() -> Option<Self> {
        Some(Vec::new())
    }
}
