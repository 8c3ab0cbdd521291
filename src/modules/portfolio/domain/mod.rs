pub mod date_format;
pub mod display;
pub mod entities;
pub mod resource;
pub mod timestamp;

pub use date_format::{format_date, format_duration, format_month_year};
pub use entities::{Certification, Experience, Payload, Profile, Project, Skill};
pub use resource::{CacheKey, Resource};
pub use timestamp::Timestamp;
