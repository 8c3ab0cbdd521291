// src/modules/portfolio/application/ports/outgoing/session_store.rs

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    #[error("Session storage quota exceeded writing {key} ({bytes} bytes)")]
    QuotaExceeded { key: String, bytes: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// DOMException names browsers use when a storage write runs out of room.
const QUOTA_ERROR_NAMES: [&str; 2] = ["QuotaExceededError", "NS_ERROR_DOM_QUOTA_REACHED"];

impl StorageError {
    /// Classify a failed write from the name of the exception the backend raised.
    pub fn write_rejected(error_name: Option<&str>, detail: String, key: &str, bytes: usize) -> Self {
        match error_name {
            Some(name) if QUOTA_ERROR_NAMES.contains(&name) => StorageError::QuotaExceeded {
                key: key.to_string(),
                bytes,
            },
            _ => StorageError::Unavailable(detail),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// String key/value store that lives as long as one browsing session.
///
/// Browser `sessionStorage` is synchronous, so this port is too.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
