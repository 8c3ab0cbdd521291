use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::{
    HttpTransport, SessionStore, StorageError, TransportError,
};

/// Canned backend: answers each URL with a fixed body, records every call,
/// and can be switched to fail everything.
#[derive(Clone, Default)]
pub struct StubTransport {
    bodies: Arc<Mutex<HashMap<String, Result<String, TransportError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
    failing: Arc<AtomicBool>,
    delay: Option<Duration>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every response waits this long first.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn respond(&self, url: &str, body: impl Into<String>) -> &Self {
        self.bodies
            .lock()
            .unwrap()
            .insert(url.to_string(), Ok(body.into()));
        self
    }

    pub fn respond_status(&self, url: &str, status: u16) -> &Self {
        self.bodies.lock().unwrap().insert(
            url.to_string(),
            Err(TransportError::Status {
                status,
                url: url.to_string(),
            }),
        );
        self
    }

    /// From now on every request fails as if the network were down.
    pub fn fail_everything(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        self.calls.lock().unwrap().push(url.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(TransportError::Network("stubbed outage".to_string()));
        }

        let answer = self.bodies.lock().unwrap().get(url).cloned();
        answer.unwrap_or_else(|| {
            Err(TransportError::Status {
                status: 404,
                url: url.to_string(),
            })
        })
    }
}

/// Session store whose every operation fails, like a browser with storage
/// disabled.
#[derive(Clone, Default)]
pub struct BrokenSessionStore;

impl SessionStore for BrokenSessionStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }
}
