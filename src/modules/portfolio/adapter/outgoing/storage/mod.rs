mod memory_store;
pub use memory_store::MemorySessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_session_store;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_session_store::WebSessionStore;
