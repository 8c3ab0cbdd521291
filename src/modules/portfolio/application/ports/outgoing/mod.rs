pub mod http_transport;
pub mod session_store;

pub use http_transport::{HttpTransport, TransportError};
pub use session_store::{SessionStore, StorageError};
