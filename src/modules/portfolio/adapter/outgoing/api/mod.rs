pub mod reqwest_transport;

pub use reqwest_transport::{ReqwestTransport, TransportConfig, DEFAULT_TIMEOUT};
