// Client module - Politics & War API client and its transport seam

pub mod api;
pub mod transport;

pub use api::PwClient;
pub use transport::{ReqwestTransport, Transport};
