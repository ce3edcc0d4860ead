// felica-relay/src/transport/mod.rs

#[cfg(feature = "http")]
pub mod http;
pub mod mock;
pub mod traits;

#[cfg(feature = "http")]
pub use http::ReqwestTransport;
pub use mock::MockTransport;
pub use traits::{HttpRequest, HttpResponse, Transport};
