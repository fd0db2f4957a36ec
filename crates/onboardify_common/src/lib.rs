// --- File: crates/onboardify_common/src/lib.rs ---

pub mod error;
pub mod http;
pub mod logging;

pub use error::HttpStatusCode;
pub use http::HTTP_CLIENT;
