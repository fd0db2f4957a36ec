// --- File: crates/onboardify_tink/src/lib.rs ---

pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;

// Re-export for main backend
pub use error::TinkError;
pub use handlers::TinkState;
pub use logic::{ConsentParams, TokenExchange};
pub use routes::routes;
