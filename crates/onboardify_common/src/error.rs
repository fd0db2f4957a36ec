// --- File: crates/onboardify_common/src/error.rs ---

/// A trait for converting errors to HTTP status codes.
///
/// Each integration crate implements this for its error enum so the
/// handler layer can map a failure to a response status without
/// threading HTTP concerns through the logic functions.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}
