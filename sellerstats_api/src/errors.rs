//! Error types for the API client.

/// Errors that can occur when making API requests. Every failure a fetch can
/// hit resolves into one of these; the client never panics at its boundary.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The transport failed before a response was obtained (connection,
    /// DNS, or the transport's own timeout), or the target URL was unusable.
    #[error("{0}")]
    Transport(String),
    /// The API returned a non-success status. The response body is discarded.
    #[error("HTTP error {status}")]
    Http { status: u16 },
    /// A success response carried a body that was not valid JSON.
    #[error("{0}")]
    Decode(String),
    /// No API host is configured, so no endpoint URL can be resolved.
    #[error("no API host configured")]
    MissingHost,
}
