use bytes::Bytes;
use thiserror::Error;

/// An error reported by a [`Handler`].
///
/// The message is sent to the host in the error response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct HandlerError(String);

impl HandlerError {
    /// Creates a new handler error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

/// A handler for calls routed by method name.
///
/// Handlers are invoked synchronously on the thread that called into the boundary, and may be
/// invoked concurrently from several threads. A panic inside a handler is contained and reported
/// to the host as an error response.
pub trait Handler: Send + Sync {
    /// Handles a call and returns the response payload.
    fn call(&self, payload: Bytes) -> Result<Bytes, HandlerError>;
}

impl<F> Handler for F
where
    F: Fn(Bytes) -> Result<Bytes, HandlerError> + Send + Sync,
{
    fn call(&self, payload: Bytes) -> Result<Bytes, HandlerError> {
        self(payload)
    }
}
