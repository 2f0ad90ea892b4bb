//! Request handling behind the bytebridge C boundary.
//!
//! A host that cannot link Rust directly (typically a mobile app) sends a serialized
//! [`MwRequest`](protocol::MwRequest) through the `rust_request` C function and receives a
//! serialized [`MwResponse`](protocol::MwResponse) in return. This crate owns everything between
//! those two byte buffers: decoding the envelope, routing it, and encoding the response. It never
//! fails outright; every failure is reported as an error variant of the response envelope.
//!
//! # Handling a request
//!
//! ```
//! use bytebridge::protocol::{mw_response::Response, MwRequest, MwResponse};
//! use prost::Message;
//!
//! let input = MwRequest::get_version().encode_to_vec();
//! let output = bytebridge::call_api(&input);
//!
//! let response = MwResponse::decode(output.as_slice()).unwrap();
//! assert!(matches!(response.response, Some(Response::RespGetVersion(_))));
//! ```
//!
//! # Routing calls
//!
//! The envelope itself carries no domain operations beyond the version query. Applications
//! embedding the boundary register [`Handler`]s under method names on the [`Dispatcher`], and the
//! host reaches them with a [`CallParam`](protocol::CallParam) request.
//!
//! ```
//! use bytebridge::bytes::Bytes;
//! use bytebridge::{Dispatcher, HandlerError};
//!
//! Dispatcher::default_instance()
//!     .register("echo", |payload: Bytes| -> Result<Bytes, HandlerError> { Ok(payload) })
//!     .expect("register failed");
//! ```
//!
//! # Configuration
//!
//! The default dispatcher reads its [`Config`] from the environment the first time it is used.
//! See [`Config::from_env`] for the recognized variables.

#![warn(missing_docs)]

use thiserror::Error;

mod codec;
mod config;
mod dispatcher;
mod handler;
pub mod library_version;
pub mod protocol;

// Re-export bytes crate for convenience when implementing the `Handler` trait
pub use bytes;
pub use codec::{decode_request, encode_message};
pub use config::Config;
pub use dispatcher::Dispatcher;
pub use handler::{Handler, HandlerError};
pub use library_version::{library_version, set_host_language};

/// An error type for errors generated by this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BridgeError {
    /// The input could not be decoded as a request envelope.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
    /// The request envelope did not carry a request.
    #[error("Empty Request")]
    EmptyRequest,
    /// The request exceeds the configured size limit.
    #[error("Request of {len} bytes exceeds the limit of {max} bytes")]
    RequestTooLarge {
        /// Length of the rejected input.
        len: usize,
        /// Configured limit.
        max: usize,
    },
    /// No handler is registered for the requested method.
    #[error("No handler registered for method {0}")]
    UnknownMethod(String),
    /// A handler reported a failure.
    #[error("Handler for method {method} failed: {message}")]
    Handler {
        /// The method that was called.
        method: String,
        /// The handler's error message.
        message: String,
    },
    /// A handler panicked while processing a request.
    #[error("Handler for method {0} panicked")]
    HandlerPanicked(String),
    /// A handler with the same method name is already registered.
    #[error("Handler for method {0} has already been registered")]
    DuplicateMethod(String),
    /// The method name is not valid.
    #[error("Method name must not be empty")]
    InvalidMethod,
}

impl BridgeError {
    /// Returns the stable code reported in [`MwResponseError::error_code`].
    ///
    /// [`MwResponseError::error_code`]: protocol::MwResponseError::error_code
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::EmptyRequest => "empty_request",
            Self::RequestTooLarge { .. } => "request_too_large",
            Self::UnknownMethod(_) => "unknown_method",
            Self::Handler { .. } => "handler_error",
            Self::HandlerPanicked(_) => "handler_panicked",
            Self::DuplicateMethod(_) => "duplicate_method",
            Self::InvalidMethod => "invalid_method",
        }
    }
}

/// Handles a serialized request with the default dispatcher and returns the serialized response.
///
/// The returned buffer always holds an encoded [`MwResponse`](protocol::MwResponse).
pub fn call_api(input: &[u8]) -> Vec<u8> {
    Dispatcher::default_instance().handle(input)
}

/// Encodes the error response for `err`.
///
/// Used by the C boundary to report failures detected before any input is read.
pub fn error_response(err: BridgeError) -> Vec<u8> {
    encode_message(&protocol::MwResponse::from(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(BridgeError::InvalidInput(String::new()).code(), "invalid_input");
        assert_eq!(BridgeError::EmptyRequest.code(), "empty_request");
        assert_eq!(
            BridgeError::RequestTooLarge { len: 2, max: 1 }.code(),
            "request_too_large"
        );
        assert_eq!(BridgeError::UnknownMethod("x".into()).code(), "unknown_method");
        assert_eq!(
            BridgeError::Handler {
                method: "x".into(),
                message: "y".into()
            }
            .code(),
            "handler_error"
        );
        assert_eq!(BridgeError::HandlerPanicked("x".into()).code(), "handler_panicked");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(BridgeError::EmptyRequest.to_string(), "Empty Request");
        assert_eq!(
            BridgeError::RequestTooLarge { len: 10, max: 4 }.to_string(),
            "Request of 10 bytes exceeds the limit of 4 bytes"
        );
    }
}
