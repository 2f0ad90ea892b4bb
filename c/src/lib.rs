//! C interface to bytebridge.
//!
//! The host sends a serialized request envelope to [`rust_request`] and receives a serialized
//! response envelope in a [`RustByteSlice`], which it owns until it hands it back to
//! [`rust_free`]. See the `bytebridge` crate for the envelope and its error reporting.

use std::panic;

mod bytes;
mod logging;
mod util;


pub use bytes::RustByteSlice;
pub use logging::{rust_set_log_level, BytebridgeLoggingLevel};

use util::slice_from_raw;

/// Version of the C interface. Incremented on any incompatible change to the exported symbols or
/// the layout of `RustByteSlice`.
pub const RUST_API_VERSION: u32 = 1;

/// Returns the version of the C interface compiled into this library.
#[unsafe(no_mangle)]
pub extern "C" fn rust_api_version() -> u32 {
    RUST_API_VERSION
}

/// Handles a serialized request and returns the serialized response.
///
/// The input is an arbitrary byte buffer described by `bytes` and `len`; it is not
/// NUL-terminated and may contain NUL bytes. The input is only read during this call.
///
/// The returned slice always holds an encoded response envelope. Failures, including a null
/// `bytes` with a non-zero `len`, are reported as an error response. If no response can be
/// produced at all, the returned slice has a null `bytes` and a zero `len`.
///
/// The caller owns the returned slice and must release it with `rust_free` exactly once.
///
/// This function may be called concurrently from multiple threads.
///
/// # Safety
/// - If `len` is non-zero and `bytes` is non-null, `bytes` must point to `len` readable bytes
///   that are not modified for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rust_request(bytes: *const u8, len: usize) -> RustByteSlice {
    bytebridge::set_host_language("c");
    let result = panic::catch_unwind(|| {
        let response = match unsafe { slice_from_raw(bytes, len) } {
            Ok(input) => bytebridge::call_api(input),
            Err(err) => {
                tracing::debug!("Rejected request of {len} bytes: {err}");
                bytebridge::error_response(err)
            }
        };
        RustByteSlice::from_owned(response)
    });
    result.unwrap_or_else(|_| {
        tracing::error!("Panicked while handling a request of {len} bytes");
        RustByteSlice::empty()
    })
}

/// Releases a slice returned by `rust_request`.
///
/// A slice with a null `bytes` is ignored.
///
/// # Safety
/// - `input` must have been returned by `rust_request`. This value is moved into this function,
///   and must not be accessed or released again afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rust_free(input: RustByteSlice) {
    drop(unsafe { input.into_owned() });
}
