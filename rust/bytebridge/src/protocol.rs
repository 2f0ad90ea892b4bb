//! Protobuf envelope exchanged across the boundary.
//!
//! The message types are generated from `schemas/proto/bytebridge/api.proto` by the
//! `bytebridge_proto_gen` binary. Do not edit `protocol/bytebridge.rs` by hand.

#[allow(missing_docs)]
#[rustfmt::skip]
mod bytebridge;

pub use self::bytebridge::*;

use crate::BridgeError;

impl From<mw_response::Response> for MwResponse {
    fn from(response: mw_response::Response) -> Self {
        Self {
            response: Some(response),
        }
    }
}

impl From<&BridgeError> for MwResponseError {
    fn from(err: &BridgeError) -> Self {
        Self {
            error_code: err.code().to_string(),
            error_msg: err.to_string(),
        }
    }
}

impl From<BridgeError> for MwResponse {
    fn from(err: BridgeError) -> Self {
        mw_response::Response::Error(MwResponseError::from(&err)).into()
    }
}

impl From<GetVersionResp> for MwResponse {
    fn from(resp: GetVersionResp) -> Self {
        mw_response::Response::RespGetVersion(resp).into()
    }
}

impl From<CallResp> for MwResponse {
    fn from(resp: CallResp) -> Self {
        mw_response::Response::RespCall(resp).into()
    }
}

impl MwRequest {
    /// Builds a request for the library version.
    pub fn get_version() -> Self {
        Self {
            request: Some(mw_request::Request::ParamGetVersion(GetVersionParam {})),
        }
    }

    /// Builds a request routed to the handler registered under `method`.
    pub fn call(method: impl Into<String>, payload: impl Into<bytes::Bytes>) -> Self {
        Self {
            request: Some(mw_request::Request::ParamCall(CallParam {
                method: method.into(),
                payload: payload.into(),
            })),
        }
    }
}

impl MwResponse {
    /// Returns the error carried by this response, if any.
    pub fn error(&self) -> Option<&MwResponseError> {
        match &self.response {
            Some(mw_response::Response::Error(err)) => Some(err),
            _ => None,
        }
    }
}
