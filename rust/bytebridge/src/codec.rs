use prost::Message;

use crate::protocol::{mw_request, MwRequest};
use crate::BridgeError;

/// Encodes a message into a buffer of exactly its encoded length.
pub fn encode_message<T: Message>(msg: &T) -> Vec<u8> {
    msg.encode_to_vec()
}

/// Decodes a request envelope, enforcing `max_len` before reading the input.
///
/// An empty input decodes to an envelope without a request, and is reported as
/// [`BridgeError::EmptyRequest`].
pub fn decode_request(input: &[u8], max_len: usize) -> Result<mw_request::Request, BridgeError> {
    if input.len() > max_len {
        return Err(BridgeError::RequestTooLarge {
            len: input.len(),
            max: max_len,
        });
    }
    let envelope =
        MwRequest::decode(input).map_err(|e| BridgeError::InvalidInput(e.to_string()))?;
    envelope.request.ok_or(BridgeError::EmptyRequest)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::protocol::{GetVersionResp, MwResponse};

    #[test]
    fn test_encode_message_is_exact() {
        let msg = MwResponse::from(GetVersionResp {
            version: "bytebridge-rust/v1".to_string(),
        });
        let buf = encode_message(&msg);
        assert_eq!(buf.len(), msg.encoded_len());
        assert_eq!(MwResponse::decode(buf.as_slice()).unwrap(), msg);
    }

    #[test]
    fn test_decode_empty_input() {
        assert_matches!(decode_request(&[], usize::MAX), Err(BridgeError::EmptyRequest));
    }

    #[test]
    fn test_decode_garbage() {
        // Field 1 with wire type 7, which does not exist.
        assert_matches!(
            decode_request(&[0x0f, 0xff], usize::MAX),
            Err(BridgeError::InvalidInput(_))
        );
    }

    #[test]
    fn test_decode_enforces_limit() {
        let input = MwRequest::call("echo", vec![0u8; 32]).encode_to_vec();
        assert_matches!(
            decode_request(&input, 16),
            Err(BridgeError::RequestTooLarge { max: 16, .. })
        );
        assert_matches!(
            decode_request(&input, input.len()),
            Ok(mw_request::Request::ParamCall(param)) if param.payload.len() == 32
        );
    }

    #[test]
    fn test_decode_get_version() {
        let input = MwRequest::get_version().encode_to_vec();
        assert_matches!(
            decode_request(&input, usize::MAX),
            Ok(mw_request::Request::ParamGetVersion(_))
        );
    }
}
