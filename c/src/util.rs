use bytebridge::BridgeError;

/// Create a borrowed slice from a raw pointer and length.
///
/// A zero length always yields an empty slice, regardless of the pointer. A null pointer with a
/// non-zero length, or a length that no slice can span, is rejected without dereferencing.
///
/// # Safety
///
/// If len > 0 and the pointer is non-null, it must be a valid pointer to len bytes that remain
/// valid and unmodified for the lifetime `'a`.
pub(crate) unsafe fn slice_from_raw<'a>(
    ptr: *const u8,
    len: usize,
) -> Result<&'a [u8], BridgeError> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(BridgeError::InvalidInput(format!("null pointer with length {len}")));
    }
    if len > isize::MAX as usize {
        return Err(BridgeError::RequestTooLarge {
            len,
            max: isize::MAX as usize,
        });
    }
    Ok(unsafe { std::slice::from_raw_parts(ptr, len) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_from_raw_zero_length() {
        let slice = unsafe { slice_from_raw(std::ptr::null(), 0) }.unwrap();
        assert!(slice.is_empty());
        let dangling = std::ptr::NonNull::<u8>::dangling().as_ptr();
        let slice = unsafe { slice_from_raw(dangling, 0) }.unwrap();
        assert!(slice.is_empty());
    }

    #[test]
    fn test_slice_from_raw_null_with_length() {
        let err = unsafe { slice_from_raw(std::ptr::null(), 4) }.unwrap_err();
        assert!(matches!(err, BridgeError::InvalidInput(_)), "{err:?}");
    }

    #[test]
    fn test_slice_from_raw_too_large() {
        let data = [0u8; 1];
        let err = unsafe { slice_from_raw(data.as_ptr(), usize::MAX) }.unwrap_err();
        assert!(
            matches!(err, BridgeError::RequestTooLarge { len: usize::MAX, .. }),
            "{err:?}"
        );
    }

    #[test]
    fn test_slice_from_raw_borrows() {
        let data = b"\0abc\0";
        let slice = unsafe { slice_from_raw(data.as_ptr(), data.len()) }.unwrap();
        assert_eq!(slice, data);
    }
}
