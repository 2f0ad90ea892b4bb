use std::ptr;

/// A byte array with associated length, returned by `rust_request`.
///
/// A slice returned by `rust_request` is owned by the caller, and must be released exactly once
/// with `rust_free`. It must not be read after it has been released.
#[repr(C)]
pub struct RustByteSlice {
    /// Pointer to data. Null only for the empty failure slice.
    bytes: *const u8,
    /// Number of bytes
    len: usize,
}

// Not Copy or Clone: moving a RustByteSlice moves ownership of its buffer.
impl RustByteSlice {
    /// The empty slice, returned when no response could be produced at all.
    pub(crate) const fn empty() -> Self {
        Self {
            bytes: ptr::null(),
            len: 0,
        }
    }

    /// Moves the buffer to the heap and returns a slice describing it.
    ///
    /// After calling this function, the caller is responsible for eventually calling
    /// [`Self::into_owned`] to recover the buffer.
    pub(crate) fn from_owned(data: Vec<u8>) -> Self {
        let data = Box::into_raw(data.into_boxed_slice());
        Self {
            bytes: data.cast::<u8>().cast_const(),
            len: data.len(),
        }
    }

    /// Recovers the buffer described by this slice. Returns `None` for the empty failure slice.
    ///
    /// # Safety
    /// - The slice must have been obtained from [`Self::from_owned`], and must not have been
    ///   recovered before.
    pub(crate) unsafe fn into_owned(self) -> Option<Box<[u8]>> {
        if self.bytes.is_null() {
            return None;
        }
        let data = ptr::slice_from_raw_parts_mut(self.bytes.cast_mut(), self.len);
        Some(unsafe { Box::from_raw(data) })
    }

    /// Access the buffer as a slice.
    ///
    /// # Safety
    ///
    /// The `bytes` field must be null, or a valid pointer to a buffer of length `len`.
    #[cfg(test)]
    pub(crate) unsafe fn as_slice(&self) -> &[u8] {
        if self.bytes.is_null() {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(self.bytes, self.len) }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub(crate) fn is_null(&self) -> bool {
        self.bytes.is_null()
    }
}
