//! Appending immutable buffers onto growable byte arrays.

use bytes::{BufMut, Bytes, BytesMut};

/// Appends every byte of `bytes` to the end of `array`.
///
/// The array grows as needed; its length increases by exactly `bytes.len()`
/// and its last `bytes.len()` bytes equal `bytes`. An empty buffer leaves the
/// array untouched.
///
/// # Example
///
/// ```
/// use bytes::{Bytes, BytesMut};
/// use rtmpio::append_bytes;
///
/// let mut array = BytesMut::from(&b"RTMP"[..]);
/// append_bytes(&mut array, &Bytes::from_static(b" chunk"));
/// assert_eq!(&array[..], b"RTMP chunk");
/// ```
pub fn append_bytes<A: BufMut + ?Sized>(array: &mut A, bytes: &Bytes) {
    if bytes.is_empty() {
        return;
    }
    array.put_slice(bytes);
}

/// Extension methods for growable byte arrays.
pub trait ByteArrayExt {
    /// Appends every byte of `bytes` to the end of `self`.
    ///
    /// See [`append_bytes`].
    fn append_bytes(&mut self, bytes: &Bytes);
}

impl ByteArrayExt for BytesMut {
    fn append_bytes(&mut self, bytes: &Bytes) {
        append_bytes(self, bytes);
    }
}

impl ByteArrayExt for Vec<u8> {
    fn append_bytes(&mut self, bytes: &Bytes) {
        append_bytes(self, bytes);
    }
}
