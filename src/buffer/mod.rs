//! Growable byte array helpers.
//!
//! - [`append_bytes`] - Copies an immutable [`Bytes`](bytes::Bytes) onto the end
//!   of any growable [`BufMut`](bytes::BufMut)
//! - [`ByteArrayExt`] - The same operation as a method on `BytesMut` and `Vec<u8>`

mod append;

pub use append::{ByteArrayExt, append_bytes};
