//! rtmpio
//!
//! Small I/O primitives for RTMP clients.
//!
//! An RTMP connection spends most of its life moving fixed-size pieces of
//! bytes: a 1536-byte handshake block, a chunk basic header, a message body of
//! known length. `rtmpio` provides the helpers underneath that work:
//!
//! - appending immutable [`Bytes`](bytes::Bytes) onto a growable byte array
//! - reading or writing exactly N bytes over any `futures-io` stream, with
//!   cancellation
//! - rendering raw bytes as a quoted, escaped string for traces
//!
//! The crate intentionally:
//! - does NOT open sockets
//! - does NOT retry or back off
//! - does NOT speak RTMP (handshake, chunking, AMF)
//!
//! # Buffers
//!
//! ```
//! use bytes::{Bytes, BytesMut};
//! use rtmpio::ByteArrayExt;
//!
//! let mut message = BytesMut::new();
//! message.append_bytes(&Bytes::from_static(b"\x02\x00\x07connect"));
//! assert_eq!(message.len(), 10);
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use rtmpio::{AsyncReadBytesExt, AsyncWriteBytesExt, Cancellable, RtmpIoError};
//! use futures_io::{AsyncRead, AsyncWrite};
//!
//! async fn echo_c1<S: AsyncRead + AsyncWrite + Unpin>(
//!     stream: &mut S,
//!     cancellable: Cancellable,
//! ) -> Result<(), RtmpIoError> {
//!     let c1 = stream
//!         .read_all_bytes(1536)
//!         .with_cancellable(cancellable.clone())
//!         .await?;
//!     stream.write_all_bytes(c1).with_cancellable(cancellable).await
//! }
//! ```
//!
//! # Escaping
//!
//! ```
//! use rtmpio::escape_bytes;
//!
//! assert_eq!(escape_bytes(b"live\n"), r#""live\n""#);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod cancel;
mod config;
mod error;
mod escape;

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use buffer::{ByteArrayExt, append_bytes};
pub use cancel::Cancellable;
pub use config::{IoConfig, IoPriority, ShortRead};
pub use error::RtmpIoError;
pub use escape::{Escaped, Extent, NULL_TOKEN, escape_bytes, print_escaped, write_escaped};

#[cfg(feature = "async-io")]
pub use async_stream::{
    AsyncReadBytesExt, AsyncWriteBytesExt, ReadAllBytes, WriteAllBytes, read_all_bytes,
    write_all_bytes,
};
