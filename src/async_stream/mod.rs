//! Exact-count async reads and writes.
//!
//! This module layers "read exactly N bytes" and "write exactly N bytes" over
//! the `futures-io` [`AsyncRead`](futures_io::AsyncRead) and
//! [`AsyncWrite`](futures_io::AsyncWrite) traits, making it runtime-agnostic
//! and compatible with tokio, async-std, smol, and other async runtimes.
//!
//! - [`read_all_bytes`] - Reads `count` bytes into an immutable [`Bytes`](bytes::Bytes)
//! - [`write_all_bytes`] - Writes a whole [`Bytes`](bytes::Bytes)
//! - [`AsyncReadBytesExt`] / [`AsyncWriteBytesExt`] - Method forms on `&mut` streams
//!
//! Each call returns a typed future. Awaiting it is the only way to observe the
//! outcome, and it yields exactly one result.
//!
//! This module requires the `async-io` feature to be enabled.

mod ext;
mod read;
mod write;

pub use ext::{AsyncReadBytesExt, AsyncWriteBytesExt};
pub use read::{ReadAllBytes, read_all_bytes};
pub use write::{WriteAllBytes, write_all_bytes};

/// Lifecycle of a pending operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpState {
    /// Created but never polled.
    Idle,
    /// Transferring bytes.
    Running,
    /// All bytes accepted, waiting on flush.
    Flushing,
    /// Result delivered.
    Done,
}
