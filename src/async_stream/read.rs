//! Exact-count async read.
//!
//! # Example
//!
//! ```ignore
//! use rtmpio::{read_all_bytes, Cancellable, IoPriority};
//! use futures_io::AsyncRead;
//!
//! async fn read_header<R: AsyncRead + Unpin>(
//!     reader: &mut R,
//!     cancellable: Cancellable,
//! ) -> Result<bytes::Bytes, rtmpio::RtmpIoError> {
//!     read_all_bytes(reader, 12)
//!         .with_priority(IoPriority::HIGH)
//!         .with_cancellable(cancellable)
//!         .await
//! }
//! ```

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use bytes::{Bytes, BytesMut};
use futures_io::AsyncRead;
use pin_project_lite::pin_project;
use tracing::{debug, trace};

use super::OpState;
use crate::cancel::{Cancellable, Registration};
use crate::config::{IoConfig, IoPriority, ShortRead};
use crate::error::RtmpIoError;

pin_project! {
    /// Future returned by [`read_all_bytes`].
    ///
    /// Owns the destination buffer while the read is in flight. Resolves to the
    /// bytes read, or to the reason the read failed; never to both.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct ReadAllBytes<R> {
        #[pin]
        reader: R,
        buffer: BytesMut,
        filled: usize,
        config: IoConfig,
        cancel: Option<Registration>,
        state: OpState,
    }
}

/// How a fill loop ended without error.
enum Fill {
    Full,
    Eof,
}

impl<R> ReadAllBytes<R> {
    /// Creates a read of exactly `count` bytes from `reader`.
    ///
    /// The destination buffer of `count` bytes is allocated here.
    pub fn new(reader: R, count: usize) -> Self {
        Self {
            reader,
            buffer: BytesMut::zeroed(count),
            filled: 0,
            config: IoConfig::default(),
            cancel: None,
            state: OpState::Idle,
        }
    }

    /// Replaces the whole operation configuration.
    pub fn with_config(mut self, config: IoConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the scheduling priority hint.
    pub fn with_priority(mut self, priority: IoPriority) -> Self {
        self.config = self.config.with_priority(priority);
        self
    }

    /// Attaches a cancellation handle.
    pub fn with_cancellable(mut self, cancellable: Cancellable) -> Self {
        self.cancel = Some(Registration::new(cancellable));
        self
    }

    /// Returns the number of bytes requested.
    pub fn count(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the number of bytes read so far.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Returns the operation configuration.
    pub fn config(&self) -> &IoConfig {
        &self.config
    }
}

impl<R: AsyncRead> Future for ReadAllBytes<R> {
    type Output = Result<Bytes, RtmpIoError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        match *this.state {
            OpState::Done => panic!("`ReadAllBytes` polled after completion"),
            OpState::Idle => {
                trace!(
                    count = this.buffer.len(),
                    priority = %this.config.priority(),
                    "read_all_bytes issued"
                );
                *this.state = OpState::Running;
            }
            _ => {}
        }

        let fill = loop {
            if let Some(cancel) = this.cancel.as_mut() {
                if cancel.poll_cancelled(cx.waker()) {
                    break Err(RtmpIoError::Cancelled);
                }
            }

            if *this.filled == this.buffer.len() {
                break Ok(Fill::Full);
            }

            let buf = &mut this.buffer[*this.filled..];
            match ready!(this.reader.as_mut().poll_read(cx, buf)) {
                Ok(0) => break Ok(Fill::Eof),
                Ok(n) => *this.filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => break Err(RtmpIoError::Io(e)),
            }
        };

        *this.state = OpState::Done;
        if let Some(cancel) = this.cancel.as_mut() {
            cancel.release();
        }
        let expected = this.buffer.len();
        let actual = *this.filled;
        let mut buffer = std::mem::take(this.buffer);

        let result = match fill {
            Ok(Fill::Full) => Ok(buffer.freeze()),
            Ok(Fill::Eof) => match this.config.short_read() {
                ShortRead::Truncate => {
                    buffer.truncate(actual);
                    Ok(buffer.freeze())
                }
                ShortRead::Error => Err(RtmpIoError::UnexpectedEof { expected, actual }),
            },
            Err(e) => Err(e),
        };

        match &result {
            Ok(bytes) => trace!(expected, actual = bytes.len(), "read_all_bytes complete"),
            Err(e) => debug!(expected, actual, error = %e, "read_all_bytes failed"),
        }

        Poll::Ready(result)
    }
}

/// Reads exactly `count` bytes from `reader`.
///
/// Short reads are absorbed: the future keeps reading until `count` bytes
/// arrived, the stream ends, an error occurs, or the attached
/// [`Cancellable`] fires. On success the returned [`Bytes`] holds exactly the
/// bytes read; it is shorter than `count` only when the stream ended early
/// under [`ShortRead::Truncate`]. On failure no partial data is returned.
///
/// # Example
///
/// ```ignore
/// use rtmpio::read_all_bytes;
/// use futures_io::AsyncRead;
///
/// async fn demo<R: AsyncRead + Unpin>(reader: &mut R) -> Result<(), rtmpio::RtmpIoError> {
///     let handshake = read_all_bytes(reader, 1536).await?;
///     println!("read {} bytes", handshake.len());
///     Ok(())
/// }
/// ```
pub fn read_all_bytes<R: AsyncRead>(reader: R, count: usize) -> ReadAllBytes<R> {
    ReadAllBytes::new(reader, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::io::Cursor;

    #[tokio::test]
    async fn test_read_exact_count() {
        let mut reader = Cursor::new(b"0123456789".to_vec());
        let bytes = read_all_bytes(&mut reader, 4).await.unwrap();
        assert_eq!(&bytes[..], b"0123");

        let bytes = read_all_bytes(&mut reader, 4).await.unwrap();
        assert_eq!(&bytes[..], b"4567");
    }

    #[tokio::test]
    async fn test_read_zero_count() {
        let reader: &[u8] = b"unused";
        let bytes = read_all_bytes(reader, 0).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_read_truncates_at_eof() {
        let reader: &[u8] = b"abc";
        let bytes = read_all_bytes(reader, 8).await.unwrap();
        assert_eq!(&bytes[..], b"abc");
    }

    #[tokio::test]
    async fn test_read_strict_eof() {
        let reader: &[u8] = b"abc";
        let err = read_all_bytes(reader, 8)
            .with_config(IoConfig::default().with_short_read(ShortRead::Error))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RtmpIoError::UnexpectedEof {
                expected: 8,
                actual: 3
            }
        ));
    }

    #[tokio::test]
    async fn test_read_precancelled() {
        let cancellable = Cancellable::new();
        cancellable.cancel();

        let reader: &[u8] = b"abc";
        let err = read_all_bytes(reader, 3)
            .with_cancellable(cancellable)
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_builder_accessors() {
        let reader: &[u8] = b"";
        let op = read_all_bytes(reader, 16).with_priority(IoPriority::LOW);
        assert_eq!(op.count(), 16);
        assert_eq!(op.filled(), 0);
        assert_eq!(op.config().priority(), IoPriority::LOW);
    }
}
