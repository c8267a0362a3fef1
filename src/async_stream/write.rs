//! Exact-count async write.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use bytes::Bytes;
use futures_io::AsyncWrite;
use pin_project_lite::pin_project;
use tracing::{debug, trace};

use super::OpState;
use crate::cancel::{Cancellable, Registration};
use crate::config::{IoConfig, IoPriority};
use crate::error::RtmpIoError;

pin_project! {
    /// Future returned by [`write_all_bytes`].
    ///
    /// Holds its own reference to the source buffer, so the caller may drop
    /// theirs as soon as the operation is created.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct WriteAllBytes<W> {
        #[pin]
        writer: W,
        bytes: Bytes,
        written: usize,
        config: IoConfig,
        cancel: Option<Registration>,
        state: OpState,
    }
}

impl<W> WriteAllBytes<W> {
    /// Creates a write of all of `bytes` to `writer`.
    pub fn new(writer: W, bytes: Bytes) -> Self {
        Self {
            writer,
            bytes,
            written: 0,
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

    /// Returns the buffer being written.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Returns the number of bytes accepted by the stream so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Returns the operation configuration.
    pub fn config(&self) -> &IoConfig {
        &self.config
    }
}

impl<W: AsyncWrite> Future for WriteAllBytes<W> {
    type Output = Result<(), RtmpIoError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        match *this.state {
            OpState::Done => panic!("`WriteAllBytes` polled after completion"),
            OpState::Idle => {
                trace!(
                    count = this.bytes.len(),
                    priority = %this.config.priority(),
                    "write_all_bytes issued"
                );
                *this.state = OpState::Running;
            }
            _ => {}
        }

        let result = loop {
            if let Some(cancel) = this.cancel.as_mut() {
                if cancel.poll_cancelled(cx.waker()) {
                    break Err(RtmpIoError::Cancelled);
                }
            }

            if *this.state == OpState::Flushing {
                match ready!(this.writer.as_mut().poll_flush(cx)) {
                    Ok(()) => break Ok(()),
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => break Err(RtmpIoError::Io(e)),
                }
            }

            if *this.written == this.bytes.len() {
                if this.config.flush_after_write() {
                    *this.state = OpState::Flushing;
                    continue;
                }
                break Ok(());
            }

            let buf = &this.bytes[*this.written..];
            match ready!(this.writer.as_mut().poll_write(cx, buf)) {
                Ok(0) => {
                    break Err(RtmpIoError::Io(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write whole buffer",
                    )));
                }
                Ok(n) => *this.written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => break Err(RtmpIoError::Io(e)),
            }
        };

        *this.state = OpState::Done;
        if let Some(cancel) = this.cancel.as_mut() {
            cancel.release();
        }
        let expected = this.bytes.len();
        let actual = *this.written;
        match &result {
            Ok(()) => trace!(expected, "write_all_bytes complete"),
            Err(e) => debug!(expected, actual, error = %e, "write_all_bytes failed"),
        }

        Poll::Ready(result)
    }
}

/// Writes every byte of `bytes` to `writer`.
///
/// Short writes are absorbed: the future keeps writing until the whole buffer
/// was accepted, an error occurs, or the attached [`Cancellable`] fires. A
/// stream that accepts zero bytes fails with [`io::ErrorKind::WriteZero`].
/// Success carries no payload and failure reports no partial count.
///
/// # Example
///
/// ```ignore
/// use bytes::Bytes;
/// use rtmpio::write_all_bytes;
/// use futures_io::AsyncWrite;
///
/// async fn demo<W: AsyncWrite + Unpin>(writer: &mut W) -> Result<(), rtmpio::RtmpIoError> {
///     write_all_bytes(writer, Bytes::from_static(&[0x03])).await
/// }
/// ```
pub fn write_all_bytes<W: AsyncWrite>(writer: W, bytes: Bytes) -> WriteAllBytes<W> {
    WriteAllBytes::new(writer, bytes)
}
