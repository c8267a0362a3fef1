//! Error types for rtmpio.

use std::fmt;
use std::io;

/// Errors that can occur while reading or writing exact byte counts.
#[derive(Debug)]
pub enum RtmpIoError {
    /// The underlying stream reported an I/O error.
    Io(io::Error),

    /// The operation's [`Cancellable`](crate::Cancellable) was triggered
    /// before it completed.
    Cancelled,

    /// The stream ended before the requested number of bytes arrived.
    ///
    /// Only produced under [`ShortRead::Error`](crate::ShortRead::Error).
    UnexpectedEof {
        /// The number of bytes requested.
        expected: usize,
        /// The number of bytes read before end-of-stream.
        actual: usize,
    },
}

impl RtmpIoError {
    /// Returns `true` if the operation was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RtmpIoError::Cancelled)
    }
}

impl fmt::Display for RtmpIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RtmpIoError::Io(e) => write!(f, "io error: {}", e),
            RtmpIoError::Cancelled => write!(f, "operation was cancelled"),
            RtmpIoError::UnexpectedEof { expected, actual } => {
                write!(
                    f,
                    "unexpected end of stream: read {} of {} bytes",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for RtmpIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RtmpIoError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RtmpIoError {
    fn from(e: io::Error) -> Self {
        RtmpIoError::Io(e)
    }
}

impl From<RtmpIoError> for io::Error {
    fn from(e: RtmpIoError) -> Self {
        match e {
            RtmpIoError::Io(e) => e,
            RtmpIoError::Cancelled => io::Error::new(io::ErrorKind::Interrupted, e),
            RtmpIoError::UnexpectedEof { .. } => io::Error::new(io::ErrorKind::UnexpectedEof, e),
        }
    }
}
