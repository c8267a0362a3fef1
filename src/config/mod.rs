//! Configuration for exact-read and exact-write operations.
//!
//! - [`IoConfig`] - Priority hint, short-read policy and flushing
//! - [`IoPriority`] - Scheduling hint carried with each operation
//! - [`ShortRead`] - What an exact read does when the stream ends early
//!
//! # Example
//!
//! ```
//! use rtmpio::{IoConfig, IoPriority, ShortRead};
//!
//! let config = IoConfig::default()
//!     .with_priority(IoPriority::HIGH)
//!     .with_short_read(ShortRead::Error)
//!     .with_flush_after_write(true);
//!
//! assert_eq!(config.priority(), IoPriority::HIGH);
//! assert_eq!(config.short_read(), ShortRead::Error);
//! assert!(config.flush_after_write());
//! ```

use std::fmt;

/// Scheduling priority hint for an I/O operation.
///
/// Lower values are more urgent. The hint travels with the operation and is
/// reported in its trace events; a runtime-agnostic future has no scheduler to
/// hand it to, so it never changes how the operation itself behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IoPriority(pub i32);

impl IoPriority {
    /// Priority for urgent work.
    pub const HIGH: Self = Self(-100);

    /// Priority for ordinary I/O.
    pub const DEFAULT: Self = Self(0);

    /// Idle work that should still run before [`IoPriority::DEFAULT_IDLE`].
    pub const HIGH_IDLE: Self = Self(100);

    /// Default priority for idle work.
    pub const DEFAULT_IDLE: Self = Self(200);

    /// Priority for background work.
    pub const LOW: Self = Self(300);

    /// Returns the raw priority value.
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl Default for IoPriority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for IoPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Behavior of an exact read when the stream ends before the requested count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShortRead {
    /// Complete successfully with the bytes that did arrive.
    #[default]
    Truncate,

    /// Fail with [`RtmpIoError::UnexpectedEof`](crate::RtmpIoError::UnexpectedEof).
    Error,
}

/// Configuration for exact-read and exact-write operations.
///
/// # Example
///
/// ```
/// use rtmpio::{IoConfig, IoPriority, ShortRead};
///
/// let config = IoConfig::default();
/// assert_eq!(config.priority(), IoPriority::DEFAULT);
/// assert_eq!(config.short_read(), ShortRead::Truncate);
/// assert!(!config.flush_after_write());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IoConfig {
    priority: IoPriority,
    short_read: ShortRead,
    flush_after_write: bool,
}

impl IoConfig {
    /// Creates a configuration with the given priority and defaults otherwise.
    pub const fn new(priority: IoPriority) -> Self {
        Self {
            priority,
            short_read: ShortRead::Truncate,
            flush_after_write: false,
        }
    }

    /// Sets the scheduling priority hint.
    pub fn with_priority(mut self, priority: IoPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the end-of-stream policy for exact reads.
    pub fn with_short_read(mut self, short_read: ShortRead) -> Self {
        self.short_read = short_read;
        self
    }

    /// Sets whether exact writes flush the stream before reporting success.
    pub fn with_flush_after_write(mut self, flush: bool) -> Self {
        self.flush_after_write = flush;
        self
    }

    /// Returns the scheduling priority hint.
    pub fn priority(&self) -> IoPriority {
        self.priority
    }

    /// Returns the end-of-stream policy for exact reads.
    pub fn short_read(&self) -> ShortRead {
        self.short_read
    }

    /// Returns whether exact writes flush before reporting success.
    pub fn flush_after_write(&self) -> bool {
        self.flush_after_write
    }
}
