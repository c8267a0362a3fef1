//! Method forms of the exact-count operations.

use bytes::Bytes;
use futures_io::{AsyncRead, AsyncWrite};

use super::read::ReadAllBytes;
use super::write::WriteAllBytes;

/// Adds [`read_all_bytes`](AsyncReadBytesExt::read_all_bytes) to every
/// [`AsyncRead`].
pub trait AsyncReadBytesExt: AsyncRead {
    /// Reads exactly `count` bytes from `self`.
    ///
    /// The stream stays mutably borrowed until the returned future resolves,
    /// so a second read cannot interleave with this one.
    /// See [`read_all_bytes`](crate::read_all_bytes).
    fn read_all_bytes(&mut self, count: usize) -> ReadAllBytes<&mut Self>
    where
        Self: Unpin,
    {
        ReadAllBytes::new(self, count)
    }
}

impl<R: AsyncRead + ?Sized> AsyncReadBytesExt for R {}

/// Adds [`write_all_bytes`](AsyncWriteBytesExt::write_all_bytes) to every
/// [`AsyncWrite`].
pub trait AsyncWriteBytesExt: AsyncWrite {
    /// Writes every byte of `bytes` to `self`.
    ///
    /// See [`write_all_bytes`](crate::write_all_bytes).
    fn write_all_bytes(&mut self, bytes: Bytes) -> WriteAllBytes<&mut Self>
    where
        Self: Unpin,
    {
        WriteAllBytes::new(self, bytes)
    }
}

impl<W: AsyncWrite + ?Sized> AsyncWriteBytesExt for W {}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::io::Cursor;

    #[tokio::test]
    async fn test_ext_roundtrip() {
        let mut writer = Cursor::new(Vec::new());
        writer
            .write_all_bytes(Bytes::from_static(b"\x03chunk"))
            .await
            .unwrap();

        let mut reader = Cursor::new(writer.into_inner());
        let basic_header = reader.read_all_bytes(1).await.unwrap();
        let payload = reader.read_all_bytes(5).await.unwrap();

        assert_eq!(&basic_header[..], b"\x03");
        assert_eq!(&payload[..], b"chunk");
    }
}
