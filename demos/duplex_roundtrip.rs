//! Exact reads and writes over an in-memory pipe.
//!
//! Plays a toy RTMP handshake: the client sends C0+C1, the server reads them
//! back with exact reads and logs what it saw.
//!
//! Run with:
//!     cargo run --example duplex_roundtrip

use bytes::{Bytes, BytesMut};
use rtmpio::{
    AsyncReadBytesExt, AsyncWriteBytesExt, ByteArrayExt, Cancellable, Escaped, IoConfig,
    IoPriority, ShortRead,
};
use tokio_util::compat::TokioAsyncReadCompatExt;

const HANDSHAKE_SIZE: usize = 1536;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .init();

    // Small pipe capacity forces short reads and writes
    let (client, server) = tokio::io::duplex(256);
    let mut client = client.compat();
    let mut server = server.compat();
    let cancellable = Cancellable::new();

    let writer = tokio::spawn({
        let cancellable = cancellable.clone();
        async move {
            let mut c0c1 = BytesMut::with_capacity(1 + HANDSHAKE_SIZE);
            c0c1.append_bytes(&Bytes::from_static(&[0x03]));
            c0c1.append_bytes(&Bytes::from(vec![0x42u8; HANDSHAKE_SIZE]));

            client
                .write_all_bytes(c0c1.freeze())
                .with_priority(IoPriority::HIGH)
                .with_cancellable(cancellable)
                .await
        }
    });

    let config = IoConfig::default().with_short_read(ShortRead::Error);

    let c0 = server
        .read_all_bytes(1)
        .with_config(config)
        .with_cancellable(cancellable.clone())
        .await?;
    let c1 = server
        .read_all_bytes(HANDSHAKE_SIZE)
        .with_config(config)
        .with_cancellable(cancellable)
        .await?;

    writer.await??;

    println!("C0 version: {}", Escaped::new(&c0));
    println!("C1: {} bytes, starts with {}", c1.len(), Escaped::new(&c1[..8]));

    Ok(())
}
