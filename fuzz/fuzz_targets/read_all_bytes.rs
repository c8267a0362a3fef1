#![no_main]

use bytes::Bytes;
use futures_util::io::Cursor;
use libfuzzer_sys::fuzz_target;
use rtmpio::{read_all_bytes, write_all_bytes, IoConfig, ShortRead};

fuzz_target!(|input: (Vec<u8>, Vec<u16>)| {
    let (data, counts) = input;

    futures_executor::block_on(async {
        // Verify: sequential exact reads reproduce the stream
        let mut reader = Cursor::new(data.clone());
        let mut offset = 0usize;
        for count in counts {
            let count = count as usize;
            let bytes = read_all_bytes(&mut reader, count).await.unwrap();
            let expected = count.min(data.len() - offset);
            assert_eq!(bytes.len(), expected);
            assert_eq!(&bytes[..], &data[offset..offset + expected]);
            offset += expected;
        }

        // Verify: strict mode fails exactly when the stream is too short
        let mut reader = Cursor::new(data.clone());
        let result = read_all_bytes(&mut reader, data.len() + 1)
            .with_config(IoConfig::default().with_short_read(ShortRead::Error))
            .await;
        assert!(result.is_err());

        // Verify: write then read returns the same bytes
        let mut writer = Cursor::new(Vec::new());
        write_all_bytes(&mut writer, Bytes::from(data.clone()))
            .await
            .unwrap();
        assert_eq!(writer.get_ref(), &data);
    });
});
