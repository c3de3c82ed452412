//! Zstandard wrapper with one fixed profile and strict UTF-8 on the way out

use std::io::Write;
use thiserror::Error;
use zstd::stream::{Decoder, Encoder};

/// Single codec profile for the whole system; no level is exposed to callers.
const COMPRESSION_LEVEL: i32 = 3;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("zstd encode failed: {0}")]
    Encode(#[source] std::io::Error),

    #[error("zstd decode failed: {0}")]
    Decode(#[source] std::io::Error),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// UTF-8-encode `text` and compress it into an opaque blob.
pub fn encode(text: &str) -> Result<Vec<u8>, CodecError> {
    let mut encoder =
        Encoder::new(Vec::with_capacity(text.len() / 2), COMPRESSION_LEVEL)
            .map_err(CodecError::Encode)?;
    encoder
        .write_all(text.as_bytes())
        .map_err(CodecError::Encode)?;
    // `finish` finalizes the frame; without it the blob is truncated.
    encoder.finish().map_err(CodecError::Encode)
}

/// Decompress a blob produced by [`encode`] back into text.
///
/// Bytes that are not a valid zstd frame (truncated, corrupted, or produced
/// elsewhere) fail with [`CodecError::Decode`].
pub fn decode(bytes: &[u8]) -> Result<String, CodecError> {
    let mut decoder = Decoder::new(bytes).map_err(CodecError::Decode)?;
    let mut buf = Vec::new();
    std::io::copy(&mut decoder, &mut buf).map_err(CodecError::Decode)?;
    String::from_utf8(buf).map_err(CodecError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_ascii() {
        let text = "The cat sat on the mat.";
        assert_eq!(decode(&encode(text).unwrap()).unwrap(), text);
    }

    #[test]
    fn test_roundtrip_unicode() {
        let text = "naïve café — 数学: e = mc²";
        assert_eq!(decode(&encode(text).unwrap()).unwrap(), text);
    }

    #[test]
    fn test_roundtrip_empty() {
        assert_eq!(decode(&encode("").unwrap()).unwrap(), "");
    }

    #[test]
    fn test_roundtrip_large_repetitive() {
        let text = "word ".repeat(10_000);
        let blob = encode(&text).unwrap();
        assert!(blob.len() < text.len());
        assert_eq!(decode(&blob).unwrap(), text);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode(b"definitely not a zstd frame").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn test_decode_truncated_blob_fails() {
        let blob = encode("some text long enough to span a few blocks").unwrap();
        let err = decode(&blob[..blob.len() / 2]).unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }
}
