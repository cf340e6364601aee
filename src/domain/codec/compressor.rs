//! Brotli wrapper used to shrink domains and paths before base62 encoding.

use std::io::{Cursor, Read};

use brotli::enc::BrotliEncoderParams;

use super::error::CodecError;

/// Sliding window size in bits (Brotli default).
const WINDOW_BITS: i32 = 22;

/// Upper bound on decompressed output; codes are far shorter than this.
pub const MAX_DECOMPRESSED_LEN: usize = 64 * 1024;

const READ_BUFFER_SIZE: usize = 4096;

/// Compression effort. The stream format is the same for every level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Effort {
    /// Lighter pass (Brotli quality 5).
    Fast,
    /// Maximum compression (Brotli quality 11).
    Max,
}

impl Effort {
    pub fn quality(self) -> i32 {
        match self {
            Effort::Fast => 5,
            Effort::Max => 11,
        }
    }
}

/// Largest stream Brotli can emit for `input_len` bytes, whatever the effort.
///
/// Incompressible input is stored in uncompressed meta-blocks of at most
/// 16 KiB, each with a small header.
pub const fn max_compressed_len(input_len: usize) -> usize {
    input_len + (input_len >> 14) * 4 + 6
}

/// Compresses `text` at the given effort.
///
/// # Errors
///
/// Returns [`CodecError::CompressionFailed`] if the encoder reports an I/O error.
pub fn compress(text: &str, effort: Effort) -> Result<Vec<u8>, CodecError> {
    let params = BrotliEncoderParams {
        quality: effort.quality(),
        lgwin: WINDOW_BITS,
        ..Default::default()
    };

    let mut input = Cursor::new(text.as_bytes());
    let mut output = Vec::with_capacity(text.len() + 8);

    brotli::BrotliCompress(&mut input, &mut output, &params)
        .map_err(|e| CodecError::CompressionFailed(e.to_string()))?;

    Ok(output)
}

/// Compresses at every effort level and keeps the shortest output.
///
/// Ties go to the lower effort.
pub fn compress_smallest(text: &str) -> Result<Vec<u8>, CodecError> {
    let fast = compress(text, Effort::Fast)?;
    let max = compress(text, Effort::Max)?;

    Ok(if max.len() < fast.len() { max } else { fast })
}

/// Decompresses a Brotli stream into UTF-8 text.
///
/// # Errors
///
/// Returns [`CodecError::CorruptData`] if the stream is malformed or truncated,
/// expands beyond [`MAX_DECOMPRESSED_LEN`], or is not valid UTF-8.
pub fn decompress(bytes: &[u8]) -> Result<String, CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::CorruptData("empty stream".to_string()));
    }

    let decoder = brotli::Decompressor::new(Cursor::new(bytes), READ_BUFFER_SIZE);
    let mut output = Vec::new();

    decoder
        .take(MAX_DECOMPRESSED_LEN as u64 + 1)
        .read_to_end(&mut output)
        .map_err(|e| CodecError::CorruptData(e.to_string()))?;

    if output.len() > MAX_DECOMPRESSED_LEN {
        return Err(CodecError::CorruptData(format!(
            "output exceeds {MAX_DECOMPRESSED_LEN} bytes"
        )));
    }

    String::from_utf8(output).map_err(|e| CodecError::CorruptData(e.to_string()))
}
