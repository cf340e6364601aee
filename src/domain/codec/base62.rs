//! Base62 encoding of arbitrary byte strings.
//!
//! Bytes are read as one big-endian unsigned integer and written out in the
//! alphabet `0-9a-zA-Z`, most significant digit first.
//!
//! The integer view drops leading zero bytes: `[0x00, 0x01]` and `[0x01]`
//! encode identically, and zero (including the empty input) encodes to `"0"`
//! and decodes back to the empty byte string. Brotli streams written with a
//! 22-bit window never start with `0x00`, so compressed payloads are not
//! affected.

use num_bigint::BigUint;
use num_traits::Zero;

use super::error::CodecError;

/// Digit alphabet, in digit-value order.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u32 = 62;

/// Upper bound on the length of [`encode`] output for `byte_len` input bytes.
///
/// Each base62 digit carries more than 5 bits.
pub const fn max_encoded_len(byte_len: usize) -> usize {
    byte_len * 8 / 5 + 2
}

/// Encodes `bytes` as the minimal base62 representation of their integer value.
pub fn encode(bytes: &[u8]) -> String {
    BigUint::from_bytes_be(bytes)
        .to_radix_be(BASE)
        .into_iter()
        .map(|digit| ALPHABET[digit as usize] as char)
        .collect()
}

/// Decodes a base62 string to the minimal big-endian byte sequence.
///
/// # Errors
///
/// Returns [`CodecError::InvalidCharacter`] for the first character outside
/// [`ALPHABET`].
pub fn decode(encoded: &str) -> Result<Vec<u8>, CodecError> {
    let digits = encoded
        .chars()
        .enumerate()
        .map(|(position, character)| {
            digit_value(character).ok_or(CodecError::InvalidCharacter {
                character,
                position,
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    if digits.is_empty() {
        return Ok(Vec::new());
    }

    let value = BigUint::from_radix_be(&digits, BASE)
        .ok_or_else(|| CodecError::InvalidFormat("base62 digit out of range".to_string()))?;

    if value.is_zero() {
        Ok(Vec::new())
    } else {
        Ok(value.to_bytes_be())
    }
}

/// Returns true if every character of `s` belongs to the alphabet.
pub fn is_base62(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn digit_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='z' => Some(c as u8 - b'a' + 10),
        'A'..='Z' => Some(c as u8 - b'A' + 36),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_encoded_len_bounds_output() {
        for len in [0, 1, 2, 3, 16, 265, 8198] {
            let bytes = vec![0xFF; len];
            assert!(encode(&bytes).len() <= max_encoded_len(len), "{len} bytes");
        }
    }

    #[test]
    fn test_alphabet_is_62_unique_characters() {
        let mut seen = std::collections::HashSet::new();
        for &b in ALPHABET {
            assert!(seen.insert(b));
        }
        assert_eq!(seen.len(), 62);
    }

    #[test]
    fn test_digit_value_matches_alphabet_order() {
        for (i, &b) in ALPHABET.iter().enumerate() {
            assert_eq!(digit_value(b as char), Some(i as u8));
        }
    }

    #[test]
    fn test_encode_zero_is_first_character() {
        assert_eq!(encode(&[]), "0");
        assert_eq!(encode(&[0]), "0");
        assert_eq!(encode(&[0, 0, 0]), "0");
    }

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode(&[9]), "9");
        assert_eq!(encode(&[10]), "a");
        assert_eq!(encode(&[61]), "Z");
        assert_eq!(encode(&[62]), "10");
        assert_eq!(encode(&[255]), "47");
        // 256 = 4 * 62 + 8
        assert_eq!(encode(&[1, 0]), "48");
    }

    #[test]
    fn test_decode_known_vectors() {
        assert_eq!(decode("Z").unwrap(), vec![61]);
        assert_eq!(decode("10").unwrap(), vec![62]);
        assert_eq!(decode("47").unwrap(), vec![255]);
        assert_eq!(decode("48").unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_decode_zero_is_empty() {
        assert!(decode("0").unwrap().is_empty());
        assert!(decode("000").unwrap().is_empty());
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn test_leading_zero_bytes_are_dropped() {
        let encoded = encode(&[0, 0, 1, 2]);
        assert_eq!(encoded, encode(&[1, 2]));
        assert_eq!(decode(&encoded).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_roundtrip_preserves_numeric_value() {
        let samples: [&[u8]; 5] = [
            b"hello world",
            &[0xff; 32],
            &[0x1b, 0x00, 0x00, 0x80],
            &[0x80],
            &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17],
        ];

        for sample in samples {
            assert_eq!(decode(&encode(sample)).unwrap(), sample);
        }
    }

    #[test]
    fn test_leading_digit_is_never_zero_for_nonzero_input() {
        for byte in 1..=255u8 {
            let encoded = encode(&[byte, 0x42]);
            assert!(!encoded.starts_with('0'), "{byte}: {encoded}");
        }
    }

    #[test]
    fn test_encode_output_stays_in_alphabet() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = encode(&data);
        assert!(is_base62(&encoded));
    }

    #[test]
    fn test_decode_rejects_foreign_characters() {
        for (input, bad, position) in [("ab-c", '-', 2), ("_", '_', 0), ("xyz.", '.', 3), ("é", 'é', 0)] {
            match decode(input) {
                Err(CodecError::InvalidCharacter {
                    character,
                    position: at,
                }) => {
                    assert_eq!(character, bad);
                    assert_eq!(at, position);
                }
                other => panic!("expected InvalidCharacter for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_is_base62() {
        assert!(is_base62("abcXYZ019"));
        assert!(is_base62(""));
        assert!(!is_base62("ab_c"));
        assert!(!is_base62("a.b"));
    }
}
