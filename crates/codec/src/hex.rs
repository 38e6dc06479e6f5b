//! Lowercase hex helpers for captured packets and record data.

use crate::errors::{CodecError, Result};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(char::from(DIGITS[usize::from(byte >> 4)]));
        out.push(char::from(DIGITS[usize::from(byte & 0x0F)]));
    }
    out
}

/// Decodes hex text. Whitespace anywhere in the input is ignored.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .map(|b| {
            nibble(b).ok_or_else(|| {
                CodecError::InvalidHex(format!("unexpected character '{}'", char::from(b)))
            })
        })
        .collect::<Result<_>>()?;

    if digits.len() % 2 != 0 {
        return Err(CodecError::InvalidHex(format!(
            "odd number of digits ({})",
            digits.len()
        )));
    }

    Ok(digits.chunks_exact(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}

fn nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
