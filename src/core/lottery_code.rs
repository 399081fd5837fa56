//! Public lottery codes.
//!
//! A lottery code is the lottery number written in base 34 over a fixed
//! alphabet. Digit 0 is the letter `O`, and the numerals `0` and `1` are left
//! out so printed codes cannot be misread. Codes are never padded: the only
//! code starting with `O` is `O` itself, which keeps the mapping bijective.

use crate::utils::error::{ProgramError, Result};

pub const ALPHABET: &[u8; 34] = b"O23456789ABCDEFGHIJKLMNPQRSTUVWXYZ";

pub const ZERO_SYMBOL: char = ALPHABET[0] as char;

const BASE: u64 = ALPHABET.len() as u64;

// 34^13 > u64::MAX
const MAX_CODE_LEN: usize = 13;

const INVALID: u8 = u8::MAX;

const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

pub fn encode(mut n: u64) -> String {
    let mut buf = [0u8; MAX_CODE_LEN];
    let mut pos = MAX_CODE_LEN;

    loop {
        pos -= 1;
        buf[pos] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
        if n == 0 {
            break;
        }
    }

    buf[pos..].iter().map(|&b| char::from(b)).collect()
}

/// Decodes a canonical code. Anything [`encode`] could not have produced is
/// rejected: empty input, symbols outside the alphabet, a leading zero symbol
/// on a multi-symbol code, or a value that overflows `u64`.
pub fn decode(code: &str) -> Result<u64> {
    let invalid = || ProgramError::InvalidCodeFormat {
        code: code.to_string(),
    };

    let bytes = code.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_CODE_LEN {
        return Err(invalid());
    }
    if bytes.len() > 1 && bytes[0] == ALPHABET[0] {
        return Err(invalid());
    }

    let mut value: u64 = 0;
    for &byte in bytes {
        let digit = DECODE_TABLE[byte as usize];
        if digit == INVALID {
            return Err(invalid());
        }
        value = value
            .checked_mul(BASE)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(invalid)?;
    }

    Ok(value)
}
