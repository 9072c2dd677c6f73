//! RAP amount octet encoding.
//!
//! TD.52 serialises signed amounts as big-endian two's complement in the
//! shortest form that still preserves the sign: bytes are emitted from the
//! least significant end into an 8-byte scratch until the remaining value
//! collapses, then a single 0x00 pad byte is prepended when the leading byte
//! would otherwise read as negative. More than 8 meaningful bytes is a hard
//! failure.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("amount {0} does not fit into 8 octets")]
pub struct AmountOutOfRange(pub i64);

pub fn octet_string_from_i64(value: i64) -> Result<Vec<u8>, AmountOutOfRange> {
    let mut buf = [0u8; 8];
    let mut rest = value;
    let mut start = buf.len();

    loop {
        start -= 1;
        buf[start] = (rest & 0xFF) as u8;
        rest >>= 8;
        let done = if value >= 0 {
            rest == 0
        } else {
            // A negative value is complete once only sign bits remain and
            // the leading byte still carries the sign.
            rest == -1 && buf[start] & 0x80 != 0
        };
        if done {
            break;
        }
        if start == 0 {
            return Err(AmountOutOfRange(value));
        }
    }

    if value >= 0 && buf[start] & 0x80 != 0 {
        // Would be read back as negative; pad with one more octet.
        if start == 0 {
            return Err(AmountOutOfRange(value));
        }
        start -= 1;
        buf[start] = 0;
    }

    Ok(buf[start..].to_vec())
}

/// Reads an amount back out of its octet encoding, sign-extending from the
/// leading byte. Inverse of [`octet_string_from_i64`].
pub fn i64_from_octets(octets: &[u8]) -> i64 {
    let mut value: i64 = if octets.first().is_some_and(|b| b & 0x80 != 0) {
        -1
    } else {
        0
    };
    for &byte in octets {
        value = (value << 8) | i64::from(byte);
    }
    value
}
