//! CRC-16/CCITT-FALSE, the integrity field (tag 63) of every EMV QR payload.
//!
//! Polynomial `0x1021`, initial register `0xFFFF`, MSB first, no reflection,
//! no final XOR. The checksum covers the whole payload up to and including
//! the `6304` prefix of the checksum field itself.

use crate::{PromptPayError, Result};

const POLYNOMIAL: u16 = 0x1021;
const INITIAL: u16 = 0xFFFF;

/// Compute the raw 16-bit checksum of `data`.
///
/// # Examples
///
/// ```
/// use promptpay_lib::checksum::crc16;
///
/// assert_eq!(crc16(b"123456789"), 0x29B1);
/// ```
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc = INITIAL;

    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }

    crc
}

/// Compute the checksum of `data` as 4 uppercase hex characters.
///
/// # Errors
///
/// Returns [`PromptPayError::EmptyChecksumInput`] if `data` is empty.
pub fn checksum(data: &str) -> Result<String> {
    if data.is_empty() {
        return Err(PromptPayError::EmptyChecksumInput);
    }
    Ok(format!("{:04X}", crc16(data.as_bytes())))
}
