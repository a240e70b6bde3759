//! Checksum command - compute or verify the tag 63 CRC

use anyhow::{bail, Result};
use promptpay_lib::checksum::checksum;

use crate::ui;

/// Outcome of checking a complete payload's trailing CRC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub expected: String,
    pub found: String,
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        self.expected == self.found
    }
}

/// Check the last four characters of `payload` against the CRC of the rest.
pub fn verify_payload(payload: &str) -> Result<Verification> {
    let payload = payload.trim();
    if payload.len() < 8 || !payload.is_ascii() {
        bail!("Payload too short or not ASCII");
    }

    let (body, found) = payload.split_at(payload.len() - 4);
    if !body.ends_with("6304") {
        bail!("Payload does not end with a checksum field (6304xxxx)");
    }

    Ok(Verification {
        expected: checksum(body)?,
        found: found.to_uppercase(),
    })
}

pub fn run(data: &str, verify: bool, _verbose: bool) -> Result<()> {
    if !verify {
        println!("{}", checksum(data)?);
        return Ok(());
    }

    let result = verify_payload(data)?;
    if result.is_valid() {
        ui::success(&format!("Checksum {} is valid", result.found));
        Ok(())
    } else {
        bail!(
            "Checksum mismatch: payload carries {}, expected {}",
            result.found,
            result.expected
        )
    }
}
