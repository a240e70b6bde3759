//! Payee identifier normalization.
//!
//! PromptPay addresses a payee by a "proxy": a Thai mobile number, a 13-digit
//! national ID (or tax ID), or a 15-digit e-wallet ID. Banking apps only accept
//! the canonical digit form, so every raw input goes through [`normalize`]
//! before it reaches the encoder.
//!
//! Mobile numbers are accepted as `0XXXXXXXXX`, `+66XXXXXXXXX` or
//! `66XXXXXXXXX` and always come out as `66` followed by the 9-digit
//! subscriber number. Only a *leading* `0`, `+66` or `66` is replaced.

use crate::{PromptPayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Thailand's country calling code as it appears in a normalized phone proxy.
pub const THAI_COUNTRY_CODE: &str = "66";

const SUBSCRIBER_DIGITS: usize = 9;
const NATIONAL_ID_DIGITS: usize = 13;
const E_WALLET_DIGITS: usize = 15;

/// How a payee is addressed on the PromptPay rail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProxyType {
    /// Thai mobile phone number.
    MobilePhone,
    /// 13-digit national ID or tax ID.
    NationalId,
    /// 15-digit e-wallet ID.
    EWallet,
}

impl ProxyType {
    /// Subtag used for this proxy inside the merchant account info block.
    pub fn subtag(&self) -> &'static str {
        match self {
            Self::MobilePhone => "01",
            Self::NationalId => "02",
            Self::EWallet => "03",
        }
    }

    /// Stable machine-readable name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MobilePhone => "mobile_phone",
            Self::NationalId => "national_id",
            Self::EWallet => "e_wallet",
        }
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MobilePhone => "mobile phone",
            Self::NationalId => "national ID",
            Self::EWallet => "e-wallet",
        };
        f.write_str(label)
    }
}

impl FromStr for ProxyType {
    type Err = PromptPayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "mobile_phone" | "mobile" | "phone" => Ok(Self::MobilePhone),
            "national_id" | "nid" | "tax_id" => Ok(Self::NationalId),
            "e_wallet" | "ewallet" | "wallet" => Ok(Self::EWallet),
            other => Err(PromptPayError::Config(format!(
                "unknown proxy type: {}",
                other
            ))),
        }
    }
}

/// A canonical payee identifier, ready to be embedded in a payload.
///
/// Only [`normalize`] constructs this type, so `digits` is always
/// ASCII digits of the length its proxy type requires.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PayeeIdentifier {
    proxy_type: ProxyType,
    digits: String,
}

impl PayeeIdentifier {
    /// The proxy classification.
    pub fn proxy_type(&self) -> ProxyType {
        self.proxy_type
    }

    /// The canonical digit sequence.
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for PayeeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.proxy_type, self.digits)
    }
}

/// Canonicalize a raw identifier of the declared kind.
///
/// # Errors
///
/// Returns [`PromptPayError::InvalidIdentifier`] when the cleaned input does
/// not match an accepted shape.
///
/// # Examples
///
/// ```
/// use promptpay_lib::identifier::{normalize, ProxyType};
///
/// let payee = normalize("081-234-5678", ProxyType::MobilePhone).unwrap();
/// assert_eq!(payee.digits(), "66812345678");
///
/// let payee = normalize("1-2345-67890-12-3", ProxyType::NationalId).unwrap();
/// assert_eq!(payee.digits(), "1234567890123");
/// ```
pub fn normalize(raw: &str, kind: ProxyType) -> Result<PayeeIdentifier> {
    let cleaned = strip_separators(raw);
    let digits = match kind {
        ProxyType::MobilePhone => normalize_phone(&cleaned)?,
        ProxyType::NationalId => fixed_length_digits(&cleaned, kind, NATIONAL_ID_DIGITS)?,
        ProxyType::EWallet => fixed_length_digits(&cleaned, kind, E_WALLET_DIGITS)?,
    };

    Ok(PayeeIdentifier {
        proxy_type: kind,
        digits,
    })
}

fn strip_separators(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

fn is_subscriber_number(s: &str) -> bool {
    s.len() == SUBSCRIBER_DIGITS && s.bytes().all(|b| b.is_ascii_digit())
}

fn normalize_phone(cleaned: &str) -> Result<String> {
    // Order matters: "+66" must be checked before "66".
    let subscriber = [
        cleaned.strip_prefix("+66"),
        cleaned.strip_prefix(THAI_COUNTRY_CODE),
        cleaned.strip_prefix('0'),
    ]
    .into_iter()
    .flatten()
    .find(|rest| is_subscriber_number(rest));

    match subscriber {
        Some(rest) => Ok(format!("{}{}", THAI_COUNTRY_CODE, rest)),
        None => Err(PromptPayError::invalid_identifier(
            ProxyType::MobilePhone,
            format!(
                "expected 0, +66 or 66 followed by {} digits, got {:?}",
                SUBSCRIBER_DIGITS, cleaned
            ),
        )),
    }
}

fn fixed_length_digits(cleaned: &str, kind: ProxyType, expected: usize) -> Result<String> {
    let digits: String = cleaned.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != expected {
        return Err(PromptPayError::invalid_identifier(
            kind,
            format!("expected {} digits, got {}", expected, digits.len()),
        ));
    }

    Ok(digits)
}
