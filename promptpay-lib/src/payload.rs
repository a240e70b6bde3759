//! Payload assembly.
//!
//! Top-level fields are emitted in the order banking apps expect:
//!
//! | Tag | Field                       | Value                        |
//! |-----|-----------------------------|------------------------------|
//! | 00  | Payload format indicator    | `01`                         |
//! | 01  | Point of initiation method  | `12` (amount bound to code)  |
//! | 29  | Merchant account info       | see [`crate::merchant`]      |
//! | 52  | Merchant category code      | `0000`                       |
//! | 53  | Transaction currency        | `764` (THB)                  |
//! | 54  | Transaction amount          | always two decimals          |
//! | 58  | Country code                | `TH`                         |
//! | 62  | Additional data             | only when non-empty          |
//! | 63  | CRC                         | 4 uppercase hex characters   |

use crate::additional_data::AdditionalData;
use crate::amount::PaymentAmount;
use crate::checksum::checksum;
use crate::identifier::PayeeIdentifier;
use crate::merchant::merchant_account_info;
use crate::tlv::{encode_all, TlvField};
use crate::validation::validate_amount;
use crate::Result;
use std::fmt;

/// Payload format indicator value.
pub const PAYLOAD_FORMAT_INDICATOR: &str = "01";
/// Point of initiation for a code bound to one amount.
pub const INITIATION_DYNAMIC: &str = "12";
/// Merchant category code used by person-to-person PromptPay.
pub const MERCHANT_CATEGORY_CODE: &str = "0000";
/// ISO 4217 numeric code for Thai Baht.
pub const CURRENCY_THB: &str = "764";
/// ISO 3166 country code.
pub const COUNTRY_CODE: &str = "TH";
/// Tag and length of the checksum field; part of the checksummed data.
pub const CHECKSUM_PREFIX: &str = "6304";

const CHECKSUM_TAG: &str = "63";

fn top_level_fields(
    payee: &PayeeIdentifier,
    amount: &PaymentAmount,
    additional: Option<&AdditionalData>,
) -> Result<Vec<TlvField>> {
    let mut fields = vec![
        TlvField::primitive("00", PAYLOAD_FORMAT_INDICATOR)?,
        TlvField::primitive("01", INITIATION_DYNAMIC)?,
        merchant_account_info(payee)?,
        TlvField::primitive("52", MERCHANT_CATEGORY_CODE)?,
        TlvField::primitive("53", CURRENCY_THB)?,
        TlvField::primitive("54", amount.to_payload_string())?,
        TlvField::primitive("58", COUNTRY_CODE)?,
    ];
    if let Some(extra) = additional.map(AdditionalData::to_field).transpose()?.flatten() {
        fields.push(extra);
    }

    Ok(fields)
}

/// Assemble every field before the checksum, followed by [`CHECKSUM_PREFIX`].
///
/// The returned string is exactly the input of the checksum.
pub fn assemble(
    payee: &PayeeIdentifier,
    amount: &PaymentAmount,
    additional: Option<&AdditionalData>,
) -> Result<String> {
    assemble_fields(payee, amount, additional).map(|(_, body)| body)
}

fn assemble_fields(
    payee: &PayeeIdentifier,
    amount: &PaymentAmount,
    additional: Option<&AdditionalData>,
) -> Result<(Vec<TlvField>, String)> {
    let fields = top_level_fields(payee, amount, additional)?;
    let mut body = encode_all(&fields)?;
    body.push_str(CHECKSUM_PREFIX);
    Ok((fields, body))
}

/// A complete PromptPay payload, ready to be rendered as a QR code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedPayload {
    payload: String,
    tags: Vec<String>,
}

impl EncodedPayload {
    /// The payload text.
    pub fn as_str(&self) -> &str {
        &self.payload
    }

    /// Consume into the payload text.
    pub fn into_string(self) -> String {
        self.payload
    }

    /// The 4-character checksum at the end of the payload.
    pub fn checksum(&self) -> &str {
        &self.payload[self.payload.len() - 4..]
    }

    /// Top-level tags in emitted order, ending with `63`.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Payload length in characters.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// True if the payload is empty. Never the case for generated payloads.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl fmt::Display for EncodedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload)
    }
}

impl AsRef<str> for EncodedPayload {
    fn as_ref(&self) -> &str {
        &self.payload
    }
}

/// Encode a payment for an already normalized payee.
///
/// # Errors
///
/// Returns [`crate::PromptPayError::InvalidAmount`] for a zero amount and
/// [`crate::PromptPayError::InvalidAdditionalData`] for rejected labels.
///
/// # Examples
///
/// ```
/// use promptpay_lib::identifier::{normalize, ProxyType};
/// use promptpay_lib::{generate_payload, PaymentAmount};
///
/// let payee = normalize("0812345678", ProxyType::MobilePhone).unwrap();
/// let amount = PaymentAmount::from_str_checked("150.00").unwrap();
/// let payload = generate_payload(&payee, &amount, None).unwrap();
///
/// assert!(payload.as_str().starts_with("000201010212"));
/// assert_eq!(payload.checksum(), "F82B");
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        skip_all,
        fields(proxy_type = %payee.proxy_type())
    )
)]
pub fn generate_payload(
    payee: &PayeeIdentifier,
    amount: &PaymentAmount,
    additional: Option<&AdditionalData>,
) -> Result<EncodedPayload> {
    validate_amount(amount)?;

    let (fields, mut payload) = assemble_fields(payee, amount, additional)?;
    let crc = checksum(&payload)?;
    payload.push_str(&crc);

    #[cfg(feature = "tracing")]
    tracing::debug!(len = payload.len(), checksum = %crc, "encoded promptpay payload");

    let mut tags: Vec<String> = fields.iter().map(|f| f.tag().to_string()).collect();
    tags.push(CHECKSUM_TAG.to_string());

    Ok(EncodedPayload { payload, tags })
}
