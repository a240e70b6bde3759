//! PromptPay payment payload encoder.
//!
//! This crate turns a payee identifier and an amount into the EMV QR text
//! that Thai banking apps scan to pay through PromptPay. It is pure: no I/O,
//! no global state, and the same input always produces the same output.
//!
//! # Pipeline
//!
//! - **Validation**: reject non-positive amounts and malformed labels ([`validation`])
//! - **Normalization**: canonicalize phone, national ID or e-wallet proxies ([`identifier`])
//! - **Merchant account info**: the nested tag 29 block ([`merchant`])
//! - **Assembly**: top-level fields in protocol order ([`payload`])
//! - **Checksum**: CRC-16/CCITT-FALSE over everything before it ([`checksum`])
//!
//! # Example
//!
//! ```
//! use promptpay_lib::{generate, PaymentAmount, ProxyType};
//!
//! let amount = PaymentAmount::from_str_checked("150.00").unwrap();
//! let payload = generate("081-234-5678", ProxyType::MobilePhone, &amount, None).unwrap();
//!
//! assert_eq!(
//!     payload.as_str(),
//!     "00020101021229350016A0000006770101110111668123456785204000053037645406150.005802TH6304F82B"
//! );
//! ```

pub mod additional_data;
pub mod amount;
pub mod checksum;
pub mod config;
pub mod errors;
pub mod identifier;
pub mod merchant;
pub mod payload;
pub mod prelude;
pub mod tlv;
pub mod validation;

/// Test utilities for payload testing.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use additional_data::AdditionalData;
pub use amount::PaymentAmount;
pub use config::MerchantProfile;
pub use errors::{PromptPayError, PromptPayErrorCode};
pub use identifier::{normalize, PayeeIdentifier, ProxyType};
pub use payload::{generate_payload, EncodedPayload};

/// Common result alias for PromptPay operations.
pub type Result<T> = std::result::Result<T, PromptPayError>;

/// Validate raw input and encode it in one step.
///
/// # Errors
///
/// Returns [`PromptPayError::InvalidAmount`] for a zero amount,
/// [`PromptPayError::InvalidIdentifier`] for a malformed payee, and
/// [`PromptPayError::InvalidAdditionalData`] for rejected labels. No payload
/// is produced in any of these cases.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(raw_payee, amount, additional))
)]
pub fn generate(
    raw_payee: &str,
    kind: ProxyType,
    amount: &PaymentAmount,
    additional: Option<&AdditionalData>,
) -> Result<EncodedPayload> {
    let payee = validation::validate_request(raw_payee, kind, amount, additional)?;
    generate_payload(&payee, amount, additional)
}

/// Encode a sale for a stored merchant profile.
///
/// The profile's terminal and reference labels are carried in the
/// additional data field.
pub fn generate_for_profile(
    profile: &MerchantProfile,
    amount: &PaymentAmount,
) -> Result<EncodedPayload> {
    let additional = profile.additional_data();
    generate(&profile.payee, profile.proxy_type, amount, Some(&additional))
}
