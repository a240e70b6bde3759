//! PromptPay Mobile FFI Bindings
//!
//! This crate provides UniFFI bindings for the PromptPay encoder, enabling
//! point-of-sale apps on iOS (Swift) and Android (Kotlin) to render payment
//! QR codes without reimplementing the EMV format.
//!
//! # Architecture
//!
//! The FFI layer is a thin wrapper over `promptpay-lib`:
//! - Free functions for one-shot encoding and payee normalization
//! - [`PromptPayEncoder`], an object bound to a stored merchant profile
//!
//! Amounts cross the boundary as decimal strings so that no precision is
//! lost in platform floating point types.
//!
//! # Thread Safety
//!
//! All exposed types are immutable and can be used from any thread.

pub mod encoder_ffi;

pub use encoder_ffi::PromptPayEncoder;

use promptpay_lib::{AdditionalData, PaymentAmount, PromptPayError, ProxyType};

// UniFFI scaffolding
uniffi::setup_scaffolding!();

// ============================================================================
// Error Types
// ============================================================================

/// Mobile-friendly error type.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PromptPayMobileError {
    /// The payee identifier could not be normalized.
    #[error("Invalid identifier: {msg}")]
    InvalidIdentifier { msg: String },

    /// The amount is malformed, negative, zero or too long.
    #[error("Invalid amount: {msg}")]
    InvalidAmount { msg: String },

    /// A bill number, reference or terminal label was rejected.
    #[error("Invalid additional data: {msg}")]
    InvalidAdditionalData { msg: String },

    /// Stored profile could not be parsed or is incomplete.
    #[error("Configuration error: {msg}")]
    Configuration { msg: String },

    /// Internal error (unexpected state).
    #[error("Internal error: {msg}")]
    Internal { msg: String },
}

impl From<PromptPayError> for PromptPayMobileError {
    fn from(e: PromptPayError) -> Self {
        let msg = e.to_string();
        match e {
            PromptPayError::InvalidIdentifier { .. } => Self::InvalidIdentifier { msg },
            PromptPayError::InvalidAmount(_) => Self::InvalidAmount { msg },
            PromptPayError::InvalidAdditionalData { .. } => Self::InvalidAdditionalData { msg },
            PromptPayError::Config(_) => Self::Configuration { msg },
            PromptPayError::FieldTooLarge { .. }
            | PromptPayError::InvalidTag(_)
            | PromptPayError::EmptyChecksumInput => Self::Internal { msg },
        }
    }
}

pub type Result<T> = std::result::Result<T, PromptPayMobileError>;

// ============================================================================
// Core Types (FFI-safe wrappers)
// ============================================================================

/// How a payee identifier should be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum ProxyTypeFFI {
    MobilePhone,
    NationalId,
    EWallet,
}

impl From<ProxyTypeFFI> for ProxyType {
    fn from(kind: ProxyTypeFFI) -> Self {
        match kind {
            ProxyTypeFFI::MobilePhone => ProxyType::MobilePhone,
            ProxyTypeFFI::NationalId => ProxyType::NationalId,
            ProxyTypeFFI::EWallet => ProxyType::EWallet,
        }
    }
}

impl From<ProxyType> for ProxyTypeFFI {
    fn from(kind: ProxyType) -> Self {
        match kind {
            ProxyType::MobilePhone => ProxyTypeFFI::MobilePhone,
            ProxyType::NationalId => ProxyTypeFFI::NationalId,
            ProxyType::EWallet => ProxyTypeFFI::EWallet,
        }
    }
}

/// A payee identifier after normalization.
#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct NormalizedPayee {
    pub proxy_type: ProxyTypeFFI,
    /// Digits exactly as they appear in the merchant account field.
    pub digits: String,
}

/// Optional tag 62 labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, uniffi::Record)]
pub struct AdditionalDataFFI {
    pub bill_number: Option<String>,
    pub reference_label: Option<String>,
    pub terminal_label: Option<String>,
}

impl From<AdditionalDataFFI> for AdditionalData {
    fn from(data: AdditionalDataFFI) -> Self {
        AdditionalData {
            bill_number: data.bill_number,
            reference_label: data.reference_label,
            terminal_label: data.terminal_label,
        }
    }
}

/// An encoded payload with the details a UI usually shows next to the QR.
#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct PromptPayPayload {
    /// Text to render as the QR code.
    pub payload: String,
    /// The trailing 4-character checksum.
    pub checksum: String,
    /// Amount as rendered in the payload, e.g. `"150.00"`.
    pub amount: String,
}

impl PromptPayPayload {
    fn new(encoded: promptpay_lib::EncodedPayload, amount: &PaymentAmount) -> Self {
        Self {
            checksum: encoded.checksum().to_string(),
            amount: amount.to_payload_string(),
            payload: encoded.into_string(),
        }
    }
}

pub(crate) fn parse_amount(amount: &str) -> Result<PaymentAmount> {
    Ok(PaymentAmount::from_str_checked(amount)?)
}

// ============================================================================
// Encoding Functions
// ============================================================================

/// Generate a PromptPay payload string.
///
/// # Arguments
///
/// * `payee` - Phone number, national ID or e-wallet ID as typed by the user
/// * `proxy_type` - How `payee` should be interpreted
/// * `amount` - Decimal amount in Baht, e.g. `"150.00"`
#[uniffi::export]
pub fn generate_promptpay_payload(
    payee: String,
    proxy_type: ProxyTypeFFI,
    amount: String,
) -> Result<String> {
    let amount = parse_amount(&amount)?;
    let encoded = promptpay_lib::generate(&payee, proxy_type.into(), &amount, None)?;
    Ok(encoded.into_string())
}

/// Generate a payload with optional bill, reference and terminal labels.
#[uniffi::export]
pub fn generate_promptpay_payload_detailed(
    payee: String,
    proxy_type: ProxyTypeFFI,
    amount: String,
    additional: AdditionalDataFFI,
) -> Result<PromptPayPayload> {
    let amount = parse_amount(&amount)?;
    let additional = AdditionalData::from(additional);
    let encoded =
        promptpay_lib::generate(&payee, proxy_type.into(), &amount, Some(&additional))?;
    Ok(PromptPayPayload::new(encoded, &amount))
}

/// Generate a payload for a merchant profile stored as JSON.
///
/// The profile format is the one written by the demo CLI, e.g.
/// `{"payee": "0812345678", "proxy_type": "mobile_phone"}`.
#[uniffi::export]
pub fn generate_promptpay_payload_with_profile(
    profile_json: String,
    amount: String,
) -> Result<PromptPayPayload> {
    let encoder = PromptPayEncoder::from_profile_json(profile_json)?;
    encoder.generate(amount)
}

/// Normalize a payee identifier without encoding a payload.
///
/// Useful for validating input fields as the user types.
#[uniffi::export]
pub fn normalize_payee(payee: String, proxy_type: ProxyTypeFFI) -> Result<NormalizedPayee> {
    let normalized = promptpay_lib::normalize(&payee, proxy_type.into())?;
    Ok(NormalizedPayee {
        proxy_type: normalized.proxy_type().into(),
        digits: normalized.digits().to_string(),
    })
}

/// Compute the CRC-16/CCITT-FALSE checksum used in tag 63.
#[uniffi::export]
pub fn promptpay_checksum(data: String) -> Result<String> {
    Ok(promptpay_lib::checksum::checksum(&data)?)
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Get the library version.
#[uniffi::export]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
