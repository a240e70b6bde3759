//! Error types for PromptPay encoding.
//!
//! Only [`PromptPayError::InvalidIdentifier`], [`PromptPayError::InvalidAmount`]
//! and [`PromptPayError::InvalidAdditionalData`] describe bad user input. The
//! remaining variants are raised by the structural layers (TLV, checksum) and
//! mean a caller broke an internal contract.

use crate::identifier::ProxyType;

/// Error codes for FFI and mobile integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PromptPayErrorCode {
    /// Payee identifier did not match an accepted shape
    InvalidIdentifier = 1000,
    /// Amount is zero, negative or not representable
    InvalidAmount = 1001,
    /// Bill number or label rejected
    InvalidAdditionalData = 1002,
    /// Stored profile could not be read
    Config = 2000,
    /// TLV value longer than 99 characters
    FieldTooLarge = 9000,
    /// TLV tag is not two decimal digits
    InvalidTag = 9001,
    /// Checksum requested over nothing
    EmptyChecksumInput = 9002,
}

/// Comprehensive error type for PromptPay operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptPayError {
    /// Raw identifier does not match any accepted phone, national ID or e-wallet shape.
    #[error("invalid {kind} identifier: {reason}")]
    InvalidIdentifier {
        /// Declared proxy type of the rejected input
        kind: ProxyType,
        /// Why the input was rejected
        reason: String,
    },

    /// Amount is zero or negative, or cannot be rendered.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// An additional data (tag 62) value was rejected.
    #[error("invalid {field}: {reason}")]
    InvalidAdditionalData {
        /// Field name, e.g. "bill number"
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A merchant profile could not be parsed or is incomplete.
    #[error("configuration error: {0}")]
    Config(String),

    /// A TLV value exceeds the two-digit length field.
    #[error("field {tag} too large: {length} characters (maximum 99)")]
    FieldTooLarge {
        /// Tag of the offending field
        tag: String,
        /// Actual value length
        length: usize,
    },

    /// A TLV tag is not exactly two decimal digits.
    #[error("invalid tag {0:?}: expected two decimal digits")]
    InvalidTag(String),

    /// Checksum was requested over an empty input.
    #[error("checksum input is empty")]
    EmptyChecksumInput,
}

impl PromptPayError {
    /// Get the error code for FFI/mobile integration.
    pub fn code(&self) -> PromptPayErrorCode {
        match self {
            Self::InvalidIdentifier { .. } => PromptPayErrorCode::InvalidIdentifier,
            Self::InvalidAmount(_) => PromptPayErrorCode::InvalidAmount,
            Self::InvalidAdditionalData { .. } => PromptPayErrorCode::InvalidAdditionalData,
            Self::Config(_) => PromptPayErrorCode::Config,
            Self::FieldTooLarge { .. } => PromptPayErrorCode::FieldTooLarge,
            Self::InvalidTag(_) => PromptPayErrorCode::InvalidTag,
            Self::EmptyChecksumInput => PromptPayErrorCode::EmptyChecksumInput,
        }
    }

    /// Get the error message as an owned String (useful for FFI).
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns true if the UI should prompt the user again.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidIdentifier { .. }
                | Self::InvalidAmount(_)
                | Self::InvalidAdditionalData { .. }
        )
    }

    /// Returns true for internal contract violations that must not be recovered.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::FieldTooLarge { .. } | Self::InvalidTag(_) | Self::EmptyChecksumInput
        )
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier(kind: ProxyType, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            reason: reason.into(),
        }
    }

    /// Create an invalid amount error.
    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        Self::InvalidAmount(reason.into())
    }
}

impl From<serde_json::Error> for PromptPayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
