//! Profile-bound encoder object.
//!
//! A point-of-sale app configures its payee once and then asks for a new
//! payload per sale. [`PromptPayEncoder`] holds the validated profile so that
//! the per-sale call only carries the amount.
//!
//! # Example
//!
//! ```ignore
//! // From Swift/Kotlin
//! let encoder = try PromptPayEncoder(payee: "0812345678", proxyType: .mobilePhone)
//! let payload = try encoder.generate(amount: "150.00")
//! showQr(payload.payload)
//! ```

use crate::{parse_amount, PromptPayPayload, ProxyTypeFFI, Result};
use promptpay_lib::{MerchantProfile, PayeeIdentifier};
use std::sync::Arc;

/// Encoder bound to one merchant profile.
#[derive(uniffi::Object)]
pub struct PromptPayEncoder {
    profile: MerchantProfile,
    /// Normalized once at construction.
    payee: PayeeIdentifier,
}

impl PromptPayEncoder {
    fn from_profile(profile: MerchantProfile) -> Result<Self> {
        profile.validate()?;
        let payee = profile.payee_identifier()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(proxy_type = %payee.proxy_type(), "configured promptpay encoder");

        Ok(Self { profile, payee })
    }
}

#[uniffi::export]
impl PromptPayEncoder {
    /// Create an encoder for a payee.
    #[uniffi::constructor]
    pub fn new(payee: String, proxy_type: ProxyTypeFFI) -> Result<Arc<Self>> {
        Self::from_profile(MerchantProfile::new(payee, proxy_type.into())).map(Arc::new)
    }

    /// Create an encoder from a stored profile.
    ///
    /// # Arguments
    ///
    /// * `json` - Profile JSON with `payee` and optional `proxy_type`,
    ///   `terminal_label` and `reference_label` keys
    #[uniffi::constructor]
    pub fn from_profile_json(json: String) -> Result<Arc<Self>> {
        let profile = MerchantProfile::from_json(&json)?;
        Self::from_profile(profile).map(Arc::new)
    }

    /// Create an encoder that also emits a terminal label on every payload.
    #[uniffi::constructor]
    pub fn with_terminal(
        payee: String,
        proxy_type: ProxyTypeFFI,
        terminal_label: String,
    ) -> Result<Arc<Self>> {
        let profile =
            MerchantProfile::new(payee, proxy_type.into()).with_terminal_label(terminal_label);
        Self::from_profile(profile).map(Arc::new)
    }

    /// Normalized payee digits.
    pub fn payee_digits(&self) -> String {
        self.payee.digits().to_string()
    }

    /// How the payee is interpreted.
    pub fn proxy_type(&self) -> ProxyTypeFFI {
        self.payee.proxy_type().into()
    }

    /// Profile as JSON, suitable for the app's settings store.
    pub fn profile_json(&self) -> Result<String> {
        Ok(self.profile.to_json()?)
    }

    /// Generate a payload for one sale.
    pub fn generate(&self, amount: String) -> Result<PromptPayPayload> {
        let amount = parse_amount(&amount)?;
        let additional = self.profile.additional_data();
        let encoded = promptpay_lib::generate_payload(&self.payee, &amount, Some(&additional))?;
        Ok(PromptPayPayload::new(encoded, &amount))
    }

    /// Generate a payload carrying a bill number for this sale.
    pub fn generate_with_bill(
        &self,
        amount: String,
        bill_number: String,
    ) -> Result<PromptPayPayload> {
        let amount = parse_amount(&amount)?;
        let additional = self.profile.additional_data().with_bill_number(bill_number);
        additional.validate()?;
        let encoded = promptpay_lib::generate_payload(&self.payee, &amount, Some(&additional))?;
        Ok(PromptPayPayload::new(encoded, &amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PromptPayMobileError;

    #[test]
    fn test_encoder_generates_known_payload() {
        let encoder =
            PromptPayEncoder::new("0812345678".to_string(), ProxyTypeFFI::MobilePhone).unwrap();
        assert_eq!(encoder.payee_digits(), "66812345678");

        let payload = encoder.generate("150.00".to_string()).unwrap();
        assert_eq!(payload.checksum, "F82B");
        assert_eq!(payload.amount, "150.00");

        let err = encoder.generate("0".to_string()).unwrap_err();
        assert!(matches!(err, PromptPayMobileError::InvalidAmount { .. }));
    }

    #[test]
    fn test_encoder_rejects_bad_payee() {
        let result = PromptPayEncoder::new("12345".to_string(), ProxyTypeFFI::MobilePhone);
        assert!(matches!(
            result,
            Err(PromptPayMobileError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_encoder_from_profile_json() {
        let encoder = PromptPayEncoder::from_profile_json(
            r#"{"payee":"1-2345-67890-12-3","proxy_type":"national_id","terminal_label":"POS01"}"#
                .to_string(),
        )
        .unwrap();
        assert_eq!(encoder.proxy_type(), ProxyTypeFFI::NationalId);

        let payload = encoder.generate("4.22".to_string()).unwrap();
        assert!(payload.payload.contains("62090705POS01"));

        let json = encoder.profile_json().unwrap();
        assert!(json.contains("POS01"));
    }

    #[test]
    fn test_encoder_from_bad_json() {
        let result = PromptPayEncoder::from_profile_json("not json".to_string());
        assert!(matches!(
            result,
            Err(PromptPayMobileError::Configuration { .. })
        ));
    }

    #[test]
    fn test_generate_with_bill() {
        let encoder = PromptPayEncoder::with_terminal(
            "0812345678".to_string(),
            ProxyTypeFFI::MobilePhone,
            "POS01".to_string(),
        )
        .unwrap();
        let payload = encoder
            .generate_with_bill("150".to_string(), "INV001".to_string())
            .unwrap();
        assert!(payload.payload.ends_with("62190106INV0010705POS016304CA23"));

        let result = encoder.generate_with_bill("150".to_string(), "x".repeat(30));
        assert!(matches!(
            result,
            Err(PromptPayMobileError::InvalidAdditionalData { .. })
        ));
    }
}
