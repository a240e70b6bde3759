//! Merchant profile configuration.
//!
//! The host application keeps the shop's PromptPay payee in its own settings
//! store. This type is the serialized form of that setting; it is always
//! handed to the encoder explicitly.

use crate::additional_data::AdditionalData;
use crate::identifier::{normalize, PayeeIdentifier, ProxyType};
use crate::{PromptPayError, Result};
use serde::{Deserialize, Serialize};

/// Stored payee settings for a point-of-sale device.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantProfile {
    /// Raw payee identifier as entered by the merchant.
    pub payee: String,

    /// How `payee` should be interpreted.
    #[serde(default = "default_proxy_type")]
    pub proxy_type: ProxyType,

    /// Label of this till, emitted as the terminal label when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_label: Option<String>,

    /// Default reference label for every sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_label: Option<String>,
}

fn default_proxy_type() -> ProxyType {
    ProxyType::MobilePhone
}

impl MerchantProfile {
    /// Create a profile for the given payee.
    pub fn new(payee: impl Into<String>, proxy_type: ProxyType) -> Self {
        Self {
            payee: payee.into(),
            proxy_type,
            terminal_label: None,
            reference_label: None,
        }
    }

    /// Set the terminal label.
    pub fn with_terminal_label(mut self, label: impl Into<String>) -> Self {
        self.terminal_label = Some(label.into());
        self
    }

    /// Set the reference label.
    pub fn with_reference_label(mut self, label: impl Into<String>) -> Self {
        self.reference_label = Some(label.into());
        self
    }

    /// Parse a profile from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the profile as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the payee normalizes and the labels are acceptable.
    pub fn validate(&self) -> Result<()> {
        if self.payee.trim().is_empty() {
            return Err(PromptPayError::Config("payee is not set".to_string()));
        }
        self.payee_identifier()?;
        self.additional_data().validate()
    }

    /// The normalized payee.
    pub fn payee_identifier(&self) -> Result<PayeeIdentifier> {
        normalize(&self.payee, self.proxy_type)
    }

    /// Additional data derived from the profile's labels.
    pub fn additional_data(&self) -> AdditionalData {
        AdditionalData {
            bill_number: None,
            reference_label: self.reference_label.clone(),
            terminal_label: self.terminal_label.clone(),
        }
    }
}
