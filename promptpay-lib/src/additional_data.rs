//! Additional data field template (tag 62).
//!
//! PromptPay merchants commonly use three of the EMV subfields: a bill
//! number, a reference label and a terminal label. All of them are optional;
//! when none is set the whole tag 62 block is left out of the payload.

use crate::tlv::TlvField;
use crate::{PromptPayError, Result};
use serde::{Deserialize, Serialize};

/// Top-level tag of the additional data field template.
pub const ADDITIONAL_DATA_TAG: &str = "62";

/// EMV upper bound for each additional data subfield.
pub const MAX_LABEL_LEN: usize = 25;

const BILL_NUMBER_SUBTAG: &str = "01";
const REFERENCE_LABEL_SUBTAG: &str = "05";
const TERMINAL_LABEL_SUBTAG: &str = "07";

/// Optional merchant-side references carried alongside the payment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalData {
    /// Invoice or bill number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_number: Option<String>,
    /// Merchant-defined transaction reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_label: Option<String>,
    /// Identifier of the till or device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_label: Option<String>,
}

impl AdditionalData {
    /// Create an empty set of additional data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bill number.
    pub fn with_bill_number(mut self, bill_number: impl Into<String>) -> Self {
        self.bill_number = Some(bill_number.into());
        self
    }

    /// Set the reference label.
    pub fn with_reference_label(mut self, reference_label: impl Into<String>) -> Self {
        self.reference_label = Some(reference_label.into());
        self
    }

    /// Set the terminal label.
    pub fn with_terminal_label(mut self, terminal_label: impl Into<String>) -> Self {
        self.terminal_label = Some(terminal_label.into());
        self
    }

    /// True when no subfield is set.
    pub fn is_empty(&self) -> bool {
        self.bill_number.is_none() && self.reference_label.is_none() && self.terminal_label.is_none()
    }

    /// Check every set subfield.
    ///
    /// # Errors
    ///
    /// Returns [`PromptPayError::InvalidAdditionalData`] if a value is empty,
    /// longer than [`MAX_LABEL_LEN`], or not printable ASCII.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.entries() {
            check_label(field, value)?;
        }
        Ok(())
    }

    /// Build the tag 62 field, or `None` when there is nothing to emit.
    pub fn to_field(&self) -> Result<Option<TlvField>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.validate()?;

        let children = [
            (BILL_NUMBER_SUBTAG, &self.bill_number),
            (REFERENCE_LABEL_SUBTAG, &self.reference_label),
            (TERMINAL_LABEL_SUBTAG, &self.terminal_label),
        ]
        .into_iter()
        .filter_map(|(subtag, value)| value.as_deref().map(|v| TlvField::primitive(subtag, v)))
        .collect::<Result<Vec<_>>>()?;

        TlvField::constructed(ADDITIONAL_DATA_TAG, children).map(Some)
    }

    fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("bill number", self.bill_number.as_deref()),
            ("reference label", self.reference_label.as_deref()),
            ("terminal label", self.terminal_label.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

fn check_label(field: &'static str, value: &str) -> Result<()> {
    let reason = if value.is_empty() {
        "must not be empty".to_string()
    } else if value.len() > MAX_LABEL_LEN {
        format!("{} characters exceeds maximum of {}", value.len(), MAX_LABEL_LEN)
    } else if !value.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
        "must be printable ASCII".to_string()
    } else {
        return Ok(());
    };

    Err(PromptPayError::InvalidAdditionalData { field, reason })
}
