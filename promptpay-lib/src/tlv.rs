//! EMV QR tag-length-value codec.
//!
//! Every EMV QR field is rendered as a two-digit tag, a two-digit
//! zero-padded length, and the value itself. A constructed field's value is
//! the concatenation of its rendered children, so nesting is just recursion.
//!
//! This module knows nothing about PromptPay; it only enforces the
//! structural limits of the format.

use crate::{PromptPayError, Result};

/// Largest value a two-digit length prefix can describe.
pub const MAX_VALUE_LEN: usize = 99;

/// Value of a TLV field: either literal text or nested fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TlvValue {
    /// Literal value, emitted as-is.
    Primitive(String),
    /// Nested fields, emitted in order and concatenated.
    Constructed(Vec<TlvField>),
}

/// A single field of an EMV QR payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TlvField {
    tag: String,
    value: TlvValue,
}

impl TlvField {
    /// Create a field holding a literal value.
    ///
    /// # Errors
    ///
    /// Returns [`PromptPayError::InvalidTag`] if `tag` is not two decimal digits.
    pub fn primitive(tag: &str, value: impl Into<String>) -> Result<Self> {
        check_tag(tag)?;
        Ok(Self {
            tag: tag.to_string(),
            value: TlvValue::Primitive(value.into()),
        })
    }

    /// Create a field whose value is the encoding of `children`.
    ///
    /// # Errors
    ///
    /// Returns [`PromptPayError::InvalidTag`] if `tag` is not two decimal digits.
    pub fn constructed(tag: &str, children: Vec<TlvField>) -> Result<Self> {
        check_tag(tag)?;
        Ok(Self {
            tag: tag.to_string(),
            value: TlvValue::Constructed(children),
        })
    }

    /// The two-digit tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The field value.
    pub fn value(&self) -> &TlvValue {
        &self.value
    }

    /// Nested fields, if this is a constructed field.
    pub fn children(&self) -> &[TlvField] {
        match &self.value {
            TlvValue::Constructed(children) => children,
            TlvValue::Primitive(_) => &[],
        }
    }

    /// Render this field (and any nested fields) to text.
    ///
    /// # Errors
    ///
    /// Returns [`PromptPayError::FieldTooLarge`] if this field or any nested
    /// field has a value longer than [`MAX_VALUE_LEN`].
    pub fn encode(&self) -> Result<String> {
        let mut out = String::new();
        self.encode_into(&mut out)?;
        Ok(out)
    }

    /// Render this field, appending to `out`.
    pub fn encode_into(&self, out: &mut String) -> Result<()> {
        match &self.value {
            TlvValue::Primitive(value) => encode_into(out, &self.tag, value),
            TlvValue::Constructed(children) => {
                let inner = encode_all(children)?;
                encode_into(out, &self.tag, &inner)
            }
        }
    }
}

/// Render `tag ++ zeroPad(len(value), 2) ++ value`.
///
/// # Errors
///
/// Returns [`PromptPayError::InvalidTag`] or [`PromptPayError::FieldTooLarge`]
/// when the field cannot be represented.
///
/// # Examples
///
/// ```
/// use promptpay_lib::tlv::encode;
///
/// assert_eq!(encode("58", "TH").unwrap(), "5802TH");
/// assert_eq!(encode("00", "").unwrap(), "0000");
/// ```
pub fn encode(tag: &str, value: &str) -> Result<String> {
    let mut out = String::with_capacity(4 + value.len());
    encode_into(&mut out, tag, value)?;
    Ok(out)
}

/// Render a field, appending to `out`. Nothing is appended on error.
pub fn encode_into(out: &mut String, tag: &str, value: &str) -> Result<()> {
    check_tag(tag)?;
    let length = value.chars().count();
    if length > MAX_VALUE_LEN {
        return Err(PromptPayError::FieldTooLarge {
            tag: tag.to_string(),
            length,
        });
    }

    out.push_str(tag);
    out.push_str(&format!("{:02}", length));
    out.push_str(value);
    Ok(())
}

/// Render a sequence of fields in order.
pub fn encode_all(fields: &[TlvField]) -> Result<String> {
    let mut out = String::new();
    for field in fields {
        field.encode_into(&mut out)?;
    }
    Ok(out)
}

fn check_tag(tag: &str) -> Result<()> {
    if tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(PromptPayError::InvalidTag(tag.to_string()))
    }
}
