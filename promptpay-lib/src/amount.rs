//! Baht amounts with fixed-point precision.
//!
//! Amounts are carried as [`Decimal`], never as floats, and are always
//! rendered with exactly two fractional digits in the payload (`150` becomes
//! `150.00`).

use crate::{PromptPayError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum rendered length of the transaction amount field (tag 54).
pub const MAX_AMOUNT_LEN: usize = 13;

const FRACTION_DIGITS: u32 = 2;

/// A non-negative Thai Baht amount with at most two fractional digits.
///
/// # Examples
///
/// ```
/// use promptpay_lib::PaymentAmount;
///
/// let amount = PaymentAmount::from_str_checked("150").unwrap();
/// assert_eq!(amount.to_string(), "150.00");
///
/// let amount = PaymentAmount::from_satang(42_050).unwrap();
/// assert_eq!(amount.to_string(), "420.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaymentAmount {
    value: Decimal,
}

impl PaymentAmount {
    /// Create from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`PromptPayError::InvalidAmount`] for negative values, values
    /// with more than two fractional digits, or values too long for the
    /// amount field.
    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(PromptPayError::invalid_amount(format!(
                "{} is negative",
                value
            )));
        }

        let normalized = value.normalize();
        if normalized.scale() > FRACTION_DIGITS {
            return Err(PromptPayError::invalid_amount(format!(
                "{} has more than {} fractional digits",
                value, FRACTION_DIGITS
            )));
        }

        let amount = Self {
            value: if normalized.is_zero() {
                Decimal::ZERO
            } else {
                normalized
            },
        };

        let rendered = amount.to_payload_string();
        if rendered.len() > MAX_AMOUNT_LEN {
            return Err(PromptPayError::invalid_amount(format!(
                "{} exceeds {} characters",
                rendered, MAX_AMOUNT_LEN
            )));
        }

        Ok(amount)
    }

    /// Create from a decimal string such as `"123.45"`.
    ///
    /// Thousands separators, currency symbols and exponents are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PromptPayError::InvalidAmount`] if the string is not a plain
    /// decimal or fails the checks of [`PaymentAmount::new`].
    pub fn from_str_checked(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PromptPayError::invalid_amount("amount is empty"));
        }
        if !is_plain_decimal(s) {
            return Err(PromptPayError::invalid_amount(format!(
                "{:?} is not a plain decimal number",
                s
            )));
        }
        let value = Decimal::from_str(s)
            .map_err(|e| PromptPayError::invalid_amount(format!("{:?}: {}", s, e)))?;
        Self::new(value)
    }

    /// Create from satang, the integer minor unit (1 baht = 100 satang).
    pub fn from_satang(satang: u64) -> Result<Self> {
        let satang = i64::try_from(satang)
            .map_err(|_| PromptPayError::invalid_amount("satang value out of range"))?;
        Self::new(Decimal::new(satang, FRACTION_DIGITS))
    }

    /// Get zero amount.
    pub fn zero() -> Self {
        Self {
            value: Decimal::ZERO,
        }
    }

    /// Check if amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Check if amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.value > Decimal::ZERO
    }

    /// Get the internal Decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Render with exactly two fractional digits and no separators.
    pub fn to_payload_string(&self) -> String {
        let mut value = self.value;
        value.rescale(FRACTION_DIGITS);
        value.to_string()
    }
}

/// Optional sign, ASCII digits, and an optional `.` followed by digits.
///
/// `Decimal::from_str` alone also accepts exponents and `_` separators.
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(|c| c == '+' || c == '-').unwrap_or(s);
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    match unsigned.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(unsigned),
    }
}

impl fmt::Display for PaymentAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_payload_string())
    }
}

impl FromStr for PaymentAmount {
    type Err = PromptPayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_checked(s)
    }
}

impl TryFrom<Decimal> for PaymentAmount {
    type Error = PromptPayError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for PaymentAmount {
    type Error = PromptPayError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_str_checked(&value)
    }
}

impl From<PaymentAmount> for String {
    fn from(amount: PaymentAmount) -> Self {
        amount.to_payload_string()
    }
}

impl From<PaymentAmount> for Decimal {
    fn from(amount: PaymentAmount) -> Self {
        amount.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_always_two_fraction_digits() {
        assert_eq!(PaymentAmount::new(dec!(150)).unwrap().to_string(), "150.00");
        assert_eq!(PaymentAmount::new(dec!(4.2)).unwrap().to_string(), "4.20");
        assert_eq!(PaymentAmount::new(dec!(0.05)).unwrap().to_string(), "0.05");
        assert_eq!(
            PaymentAmount::new(dec!(1234567.890)).unwrap().to_string(),
            "1234567.89"
        );
    }

    #[test]
    fn test_parse() {
        let amount: PaymentAmount = "  99.5 ".parse().unwrap();
        assert_eq!(amount.as_decimal(), dec!(99.5));

        for bad in [
            "", "abc", "1,000.00", "฿100", "1e3", "1E3", "1e-2", "1_000", "10.123", "-1", ".5",
            "5.", "1.2.3", "+",
        ] {
            let err = PaymentAmount::from_str_checked(bad).unwrap_err();
            assert_eq!(
                err.code(),
                crate::PromptPayErrorCode::InvalidAmount,
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_plain_decimal_shapes() {
        for good in ["0", "150", "150.00", "4.2", "+10", "0010.50"] {
            assert!(is_plain_decimal(good), "{good:?} should be accepted");
        }
        assert_eq!(
            PaymentAmount::from_str_checked("0010.50").unwrap().to_string(),
            "10.50"
        );
        assert_eq!(PaymentAmount::from_str_checked("+10").unwrap().to_string(), "10.00");
    }

    #[test]
    fn test_zero_is_representable() {
        let zero = PaymentAmount::from_str_checked("0").unwrap();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert_eq!(zero, PaymentAmount::zero());
        assert_eq!(zero.to_string(), "0.00");

        let negative_zero = PaymentAmount::from_str_checked("-0.00").unwrap();
        assert_eq!(negative_zero.to_string(), "0.00");
    }

    #[test]
    fn test_length_limit() {
        assert!(PaymentAmount::from_str_checked("9999999999.99").is_ok());
        assert!(PaymentAmount::from_str_checked("10000000000").is_err());
    }

    #[test]
    fn test_from_satang() {
        assert_eq!(PaymentAmount::from_satang(15_000).unwrap().to_string(), "150.00");
        assert_eq!(PaymentAmount::from_satang(1).unwrap().to_string(), "0.01");
        assert!(PaymentAmount::from_satang(u64::MAX).is_err());
    }

    #[test]
    fn test_serde_round_trip_rejects_bad_scale() {
        let amount: PaymentAmount = serde_json::from_str("\"12.34\"").unwrap();
        assert_eq!(amount.to_string(), "12.34");
        assert!(serde_json::from_str::<PaymentAmount>("\"12.345\"").is_err());
        assert!(serde_json::from_str::<PaymentAmount>("\"1e3\"").is_err());
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"12.34\"");
    }
}
