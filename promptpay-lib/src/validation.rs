//! Input validation run before any encoding.
//!
//! This is the only layer that reports bad user input; everything below it
//! assumes validated values.

use crate::additional_data::AdditionalData;
use crate::amount::PaymentAmount;
use crate::identifier::{normalize, PayeeIdentifier, ProxyType};
use crate::{PromptPayError, Result};

/// Reject an amount that is not strictly positive.
pub fn validate_amount(amount: &PaymentAmount) -> Result<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(PromptPayError::invalid_amount(format!(
            "{} must be greater than zero",
            amount
        )))
    }
}

/// Validate a complete request and return the normalized payee.
///
/// # Errors
///
/// Returns [`PromptPayError::InvalidAmount`],
/// [`PromptPayError::InvalidIdentifier`] or
/// [`PromptPayError::InvalidAdditionalData`], checked in that order.
pub fn validate_request(
    raw_payee: &str,
    kind: ProxyType,
    amount: &PaymentAmount,
    additional: Option<&AdditionalData>,
) -> Result<PayeeIdentifier> {
    validate_amount(amount)?;
    let payee = normalize(raw_payee, kind)?;
    if let Some(additional) = additional {
        additional.validate()?;
    }
    Ok(payee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PromptPayErrorCode;

    #[test]
    fn test_amount_rules() {
        assert!(validate_amount(&PaymentAmount::from_satang(1).unwrap()).is_ok());

        let err = validate_amount(&PaymentAmount::zero()).unwrap_err();
        assert_eq!(err.code(), PromptPayErrorCode::InvalidAmount);
    }

    #[test]
    fn test_amount_checked_before_identifier() {
        let zero = PaymentAmount::zero();
        let err = validate_request("garbage", ProxyType::MobilePhone, &zero, None).unwrap_err();
        assert_eq!(err.code(), PromptPayErrorCode::InvalidAmount);
    }

    #[test]
    fn test_valid_request() {
        let amount = PaymentAmount::from_str_checked("150").unwrap();
        let payee =
            validate_request("+66812345678", ProxyType::MobilePhone, &amount, None).unwrap();
        assert_eq!(payee.digits(), "66812345678");
    }

    #[test]
    fn test_additional_data_checked() {
        let amount = PaymentAmount::from_satang(100).unwrap();
        let extra = AdditionalData::new().with_bill_number("");
        let err = validate_request("0812345678", ProxyType::MobilePhone, &amount, Some(&extra))
            .unwrap_err();
        assert_eq!(err.code(), PromptPayErrorCode::InvalidAdditionalData);
    }
}
