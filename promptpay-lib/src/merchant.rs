//! Merchant account information (tag 29).

use crate::identifier::PayeeIdentifier;
use crate::tlv::TlvField;
use crate::Result;

/// Top-level tag of the PromptPay merchant account information block.
pub const MERCHANT_ACCOUNT_TAG: &str = "29";

/// PromptPay application identifier, always the first subfield.
pub const PROMPTPAY_AID: &str = "A000000677010111";

const AID_SUBTAG: &str = "00";

/// Build the tag 29 field identifying the payee.
///
/// The application identifier comes first, followed by the payee digits
/// under the subtag of its proxy type.
pub fn merchant_account_info(payee: &PayeeIdentifier) -> Result<TlvField> {
    TlvField::constructed(
        MERCHANT_ACCOUNT_TAG,
        vec![
            TlvField::primitive(AID_SUBTAG, PROMPTPAY_AID)?,
            TlvField::primitive(payee.proxy_type().subtag(), payee.digits())?,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::{normalize, ProxyType};

    #[test]
    fn test_mobile_phone_block() {
        let payee = normalize("0812345678", ProxyType::MobilePhone).unwrap();
        let field = merchant_account_info(&payee).unwrap();
        assert_eq!(
            field.encode().unwrap(),
            "29350016A000000677010111011166812345678"
        );
    }

    #[test]
    fn test_national_id_block() {
        let payee = normalize("1234567890123", ProxyType::NationalId).unwrap();
        let field = merchant_account_info(&payee).unwrap();
        assert_eq!(
            field.encode().unwrap(),
            "29370016A00000067701011102131234567890123"
        );
    }

    #[test]
    fn test_e_wallet_block() {
        let payee = normalize("123456789012345", ProxyType::EWallet).unwrap();
        let encoded = merchant_account_info(&payee).unwrap().encode().unwrap();
        assert_eq!(encoded, "29390016A0000006770101110315123456789012345");
    }

    #[test]
    fn test_aid_precedes_payee() {
        let payee = normalize("0812345678", ProxyType::MobilePhone).unwrap();
        let field = merchant_account_info(&payee).unwrap();
        let tags: Vec<&str> = field.children().iter().map(|f| f.tag()).collect();
        assert_eq!(tags, ["00", "01"]);
    }
}
