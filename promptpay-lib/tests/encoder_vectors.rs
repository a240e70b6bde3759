//! End-to-end encoding tests against fixed reference payloads.
//!
//! Expected payloads were computed with an independent CRC-16/CCITT-FALSE
//! implementation and must match byte for byte.

use promptpay_lib::checksum::{checksum, crc16};
use promptpay_lib::merchant::PROMPTPAY_AID;
use promptpay_lib::payload::assemble;
use promptpay_lib::prelude::*;

// ============================================================================
// Checksum
// ============================================================================

#[test]
fn test_crc_check_value() {
    assert_eq!(crc16(b"123456789"), 0x29B1);
    assert_eq!(checksum("123456789").unwrap(), "29B1");
}

// ============================================================================
// Mobile phone
// ============================================================================

#[test]
fn test_phone_dynamic_scenario() {
    let amount = PaymentAmount::from_str_checked("150.00").unwrap();
    let payload = generate("0812345678", ProxyType::MobilePhone, &amount, None).unwrap();
    let text = payload.as_str();

    assert!(text.starts_with("000201010212"));
    assert!(text.contains(&format!("0016{}", PROMPTPAY_AID)));
    assert!(text.contains("011166812345678"));
    assert!(text.contains("5303764"));
    assert!(text.contains("5406150.00"));
    assert!(text.contains("5802TH"));
    assert_eq!(
        text,
        "00020101021229350016A0000006770101110111668123456785204000053037645406150.005802TH6304F82B"
    );
}

#[test]
fn test_phone_shapes_produce_identical_payloads() {
    let amount = PaymentAmount::from_str_checked("150").unwrap();
    let payloads: Vec<_> = ["0812345678", "+66812345678", "66812345678", "081 234 5678"]
        .iter()
        .map(|raw| generate(raw, ProxyType::MobilePhone, &amount, None).unwrap())
        .collect();

    assert!(payloads.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_inner_zero_digits_survive() {
    // Only a leading zero is a prefix. This deliberately differs from the
    // first-match `replace("0", "66")` normalization common in other PromptPay
    // encoders, which would turn the already-normalized "66801234567" into
    // "668661234567".
    let payee = normalize("66801234567", ProxyType::MobilePhone).unwrap();
    assert_eq!(payee.digits(), "66801234567");

    let payee = normalize("0801234567", ProxyType::MobilePhone).unwrap();
    assert_eq!(payee.digits(), "66801234567");
}

#[test]
fn test_initiation_method_is_always_dynamic() {
    for raw in ["0.01", "1", "9999999999.99"] {
        let amount = PaymentAmount::from_str_checked(raw).unwrap();
        let payload = generate("0812345678", ProxyType::MobilePhone, &amount, None).unwrap();
        assert!(payload.as_str().starts_with("000201010212"));
        assert!(payload.tags().iter().any(|t| t == "54"));
    }
}

// ============================================================================
// National ID and e-wallet
// ============================================================================

#[test]
fn test_national_id_scenario() {
    let amount = PaymentAmount::from_str_checked("4.22").unwrap();
    let payload = generate("1-2345-67890-12-3", ProxyType::NationalId, &amount, None).unwrap();
    assert_eq!(
        payload.as_str(),
        "00020101021229370016A0000006770101110213123456789012352040000530376454044.225802TH6304C7F0"
    );
}

#[test]
fn test_e_wallet_scenario() {
    let amount = PaymentAmount::from_str_checked("10.5").unwrap();
    let payload = generate("123456789012345", ProxyType::EWallet, &amount, None).unwrap();
    assert_eq!(
        payload.as_str(),
        "00020101021229390016A0000006770101110315123456789012345520400005303764540510.505802TH6304FDE2"
    );
}

// ============================================================================
// Additional data
// ============================================================================

#[test]
fn test_additional_data_scenario() {
    let amount = PaymentAmount::from_str_checked("150").unwrap();
    let extra = AdditionalData::new()
        .with_bill_number("INV001")
        .with_terminal_label("POS01");
    let payload =
        generate("0812345678", ProxyType::MobilePhone, &amount, Some(&extra)).unwrap();
    assert_eq!(
        payload.as_str(),
        "00020101021229350016A0000006770101110111668123456785204000053037645406150.005802TH62190106INV0010705POS016304CA23"
    );
}

// ============================================================================
// Assembly and rejection
// ============================================================================

#[test]
fn test_assembled_body_is_checksum_input() {
    let payee = normalize("0812345678", ProxyType::MobilePhone).unwrap();
    let amount = PaymentAmount::from_str_checked("150").unwrap();
    let body = assemble(&payee, &amount, None).unwrap();
    let payload = generate_payload(&payee, &amount, None).unwrap();

    assert!(body.ends_with("6304"));
    assert_eq!(payload.as_str(), format!("{}{}", body, checksum(&body).unwrap()));
}

#[test]
fn test_zero_amount_produces_no_output() {
    let zero = PaymentAmount::from_str_checked("0").unwrap();
    let result = generate("0812345678", ProxyType::MobilePhone, &zero, None);
    match result {
        Err(PromptPayError::InvalidAmount(_)) => {}
        other => panic!("expected InvalidAmount, got {:?}", other),
    }
}

#[test]
fn test_twelve_digit_national_id_rejected() {
    let amount = PaymentAmount::from_str_checked("100").unwrap();
    let err = generate("1-2345-67890-12", ProxyType::NationalId, &amount, None).unwrap_err();
    assert_eq!(err.code(), PromptPayErrorCode::InvalidIdentifier);
    assert!(err.is_user_recoverable());
}
