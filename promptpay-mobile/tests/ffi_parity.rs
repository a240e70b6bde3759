//! FFI parity tests.
//!
//! Every value that crosses the mobile boundary must produce exactly the
//! payload the core library produces for the same input.

use promptpay_lib::test_utils::{assert_payload_well_formed, TestFixtures};
use promptpay_mobile::{
    generate_promptpay_payload, generate_promptpay_payload_detailed,
    generate_promptpay_payload_with_profile, normalize_payee, AdditionalDataFFI,
    PromptPayEncoder, PromptPayMobileError, ProxyTypeFFI,
};

#[test]
fn test_known_payloads_through_ffi() {
    for vector in TestFixtures::KNOWN_PAYLOADS {
        let detailed = generate_promptpay_payload_detailed(
            vector.payee.to_string(),
            vector.proxy_type.into(),
            vector.amount.to_string(),
            AdditionalDataFFI {
                bill_number: vector.bill_number.map(str::to_string),
                reference_label: None,
                terminal_label: vector.terminal_label.map(str::to_string),
            },
        )
        .unwrap();

        assert_eq!(detailed.payload, vector.expected);
        assert_payload_well_formed(&detailed.payload);
    }
}

#[test]
fn test_simple_and_detailed_agree() {
    for vector in TestFixtures::KNOWN_PAYLOADS
        .iter()
        .filter(|v| v.bill_number.is_none() && v.terminal_label.is_none())
    {
        let simple = generate_promptpay_payload(
            vector.payee.to_string(),
            vector.proxy_type.into(),
            vector.amount.to_string(),
        )
        .unwrap();
        assert_eq!(simple, vector.expected);
    }
}

#[test]
fn test_phone_inputs_normalize_identically() {
    for input in TestFixtures::PHONE_INPUTS {
        let payee = normalize_payee(input.to_string(), ProxyTypeFFI::MobilePhone).unwrap();
        assert_eq!(payee.digits, TestFixtures::NORMALIZED_PHONE, "input {:?}", input);
    }

    for input in TestFixtures::INVALID_PHONES {
        let result = normalize_payee(input.to_string(), ProxyTypeFFI::MobilePhone);
        assert!(
            matches!(result, Err(PromptPayMobileError::InvalidIdentifier { .. })),
            "input {:?} should be rejected",
            input
        );
    }
}

#[test]
fn test_profile_json_round_trip() {
    let encoder = PromptPayEncoder::with_terminal(
        TestFixtures::NATIONAL_ID.to_string(),
        ProxyTypeFFI::NationalId,
        "POS01".to_string(),
    )
    .unwrap();
    let json = encoder.profile_json().unwrap();

    let from_object = encoder.generate("4.22".to_string()).unwrap();
    let from_json = generate_promptpay_payload_with_profile(json, "4.22".to_string()).unwrap();

    assert_eq!(from_object, from_json);
    assert_payload_well_formed(&from_json.payload);
}

#[test]
fn test_sample_amounts_render_two_decimals() {
    let encoder =
        PromptPayEncoder::new("0812345678".to_string(), ProxyTypeFFI::MobilePhone).unwrap();

    for raw in TestFixtures::SAMPLE_AMOUNTS {
        let payload = encoder.generate(raw.to_string()).unwrap();
        let rendered = payload.amount;
        assert_eq!(rendered.split('.').nth(1).map(str::len), Some(2), "{}", raw);
        assert!(payload.payload.contains(&rendered));
    }
}
