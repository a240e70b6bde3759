//! Property-based tests for promptpay-demo-cli
//!
//! Uses proptest to verify properties hold for arbitrary inputs

use promptpay_demo_cli::commands::checksum::verify_payload;
use promptpay_demo_cli::commands::generate::{build, GenerateRequest};
use promptpay_lib::ProxyType;
use proptest::prelude::*;
use tempfile::TempDir;

fn request(subscriber: u32, satang: u64) -> GenerateRequest {
    GenerateRequest {
        payee: Some((format!("08{:08}", subscriber), ProxyType::MobilePhone)),
        amount: format!("{}.{:02}", satang / 100, satang % 100),
        ..Default::default()
    }
}

proptest! {
    /// Every generated payload verifies with the checksum command
    #[test]
    fn test_generated_payload_verifies(
        subscriber in 0u32..100_000_000,
        satang in 1u64..1_000_000_000
    ) {
        let dir = TempDir::new().unwrap();
        let generated = build(dir.path(), request(subscriber, satang)).unwrap();

        let verification = verify_payload(generated.payload.as_str()).unwrap();
        prop_assert!(verification.is_valid());
    }

    /// Changing any single body character is detected
    #[test]
    fn test_single_character_tampering_detected(
        subscriber in 0u32..100_000_000,
        satang in 1u64..1_000_000,
        position in any::<prop::sample::Index>()
    ) {
        let dir = TempDir::new().unwrap();
        let generated = build(dir.path(), request(subscriber, satang)).unwrap();
        let payload = generated.payload.as_str();

        // Only touch the fields before the checksum field itself
        let body_len = payload.len() - 8;
        let index = position.index(body_len);
        let original = payload.as_bytes()[index];
        let replacement = if original == b'9' { b'8' } else { b'9' };

        let mut bytes = payload.as_bytes().to_vec();
        bytes[index] = replacement;
        let tampered = String::from_utf8(bytes).unwrap();

        let verification = verify_payload(&tampered).unwrap();
        prop_assert!(!verification.is_valid());
    }

    /// JSON output always reports the amount with two decimals
    #[test]
    fn test_json_amount_has_two_decimals(
        subscriber in 0u32..100_000_000,
        satang in 1u64..1_000_000_000
    ) {
        let dir = TempDir::new().unwrap();
        let generated = build(dir.path(), request(subscriber, satang)).unwrap();
        let json = generated.to_json();

        let amount = json["amount"].as_str().unwrap().to_string();
        prop_assert_eq!(amount.split('.').nth(1).map(str::len), Some(2));
        prop_assert!(generated.payload.as_str().contains(&amount));
    }
}
