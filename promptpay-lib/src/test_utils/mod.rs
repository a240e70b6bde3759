//! Test utilities for PromptPay.
//!
//! This module provides:
//! - Known-good fixtures with independently computed payloads
//! - Assertion helpers that check the structural invariants of a payload
//!
//! ## Usage
//!
//! ```rust,ignore
//! use promptpay_lib::test_utils::{assert_payload_well_formed, TestFixtures};
//!
//! for vector in TestFixtures::KNOWN_PAYLOADS {
//!     let payload = vector.generate().unwrap();
//!     assert_eq!(payload.as_str(), vector.expected);
//!     assert_payload_well_formed(payload.as_str());
//! }
//! ```

mod assertions;
mod fixtures;

pub use fixtures::{KnownPayload, TestFixtures};

pub use assertions::{
    assert_payload_well_formed, split_fields, PayloadAssertion, TOP_LEVEL_ORDER,
};
