//! Test assertions and verification helpers.

use crate::checksum::checksum;

/// Required relative order of top-level tags.
pub const TOP_LEVEL_ORDER: &[&str] = &["00", "01", "29", "52", "53", "54", "58", "62", "63"];

/// Split a TLV sequence into `(tag, value)` pairs.
///
/// # Panics
/// Panics if a length prefix is not two digits or overruns the input.
pub fn split_fields(data: &str) -> Vec<(&str, &str)> {
    let mut fields = Vec::new();
    let mut rest = data;

    while !rest.is_empty() {
        assert!(rest.len() >= 4, "truncated field header in {:?}", rest);
        let tag = &rest[..2];
        let length: usize = rest[2..4]
            .parse()
            .unwrap_or_else(|_| panic!("non-numeric length in {:?}", rest));
        assert!(
            rest.len() >= 4 + length,
            "field {} claims {} characters but only {} remain",
            tag,
            length,
            rest.len() - 4
        );
        fields.push((tag, &rest[4..4 + length]));
        rest = &rest[4 + length..];
    }

    fields
}

/// Assertion helper for payload structure.
pub struct PayloadAssertion;

impl PayloadAssertion {
    /// Top-level tags appear in protocol order.
    pub fn tags_in_order(payload: &str) -> bool {
        let positions: Vec<usize> = split_fields(payload)
            .iter()
            .filter_map(|(tag, _)| TOP_LEVEL_ORDER.iter().position(|t| t == tag))
            .collect();
        positions.windows(2).all(|w| w[0] < w[1])
    }

    /// The trailing checksum matches everything before it.
    pub fn checksum_valid(payload: &str) -> bool {
        if payload.len() < 8 {
            return false;
        }
        let (body, crc) = payload.split_at(payload.len() - 4);
        body.ends_with("6304") && checksum(body).map(|c| c == crc).unwrap_or(false)
    }
}

/// Assert every structural invariant of a payload.
///
/// # Panics
/// Panics if a length prefix is wrong, tags are out of order, mandatory
/// fields are missing, or the checksum does not match.
pub fn assert_payload_well_formed(payload: &str) {
    let fields = split_fields(payload);
    let tags: Vec<&str> = fields.iter().map(|(tag, _)| *tag).collect();

    for required in ["00", "01", "29", "52", "53", "54", "58", "63"] {
        assert!(tags.contains(&required), "missing tag {} in {}", required, payload);
    }
    assert_eq!(tags.last(), Some(&"63"), "checksum must be the last field");
    assert!(
        PayloadAssertion::tags_in_order(payload),
        "tags out of order: {:?}",
        tags
    );
    assert!(
        PayloadAssertion::checksum_valid(payload),
        "checksum mismatch in {}",
        payload
    );

    for (tag, value) in &fields {
        if matches!(*tag, "29" | "62") {
            // Nested blocks must themselves be well-formed TLV.
            let nested = split_fields(value);
            assert!(!nested.is_empty(), "empty nested block {}", tag);
        }
    }
}
