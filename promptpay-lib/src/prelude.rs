//! Prelude module for convenient imports.
//!
//! ```rust
//! use promptpay_lib::prelude::*;
//! ```

// Core types
pub use crate::{
    AdditionalData, EncodedPayload, MerchantProfile, PayeeIdentifier, PaymentAmount, ProxyType,
};

// Error handling
pub use crate::errors::{PromptPayError, PromptPayErrorCode};
pub use crate::Result;

// Encoding entry points
pub use crate::{generate, generate_for_profile, generate_payload, normalize};
