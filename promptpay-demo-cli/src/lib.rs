//! PromptPay Demo CLI library
//!
//! Command implementations live here so they can be exercised from
//! integration tests without spawning the binary.

pub mod commands;
pub mod storage;
pub mod ui;
