//! CLI command implementations

pub mod checksum;
pub mod generate;
pub mod profile;
