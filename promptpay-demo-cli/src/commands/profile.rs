//! Profile command - store the merchant's default payee
//!
//! The saved profile is what `generate` falls back to when no payee flag
//! is given, so a till only has to be configured once.

use anyhow::Result;
use promptpay_lib::{MerchantProfile, ProxyType};
use std::path::Path;

use crate::storage::ProfileStore;
use crate::ui;

/// Validate and save a profile.
#[tracing::instrument(skip(storage_dir, payee))]
pub fn set(
    storage_dir: &Path,
    payee: &str,
    proxy_type: ProxyType,
    terminal_label: Option<String>,
    reference_label: Option<String>,
    _verbose: bool,
) -> Result<()> {
    let mut profile = MerchantProfile::new(payee, proxy_type);
    profile.terminal_label = terminal_label;
    profile.reference_label = reference_label;

    let store = ProfileStore::new(storage_dir);
    store.save(&profile)?;

    let normalized = profile.payee_identifier()?;
    ui::success("Profile saved");
    ui::key_value("Payee", normalized.digits());
    ui::key_value("Proxy type", &proxy_type.to_string());
    ui::key_value("Location", &store.path().display().to_string());
    Ok(())
}

/// Print the stored profile.
pub fn show(storage_dir: &Path, output_json: bool, _verbose: bool) -> Result<()> {
    let store = ProfileStore::new(storage_dir);
    let Some(profile) = store.load()? else {
        ui::error("No profile configured");
        ui::info("Run 'promptpay-demo profile set <payee> --type <kind>' to create one");
        return Ok(());
    };

    if output_json {
        ui::json(&serde_json::to_value(&profile)?);
        return Ok(());
    }

    ui::header("Merchant Profile");
    ui::key_value("Payee", &profile.payee);
    ui::key_value("Proxy type", &profile.proxy_type.to_string());
    match profile.payee_identifier() {
        Ok(normalized) => ui::key_value("Normalized", normalized.digits()),
        Err(e) => ui::warning(&format!("Stored payee no longer validates: {}", e)),
    }
    if let Some(terminal) = &profile.terminal_label {
        ui::key_value("Terminal", terminal);
    }
    if let Some(reference) = &profile.reference_label {
        ui::key_value("Reference", reference);
    }
    Ok(())
}

/// Delete the stored profile, asking first unless `yes` is set.
pub fn clear(storage_dir: &Path, yes: bool, _verbose: bool) -> Result<()> {
    let store = ProfileStore::new(storage_dir);
    if !store.path().exists() {
        ui::info("No profile to clear");
        return Ok(());
    }

    if !yes && !ui::confirm("Delete the stored merchant profile?", false)? {
        ui::info("Cancelled");
        return Ok(());
    }

    store.clear()?;
    ui::success("Profile cleared");
    Ok(())
}
