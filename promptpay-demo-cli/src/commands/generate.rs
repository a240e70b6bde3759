//! Generate command - encode a PromptPay payload and show it as a QR code

use anyhow::{Context, Result};
use promptpay_lib::{
    AdditionalData, EncodedPayload, MerchantProfile, PaymentAmount, PayeeIdentifier, ProxyType,
};
use std::path::Path;

use crate::storage::ProfileStore;
use crate::ui;

/// Everything the user asked for on the command line.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Explicit payee; falls back to the stored profile when absent.
    pub payee: Option<(String, ProxyType)>,
    pub amount: String,
    pub bill_number: Option<String>,
    pub reference_label: Option<String>,
    pub terminal_label: Option<String>,
}

/// How the result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Header, details and a terminal QR code
    Pretty,
    /// Header and details only
    NoQr,
    /// Machine-readable JSON
    Json,
}

/// A generated payload together with the inputs that produced it.
#[derive(Debug, Clone)]
pub struct Generated {
    pub payee: PayeeIdentifier,
    pub amount: PaymentAmount,
    pub additional: AdditionalData,
    pub payload: EncodedPayload,
}

impl Generated {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "payload": self.payload.as_str(),
            "checksum": self.payload.checksum(),
            "amount": self.amount.to_payload_string(),
            "proxy_type": self.payee.proxy_type(),
            "payee": self.payee.digits(),
            "additional_data": self.additional,
        })
    }
}

/// Pick the payee from the request or the stored profile.
pub fn resolve_profile(
    storage_dir: &Path,
    payee: Option<(String, ProxyType)>,
) -> Result<MerchantProfile> {
    if let Some((raw, kind)) = payee {
        return Ok(MerchantProfile::new(raw, kind));
    }

    ProfileStore::new(storage_dir).load()?.ok_or_else(|| {
        anyhow::anyhow!(
            "No payee given and no profile configured. \
             Pass --phone, --national-id or --e-wallet, or run 'promptpay-demo profile set'."
        )
    })
}

/// Build the payload without printing anything.
///
/// Labels given on the command line override the profile's defaults.
pub fn build(storage_dir: &Path, request: GenerateRequest) -> Result<Generated> {
    let profile = resolve_profile(storage_dir, request.payee)?;

    let amount = PaymentAmount::from_str_checked(&request.amount).context("Invalid amount")?;

    let additional = AdditionalData {
        bill_number: request.bill_number,
        reference_label: request.reference_label.or(profile.reference_label.clone()),
        terminal_label: request.terminal_label.or(profile.terminal_label.clone()),
    };

    let payload = promptpay_lib::generate(
        &profile.payee,
        profile.proxy_type,
        &amount,
        Some(&additional),
    )?;
    let payee = profile.payee_identifier()?;

    tracing::debug!(checksum = payload.checksum(), len = payload.len(), "generated payload");

    Ok(Generated {
        payee,
        amount,
        additional,
        payload,
    })
}

#[tracing::instrument(skip(storage_dir, request))]
pub fn run(
    storage_dir: &Path,
    request: GenerateRequest,
    mode: OutputMode,
    verbose: bool,
) -> Result<()> {
    let generated = build(storage_dir, request)?;

    if mode == OutputMode::Json {
        ui::json(&generated.to_json());
        return Ok(());
    }

    ui::header("PromptPay Payment QR");
    ui::key_value("Payee", generated.payee.digits());
    ui::key_value("Proxy type", &generated.payee.proxy_type().to_string());
    ui::key_value(
        "Amount",
        &format!("{} THB", generated.amount.to_payload_string()),
    );
    if let Some(bill) = &generated.additional.bill_number {
        ui::key_value("Bill number", bill);
    }
    if let Some(reference) = &generated.additional.reference_label {
        ui::key_value("Reference", reference);
    }
    if let Some(terminal) = &generated.additional.terminal_label {
        ui::key_value("Terminal", terminal);
    }
    if verbose {
        ui::key_value("Fields", &generated.payload.tags().join(" "));
    }
    ui::key_value("Checksum", generated.payload.checksum());

    ui::separator();
    println!("{}", generated.payload);
    ui::separator();

    if mode == OutputMode::Pretty {
        if ui::is_interactive() {
            ui::qr_code(generated.payload.as_str())?;
        } else {
            ui::warning("Not a terminal; skipping QR rendering");
        }
    }

    ui::success("Payload generated");
    Ok(())
}
