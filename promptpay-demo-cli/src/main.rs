//! PromptPay Demo CLI
//!
//! Command-line interface for generating and checking PromptPay QR payloads.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use promptpay_lib::ProxyType;
use std::path::PathBuf;

use promptpay_demo_cli::commands::{self, generate::GenerateRequest, generate::OutputMode};
use promptpay_demo_cli::{storage, ui};

#[derive(Parser)]
#[command(name = "promptpay-demo")]
#[command(about = "PromptPay Demo CLI - Generate Thai PromptPay payment QR codes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Custom storage directory
    #[arg(long, global = true, env = "PROMPTPAY_DEMO_DIR")]
    storage_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a payment payload and display it as a QR code
    Generate(GenerateArgs),

    /// Manage the stored merchant profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Compute the CRC-16 checksum of a string, or verify a full payload
    Checksum {
        /// Data to checksum
        data: String,

        /// Treat the data as a complete payload and verify its trailing checksum
        #[arg(long)]
        verify: bool,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Mobile phone number (e.g. 081-234-5678 or +66812345678)
    #[arg(long, group = "payee")]
    phone: Option<String>,

    /// 13-digit national ID or tax ID
    #[arg(long, group = "payee")]
    national_id: Option<String>,

    /// 15-digit e-wallet ID
    #[arg(long, group = "payee")]
    e_wallet: Option<String>,

    /// Amount in Baht, e.g. 150 or 150.00
    #[arg(short, long)]
    amount: String,

    /// Bill number
    #[arg(long)]
    bill: Option<String>,

    /// Reference label
    #[arg(long)]
    reference: Option<String>,

    /// Terminal label
    #[arg(long)]
    terminal: Option<String>,

    /// Print the payload without rendering a QR code
    #[arg(long)]
    no_qr: bool,

    /// Output as JSON
    #[arg(long, conflicts_with = "no_qr")]
    json: bool,
}

impl GenerateArgs {
    fn payee(&self) -> Option<(String, ProxyType)> {
        [
            (&self.phone, ProxyType::MobilePhone),
            (&self.national_id, ProxyType::NationalId),
            (&self.e_wallet, ProxyType::EWallet),
        ]
        .into_iter()
        .find_map(|(value, kind)| value.clone().map(|v| (v, kind)))
    }

    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.no_qr {
            OutputMode::NoQr
        } else {
            OutputMode::Pretty
        }
    }

    fn into_request(self) -> GenerateRequest {
        GenerateRequest {
            payee: self.payee(),
            amount: self.amount,
            bill_number: self.bill,
            reference_label: self.reference,
            terminal_label: self.terminal,
        }
    }
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Save the default payee
    Set {
        /// Phone number, national ID or e-wallet ID
        payee: String,

        /// Proxy type (phone, national-id, e-wallet)
        #[arg(short = 't', long = "type", default_value = "phone")]
        proxy_type: ProxyType,

        /// Terminal label added to every payload
        #[arg(long)]
        terminal: Option<String>,

        /// Reference label added to every payload
        #[arg(long)]
        reference: Option<String>,
    },

    /// Show the stored profile
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete the stored profile
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("promptpay_demo_cli=debug,promptpay_lib=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("promptpay_demo_cli=info,promptpay_lib=warn")
            .with_writer(std::io::stderr)
            .init();
    }

    let storage_dir = storage::storage_dir(cli.storage_dir.as_deref());

    match cli.command {
        Commands::Generate(args) => {
            let mode = args.output_mode();
            commands::generate::run(&storage_dir, args.into_request(), mode, cli.verbose)?;
        }
        Commands::Profile { action } => match action {
            ProfileAction::Set {
                payee,
                proxy_type,
                terminal,
                reference,
            } => {
                commands::profile::set(
                    &storage_dir,
                    &payee,
                    proxy_type,
                    terminal,
                    reference,
                    cli.verbose,
                )?;
            }
            ProfileAction::Show { json } => {
                commands::profile::show(&storage_dir, json, cli.verbose)?;
            }
            ProfileAction::Clear { yes } => {
                commands::profile::clear(&storage_dir, yes, cli.verbose)?;
            }
        },
        Commands::Checksum { data, verify } => {
            commands::checksum::run(&data, verify, cli.verbose)?;
        }
    }

    Ok(())
}
