//! Generates Swift, Kotlin or Python bindings for the PromptPay encoder from
//! the compiled `promptpay_mobile` library.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use uniffi_bindgen::bindings::{
    KotlinBindingGenerator, PythonBindingGenerator, SwiftBindingGenerator,
};
use uniffi_bindgen::library_mode::generate_bindings;
use uniffi_bindgen::{BindingGenerator, EmptyCrateConfigSupplier};

const LIBRARY_NAME: &str = "promptpay_mobile";

#[derive(Parser, Debug)]
#[command(name = "generate-bindings")]
#[command(about = "Generate host-app bindings for the PromptPay encoder")]
struct Cli {
    /// Compiled library; defaults to the release build for this host
    #[arg(long, default_value_t = default_library_path())]
    library: Utf8PathBuf,

    /// Output language, or `all` for every supported language
    #[arg(short = 'l', long = "language", default_value = "swift")]
    language: Language,

    /// Output directory; each language gets its own subdirectory
    #[arg(short = 'o', long = "out-dir", default_value = "bindings")]
    out_dir: Utf8PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Language {
    Swift,
    Kotlin,
    Python,
    All,
}

impl Language {
    fn targets(self) -> &'static [Language] {
        match self {
            Language::Swift => &[Language::Swift],
            Language::Kotlin => &[Language::Kotlin],
            Language::Python => &[Language::Python],
            Language::All => &[Language::Swift, Language::Kotlin, Language::Python],
        }
    }

    fn dir_name(self) -> &'static str {
        match self {
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Python => "python",
            Language::All => "all",
        }
    }
}

/// `$CARGO_TARGET_DIR/release/<lib>` with the host's shared library naming.
fn default_library_path() -> Utf8PathBuf {
    let target_dir = std::env::var("CARGO_TARGET_DIR").unwrap_or_else(|_| "../target".to_string());
    library_path_in(Utf8Path::new(&target_dir))
}

fn library_path_in(target_dir: &Utf8Path) -> Utf8PathBuf {
    target_dir.join("release").join(format!(
        "{}{}{}",
        std::env::consts::DLL_PREFIX,
        LIBRARY_NAME,
        std::env::consts::DLL_SUFFIX
    ))
}

fn generate<G: BindingGenerator>(
    library: &Utf8Path,
    generator: &G,
    out_dir: &Utf8Path,
) -> anyhow::Result<()> {
    generate_bindings(
        library,
        None,
        generator,
        &EmptyCrateConfigSupplier,
        None,
        out_dir,
        false,
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.library.exists() {
        anyhow::bail!(
            "Library not found: {} (build it with `cargo build --release -p promptpay-mobile`)",
            cli.library
        );
    }

    for &language in cli.language.targets() {
        let out_dir = cli.out_dir.join(language.dir_name());
        std::fs::create_dir_all(&out_dir)?;
        println!("Generating {} bindings into {}", language.dir_name(), out_dir);

        match language {
            Language::Swift => generate(&cli.library, &SwiftBindingGenerator, &out_dir)?,
            Language::Kotlin => generate(&cli.library, &KotlinBindingGenerator, &out_dir)?,
            Language::Python => generate(&cli.library, &PythonBindingGenerator, &out_dir)?,
            Language::All => anyhow::bail!("`all` is not a concrete language"),
        }
    }

    println!("Bindings generated from {}", cli.library);
    Ok(())
}
