//! Offline command-line codec.
//!
//! Encodes and decodes URLs without running the server, and compares code
//! lengths across scheme versions.
//!
//! # Usage
//!
//! ```bash
//! # Encode a URL (prompts when the URL is omitted)
//! cargo run --bin urlcode -- encode https://github.com/user/repo
//!
//! # Decode a code
//! cargo run --bin urlcode -- --scheme v1 decode s_gh_...
//!
//! # Compare every scheme
//! cargo run --bin urlcode -- compare https://github.com/user/repo
//! ```
//!
//! # Environment Variables
//!
//! - `CODEC_SCHEME` (optional): scheme used when `--scheme` is not given (default: `v2`)

use url_codec::domain::codec::{DomainMappings, UrlCodec};
use url_codec::domain::entities::SchemeVersion;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;

/// Stateless URL codec.
#[derive(Parser)]
#[command(name = "urlcode")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Scheme version: v1 (lookup), v2 (compressed) or v3 (compact)
    #[arg(short, long, global = true, env = "CODEC_SCHEME")]
    scheme: Option<SchemeVersion>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a URL into a code
    Encode {
        /// URL to encode (prompted if omitted)
        url: Option<String>,
    },

    /// Decode a code back into its URL
    Decode {
        /// Code to decode
        code: String,
    },

    /// Encode a URL under every scheme and compare lengths
    Compare {
        /// URL to encode (prompted if omitted)
        url: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let scheme = cli.scheme.unwrap_or_default();
    let mappings = Arc::new(DomainMappings::builtin());

    match cli.command {
        Commands::Encode { url } => encode(scheme, mappings, url)?,
        Commands::Decode { code } => decode(scheme, mappings, &code)?,
        Commands::Compare { url } => compare(mappings, url)?,
    }

    Ok(())
}

/// Returns `url` or asks for one interactively.
fn url_or_prompt(url: Option<String>) -> Result<String> {
    match url {
        Some(url) => Ok(url),
        None => Ok(Input::new()
            .with_prompt("URL")
            .with_initial_text("https://")
            .interact_text()?),
    }
}

fn encode(scheme: SchemeVersion, mappings: Arc<DomainMappings>, url: Option<String>) -> Result<()> {
    let url = url_or_prompt(url)?;
    let codec = UrlCodec::new(scheme, mappings);

    let code = codec
        .encode(&url)
        .with_context(|| format!("Failed to encode '{url}'"))?;

    println!("{} {}", "Scheme:".bright_white(), scheme.to_string().cyan());
    println!("{} {}", "URL:   ".bright_white(), url);
    println!("{} {}", "Code:  ".bright_white(), code.bright_yellow().bold());
    println!();
    print_ratio(url.len(), code.len());

    Ok(())
}

fn decode(scheme: SchemeVersion, mappings: Arc<DomainMappings>, code: &str) -> Result<()> {
    let codec = UrlCodec::new(scheme, mappings);

    let parsed = codec
        .decode_parsed(code)
        .with_context(|| format!("Failed to decode '{code}' with scheme {scheme}"))?;

    println!("{} {}", "Scheme:  ".bright_white(), scheme.to_string().cyan());
    println!("{} {}", "URL:     ".bright_white(), parsed.to_string().green().bold());
    println!("{} {}", "Protocol:".bright_white(), parsed.protocol);
    println!("{} {}", "Domain:  ".bright_white(), parsed.domain);
    if !parsed.path.is_empty() {
        println!("{} {}", "Path:    ".bright_white(), parsed.path);
    }

    Ok(())
}

fn compare(mappings: Arc<DomainMappings>, url: Option<String>) -> Result<()> {
    let url = url_or_prompt(url)?;

    println!("{}", "Scheme comparison".bright_blue().bold());
    println!("  {} ({} chars)", url, url.len());
    println!();
    println!(
        "{:<8} {:>6} {:>7}  {}",
        "SCHEME".bold(),
        "LENGTH".bold(),
        "RATIO".bold(),
        "CODE".bold()
    );
    println!("{}", "─".repeat(60).bright_black());

    for scheme in SchemeVersion::ALL {
        let codec = UrlCodec::new(scheme, mappings.clone());

        match codec.encode(&url) {
            Ok(code) => {
                let ratio = ratio(url.len(), code.len());
                let ratio_text = format!("{ratio:.1}%");
                let ratio_colored = if code.len() < url.len() {
                    ratio_text.green()
                } else {
                    ratio_text.yellow()
                };

                println!(
                    "{:<8} {:>6} {:>7}  {}",
                    scheme.to_string().cyan(),
                    code.len(),
                    ratio_colored,
                    code
                );
            }
            Err(e) => {
                println!(
                    "{:<8} {:>6} {:>7}  {}",
                    scheme.to_string().cyan(),
                    "-",
                    "-",
                    e.to_string().red()
                );
            }
        }
    }

    println!();
    Ok(())
}

fn print_ratio(url_len: usize, code_len: usize) {
    let ratio = ratio(url_len, code_len);
    let line = format!("{code_len}/{url_len} chars ({ratio:.1}% of original)");

    if code_len < url_len {
        println!("{}", line.green());
    } else {
        println!("{}", line.yellow());
    }
}

/// Code length as a percentage of the URL length.
fn ratio(url_len: usize, code_len: usize) -> f64 {
    if url_len == 0 {
        return 0.0;
    }
    code_len as f64 * 100.0 / url_len as f64
}
