//! NUMS CLI
//!
//! Derive and verify provably unspendable secp256k1 keys from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nums::NumsEngine;
use nums_core::NumsMethod;
use nums_io::{NumsConfig, NumsRecord, NumsRequest};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nums")]
#[command(about = "Derive and verify NUMS (unspendable) secp256k1 keys", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file (NUMS_* environment variables override it)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the record as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Write the record to a JSON file
    #[arg(long, global = true)]
    save: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a key from free text or a hex scalar
    Derive {
        /// Free text; R = sha256(text), or the tag for the tagged method
        #[arg(short, long, conflicts_with = "r")]
        input: Option<String>,

        /// Hex scalar R (1-64 hex characters, optional 0x prefix)
        #[arg(short, long)]
        r: Option<String>,

        /// Derivation method (UNKNOWN_DL_HIDING_KEY / TAGGED_HASH_KEY, or unknown-dl / tag)
        #[arg(short, long)]
        method: Option<NumsMethod>,
    },

    /// Derive a key with the tagged-hash method
    Tag {
        /// Tag text (defaults to the configured tag)
        tag: Option<String>,
    },

    /// Derive a key from a random scalar
    Random {
        #[arg(short, long)]
        method: Option<NumsMethod>,
    },

    /// Check whether a key is reproduced by the given inputs
    Verify {
        /// Claimed x-only public key
        #[arg(long)]
        pk: Option<String>,

        /// Hex scalar R
        #[arg(short, long)]
        r: Option<String>,

        /// Free text R is hashed from, or the tag for the tagged method
        #[arg(short, long)]
        input: Option<String>,

        #[arg(short, long)]
        method: Option<NumsMethod>,

        #[arg(short, long)]
        tag: Option<String>,

        /// Verify a saved record instead of the flags above
        #[arg(long, conflicts_with_all = ["pk", "r", "input", "method", "tag"])]
        file: Option<PathBuf>,
    },

    /// Show the hiding point H
    HidingPoint,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("nums_cli=debug,nums=debug,nums_crypto=debug,nums_io=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("nums_cli=info,nums_crypto=warn,nums_io=warn")
            .init();
    }

    let config = match &cli.config {
        Some(path) => NumsConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => NumsConfig::default(),
    }
    .with_env()?;
    tracing::debug!(?config, "loaded configuration");

    let engine = NumsEngine::new();

    match cli.command {
        Commands::Derive { input, r, method } => {
            let method = method.unwrap_or(config.default_method);
            let record = match r {
                Some(r) => {
                    if method == NumsMethod::Tag {
                        anyhow::bail!("--r only applies to the UNKNOWN_DL_HIDING_KEY method");
                    }
                    NumsRecord::from_scalar(&engine, &r)?
                }
                None => {
                    let text = input.unwrap_or_else(|| config.default_input.clone());
                    NumsRecord::from_input(&engine, &config, &text, method)?
                }
            };
            emit(cli.json, cli.save.as_ref(), &record, None)?;
        }
        Commands::Tag { tag } => {
            let tag = tag.unwrap_or_else(|| config.default_tag.clone());
            let record = NumsRecord::from_input(&engine, &config, &tag, NumsMethod::Tag)?;
            emit(cli.json, cli.save.as_ref(), &record, None)?;
        }
        Commands::Random { method } => {
            let method = method.unwrap_or(config.default_method);
            let record = NumsRecord::random(&engine, &config, method)?;
            emit(cli.json, cli.save.as_ref(), &record, None)?;
        }
        Commands::Verify {
            pk,
            r,
            input,
            method,
            tag,
            file,
        } => {
            let record = match file {
                Some(path) => nums_io::load_record(&path)
                    .with_context(|| format!("Failed to load record from {}", path.display()))?,
                None => {
                    if pk.is_none() {
                        anyhow::bail!("--pk or --file is required");
                    }
                    NumsRequest {
                        input,
                        r,
                        pk,
                        method,
                        tag,
                    }
                    .resolve(&engine, &config)?
                }
            };
            let valid = record.verify(&engine, &config)?;
            emit(cli.json, cli.save.as_ref(), &record, Some(valid))?;
        }
        Commands::HidingPoint => {
            let h = engine.hiding_point_x()?;
            if cli.json {
                println!("{}", serde_json::json!({ "H": h.to_hex() }));
            } else {
                println!("H: {}", h);
            }
        }
    }

    Ok(())
}

/// Print a record and optionally save it
fn emit(
    json: bool,
    save: Option<&PathBuf>,
    record: &NumsRecord,
    valid: Option<bool>,
) -> Result<()> {
    if json {
        let mut value = serde_json::to_value(record)?;
        if let Some(valid) = valid {
            value["isNUMS"] = serde_json::Value::Bool(valid);
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Method: {}", record.method());
        if !record.input.is_empty() {
            println!("Input:  {}", record.input);
        }
        if let Some(tag) = &record.tag {
            println!("Tag:    {}", tag);
        }
        if !record.r.is_empty() {
            println!("R:      {}", record.r);
        }
        println!("PK:     {}", record.pk);
        if let Some(valid) = valid {
            println!("NUMS:   {}", if valid { "yes" } else { "no" });
        }
    }

    if let Some(path) = save {
        nums_io::save_record(record, path)
            .with_context(|| format!("Failed to save record to {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved record");
    }

    Ok(())
}
