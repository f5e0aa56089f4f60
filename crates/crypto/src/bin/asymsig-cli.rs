//! Asymsig CLI Tool
//!
//! Command-line interface for generating Ed25519 key pairs, signing hex
//! digests, and verifying signatures through the signature provider.

use anyhow::{anyhow, bail, Context};
use asymsig_core::{logging, Config};
use asymsig_crypto::{AsymmetricSigner, Ed25519Provider};
use serde::Serialize;
use std::collections::HashMap;
use std::process;

/// JSON output for keygen command
#[derive(Debug, Serialize)]
struct KeygenOutput {
    public_key: String,
    private_key: String,
    key_id: String,
}

/// JSON output for sign command
#[derive(Debug, Serialize)]
struct SignOutput {
    signature: String,
}

/// JSON output for verify and check-key commands
#[derive(Debug, Serialize)]
struct ValidityOutput {
    valid: bool,
}

/// Parsed `--flag value` pairs plus boolean switches.
struct Options {
    values: HashMap<String, String>,
    json: bool,
}

impl Options {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut values = HashMap::new();
        let mut json = false;
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--json" => json = true,
                flag if flag.starts_with("--") => {
                    let value = iter
                        .next()
                        .ok_or_else(|| anyhow!("Missing value for {}", flag))?;
                    values.insert(flag.trim_start_matches("--").to_string(), value.clone());
                }
                other => bail!("Unexpected argument: {}", other),
            }
        }

        Ok(Self { values, json })
    }

    fn required(&self, name: &str) -> anyhow::Result<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| anyhow!("Missing required option --{}", name))
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_keygen(provider: &dyn AsymmetricSigner, opts: &Options) -> anyhow::Result<bool> {
    let keypair = provider.generate_keypair()?;
    let public_key = keypair.public_key_hex();
    let private_key = keypair.private_key_hex()?;
    let key_id = keypair.public_key().key_id();

    if opts.json {
        print_json(&KeygenOutput {
            public_key,
            private_key: private_key.to_string(),
            key_id,
        })?;
    } else {
        println!("Key id:      {}", key_id);
        println!("Public key:  {}", public_key);
        println!("Private key: {}", private_key.as_str());
    }
    Ok(true)
}

fn cmd_sign(provider: &dyn AsymmetricSigner, opts: &Options) -> anyhow::Result<bool> {
    let signature = provider
        .sign(opts.required("private-key")?, opts.required("digest")?)
        .context("Failed to sign digest")?;

    if opts.json {
        print_json(&SignOutput {
            signature: signature.to_hex(),
        })?;
    } else {
        println!("{}", signature);
    }
    Ok(true)
}

fn cmd_verify(provider: &dyn AsymmetricSigner, opts: &Options) -> anyhow::Result<bool> {
    let valid = provider.verify(
        opts.required("public-key")?,
        opts.required("signature")?,
        opts.required("digest")?,
    );

    if opts.json {
        print_json(&ValidityOutput { valid })?;
    } else if valid {
        println!("✓ Signature is VALID");
    } else {
        println!("✗ Signature is INVALID");
    }
    Ok(valid)
}

fn cmd_check_key(provider: &dyn AsymmetricSigner, opts: &Options) -> anyhow::Result<bool> {
    let valid = provider.validate_public_key(opts.required("public-key")?);

    if opts.json {
        print_json(&ValidityOutput { valid })?;
    } else if valid {
        println!("✓ Public key is well-formed");
    } else {
        println!("✗ Public key is NOT well-formed");
    }
    Ok(valid)
}

fn print_usage() {
    println!("Asymsig CLI - Ed25519 keys and signatures over hex strings");
    println!();
    println!("USAGE:");
    println!("    asymsig-cli keygen [--json]");
    println!("    asymsig-cli sign --private-key <hex> --digest <hex> [--json]");
    println!("    asymsig-cli verify --public-key <hex> --signature <hex> --digest <hex> [--json]");
    println!("    asymsig-cli check-key --public-key <hex> [--json]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load settings from a TOML file");
    println!();
    println!("Public keys are X.509 SubjectPublicKeyInfo DER, private keys PKCS#8 DER,");
    println!("both hex-encoded. The digest is signed as given, without hashing.");
}

/// Returns whether the command succeeded (a rejected signature is not an error).
fn run(command: &str, args: &[String]) -> anyhow::Result<bool> {
    let opts = Options::parse(args)?;

    let config = match opts.values.get("config") {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => Config::default_config(),
    };
    logging::init_from_config(&config.logging)?;

    let provider = Ed25519Provider::from_config(&config);
    tracing::debug!(scheme = provider.scheme().name, command, "provider initialised");

    match command {
        "keygen" => cmd_keygen(&provider, &opts),
        "sign" => cmd_sign(&provider, &opts),
        "verify" => cmd_verify(&provider, &opts),
        "check-key" => cmd_check_key(&provider, &opts),
        other => bail!("Unknown command: {}", other),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        process::exit(2);
    };

    if command == "help" || command == "--help" || command == "-h" {
        print_usage();
        return;
    }

    match run(command, &args[2..]) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}
